pub mod app_state;
pub mod config;
pub mod feedback_log;
pub mod response_cache;
pub mod usage;
