//! Shared LLM client layer with two active profiles: **generation** and
//! **embedding**.
//!
//! - Lives in the same Tokio runtime as the application.
//! - Construct [`profiles::LlmProfiles`] once, wrap in `Arc`, pass clones.
//! - Provider dispatch is enum-based (Ollama / OpenAI-compatible); no
//!   `async-trait`, no boxed trait objects.
//! - Health probes are best-effort and never fail; they exist so the boot
//!   sequence can log connectivity before serving traffic.

pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod profiles;
pub mod services;

pub use config::llm_model_config::LlmModelConfig;
pub use config::llm_provider::LlmProvider;
pub use error_handler::{AiLlmError, ConfigError};
pub use health_service::{HealthService, HealthStatus};
pub use profiles::LlmProfiles;
