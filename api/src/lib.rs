//! HTTP surface of the medikbot backend.
//!
//! Three routes over one shared [`AppState`]: `POST /api/chat` runs the
//! anonymize → classify → cache → retrieve → generate pipeline,
//! `POST /api/feedback` appends rating lines, and `GET /health` is a
//! plain liveness probe.

use std::sync::Arc;

pub mod core;
pub mod error_handler;
pub mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::{error, info};

pub use crate::core::app_state::AppState;
use crate::error_handler::AppError;
use crate::routes::{
    chat::chat_route::chat, feedback::feedback_route::feedback, health_route::health,
};

/// Build the service router over shared state.
///
/// Split out from [`start`] so tests can drive the router directly.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/feedback", post(feedback))
        .route("/health", get(health))
        .with_state(state)
}

/// Wire up state, bind the listener and serve until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let state = Arc::new(AppState::init().await);
    let addr = format!("0.0.0.0:{}", state.config.port);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::Bind)?;
    info!("Listening on {addr}");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
    }
}
