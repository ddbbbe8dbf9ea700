//! POST /api/feedback — stores one rating line per answered message.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::{
    core::{app_state::AppState, feedback_log},
    error_handler::{AppError, AppResult},
    routes::feedback::feedback_request::{FeedbackRequest, FeedbackStatus},
};

/// Handler: POST /api/feedback
pub async fn feedback(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(body) = payload?;

    info!(message_id = %body.message_id, feedback = %body.feedback, "feedback received");

    feedback_log::append(&state.config.feedback_log_path, &body.message_id, &body.feedback)
        .await
        .map_err(AppError::FeedbackLog)?;

    Ok((StatusCode::OK, Json(FeedbackStatus { status: "success" })).into_response())
}
