//! POST /api/chat — the question-answering endpoint.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use qa_engine::{AskOptions, Tier, answer_question, complexity, phi};
use tracing::{error, info};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::chat::{chat_request::ChatRequest, chat_response::ChatResponse},
};

/// Sent with a 503 when retrieval or generation is disabled.
const UNAVAILABLE_APOLOGY: &str =
    "I'm sorry, the service is currently experiencing technical difficulties. Please try again later.";

/// Sent with a 500 when the live pipeline fails mid-request.
const FAILURE_APOLOGY: &str =
    "I'm sorry, I encountered an error processing your request. Please try again later.";

/// Handler: POST /api/chat
///
/// Pipeline: anonymize, classify, consult the cache for low-tier
/// questions, then retrieve + generate with the A/B-selected prompt.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:5000/api/chat \
///   -H 'content-type: application/json' \
///   -d '{"message":"What are the symptoms of anemia?"}'
/// ```
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Response> {
    state.usage.track();

    let Json(body) = payload?;
    let request_id = next_request_id();

    if body.message.trim().is_empty() {
        return Err(AppError::BadRequest("message must not be empty".into()));
    }

    // Scrub identifiers before the text can reach logs, cache keys or prompts.
    let question = phi::anonymize(&body.message);
    info!(request_id = %request_id, message = %question, "chat request received");

    let tier = complexity::classify(&question);

    if tier == Tier::Low {
        if let Some(answer) = state.cache.get(&question) {
            info!(request_id = %request_id, "cache hit");
            return Ok((StatusCode::OK, Json(ChatResponse::cached(answer))).into_response());
        }
    }

    let Some(retriever) = state.retriever.as_deref() else {
        error!(request_id = %request_id, "cannot process request: retriever is not available");
        return Ok(unavailable("Retriever not available"));
    };
    let Some(llm) = state.llm.as_ref() else {
        error!(request_id = %request_id, "cannot process request: LLM is not available");
        return Ok(unavailable("LLM not available"));
    };

    let variant = state.variants.pick();
    let opts = AskOptions {
        top_k: state.config.rag_top_k,
        max_ctx_chars: state.config.max_ctx_chars,
    };

    match answer_question(retriever, llm, &question, variant, &opts).await {
        Ok(qa) => {
            let preview: String = qa.answer.chars().take(100).collect();
            info!(
                request_id = %request_id,
                variant = variant.as_str(),
                hits = qa.context.len(),
                answer = %preview,
                "chat request answered"
            );

            if tier == Tier::Low {
                state.cache.insert(question, qa.answer.clone());
            }

            Ok((
                StatusCode::OK,
                Json(ChatResponse::answered(qa.answer, variant, request_id)),
            )
                .into_response())
        }
        Err(err) => {
            error!(request_id = %request_id, error = %err, "error processing chat request");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatResponse::apology(FAILURE_APOLOGY, err.to_string())),
            )
                .into_response())
        }
    }
}

fn unavailable(reason: &str) -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ChatResponse::apology(UNAVAILABLE_APOLOGY, reason.to_string())),
    )
        .into_response()
}

/// Mint a request id from the current wall clock.
fn next_request_id() -> String {
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    format!("req-{nanos}")
}
