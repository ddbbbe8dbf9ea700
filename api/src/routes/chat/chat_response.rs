use qa_engine::Variant;
use serde::Serialize;

/// Response payload for /api/chat.
///
/// Only the fields relevant to the outcome are serialized: live answers
/// carry `variant` and `requestId`, cache hits carry `source`, failures
/// carry a fixed apology in `response` plus a diagnostic `error`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Text shown to the user.
    pub response: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// "cache" when the answer was served without touching the LLM.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'static str>,

    /// Machine-oriented failure detail, never a user-facing message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    /// Live answer produced by the retrieval + generation pipeline.
    pub fn answered(answer: String, variant: Variant, request_id: String) -> Self {
        Self {
            response: answer,
            variant: Some(variant.as_str()),
            request_id: Some(request_id),
            source: None,
            error: None,
        }
    }

    /// Answer served from the response cache.
    pub fn cached(answer: String) -> Self {
        Self {
            response: answer,
            variant: None,
            request_id: None,
            source: Some("cache"),
            error: None,
        }
    }

    /// Fixed apology text paired with a diagnostic reason.
    pub fn apology(text: &'static str, error: String) -> Self {
        Self {
            response: text.to_string(),
            variant: None,
            request_id: None,
            source: None,
            error: Some(error),
        }
    }
}
