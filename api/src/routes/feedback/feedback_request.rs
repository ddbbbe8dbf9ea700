use serde::{Deserialize, Serialize};

/// Request payload for /api/feedback.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    /// Id of the answer being rated (the `requestId` from /api/chat).
    pub message_id: String,
    /// Free-form rating, e.g. "helpful" or "unhelpful".
    pub feedback: String,
}

/// Response payload for /api/feedback.
#[derive(Debug, Serialize)]
pub struct FeedbackStatus {
    pub status: &'static str,
}
