use serde::Deserialize;

/// Request payload for /api/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Natural language question from the chat UI.
    pub message: String,
}
