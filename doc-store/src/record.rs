//! Core data models used by the library.

/// Query parameters for similarity retrieval.
pub struct DocQuery<'a> {
    /// Text to embed and search with.
    pub text: &'a str,
    /// Number of passages to return.
    pub top_k: u64,
}

/// A single retrieval hit with score, text and source.
#[derive(Clone, Debug)]
pub struct DocHit {
    /// Similarity score as reported by Qdrant.
    pub score: f32,
    /// Passage text (payload field `text`).
    pub text: String,
    /// Originating document, if recorded (payload field `source`).
    pub source: Option<String>,
    /// Full payload as JSON for callers that need extra fields.
    pub raw_payload: serde_json::Value,
}
