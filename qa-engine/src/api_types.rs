//! Public API types re-used by external crates (e.g., the HTTP API layer).

/// Options that control retrieval and prompt building for a single question.
///
/// # Example
/// ```
/// use qa_engine::AskOptions;
/// let opts = AskOptions { top_k: 5, ..Default::default() };
/// assert_eq!(opts.top_k, 5);
/// ```
#[derive(Clone, Debug)]
pub struct AskOptions {
    /// Top-K passages to fetch from the vector store.
    pub top_k: u64,
    /// Character budget for the context block in the user prompt.
    pub max_ctx_chars: usize,
}

impl Default for AskOptions {
    fn default() -> Self {
        Self {
            top_k: 3,
            max_ctx_chars: 6000,
        }
    }
}

/// A compact record of a context passage that was fed to the LLM.
///
/// Used for server-side logging and inspection; it is not part of the
/// HTTP response body.
#[derive(Clone, Debug)]
pub struct UsedChunk {
    pub score: f32,
    pub source: Option<String>,
    pub text: String,
}

/// Final answer together with the exact context passed to the model.
///
/// # Example
/// ```
/// use qa_engine::{QaAnswer, UsedChunk};
/// let qa = QaAnswer {
///     answer: "Rest and fluids are usually sufficient.".into(),
///     context: vec![UsedChunk {
///         score: 0.9,
///         source: Some("guidelines.pdf".into()),
///         text: "...".into(),
///     }],
/// };
/// assert!(!qa.answer.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct QaAnswer {
    pub answer: String,
    pub context: Vec<UsedChunk>,
}
