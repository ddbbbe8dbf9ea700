//! Typed error for the qa-engine crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QaError {
    /// Errors from the underlying doc-store crate (embedding + search).
    #[error("retrieval error: {0}")]
    Retrieval(#[from] doc_store::DocStoreError),

    /// Errors from the LLM generation call.
    #[error("generation error: {0}")]
    Llm(#[from] llm_service::AiLlmError),
}
