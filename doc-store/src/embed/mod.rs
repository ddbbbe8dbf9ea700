//! Embedding provider seam.
//!
//! Async is required because real providers (Ollama, OpenAI, etc.)
//! perform HTTP requests.

use crate::errors::DocStoreError;
use std::{future::Future, pin::Pin};

/// Provider interface for embedding generation.
///
/// Implement this trait to plug in your own embedding backend
/// (e.g., Ollama, OpenAI, local models).
pub trait EmbeddingsProvider: Send + Sync {
    /// Async embedding function.
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<f32>, DocStoreError>> + Send + 'a>>;
}

pub mod profile;
