//! Embedding provider backed by the shared LLM profiles.

use std::sync::Arc;

use crate::{EmbeddingsProvider, errors::DocStoreError};
use llm_service::LlmProfiles;

/// Embedding provider that delegates to the embedding profile of
/// [`LlmProfiles`] and enforces the index dimensionality.
#[derive(Clone)]
pub struct ProfileEmbedder {
    svc: Arc<LlmProfiles>,
    dim: usize,
}

impl ProfileEmbedder {
    /// Construct a new embedder over the shared profiles.
    ///
    /// `dim` is the dimensionality the target index was built with; vectors
    /// of any other size are rejected before they reach Qdrant.
    pub fn new(svc: Arc<LlmProfiles>, dim: usize) -> Self {
        Self { svc, dim }
    }
}

impl EmbeddingsProvider for ProfileEmbedder {
    fn embed<'a>(
        &'a self,
        text: &'a str,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Vec<f32>, DocStoreError>> + Send + 'a>,
    > {
        Box::pin(async move {
            let vector = self
                .svc
                .embed(text)
                .await
                .map_err(|e| DocStoreError::Embedding(e.to_string()))?;

            if vector.len() != self.dim {
                return Err(DocStoreError::VectorSizeMismatch {
                    got: vector.len(),
                    want: self.dim,
                });
            }

            Ok(vector)
        })
    }
}
