//! Retrieval facade over a Qdrant document index.
//!
//! This crate provides a clean API to:
//! - Verify the index is reachable (`ping`)
//! - Retrieve top-K passages for a textual query via a pluggable embedding seam
//!
//! Index population happens out of band; this crate never writes to the
//! collection. The design is flat (no deep nesting) and splits
//! responsibilities into focused modules.

mod config;
mod embed;
mod errors;
mod qdrant_facade;
mod record;
mod retrieve;

pub use config::{DistanceKind, DocStoreConfig};
pub use embed::{EmbeddingsProvider, profile::ProfileEmbedder};
pub use errors::DocStoreError;
pub use record::{DocHit, DocQuery};

use tracing::trace;

/// High-level facade that wires configuration and Qdrant client.
///
/// This is the single entry point recommended for application code.
pub struct DocStore {
    cfg: DocStoreConfig,
    client: qdrant_facade::QdrantFacade,
}

impl DocStore {
    /// Constructs a new store from the given configuration.
    ///
    /// # Errors
    /// Returns `DocStoreError::Config` if validation fails or
    /// `DocStoreError::Qdrant` if the client cannot be initialized.
    pub fn new(cfg: DocStoreConfig) -> Result<Self, DocStoreError> {
        trace!("DocStore::new collection={}", cfg.collection);
        let client = qdrant_facade::QdrantFacade::new(&cfg)?;
        Ok(Self { cfg, client })
    }

    /// Verifies the collection is reachable (startup probe).
    ///
    /// # Errors
    /// Returns `DocStoreError::Qdrant` if the collection cannot be queried.
    pub async fn ping(&self) -> Result<(), DocStoreError> {
        self.client.ping().await
    }

    /// Returns the collection name this store reads from.
    pub fn collection(&self) -> &str {
        &self.cfg.collection
    }

    /// Returns the dimensionality the index was built with.
    pub fn vector_dim(&self) -> usize {
        self.cfg.vector_dim
    }

    /// Performs a low-level vector search and returns `(score, payload)` tuples.
    ///
    /// # Errors
    /// Returns `DocStoreError::Qdrant` if search fails.
    pub async fn search_by_vector(
        &self,
        query_vector: Vec<f32>,
        top_k: u64,
        with_payload: bool,
    ) -> Result<Vec<(f32, serde_json::Value)>, DocStoreError> {
        trace!("DocStore::search_by_vector top_k={top_k} with_payload={with_payload}");
        retrieve::search_by_vector(
            &self.client,
            query_vector,
            top_k,
            with_payload,
            self.cfg.exact_search,
        )
        .await
    }

    /// Retrieves the most similar passages for a textual query using the
    /// provided embedding provider.
    ///
    /// # Errors
    /// Returns embedding errors or Qdrant failures.
    pub async fn similar_chunks(
        &self,
        query: DocQuery<'_>,
        provider: &dyn EmbeddingsProvider,
    ) -> Result<Vec<DocHit>, DocStoreError> {
        trace!("DocStore::similar_chunks top_k={}", query.top_k);
        retrieve::similar_chunks(&self.cfg, &self.client, query, provider).await
    }
}
