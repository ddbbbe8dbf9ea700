//! Runtime and collection configuration.

use crate::errors::DocStoreError;

/// Distance function used for the vector space.
#[derive(Clone, Copy, Debug)]
pub enum DistanceKind {
    /// Cosine distance (recommended for most embeddings).
    Cosine,
    /// Dot product (useful for normalized vectors).
    Dot,
    /// Euclidean distance (L2).
    Euclid,
}

/// Configuration for document retrieval.
///
/// The collection is expected to exist already; this crate only reads from
/// it (index population happens out of band).
#[derive(Clone, Debug)]
pub struct DocStoreConfig {
    /// Qdrant endpoint, e.g. `http://localhost:6334`.
    pub qdrant_url: String,
    /// Optional API key for Qdrant Cloud.
    pub qdrant_api_key: Option<String>,
    /// Target collection name (the active index version).
    pub collection: String,
    /// Distance function of the index (Cosine by default).
    pub distance: DistanceKind,
    /// Exact search flag (false = HNSW ANN).
    pub exact_search: bool,
    /// Dimensionality the index was built with; query vectors must match.
    pub vector_dim: usize,
}

impl DocStoreConfig {
    /// Creates a sane default config for a given Qdrant endpoint and collection name.
    pub fn new_default(url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            qdrant_url: url.into(),
            qdrant_api_key: None,
            collection: collection.into(),
            distance: DistanceKind::Cosine,
            exact_search: false,
            vector_dim: 384,
        }
    }

    /// Validates config values.
    pub fn validate(&self) -> Result<(), DocStoreError> {
        if self.qdrant_url.trim().is_empty() {
            return Err(DocStoreError::Config("qdrant_url is empty".into()));
        }
        if self.collection.trim().is_empty() {
            return Err(DocStoreError::Config("collection is empty".into()));
        }
        if self.vector_dim == 0 {
            return Err(DocStoreError::Config("vector_dim must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let cfg = DocStoreConfig::new_default("http://localhost:6334", "medikbot-index");
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.vector_dim, 384);
    }

    #[test]
    fn validate_rejects_empty_fields() {
        let mut cfg = DocStoreConfig::new_default("", "medikbot-index");
        assert!(cfg.validate().is_err());

        cfg = DocStoreConfig::new_default("http://localhost:6334", "  ");
        assert!(cfg.validate().is_err());

        cfg = DocStoreConfig::new_default("http://localhost:6334", "medikbot-index");
        cfg.vector_dim = 0;
        assert!(cfg.validate().is_err());
    }
}
