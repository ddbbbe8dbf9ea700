//! Runtime configuration loaded from environment variables.

/// Config bag for the HTTP service. Every field has a default via
/// `from_env` except `qdrant_url`, whose absence disables retrieval.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Server
    pub port: u16,

    // Retrieval
    pub qdrant_url: Option<String>,
    pub qdrant_api_key: Option<String>,
    pub index_version_file: String,
    pub embedding_dim: usize,
    pub rag_top_k: u64,
    pub max_ctx_chars: usize,

    // Request-path bookkeeping
    pub cache_ttl_secs: u64,
    pub cache_max_entries: u64,
    pub daily_api_limit: u64,
    pub feedback_log_path: String,
}

impl AppConfig {
    /// Build from environment variables with the service defaults.
    pub fn from_env() -> Self {
        Self {
            port: parse("PORT", 5000u16),

            qdrant_url: std::env::var("QDRANT_URL").ok(),
            qdrant_api_key: std::env::var("QDRANT_API_KEY").ok(),
            index_version_file: env("INDEX_VERSION_FILE", "current_index_version.txt"),
            embedding_dim: parse("EMBEDDING_DIM", 384usize),
            rag_top_k: parse("RAG_TOP_K", 3u64),
            max_ctx_chars: parse("MAX_CTX_CHARS", 6000usize),

            cache_ttl_secs: parse("CACHE_TTL_SECS", 300u64),
            cache_max_entries: parse("CACHE_MAX_ENTRIES", 10_000u64),
            daily_api_limit: parse("DAILY_API_LIMIT", 10_000u64),
            feedback_log_path: env("FEEDBACK_LOG_PATH", "feedback.log"),
        }
    }
}

fn env(k: &str, dflt: &str) -> String {
    std::env::var(k).unwrap_or_else(|_| dflt.to_string())
}

fn parse<T: std::str::FromStr>(k: &str, dflt: T) -> T {
    std::env::var(k)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(dflt)
}
