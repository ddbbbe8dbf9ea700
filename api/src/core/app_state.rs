//! Shared state wired once at startup.

use std::{sync::Arc, time::Duration};

use doc_store::{DocStore, DocStoreConfig};
use llm_service::LlmProfiles;
use qa_engine::VariantPicker;
use tracing::{error, info, warn};

use crate::core::{config::AppConfig, response_cache::ResponseCache, usage::ApiUsageTracker};

/// Collection name used when no index version file is present.
const DEFAULT_INDEX_NAME: &str = "medikbot-index";

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// Vector store facade; `None` when Qdrant is unreachable or unconfigured.
    pub retriever: Option<Arc<DocStore>>,
    /// Generation + embedding profiles; `None` when the provider config is broken.
    pub llm: Option<Arc<LlmProfiles>>,
    /// TTL cache of answers to low-complexity questions.
    pub cache: ResponseCache,
    /// Per-day upstream call counter.
    pub usage: ApiUsageTracker,
    /// A/B prompt variant source.
    pub variants: VariantPicker,
    /// Env-derived knobs used on the request path.
    pub config: AppConfig,
}

impl AppState {
    /// Wire up shared state from the environment.
    ///
    /// Never fails: a dependency that cannot be configured or reached is
    /// logged and left disabled, and the affected requests answer 503 until
    /// the process is restarted with a working configuration.
    pub async fn init() -> Self {
        let config = AppConfig::from_env();

        if config.qdrant_url.is_some() {
            info!("QDRANT_URL is set");
        } else {
            error!("QDRANT_URL is missing");
        }

        let collection = read_index_version(&config.index_version_file);
        info!("Using index: {collection}");

        let llm = init_llm().await;
        let retriever = init_retriever(&config, &collection).await;

        AppState {
            retriever,
            llm,
            cache: ResponseCache::new(
                Duration::from_secs(config.cache_ttl_secs),
                config.cache_max_entries,
            ),
            usage: ApiUsageTracker::new(config.daily_api_limit),
            variants: VariantPicker::new(),
            config,
        }
    }
}

async fn init_llm() -> Option<Arc<LlmProfiles>> {
    let profiles = match LlmProfiles::from_env(None) {
        Ok(profiles) => profiles,
        Err(err) => {
            error!("Cannot initialize LLM profiles: {err}");
            return None;
        }
    };

    info!(
        provider = ?profiles.generation_cfg().provider,
        model = %profiles.generation_cfg().model,
        "LLM profiles initialized"
    );

    // Connectivity is logged, not enforced; the provider may come up later.
    for status in profiles.health_all().await {
        if status.ok {
            info!(
                provider = %status.provider,
                endpoint = %status.endpoint,
                latency_ms = status.latency_ms,
                "LLM endpoint reachable"
            );
        } else {
            warn!(
                provider = %status.provider,
                endpoint = %status.endpoint,
                message = %status.message,
                "LLM endpoint unreachable"
            );
        }
    }

    Some(Arc::new(profiles))
}

async fn init_retriever(config: &AppConfig, collection: &str) -> Option<Arc<DocStore>> {
    let Some(url) = &config.qdrant_url else {
        error!("Cannot connect to Qdrant: QDRANT_URL is missing");
        return None;
    };

    let mut store_cfg = DocStoreConfig::new_default(url, collection);
    store_cfg.qdrant_api_key = config.qdrant_api_key.clone();
    store_cfg.vector_dim = config.embedding_dim;

    let store = match DocStore::new(store_cfg) {
        Ok(store) => store,
        Err(err) => {
            error!("Error connecting to Qdrant: {err}");
            return None;
        }
    };

    match store.ping().await {
        Ok(()) => {
            info!("Successfully connected to Qdrant");
            Some(Arc::new(store))
        }
        Err(err) => {
            error!("Error connecting to Qdrant: {err}");
            None
        }
    }
}

/// Read the active index (collection) name from the version file.
///
/// The first non-empty line wins; a missing or empty file falls back to
/// [`DEFAULT_INDEX_NAME`].
fn read_index_version(path: &str) -> String {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|contents| contents.lines().next().map(|line| line.trim().to_string()))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_INDEX_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(tag: &str, contents: &str) -> std::path::PathBuf {
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let path = std::env::temp_dir().join(format!("index-{tag}-{nanos}.txt"));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn index_version_falls_back_when_file_is_missing() {
        assert_eq!(
            read_index_version("/nonexistent/current_index_version.txt"),
            DEFAULT_INDEX_NAME
        );
    }

    #[test]
    fn index_version_reads_first_line() {
        let path = temp_file("first-line", "medikbot-index-v7\nold: medikbot-index-v6\n");
        assert_eq!(
            read_index_version(path.to_str().unwrap()),
            "medikbot-index-v7"
        );
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn index_version_falls_back_on_empty_file() {
        let path = temp_file("empty", "");
        assert_eq!(read_index_version(path.to_str().unwrap()), DEFAULT_INDEX_NAME);
        std::fs::remove_file(path).unwrap();
    }
}
