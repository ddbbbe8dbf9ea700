//! Retrieval helpers: low-level vector search and passage mapping.

use crate::config::DocStoreConfig;
use crate::embed::EmbeddingsProvider;
use crate::errors::DocStoreError;
use crate::qdrant_facade::QdrantFacade;
use crate::record::{DocHit, DocQuery};

use tracing::trace;

/// Performs a low-level similarity search given a ready query vector.
///
/// # Errors
/// Returns `DocStoreError::Qdrant` on client failures.
pub async fn search_by_vector(
    client: &QdrantFacade,
    query_vector: Vec<f32>,
    top_k: u64,
    with_payload: bool,
    exact: bool,
) -> Result<Vec<(f32, serde_json::Value)>, DocStoreError> {
    trace!("retrieve::search_by_vector top_k={top_k} with_payload={with_payload} exact={exact}");
    let res = client
        .search(query_vector, top_k, with_payload, exact)
        .await?;
    Ok(res)
}

/// Embeds the query text and returns normalized passage hits.
///
/// Payload fields `text` and `source` are lifted into [`DocHit`]; hits keep
/// the score order returned by Qdrant.
///
/// # Errors
/// Returns embedding/provider errors or Qdrant failures.
pub async fn similar_chunks(
    cfg: &DocStoreConfig,
    client: &QdrantFacade,
    query: DocQuery<'_>,
    provider: &dyn EmbeddingsProvider,
) -> Result<Vec<DocHit>, DocStoreError> {
    trace!("retrieve::similar_chunks top_k={}", query.top_k);

    let qv = provider.embed(query.text).await?;

    let hits = search_by_vector(
        client,
        qv,
        query.top_k,
        /* with_payload = */ true,
        cfg.exact_search,
    )
    .await?;

    let mut out = Vec::with_capacity(hits.len());
    for (score, payload) in hits {
        let text = payload
            .get("text")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let source = payload
            .get("source")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());
        out.push(DocHit {
            score,
            text,
            source,
            raw_payload: payload,
        });
    }

    trace!("retrieve::similar_chunks hits={}", out.len());
    Ok(out)
}
