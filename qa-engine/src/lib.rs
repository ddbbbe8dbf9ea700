//! Question-answering pipeline over the document index.
//!
//! Public API: [`answer_question`] plus the leaf utilities it composes:
//! PHI scrubbing ([`phi`]), complexity tiers ([`complexity`]), and A/B
//! prompt selection ([`prompt`]). The pipeline embeds the question,
//! retrieves top-K passages from `doc-store`, builds a compact prompt,
//! and asks the generation profile for the final answer.

pub mod api_types;
pub mod complexity;
mod error;
pub mod phi;
pub mod prompt;

pub use api_types::{AskOptions, QaAnswer, UsedChunk};
pub use complexity::Tier;
pub use error::QaError;
pub use prompt::{Variant, VariantPicker};

use std::sync::Arc;

use doc_store::{DocQuery, DocStore, ProfileEmbedder};
use llm_service::LlmProfiles;
use tracing::{debug, info};

/// Answer a question with retrieval augmentation.
///
/// Embeds the question via the shared embedding profile, fetches the
/// `top_k` most similar passages, builds a compact user prompt under
/// `max_ctx_chars`, and asks the generation profile with the system
/// message for `variant`.
///
/// The question is expected to be already anonymized by the caller;
/// nothing else is ever logged here.
///
/// # Errors
/// - [`QaError::Retrieval`] if embedding or search fails
/// - [`QaError::Llm`] if generation fails
pub async fn answer_question(
    store: &DocStore,
    llm: &Arc<LlmProfiles>,
    question: &str,
    variant: Variant,
    opts: &AskOptions,
) -> Result<QaAnswer, QaError> {
    debug!(
        top_k = opts.top_k,
        variant = variant.as_str(),
        "retrieving context"
    );

    let embedder = ProfileEmbedder::new(Arc::clone(llm), store.vector_dim());
    let query = DocQuery {
        text: question,
        top_k: opts.top_k,
    };
    let hits = store.similar_chunks(query, &embedder).await?;

    let system = prompt::system_prompt(variant);
    let user = prompt::build_user_prompt(question, &hits, opts.max_ctx_chars);

    info!(
        hits = hits.len(),
        prompt_chars = user.len(),
        "asking generation profile"
    );
    let answer = llm.generate(&user, Some(&system)).await?;

    let context = hits
        .into_iter()
        .map(|h| UsedChunk {
            score: h.score,
            source: h.source,
            text: h.text,
        })
        .collect();

    Ok(QaAnswer { answer, context })
}
