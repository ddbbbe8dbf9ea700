//! Shared LLM service with two active profiles: **generation** and **embedding**.
//!
//! - Lives in the same Tokio runtime as the application.
//! - Construct once, wrap in `Arc`, and pass clones to dependents.
//! - Clients are built eagerly at construction, so a misconfigured profile
//!   fails fast instead of at the first request.
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use llm_service::LlmProfiles;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let svc = Arc::new(LlmProfiles::from_env(Some(10))?);
//!
//!     let txt = svc.generate("Hello world", None).await?;
//!     println!("ANSWER: {}", txt);
//!
//!     let emb = svc.embed("Ferris").await?;
//!     println!("Embedding dim = {}", emb.len());
//!
//!     let statuses = svc.health_all().await;
//!     println!("Health = {:?}", statuses);
//!
//!     Ok(())
//! }
//! ```

use crate::{
    config::{
        default_config::{config_embedding, config_generation},
        llm_model_config::LlmModelConfig,
        llm_provider::LlmProvider,
    },
    error_handler::AiLlmError,
    health_service::{HealthService, HealthStatus},
    services::{ollama_service::OllamaService, open_ai_service::OpenAiService},
};

/// Provider-dispatched client for a single profile.
enum ProviderClient {
    Ollama(OllamaService),
    OpenAi(OpenAiService),
}

impl ProviderClient {
    fn build(cfg: &LlmModelConfig) -> Result<Self, AiLlmError> {
        match cfg.provider {
            LlmProvider::Ollama => Ok(Self::Ollama(OllamaService::new(cfg.clone())?)),
            LlmProvider::OpenAi => Ok(Self::OpenAi(OpenAiService::new(cfg.clone())?)),
        }
    }

    async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, AiLlmError> {
        match self {
            Self::Ollama(cli) => cli.generate(prompt, system).await,
            Self::OpenAi(cli) => cli.generate(prompt, system).await,
        }
    }

    async fn embeddings(&self, input: &str) -> Result<Vec<f32>, AiLlmError> {
        match self {
            Self::Ollama(cli) => cli.embeddings(input).await,
            Self::OpenAi(cli) => cli.embeddings(input).await,
        }
    }
}

/// Shared service that manages two logical LLM profiles: **generation** and
/// **embedding**.
///
/// Each profile owns one preconfigured HTTP client (per-profile timeout,
/// headers), so no clients are created on the request path.
pub struct LlmProfiles {
    generation: LlmModelConfig,
    embedding: LlmModelConfig,

    generation_client: ProviderClient,
    embedding_client: ProviderClient,

    health: HealthService,
}

impl LlmProfiles {
    /// Creates a new service with the two profiles.
    ///
    /// - `generation`: profile answering user questions.
    /// - `embedding`: profile producing query vectors.
    /// - `health_timeout_secs`: optional timeout for the health checker.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] if either profile is invalid (bad endpoint,
    /// missing API key) or an HTTP client cannot be built.
    pub fn new(
        generation: LlmModelConfig,
        embedding: LlmModelConfig,
        health_timeout_secs: Option<u64>,
    ) -> Result<Self, AiLlmError> {
        let generation_client = ProviderClient::build(&generation)?;
        let embedding_client = ProviderClient::build(&embedding)?;

        Ok(Self {
            generation,
            embedding,
            generation_client,
            embedding_client,
            health: HealthService::new(health_timeout_secs)?,
        })
    }

    /// Creates the service from environment variables.
    ///
    /// See [`crate::config::default_config`] for the variable list.
    ///
    /// # Errors
    /// Returns [`AiLlmError::Config`] when the environment is incomplete
    /// (e.g., `OLLAMA_MODEL` or `OPENAI_API_KEY` missing).
    pub fn from_env(health_timeout_secs: Option<u64>) -> Result<Self, AiLlmError> {
        Self::new(config_generation()?, config_embedding()?, health_timeout_secs)
    }

    /// Generates text using the **generation** profile.
    ///
    /// # Arguments
    /// - `prompt`: user prompt text.
    /// - `system`: optional system instruction.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] if generation fails.
    pub async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, AiLlmError> {
        self.generation_client.generate(prompt, system).await
    }

    /// Computes embeddings using the **embedding** profile.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] if embedding fails.
    pub async fn embed(&self, input: &str) -> Result<Vec<f32>, AiLlmError> {
        self.embedding_client.embeddings(input).await
    }

    /// Returns a health snapshot for all distinct profiles.
    ///
    /// If the embedding profile equals the generation profile, it is checked
    /// only once. Never fails; unhealthy backends come back with `ok=false`.
    pub async fn health_all(&self) -> Vec<HealthStatus> {
        let mut list = Vec::<LlmModelConfig>::with_capacity(2);
        list.push(self.generation.clone());
        if self.embedding != self.generation {
            list.push(self.embedding.clone());
        }
        self.health.check_many(&list).await
    }

    /// Returns a reference to the generation profile config.
    pub fn generation_cfg(&self) -> &LlmModelConfig {
        &self.generation
    }

    /// Returns a reference to the embedding profile config.
    pub fn embedding_cfg(&self) -> &LlmModelConfig {
        &self.embedding
    }
}
