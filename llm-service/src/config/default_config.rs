//! Default LLM configs loaded strictly from environment variables.
//!
//! This module provides convenience constructors for [`LlmModelConfig`],
//! grouped by role. Two roles are active:
//!
//! - **Generation** → chat completion answering user questions
//! - **Embedding**  → query vectors for similarity search
//!
//! Both roles resolve the same provider from `LLM_PROVIDER` so the whole
//! process talks to one backend.
//!
//! # Environment variables
//!
//! Common:
//! - `LLM_PROVIDER`   = provider kind: `ollama` (default) or `openai`
//! - `LLM_MAX_TOKENS` = optional generation token cap (u32)
//!
//! Ollama-specific:
//! - `OLLAMA_URL` or `OLLAMA_PORT` = endpoint (default `http://127.0.0.1:11434`)
//! - `OLLAMA_MODEL`                = generation model (mandatory)
//! - `EMBEDDING_MODEL`             = embedding model (default `all-minilm`)
//!
//! OpenAI-specific:
//! - `OPENAI_URL`      = API base URL (default `https://api.openai.com`)
//! - `OPENAI_API_KEY`  = API key (mandatory)
//! - `OPENAI_MODEL`    = generation model (default `gpt-4o-mini`)
//! - `EMBEDDING_MODEL` = embedding model (default `text-embedding-3-small`)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        AiLlmError, ConfigError, env_opt, env_opt_u32, must_env, validate_http_endpoint,
    },
};

/// Generation profile defaults (creative-but-grounded answers).
const GENERATION_TEMPERATURE: f32 = 0.6;
const GENERATION_MAX_TOKENS: u32 = 500;
const GENERATION_TIMEOUT_SECS: u64 = 40;

/// Embedding profile default timeout.
const EMBEDDING_TIMEOUT_SECS: u64 = 30;

/// Resolves the active provider from `LLM_PROVIDER` (default: Ollama).
///
/// # Errors
///
/// - [`ConfigError::UnsupportedProvider`] for unknown provider names
fn provider_from_env() -> Result<LlmProvider, AiLlmError> {
    match env_opt("LLM_PROVIDER") {
        Some(v) => Ok(LlmProvider::parse(&v)?),
        None => Ok(LlmProvider::Ollama),
    }
}

/// Resolves the Ollama endpoint from environment.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
/// 3. `http://127.0.0.1:11434` (default local runtime)
///
/// # Errors
///
/// - [`ConfigError::InvalidFormat`] if `OLLAMA_URL` lacks an http/https scheme
/// - [`ConfigError::InvalidNumber`] if `OLLAMA_PORT` is invalid
fn ollama_endpoint() -> Result<String, AiLlmError> {
    if let Some(url) = env_opt("OLLAMA_URL") {
        validate_http_endpoint("OLLAMA_URL", &url)?;
        return Ok(url);
    }
    if let Some(port) = env_opt("OLLAMA_PORT") {
        let _ = port
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidNumber {
                var: "OLLAMA_PORT",
                reason: "expected u16 (1..=65535)",
            })?;
        return Ok(format!("http://localhost:{port}"));
    }
    Ok("http://127.0.0.1:11434".to_string())
}

/// Resolves the OpenAI API base URL from environment.
///
/// # Errors
///
/// - [`ConfigError::InvalidFormat`] if `OPENAI_URL` lacks an http/https scheme
fn openai_endpoint() -> Result<String, AiLlmError> {
    match env_opt("OPENAI_URL") {
        Some(url) => {
            validate_http_endpoint("OPENAI_URL", &url)?;
            Ok(url)
        }
        None => Ok("https://api.openai.com".to_string()),
    }
}

/// Constructs the **generation** profile config.
///
/// Used for answering user questions with the retrieved context.
///
/// # Env
/// - `LLM_PROVIDER` (optional, default `ollama`)
/// - `OLLAMA_MODEL` (required for Ollama)
/// - `OPENAI_API_KEY` (required for OpenAI)
/// - `LLM_MAX_TOKENS` (optional)
///
/// # Defaults
/// - `temperature = Some(0.6)`
/// - `max_tokens = Some(500)`
/// - `timeout_secs = Some(40)`
pub fn config_generation() -> Result<LlmModelConfig, AiLlmError> {
    let provider = provider_from_env()?;
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?.or(Some(GENERATION_MAX_TOKENS));

    match provider {
        LlmProvider::Ollama => Ok(LlmModelConfig {
            provider,
            model: must_env("OLLAMA_MODEL")?,
            endpoint: ollama_endpoint()?,
            api_key: None,
            max_tokens,
            temperature: Some(GENERATION_TEMPERATURE),
            timeout_secs: Some(GENERATION_TIMEOUT_SECS),
        }),
        LlmProvider::OpenAi => Ok(LlmModelConfig {
            provider,
            model: env_opt("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            endpoint: openai_endpoint()?,
            api_key: Some(must_env("OPENAI_API_KEY")?),
            max_tokens,
            temperature: Some(GENERATION_TEMPERATURE),
            timeout_secs: Some(GENERATION_TIMEOUT_SECS),
        }),
    }
}

/// Constructs the **embedding** profile config.
///
/// Used to vectorize queries for similarity search, so the model defaults
/// track a small sentence-embedding family rather than the chat model.
///
/// # Env
/// - `LLM_PROVIDER` (optional, default `ollama`)
/// - `EMBEDDING_MODEL` (optional; provider-specific default)
/// - `OPENAI_API_KEY` (required for OpenAI)
///
/// # Defaults
/// - `temperature = Some(0.0)` (deterministic)
/// - `max_tokens = None`
/// - `timeout_secs = Some(30)`
pub fn config_embedding() -> Result<LlmModelConfig, AiLlmError> {
    let provider = provider_from_env()?;

    match provider {
        LlmProvider::Ollama => Ok(LlmModelConfig {
            provider,
            model: env_opt("EMBEDDING_MODEL").unwrap_or_else(|| "all-minilm".to_string()),
            endpoint: ollama_endpoint()?,
            api_key: None,
            max_tokens: None,
            temperature: Some(0.0),
            timeout_secs: Some(EMBEDDING_TIMEOUT_SECS),
        }),
        LlmProvider::OpenAi => Ok(LlmModelConfig {
            provider,
            model: env_opt("EMBEDDING_MODEL")
                .unwrap_or_else(|| "text-embedding-3-small".to_string()),
            endpoint: openai_endpoint()?,
            api_key: Some(must_env("OPENAI_API_KEY")?),
            max_tokens: None,
            temperature: Some(0.0),
            timeout_secs: Some(EMBEDDING_TIMEOUT_SECS),
        }),
    }
}
