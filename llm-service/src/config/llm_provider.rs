use crate::error_handler::ConfigError;

/// Represents the provider (backend) used for large language model (LLM)
/// inference and embeddings.
///
/// This enum distinguishes between a local Ollama runtime and any
/// OpenAI-compatible HTTP API.
///
/// Adding more providers in the future (e.g., Anthropic Claude, Mistral API)
/// can be done by extending this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// Local Ollama runtime for on-device inference.
    Ollama,
    /// OpenAI-compatible REST API (hosted).
    OpenAi,
}

impl LlmProvider {
    /// Parses a provider name as it appears in `LLM_PROVIDER`.
    ///
    /// Accepted values (case-insensitive): `ollama`, `openai`.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnsupportedProvider`] for anything else.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "openai" => Ok(Self::OpenAi),
            other => Err(ConfigError::UnsupportedProvider(other.to_string())),
        }
    }
}
