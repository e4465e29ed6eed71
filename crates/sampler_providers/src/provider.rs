//! Provider resolution: model name to endpoint and credentials.

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Base URL for the OpenAI chat-completions API.
const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Base URL for the Anthropic OpenAI-compatible API.
const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";

/// A supported LLM provider.
///
/// Both providers are driven through the OpenAI-style chat-completions
/// surface; Anthropic exposes a compatible endpoint, so one wire format
/// covers both. The provider is inferred from the model name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// OpenAI models (gpt-*).
    OpenAi,
    /// Anthropic models (claude-*).
    Anthropic,
}

impl Provider {
    /// Resolves a provider from a model name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_providers::Provider;
    ///
    /// assert_eq!(Provider::from_model("gpt-4.1-mini").unwrap(), Provider::OpenAi);
    /// assert_eq!(
    ///     Provider::from_model("claude-sonnet-4-20250514").unwrap(),
    ///     Provider::Anthropic
    /// );
    /// assert!(Provider::from_model("mistral-7b").is_err());
    /// ```
    pub fn from_model(model: &str) -> Result<Self, ProviderError> {
        if model.contains("gpt") {
            Ok(Provider::OpenAi)
        } else if model.contains("claude") {
            Ok(Provider::Anthropic)
        } else {
            Err(ProviderError::UnknownModel(model.to_string()))
        }
    }

    /// Base URL of the provider's chat-completions API.
    pub fn base_url(&self) -> &'static str {
        match self {
            Provider::OpenAi => OPENAI_API_BASE,
            Provider::Anthropic => ANTHROPIC_API_BASE,
        }
    }

    /// Environment variable holding the provider's API key.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    /// Reads the API key from the environment.
    ///
    /// An unset or empty variable is a configuration error, reported with
    /// the variable name so the fix is obvious.
    pub fn api_key(&self) -> Result<String, ProviderError> {
        match std::env::var(self.api_key_env()) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ProviderError::MissingApiKey {
                env: self.api_key_env(),
            }),
        }
    }

    /// True when the key environment variable is set and non-empty.
    pub fn has_api_key(&self) -> bool {
        self.api_key().is_ok()
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::OpenAi => write!(f, "openai"),
            Provider::Anthropic => write!(f, "anthropic"),
        }
    }
}
