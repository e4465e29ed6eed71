//! Error types for provider clients and campaigns.

use thiserror::Error;

/// Errors raised while talking to a provider or collecting a campaign.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The model name matches no known provider.
    #[error("Unknown model '{0}': expected a gpt-* or claude-* model name")]
    UnknownModel(String),

    /// The provider's API key environment variable is unset or empty.
    #[error("API key not found: set {env} in the environment")]
    MissingApiKey {
        /// Name of the environment variable that should hold the key.
        env: &'static str,
    },

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("API error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: String,
    },

    /// Invalid campaign or client configuration.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// Statistics computation failed on collected data.
    #[error("Statistics error: {0}")]
    Stats(#[from] sampler_stats::StatsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProviderError::UnknownModel("llama-7b".to_string());
        assert!(err.to_string().contains("llama-7b"));

        let err = ProviderError::MissingApiKey {
            env: "OPENAI_API_KEY",
        };
        assert!(err.to_string().contains("OPENAI_API_KEY"));

        let err = ProviderError::Api {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert!(err.to_string().contains("429"));
    }
}
