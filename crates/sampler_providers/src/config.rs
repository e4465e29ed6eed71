//! Generator client configuration.

use std::time::Duration;

use crate::error::ProviderError;

/// Maximum number of retries allowed per sample.
pub const MAX_RETRIES: u32 = 10;

/// Sampling temperature bounds accepted by the chat APIs.
pub const MAX_TEMPERATURE: f64 = 2.0;

/// Configuration for a [`crate::NumberGenerator`].
///
/// Immutable once built; use [`GeneratorConfigBuilder`] to construct
/// instances with validation.
///
/// # Examples
///
/// ```rust
/// use sampler_providers::GeneratorConfig;
/// use std::time::Duration;
///
/// let config = GeneratorConfig::builder("gpt-4.1-mini")
///     .temperature(0.7)
///     .call_delay(Duration::from_millis(100))
///     .max_retries(2)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.model(), "gpt-4.1-mini");
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Model name, e.g. "gpt-4.1" or "claude-sonnet-4-20250514".
    model: String,
    /// Sampling temperature passed to the API.
    temperature: f64,
    /// Completion token cap; a bare number needs very few.
    max_tokens: u32,
    /// Pause between consecutive API calls.
    call_delay: Duration,
    /// Bounded retries per sample on rate limits and transport errors.
    max_retries: u32,
}

impl GeneratorConfig {
    /// Creates a builder for the given model.
    pub fn builder(model: impl Into<String>) -> GeneratorConfigBuilder {
        GeneratorConfigBuilder {
            model: model.into(),
            temperature: 0.7,
            max_tokens: 10,
            call_delay: Duration::from_millis(100),
            max_retries: 2,
        }
    }

    /// Model name.
    #[inline]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sampling temperature.
    #[inline]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Completion token cap.
    #[inline]
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Pause between consecutive API calls.
    #[inline]
    pub fn call_delay(&self) -> Duration {
        self.call_delay
    }

    /// Retry budget per sample.
    #[inline]
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct GeneratorConfigBuilder {
    model: String,
    temperature: f64,
    max_tokens: u32,
    call_delay: Duration,
    max_retries: u32,
}

impl GeneratorConfigBuilder {
    /// Sets the sampling temperature (0 to [`MAX_TEMPERATURE`]).
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the completion token cap.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the pause between consecutive API calls.
    pub fn call_delay(mut self, call_delay: Duration) -> Self {
        self.call_delay = call_delay;
        self
    }

    /// Sets the retry budget per sample (at most [`MAX_RETRIES`]).
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Validates and builds the configuration.
    pub fn build(self) -> Result<GeneratorConfig, ProviderError> {
        if self.model.trim().is_empty() {
            return Err(ProviderError::InvalidParameter {
                name: "model",
                reason: "must not be empty".to_string(),
            });
        }
        if !(0.0..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(ProviderError::InvalidParameter {
                name: "temperature",
                reason: format!("{} outside [0, {}]", self.temperature, MAX_TEMPERATURE),
            });
        }
        if self.max_tokens == 0 {
            return Err(ProviderError::InvalidParameter {
                name: "max_tokens",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_retries > MAX_RETRIES {
            return Err(ProviderError::InvalidParameter {
                name: "max_retries",
                reason: format!("{} exceeds cap {}", self.max_retries, MAX_RETRIES),
            });
        }

        Ok(GeneratorConfig {
            model: self.model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            call_delay: self.call_delay,
            max_retries: self.max_retries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::builder("gpt-4.1").build().unwrap();
        assert_eq!(config.temperature(), 0.7);
        assert_eq!(config.max_tokens(), 10);
        assert_eq!(config.call_delay(), Duration::from_millis(100));
        assert_eq!(config.max_retries(), 2);
    }

    #[test]
    fn test_rejects_empty_model() {
        assert!(GeneratorConfig::builder("  ").build().is_err());
    }

    #[test]
    fn test_rejects_bad_temperature() {
        assert!(GeneratorConfig::builder("gpt-4.1")
            .temperature(-0.1)
            .build()
            .is_err());
        assert!(GeneratorConfig::builder("gpt-4.1")
            .temperature(2.5)
            .build()
            .is_err());
    }

    #[test]
    fn test_rejects_excessive_retries() {
        assert!(GeneratorConfig::builder("gpt-4.1")
            .max_retries(MAX_RETRIES + 1)
            .build()
            .is_err());
    }
}
