//! CLI configuration management.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional TOML file (`randlens.toml` unless overridden on the command
//! line), and `RANDLENS_*` environment variables. API keys are deliberately
//! not part of this file; providers read them from their own environment
//! variables.

use serde::Deserialize;

use sampler_providers::PromptStyle;

use crate::error::Result;

/// Default model, the most recent one studied.
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// CLI configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Model to query when the command line gives none.
    pub model: String,
    /// Prompt style for campaigns.
    pub prompt_style: PromptStyle,
    /// Sampling temperature passed to the API.
    pub temperature: f64,
    /// Completion token cap per request.
    pub max_tokens: u32,
    /// Pause between consecutive API calls, in milliseconds.
    pub call_delay_ms: u64,
    /// Retry budget per sample.
    pub max_retries: u32,
    /// Samples per range per run for full campaigns.
    pub samples_per_range: usize,
    /// Number of independent runs for full campaigns.
    pub runs: usize,
    /// Directory for reports and charts.
    pub output_dir: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            prompt_style: PromptStyle::Direct,
            temperature: 0.7,
            max_tokens: 10,
            call_delay_ms: 100,
            max_retries: 2,
            samples_per_range: 200,
            runs: 5,
            output_dir: "./results".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from defaults, an optional TOML file and
    /// `RANDLENS_*` environment variables.
    pub fn load(path: &str) -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(path).required(false))
            .add_source(::config::Environment::with_prefix("RANDLENS"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.samples_per_range, 200);
        assert_eq!(config.runs, 5);
        assert_eq!(config.prompt_style, PromptStyle::Direct);
        assert_eq!(config.call_delay_ms, 100);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = CliConfig::load("definitely-not-a-real-config-file").unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.output_dir, "./results");
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("randlens.toml");
        std::fs::write(&path, "model = \"gpt-4.1\"\nruns = 3\nprompt_style = \"precise\"\n")
            .unwrap();

        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.model, "gpt-4.1");
        assert_eq!(config.runs, 3);
        assert_eq!(config.prompt_style, PromptStyle::Precise);
        // Untouched fields keep their defaults.
        assert_eq!(config.samples_per_range, 200);
    }
}
