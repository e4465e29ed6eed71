//! CLI error types.

use thiserror::Error;

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the CLI user.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file argument does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// An argument value is out of bounds or unsupported.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration loading failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Provider or campaign failure.
    #[error("Provider error: {0}")]
    Provider(#[from] sampler_providers::ProviderError),

    /// Analysis failure.
    #[error("Analysis error: {0}")]
    Analysis(#[from] sampler_analysis::AnalysisError),

    /// Report persistence or rendering failure.
    #[error("Report error: {0}")]
    Report(#[from] sampler_report::ReportError),

    /// Statistics failure.
    #[error("Statistics error: {0}")]
    Stats(#[from] sampler_stats::StatsError),

    /// Other filesystem failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
