//! Error types for the analysis layer.

use thiserror::Error;

/// Errors raised while analysing campaign results.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No range in the campaign produced enough samples to analyse.
    #[error("No analysable data: every range had fewer than 2 surviving samples")]
    NoData,

    /// A statistics computation failed.
    #[error("Statistics error: {0}")]
    Stats(#[from] sampler_stats::StatsError),
}
