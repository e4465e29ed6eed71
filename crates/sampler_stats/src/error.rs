//! Error types for the statistical kernel.

use thiserror::Error;

/// Errors raised by statistical computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Too few samples for the requested computation.
    #[error("Insufficient samples: need at least {needed}, got {got}")]
    InsufficientSamples {
        /// Minimum number of samples required.
        needed: usize,
        /// Number of samples provided.
        got: usize,
    },

    /// The range [min, max] is degenerate or inverted.
    #[error("Invalid range [{min}, {max}]: max must be strictly greater than min")]
    InvalidRange {
        /// Lower bound of the range.
        min: f64,
        /// Upper bound of the range.
        max: f64,
    },

    /// A sample fell outside the range it is tested against.
    #[error("Sample {value} outside range [{min}, {max}]")]
    SampleOutOfRange {
        /// The offending sample.
        value: f64,
        /// Lower bound of the range.
        min: f64,
        /// Upper bound of the range.
        max: f64,
    },
}
