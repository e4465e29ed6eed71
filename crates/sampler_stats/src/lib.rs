//! # sampler_stats: Statistical Kernel for Sample Analysis
//!
//! ## Kernel Layer Role
//!
//! sampler_stats is the bottom layer of the workspace, providing:
//! - Descriptive sample statistics: `SampleSummary` (`summary`)
//! - Uniformity goodness-of-fit tests: Kolmogorov–Smirnov and Chi-square
//!   (`uniformity`)
//! - Special functions behind the p-values: log-gamma, regularised incomplete
//!   gamma, Kolmogorov survival function (`special`)
//! - Error types: `StatsError` (`error`)
//!
//! ## Zero Dependency Principle
//!
//! The kernel layer has no dependencies on other sampler_* crates, with
//! minimal external dependencies:
//! - serde: Serialisation of result structs
//! - thiserror: Structured error types
//!
//! ## Conventions
//!
//! Standard deviations are population standard deviations (divide by n) and
//! quantiles use linear interpolation between order statistics, so summaries
//! round-trip against reports produced by common array libraries.
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_stats::{SampleSummary, uniformity_test};
//!
//! let samples: Vec<f64> = (0..100).map(|i| i as f64 / 100.0).collect();
//!
//! let summary = SampleSummary::from_samples(&samples).unwrap();
//! assert!((summary.mean - 0.495).abs() < 1e-9);
//!
//! let test = uniformity_test(&samples, 0.0, 1.0).unwrap();
//! assert!(test.is_uniform_ks);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod special;
pub mod summary;
pub mod uniformity;

pub use error::StatsError;
pub use summary::SampleSummary;
pub use uniformity::{
    chi_square_uniform_test, ks_uniform_test, uniformity_test, UniformityTest, ALPHA,
    CHI_SQUARE_BINS,
};
