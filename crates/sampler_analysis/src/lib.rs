//! # sampler_analysis: Distribution Analysis over Campaign Results
//!
//! Analysis layer of the workspace. Takes the raw [`TrialResults`] of a
//! sampling campaign and produces:
//! - per-range bias, spread, coverage and uniformity ([`RangeAnalysis`])
//! - bias patterns across ranges ([`BiasAnalysis`])
//! - cross-run consistency via coefficients of variation
//!   ([`ConsistencyAnalysis`])
//! - a headline summary ([`AnalysisSummary`])
//!
//! [`TrialResults`]: sampler_providers::TrialResults

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod bias;
pub mod consistency;
pub mod distribution;
pub mod error;
pub mod range;
pub mod summary;

pub use bias::BiasAnalysis;
pub use consistency::ConsistencyAnalysis;
pub use distribution::{analyze_distribution, DistributionAnalysis};
pub use error::AnalysisError;
pub use range::RangeAnalysis;
pub use summary::{summarize, AnalysisSummary, UniformityFindings};
