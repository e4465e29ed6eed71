//! Full distribution analysis of a campaign.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use sampler_providers::TrialResults;

use crate::bias::BiasAnalysis;
use crate::consistency::ConsistencyAnalysis;
use crate::error::AnalysisError;
use crate::range::RangeAnalysis;

/// The complete analysis of one campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionAnalysis {
    /// Per-range analysis over pooled samples, keyed by range.
    pub range_analysis: BTreeMap<String, RangeAnalysis>,
    /// Cross-range bias patterns.
    pub bias_analysis: BiasAnalysis,
    /// Per-range cross-run consistency, keyed by range.
    pub consistency_analysis: BTreeMap<String, ConsistencyAnalysis>,
}

/// Analyses a campaign's results.
///
/// Samples are pooled per range across every run for the range and bias
/// analyses; the per-run statistics recorded during collection feed the
/// consistency analysis. Ranges whose pool is too small to test are
/// skipped with a warning; a campaign where every range is skipped is an
/// error.
pub fn analyze_distribution(results: &TrialResults) -> Result<DistributionAnalysis, AnalysisError> {
    let mut range_analysis = BTreeMap::new();

    for range in &results.ranges {
        let key = range.key();
        let pooled = results.pooled_samples(&key);
        debug!(range = %range, samples = pooled.len(), "analysing range");

        match RangeAnalysis::from_pooled(range, &pooled) {
            Ok(analysis) => {
                range_analysis.insert(key, analysis);
            }
            Err(err) => {
                warn!(range = %range, %err, "skipping range");
            }
        }
    }

    if range_analysis.is_empty() {
        return Err(AnalysisError::NoData);
    }

    Ok(DistributionAnalysis {
        bias_analysis: BiasAnalysis::from_ranges(&range_analysis),
        consistency_analysis: ConsistencyAnalysis::for_all_ranges(results),
        range_analysis,
    })
}
