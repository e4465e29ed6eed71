//! Cross-run consistency analysis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sampler_providers::TrialResults;

/// How stable a range's statistics are across independent runs.
///
/// The coefficients of variation divide the spread of a per-run statistic
/// by its mean; smaller is more consistent. A CV near zero with a large
/// bias means the model is reliably wrong in the same way every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyAnalysis {
    /// Population standard deviation of the per-run means.
    pub mean_consistency: f64,
    /// Population standard deviation of the per-run standard deviations.
    pub std_consistency: f64,
    /// CV of per-run means: std(run means) / mean(run means).
    pub cv_mean: f64,
    /// CV of per-run standard deviations.
    pub cv_std: f64,
    /// The per-run means, in run order.
    pub run_means: Vec<f64>,
    /// The per-run standard deviations, in run order.
    pub run_stds: Vec<f64>,
}

impl ConsistencyAnalysis {
    /// Builds the consistency analysis for one range across all runs.
    ///
    /// Runs where the range has no surviving samples are skipped. Returns
    /// `None` when no run produced samples for the range.
    pub fn for_range(results: &TrialResults, range_key: &str) -> Option<Self> {
        let mut run_means = Vec::new();
        let mut run_stds = Vec::new();

        for run_stats in results.statistics.values() {
            if let Some(summary) = run_stats.get(range_key) {
                run_means.push(summary.mean);
                run_stds.push(summary.std);
            }
        }

        if run_means.is_empty() {
            return None;
        }

        let mean_consistency = population_std(&run_means);
        let std_consistency = population_std(&run_stds);

        Some(Self {
            mean_consistency,
            std_consistency,
            cv_mean: coefficient_of_variation(&run_means),
            cv_std: coefficient_of_variation(&run_stds),
            run_means,
            run_stds,
        })
    }

    /// Consistency analyses for every range with data, keyed by range.
    pub fn for_all_ranges(results: &TrialResults) -> BTreeMap<String, Self> {
        results
            .ranges
            .iter()
            .filter_map(|range| {
                Self::for_range(results, &range.key()).map(|c| (range.key(), c))
            })
            .collect()
    }
}

fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt()
}

/// std / mean, guarded so a run set whose statistic averages exactly zero
/// (possible on symmetric ranges) reports 0 rather than a non-finite CV.
fn coefficient_of_variation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    if mean == 0.0 {
        return 0.0;
    }
    population_std(values) / mean
}
