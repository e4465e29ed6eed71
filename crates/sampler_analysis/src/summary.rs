//! Headline summary of an analysis.

use serde::{Deserialize, Serialize};

use crate::distribution::DistributionAnalysis;

/// Uniformity verdict counts across the tested ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformityFindings {
    /// Ranges passing the KS test, as "passed/total".
    pub ks_test_uniform: String,
    /// Ranges passing the Chi-square test, as "passed/total".
    pub chi2_test_uniform: String,
    /// Fraction of ranges passing the KS test.
    pub ks_uniformity_rate: f64,
    /// Fraction of ranges passing the Chi-square test.
    pub chi2_uniformity_rate: f64,
}

/// Key findings of one campaign, sized for a terminal or a report header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Number of ranges that produced analysable data.
    pub total_ranges_tested: usize,
    /// Mean of the per-range mean biases.
    pub overall_bias: f64,
    /// Range key with the largest absolute bias, if any.
    pub most_biased_range: Option<String>,
    /// Range key with the largest mean CV across runs, if any.
    pub least_consistent_range: Option<String>,
    /// Uniformity verdict counts.
    pub uniformity_findings: UniformityFindings,
}

/// Condenses an analysis into its headline numbers.
pub fn summarize(analysis: &DistributionAnalysis) -> AnalysisSummary {
    let total = analysis.range_analysis.len();

    let most_biased_range = analysis
        .bias_analysis
        .bias_by_range
        .iter()
        .max_by(|a, b| a.1.abs().total_cmp(&b.1.abs()))
        .map(|(key, _)| key.clone());

    let least_consistent_range = analysis
        .consistency_analysis
        .iter()
        .max_by(|a, b| a.1.cv_mean.abs().total_cmp(&b.1.cv_mean.abs()))
        .map(|(key, _)| key.clone());

    let ks_passed = analysis
        .range_analysis
        .values()
        .filter(|r| r.uniformity_test.is_uniform_ks)
        .count();
    let chi2_passed = analysis
        .range_analysis
        .values()
        .filter(|r| r.uniformity_test.is_uniform_chi2)
        .count();

    let rate = |passed: usize| {
        if total == 0 {
            0.0
        } else {
            passed as f64 / total as f64
        }
    };

    AnalysisSummary {
        total_ranges_tested: total,
        overall_bias: analysis.bias_analysis.mean_bias,
        most_biased_range,
        least_consistent_range,
        uniformity_findings: UniformityFindings {
            ks_test_uniform: format!("{}/{}", ks_passed, total),
            chi2_test_uniform: format!("{}/{}", chi2_passed, total),
            ks_uniformity_rate: rate(ks_passed),
            chi2_uniformity_rate: rate(chi2_passed),
        },
    }
}
