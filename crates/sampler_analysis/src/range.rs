//! Per-range distribution analysis.

use serde::{Deserialize, Serialize};

use sampler_providers::RangeSpec;
use sampler_stats::{uniformity_test, SampleSummary, StatsError, UniformityTest};

/// Analysis of all samples pooled for one range.
///
/// Expected values are those of the uniform distribution over the range:
/// mean (min + max) / 2, standard deviation (max - min) / sqrt(12).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeAnalysis {
    /// Number of pooled samples.
    pub total_samples: usize,
    /// Observed mean.
    pub actual_mean: f64,
    /// Uniform-theoretic mean.
    pub expected_mean: f64,
    /// actual_mean - expected_mean; the headline bias number.
    pub mean_bias: f64,
    /// Observed population standard deviation.
    pub actual_std: f64,
    /// Uniform-theoretic standard deviation.
    pub expected_std: f64,
    /// actual_std / expected_std; below 1 means the spread is too narrow.
    pub std_ratio: f64,
    /// Smallest observed sample.
    pub min: f64,
    /// Largest observed sample.
    pub max: f64,
    /// (max - min observed) / range width; 1.0 is full coverage.
    pub range_coverage: f64,
    /// Goodness-of-fit verdicts against the uniform distribution.
    pub uniformity_test: UniformityTest,
}

impl RangeAnalysis {
    /// Analyses pooled samples against their range.
    ///
    /// Needs at least 2 samples; the uniformity tests are meaningless below
    /// that and every other statistic is degenerate.
    pub fn from_pooled(range: &RangeSpec, samples: &[f64]) -> Result<Self, StatsError> {
        let summary = SampleSummary::from_samples(samples).ok_or(
            StatsError::InsufficientSamples {
                needed: 2,
                got: 0,
            },
        )?;

        let expected_mean = range.midpoint();
        let expected_std = range.width() / 12.0_f64.sqrt();
        let uniformity = uniformity_test(samples, range.min, range.max)?;

        Ok(Self {
            total_samples: summary.count,
            actual_mean: summary.mean,
            expected_mean,
            mean_bias: summary.mean - expected_mean,
            actual_std: summary.std,
            expected_std,
            std_ratio: summary.std / expected_std,
            min: summary.min,
            max: summary.max,
            range_coverage: (summary.max - summary.min) / range.width(),
            uniformity_test: uniformity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid(range: &RangeSpec, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| range.min + range.width() * i as f64 / (n - 1) as f64)
            .collect()
    }

    #[test]
    fn test_even_grid_is_unbiased_and_covering() {
        let range = RangeSpec::new(1.0, 10.0).unwrap();
        let analysis = RangeAnalysis::from_pooled(&range, &grid(&range, 200)).unwrap();

        assert_relative_eq!(analysis.mean_bias, 0.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.range_coverage, 1.0, epsilon = 1e-12);
        assert_relative_eq!(analysis.expected_mean, 5.5, epsilon = 1e-12);
        assert_relative_eq!(analysis.expected_std, 9.0 / 12.0_f64.sqrt(), epsilon = 1e-12);
        assert!(analysis.uniformity_test.is_uniform_ks);
    }

    #[test]
    fn test_clustered_samples_show_narrow_spread() {
        let range = RangeSpec::new(0.0, 100.0).unwrap();
        let samples: Vec<f64> = (0..100).map(|i| 60.0 + (i % 10) as f64).collect();
        let analysis = RangeAnalysis::from_pooled(&range, &samples).unwrap();

        assert!(analysis.mean_bias > 10.0);
        assert!(analysis.std_ratio < 0.2);
        assert!(analysis.range_coverage < 0.1);
        assert!(!analysis.uniformity_test.is_uniform_chi2);
    }

    #[test]
    fn test_rejects_empty_pool() {
        let range = RangeSpec::new(0.0, 1.0).unwrap();
        assert!(RangeAnalysis::from_pooled(&range, &[]).is_err());
        assert!(RangeAnalysis::from_pooled(&range, &[0.5]).is_err());
    }
}
