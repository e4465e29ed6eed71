//! Descriptive statistics for a single batch of samples.

use serde::{Deserialize, Serialize};

/// Descriptive statistics of one batch of generated numbers.
///
/// Conventions match common array libraries: the standard deviation is the
/// population standard deviation (divide by n, not n-1) and quantiles use
/// linear interpolation between the two nearest order statistics.
///
/// # Examples
///
/// ```rust
/// use sampler_stats::SampleSummary;
///
/// let summary = SampleSummary::from_samples(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(summary.count, 4);
/// assert_eq!(summary.mean, 2.5);
/// assert_eq!(summary.median, 2.5);
/// assert_eq!(summary.q25, 1.75);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Number of samples in the batch.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    /// Smallest observed value.
    pub min: f64,
    /// Largest observed value.
    pub max: f64,
    /// 50th percentile.
    pub median: f64,
    /// 25th percentile.
    pub q25: f64,
    /// 75th percentile.
    pub q75: f64,
}

impl SampleSummary {
    /// Computes descriptive statistics for a batch of samples.
    ///
    /// Returns `None` on an empty batch; every statistic is well defined for
    /// a single sample (std is then 0).
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            count,
            mean,
            std: variance.sqrt(),
            min: sorted[0],
            max: sorted[count - 1],
            median: quantile_sorted(&sorted, 0.5),
            q25: quantile_sorted(&sorted, 0.25),
            q75: quantile_sorted(&sorted, 0.75),
        })
    }
}

/// Quantile of pre-sorted data with linear interpolation.
///
/// For quantile q over n points the fractional rank is q * (n - 1); the
/// result interpolates between the order statistics bracketing that rank.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&q));

    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
    }
}
