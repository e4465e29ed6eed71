//! Goodness-of-fit tests against the uniform distribution.
//!
//! Samples drawn from a range [min, max] are normalised to [0, 1] and tested
//! two ways:
//! - one-sample Kolmogorov–Smirnov against U(0, 1), with the asymptotic
//!   Kolmogorov p-value and the Stephens small-sample correction;
//! - Chi-square over [`CHI_SQUARE_BINS`] equal-width bins with the p-value
//!   from the regularised upper incomplete gamma function.
//!
//! Both verdicts use the conventional significance level [`ALPHA`].

use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::special::{gamma_q, kolmogorov_q};

/// Significance level for the uniformity verdicts.
pub const ALPHA: f64 = 0.05;

/// Number of equal-width bins used by the Chi-square test.
pub const CHI_SQUARE_BINS: usize = 10;

/// Result of testing one batch of samples for uniformity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformityTest {
    /// Kolmogorov–Smirnov D statistic.
    pub ks_statistic: f64,
    /// Asymptotic KS p-value.
    pub ks_p_value: f64,
    /// Whether the KS test fails to reject uniformity at [`ALPHA`].
    pub is_uniform_ks: bool,
    /// Chi-square statistic over [`CHI_SQUARE_BINS`] bins.
    pub chi2_statistic: f64,
    /// Chi-square p-value with bins - 1 degrees of freedom.
    pub chi2_p_value: f64,
    /// Whether the Chi-square test fails to reject uniformity at [`ALPHA`].
    pub is_uniform_chi2: bool,
}

/// One-sample Kolmogorov–Smirnov test of normalised samples against U(0, 1).
///
/// Returns `(d, p)` where `d` is the supremum distance between the empirical
/// CDF and the identity, and `p` is the asymptotic p-value
/// Q_KS((√n + 0.12 + 0.11/√n) · d).
///
/// Inputs must already lie in [0, 1]; callers normalise via
/// [`uniformity_test`].
pub fn ks_uniform_test(normalised: &[f64]) -> Result<(f64, f64), StatsError> {
    if normalised.len() < 2 {
        return Err(StatsError::InsufficientSamples {
            needed: 2,
            got: normalised.len(),
        });
    }

    let n = normalised.len();
    let mut sorted = normalised.to_vec();
    sorted.sort_by(f64::total_cmp);

    // D = sup |F_n(x) - x|, checked on both sides of each step of F_n.
    let mut d = 0.0_f64;
    for (i, &x) in sorted.iter().enumerate() {
        let cdf = x.clamp(0.0, 1.0);
        let above = (i + 1) as f64 / n as f64 - cdf;
        let below = cdf - i as f64 / n as f64;
        d = d.max(above).max(below);
    }

    let en = (n as f64).sqrt();
    let p = kolmogorov_q((en + 0.12 + 0.11 / en) * d);
    Ok((d, p))
}

/// Chi-square test of normalised samples over equal-width bins on [0, 1].
///
/// Returns `(chi2, p)` with `p = Q((bins - 1)/2, chi2/2)`. The expected
/// count per bin is n / bins; values equal to 1.0 fall in the last bin.
pub fn chi_square_uniform_test(normalised: &[f64]) -> Result<(f64, f64), StatsError> {
    if normalised.len() < 2 {
        return Err(StatsError::InsufficientSamples {
            needed: 2,
            got: normalised.len(),
        });
    }

    let n = normalised.len();
    let mut observed = [0usize; CHI_SQUARE_BINS];
    for &x in normalised {
        let idx = ((x * CHI_SQUARE_BINS as f64) as usize).min(CHI_SQUARE_BINS - 1);
        observed[idx] += 1;
    }

    let expected = n as f64 / CHI_SQUARE_BINS as f64;
    let chi2: f64 = observed
        .iter()
        .map(|&obs| {
            let diff = obs as f64 - expected;
            diff * diff / expected
        })
        .sum();

    let dof = (CHI_SQUARE_BINS - 1) as f64;
    let p = gamma_q(dof / 2.0, chi2 / 2.0);
    Ok((chi2, p))
}

/// Tests raw samples from [min, max] for uniformity with both tests.
///
/// Samples are normalised to [0, 1] first. Every sample must lie inside the
/// range; out-of-range samples are a caller bug, not noise to be absorbed
/// here.
///
/// # Examples
///
/// ```rust
/// use sampler_stats::uniformity_test;
///
/// // An evenly spaced grid is as uniform as it gets.
/// let grid: Vec<f64> = (0..200).map(|i| 1.0 + 9.0 * i as f64 / 199.0).collect();
/// let test = uniformity_test(&grid, 1.0, 10.0).unwrap();
/// assert!(test.is_uniform_ks);
/// assert!(test.is_uniform_chi2);
/// ```
pub fn uniformity_test(samples: &[f64], min: f64, max: f64) -> Result<UniformityTest, StatsError> {
    if !(max > min) {
        return Err(StatsError::InvalidRange { min, max });
    }

    let width = max - min;
    let normalised = samples
        .iter()
        .map(|&x| {
            if x < min || x > max {
                Err(StatsError::SampleOutOfRange { value: x, min, max })
            } else {
                Ok((x - min) / width)
            }
        })
        .collect::<Result<Vec<f64>, _>>()?;

    let (ks_statistic, ks_p_value) = ks_uniform_test(&normalised)?;
    let (chi2_statistic, chi2_p_value) = chi_square_uniform_test(&normalised)?;

    Ok(UniformityTest {
        ks_statistic,
        ks_p_value,
        is_uniform_ks: ks_p_value > ALPHA,
        chi2_statistic,
        chi2_p_value,
        is_uniform_chi2: chi2_p_value > ALPHA,
    })
}
