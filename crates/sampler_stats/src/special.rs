//! Special functions behind the goodness-of-fit p-values.
//!
//! This module provides:
//! - `ln_gamma`: natural log of the gamma function (Lanczos approximation)
//! - `gamma_p` / `gamma_q`: regularised lower/upper incomplete gamma
//! - `kolmogorov_q`: survival function of the Kolmogorov distribution
//!
//! The incomplete gamma pair gives the Chi-square survival function
//! Q(χ² | k) = Q(k/2, χ²/2); the Kolmogorov survival function gives the
//! asymptotic one-sample KS p-value.

/// Relative accuracy target for the incomplete gamma iterations.
const EPS: f64 = 1e-12;

/// Iteration cap for series and continued-fraction evaluation.
const ITMAX: usize = 200;

/// A number near the smallest representable positive f64, used to keep the
/// Lentz continued-fraction recurrence away from zero denominators.
const FPMIN: f64 = 1e-300;

/// Natural logarithm of the gamma function, ln Γ(x), for x > 0.
///
/// Uses the Lanczos approximation with g = 5 and six coefficients, accurate
/// to better than 2e-10 over the full positive axis.
///
/// # Examples
/// ```
/// use sampler_stats::special::ln_gamma;
///
/// // Γ(5) = 4! = 24
/// assert!((ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-10);
///
/// // Γ(1/2) = sqrt(π)
/// let half = ln_gamma(0.5);
/// assert!((half - std::f64::consts::PI.sqrt().ln()).abs() < 1e-10);
/// ```
#[inline]
pub fn ln_gamma(x: f64) -> f64 {
    debug_assert!(x > 0.0, "ln_gamma requires x > 0");

    const COF: [f64; 6] = [
        76.180_091_729_471_46,
        -86.505_320_329_416_77,
        24.014_098_240_830_91,
        -1.231_739_572_450_155,
        0.120_865_097_386_617_9e-2,
        -0.539_523_938_495_3e-5,
    ];

    let mut y = x;
    let tmp = x + 5.5;
    let tmp = tmp - (x + 0.5) * tmp.ln();

    let mut ser = 1.000_000_000_190_015;
    for c in COF {
        y += 1.0;
        ser += c / y;
    }

    -tmp + (2.506_628_274_631_000_5 * ser / x).ln()
}

/// Regularised lower incomplete gamma function P(a, x).
///
/// P(a, x) = γ(a, x) / Γ(a), with P(a, 0) = 0 and P(a, ∞) = 1.
///
/// Evaluated by its series representation for x < a + 1 and via the
/// continued fraction of the complement otherwise, so that each branch is
/// used only where it converges quickly.
#[inline]
pub fn gamma_p(a: f64, x: f64) -> f64 {
    debug_assert!(a > 0.0 && x >= 0.0, "gamma_p requires a > 0, x >= 0");

    if x == 0.0 {
        0.0
    } else if x < a + 1.0 {
        gamma_series(a, x)
    } else {
        1.0 - gamma_cont_frac(a, x)
    }
}

/// Regularised upper incomplete gamma function Q(a, x) = 1 - P(a, x).
///
/// This is the survival function used for Chi-square p-values:
/// p = Q(k/2, χ²/2) for a statistic χ² with k degrees of freedom.
///
/// # Examples
/// ```
/// use sampler_stats::special::gamma_q;
///
/// // Q(a, 0) = 1 for any a
/// assert!((gamma_q(4.5, 0.0) - 1.0).abs() < 1e-12);
///
/// // Chi-square with 2 dof has survival exp(-x/2); here Q(1, x)
/// assert!((gamma_q(1.0, 3.0) - (-3.0_f64).exp()).abs() < 1e-10);
/// ```
#[inline]
pub fn gamma_q(a: f64, x: f64) -> f64 {
    debug_assert!(a > 0.0 && x >= 0.0, "gamma_q requires a > 0, x >= 0");

    if x == 0.0 {
        1.0
    } else if x < a + 1.0 {
        1.0 - gamma_series(a, x)
    } else {
        gamma_cont_frac(a, x)
    }
}

/// Series representation of P(a, x), convergent for x < a + 1.
fn gamma_series(a: f64, x: f64) -> f64 {
    let mut ap = a;
    let mut sum = 1.0 / a;
    let mut del = sum;

    for _ in 0..ITMAX {
        ap += 1.0;
        del *= x / ap;
        sum += del;
        if del.abs() < sum.abs() * EPS {
            break;
        }
    }

    (sum * (-x + a * x.ln() - ln_gamma(a)).exp()).clamp(0.0, 1.0)
}

/// Continued-fraction representation of Q(a, x), convergent for x >= a + 1.
///
/// Modified Lentz evaluation of the Legendre continued fraction.
fn gamma_cont_frac(a: f64, x: f64) -> f64 {
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / FPMIN;
    let mut d = 1.0 / b;
    let mut h = d;

    for i in 1..=ITMAX {
        let an = -(i as f64) * (i as f64 - a);
        b += 2.0;
        d = an * d + b;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = b + an / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }
        d = 1.0 / d;
        let del = d * c;
        h *= del;
        if (del - 1.0).abs() < EPS {
            break;
        }
    }

    ((-x + a * x.ln() - ln_gamma(a)).exp() * h).clamp(0.0, 1.0)
}

/// Survival function Q_KS(λ) of the Kolmogorov distribution.
///
/// Q_KS(λ) = 2 Σ_{j≥1} (-1)^{j-1} exp(-2 j² λ²), with Q_KS(0) = 1 and
/// Q_KS(∞) = 0. The alternating series converges after a handful of terms
/// for any λ of practical size; if it fails to settle the conservative
/// value 1.0 is returned.
///
/// # Examples
/// ```
/// use sampler_stats::special::kolmogorov_q;
///
/// assert!((kolmogorov_q(0.0) - 1.0).abs() < 1e-12);
/// assert!(kolmogorov_q(2.0) < 0.001);
/// // Monotonically decreasing
/// assert!(kolmogorov_q(0.5) > kolmogorov_q(1.0));
/// ```
#[inline]
pub fn kolmogorov_q(lambda: f64) -> f64 {
    debug_assert!(lambda >= 0.0, "kolmogorov_q requires lambda >= 0");

    // Below this point the series needs many terms but the value is 1 to
    // double precision anyway.
    if lambda < 1e-6 {
        return 1.0;
    }

    let a2 = -2.0 * lambda * lambda;
    let mut fac = 2.0;
    let mut sum = 0.0;
    let mut term_prev = 0.0_f64;

    for j in 1..=100 {
        let term = fac * (a2 * (j * j) as f64).exp();
        sum += term;
        if term.abs() <= 1e-3 * term_prev || term.abs() <= 1e-8 * sum.abs() {
            return sum.clamp(0.0, 1.0);
        }
        fac = -fac;
        term_prev = term.abs();
    }

    // Series did not converge; λ is so small the statistic tells us nothing.
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ln_gamma_integers() {
        // Γ(n) = (n-1)!
        let factorials: [f64; 7] = [1.0, 1.0, 2.0, 6.0, 24.0, 120.0, 720.0];
        for (n, fact) in factorials.iter().enumerate() {
            let x = (n + 1) as f64;
            assert_relative_eq!(ln_gamma(x), fact.ln(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_gamma_p_q_complement() {
        for &a in &[0.5, 1.0, 2.5, 9.0, 45.0] {
            for &x in &[0.1, 1.0, 3.0, 10.0, 60.0] {
                let p = gamma_p(a, x);
                let q = gamma_q(a, x);
                assert_relative_eq!(p + q, 1.0, epsilon = 1e-9);
                assert!((0.0..=1.0).contains(&p));
            }
        }
    }

    #[test]
    fn test_chi_square_survival_two_dof() {
        // With 2 dof the Chi-square survival function is exp(-x/2).
        for &x in &[0.5, 1.0, 2.0, 5.0, 10.0] {
            let p = gamma_q(1.0, x / 2.0);
            assert_relative_eq!(p, (-x / 2.0).exp(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_gamma_p_median_crossing() {
        // P(a, a) is close to 1/2 for moderate a (median near the mean).
        let p = gamma_p(10.0, 10.0);
        assert!(p > 0.4 && p < 0.6, "P(10, 10) = {}", p);
    }

    #[test]
    fn test_kolmogorov_q_reference_values() {
        // Classical table values of the Kolmogorov distribution.
        assert_relative_eq!(kolmogorov_q(1.0), 0.27, epsilon = 0.005);
        assert_relative_eq!(kolmogorov_q(1.36), 0.049, epsilon = 0.005);
        assert!(kolmogorov_q(0.3) > 0.999);
    }

    #[test]
    fn test_kolmogorov_q_bounds_and_monotonic() {
        let mut prev = kolmogorov_q(0.05);
        let mut lambda = 0.1;
        while lambda < 3.0 {
            let q = kolmogorov_q(lambda);
            assert!((0.0..=1.0).contains(&q));
            assert!(q <= prev + 1e-12);
            prev = q;
            lambda += 0.05;
        }
    }
}
