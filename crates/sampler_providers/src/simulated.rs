//! Offline sampler imitating an LLM's number-picking habits.
//!
//! Runs the whole pipeline without API keys: a seeded PRNG draws samples
//! that are deliberately pulled toward the range midpoint and occasionally
//! snapped to "round" values, the two biases models actually show.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::campaign::SampleSource;
use crate::error::ProviderError;
use crate::prompt::PromptStyle;

/// Fraction of draws snapped to a round value inside the range.
const ROUND_NUMBER_RATE: f64 = 0.15;

/// Seeded, reproducible stand-in for a provider client.
///
/// `centre_pull` in [0, 1] controls how strongly draws cluster around the
/// midpoint: 0 is honestly uniform, 1 collapses onto the midpoint.
///
/// # Examples
///
/// ```rust
/// use sampler_providers::SimulatedSampler;
///
/// let mut a = SimulatedSampler::from_seed(42, 0.5);
/// let mut b = SimulatedSampler::from_seed(42, 0.5);
/// assert_eq!(a.draw(0.0, 1.0), b.draw(0.0, 1.0));
/// ```
pub struct SimulatedSampler {
    rng: StdRng,
    seed: u64,
    centre_pull: f64,
}

impl SimulatedSampler {
    /// Creates a sampler with the given seed and midpoint pull.
    pub fn from_seed(seed: u64, centre_pull: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            centre_pull: centre_pull.clamp(0.0, 1.0),
        }
    }

    /// The seed used for initialisation.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws one biased sample from [min, max].
    pub fn draw(&mut self, min: f64, max: f64) -> f64 {
        let width = max - min;
        let midpoint = (min + max) / 2.0;

        if self.rng.gen::<f64>() < ROUND_NUMBER_RATE {
            // Models love 7, 37 and friends: snap to an integer-ish value
            // in the middle half of the range.
            let lo = min + 0.25 * width;
            let hi = min + 0.75 * width;
            let raw = self.rng.gen_range(lo..hi);
            let snapped = if width >= 4.0 { raw.round() } else { raw };
            return snapped.clamp(min, max);
        }

        // Average a uniform draw with the midpoint to shrink the spread.
        let uniform = self.rng.gen_range(min..max);
        uniform + self.centre_pull * (midpoint - uniform)
    }
}

impl SampleSource for SimulatedSampler {
    async fn sample(
        &mut self,
        min: f64,
        max: f64,
        _style: PromptStyle,
    ) -> Result<Option<f64>, ProviderError> {
        Ok(Some(self.draw(min, max)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducible_for_same_seed() {
        let mut a = SimulatedSampler::from_seed(7, 0.4);
        let mut b = SimulatedSampler::from_seed(7, 0.4);
        for _ in 0..50 {
            assert_eq!(a.draw(-10.0, 10.0), b.draw(-10.0, 10.0));
        }
    }

    #[test]
    fn test_draws_stay_in_range() {
        let mut sampler = SimulatedSampler::from_seed(1, 0.6);
        for &(min, max) in &[(0.0, 1.0), (-100.0, 0.0), (1.0, 100.0)] {
            for _ in 0..500 {
                let x = sampler.draw(min, max);
                assert!(x >= min && x <= max, "{} outside [{}, {}]", x, min, max);
            }
        }
    }

    #[test]
    fn test_centre_pull_shrinks_spread() {
        let spread = |pull: f64| {
            let mut sampler = SimulatedSampler::from_seed(99, pull);
            let draws: Vec<f64> = (0..2000).map(|_| sampler.draw(0.0, 1.0)).collect();
            let mean = draws.iter().sum::<f64>() / draws.len() as f64;
            (draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / draws.len() as f64).sqrt()
        };

        assert!(spread(0.8) < spread(0.2));
    }

    #[test]
    fn test_full_pull_collapses_to_midpoint() {
        let mut sampler = SimulatedSampler::from_seed(3, 1.0);
        // Outside the round-number branch every draw is exactly the midpoint.
        let draws: Vec<f64> = (0..200).map(|_| sampler.draw(0.0, 2.0)).collect();
        let at_midpoint = draws.iter().filter(|&&x| (x - 1.0).abs() < 1e-12).count();
        assert!(at_midpoint > 150);
    }
}
