//! Bias patterns across ranges.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::range::RangeAnalysis;

/// How the mean bias behaves across all tested ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasAnalysis {
    /// Mean of the per-range mean biases.
    pub mean_bias: f64,
    /// Population standard deviation of the per-range biases.
    pub bias_std: f64,
    /// Spread between the largest and smallest per-range bias.
    pub bias_range: f64,
    /// Per-range bias, keyed like the range analyses.
    pub bias_by_range: BTreeMap<String, f64>,
}

impl BiasAnalysis {
    /// Aggregates per-range analyses into cross-range bias patterns.
    pub fn from_ranges(range_analysis: &BTreeMap<String, RangeAnalysis>) -> Self {
        let bias_by_range: BTreeMap<String, f64> = range_analysis
            .iter()
            .map(|(key, analysis)| (key.clone(), analysis.mean_bias))
            .collect();

        let biases: Vec<f64> = bias_by_range.values().copied().collect();
        if biases.is_empty() {
            return Self {
                mean_bias: 0.0,
                bias_std: 0.0,
                bias_range: 0.0,
                bias_by_range,
            };
        }

        let n = biases.len() as f64;
        let mean_bias = biases.iter().sum::<f64>() / n;
        let bias_std =
            (biases.iter().map(|b| (b - mean_bias).powi(2)).sum::<f64>() / n).sqrt();
        let max = biases.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = biases.iter().cloned().fold(f64::INFINITY, f64::min);

        Self {
            mean_bias,
            bias_std,
            bias_range: max - min,
            bias_by_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeAnalysis;
    use approx::assert_relative_eq;
    use sampler_providers::RangeSpec;

    fn analysis_with_bias(range: RangeSpec, shift: f64) -> RangeAnalysis {
        let n = 100;
        let samples: Vec<f64> = (0..n)
            .map(|i| {
                let x = range.min + range.width() * i as f64 / (n - 1) as f64;
                // Shift towards the upper bound without leaving the range.
                (x + shift).clamp(range.min, range.max)
            })
            .collect();
        RangeAnalysis::from_pooled(&range, &samples).unwrap()
    }

    #[test]
    fn test_bias_aggregation() {
        let mut map = BTreeMap::new();
        let r1 = RangeSpec::new(0.0, 10.0).unwrap();
        let r2 = RangeSpec::new(0.0, 100.0).unwrap();
        map.insert(r1.key(), analysis_with_bias(r1, 1.0));
        map.insert(r2.key(), analysis_with_bias(r2, 0.0));

        let bias = BiasAnalysis::from_ranges(&map);
        assert_eq!(bias.bias_by_range.len(), 2);
        assert!(bias.bias_by_range[&r1.key()] > 0.5);
        assert_relative_eq!(bias.bias_by_range[&r2.key()], 0.0, epsilon = 1e-9);
        assert!(bias.bias_range > 0.5);
    }

    #[test]
    fn test_empty_map_is_all_zero() {
        let bias = BiasAnalysis::from_ranges(&BTreeMap::new());
        assert_eq!(bias.mean_bias, 0.0);
        assert_eq!(bias.bias_std, 0.0);
        assert!(bias.bias_by_range.is_empty());
    }
}
