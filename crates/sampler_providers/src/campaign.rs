//! Sampling campaigns: many ranges, many runs, one source.
//!
//! A campaign asks a [`SampleSource`] for `samples_per_range` numbers in
//! each range, repeated over `runs` independent runs, and records both the
//! raw samples and per-batch descriptive statistics. The downstream
//! analysis compares runs against each other (consistency) and pools them
//! per range (bias, coverage, uniformity).

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use sampler_stats::SampleSummary;

use crate::error::ProviderError;
use crate::prompt::PromptStyle;

/// One closed sampling range [min, max].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl RangeSpec {
    /// Creates a range, rejecting degenerate or inverted bounds.
    pub fn new(min: f64, max: f64) -> Result<Self, ProviderError> {
        if !(max > min) {
            return Err(ProviderError::InvalidParameter {
                name: "range",
                reason: format!("[{}, {}] is not a valid range", min, max),
            });
        }
        Ok(Self { min, max })
    }

    /// Stable key used to index this range in results maps.
    pub fn key(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }

    /// Width of the range.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the range, the theoretical uniform mean.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

impl std::fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Parameters of a sampling campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignPlan {
    /// Ranges to sample.
    pub ranges: Vec<RangeSpec>,
    /// Samples requested per range per run.
    pub samples_per_range: usize,
    /// Number of independent runs.
    pub runs: usize,
    /// Prompt phrasing used for every request.
    pub prompt_style: PromptStyle,
}

impl CampaignPlan {
    /// Creates a plan, validating the campaign shape.
    pub fn new(
        ranges: Vec<RangeSpec>,
        samples_per_range: usize,
        runs: usize,
        prompt_style: PromptStyle,
    ) -> Result<Self, ProviderError> {
        if ranges.is_empty() {
            return Err(ProviderError::InvalidParameter {
                name: "ranges",
                reason: "at least one range is required".to_string(),
            });
        }
        if samples_per_range == 0 {
            return Err(ProviderError::InvalidParameter {
                name: "samples_per_range",
                reason: "must be at least 1".to_string(),
            });
        }
        if runs == 0 {
            return Err(ProviderError::InvalidParameter {
                name: "runs",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self {
            ranges,
            samples_per_range,
            runs,
            prompt_style,
        })
    }

    /// Total number of samples the campaign will request.
    pub fn total_calls(&self) -> usize {
        self.ranges.len() * self.samples_per_range * self.runs
    }
}

/// Raw output of a campaign.
///
/// `data` maps run key ("run_1", ...) to range key to samples;
/// `statistics` carries a [`SampleSummary`] per non-empty batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialResults {
    /// The ranges the campaign sampled.
    pub ranges: Vec<RangeSpec>,
    /// Samples requested per range per run.
    pub samples_per_range: usize,
    /// Number of runs performed.
    pub runs: usize,
    /// Prompt phrasing used.
    pub prompt_style: PromptStyle,
    /// run key -> range key -> surviving samples.
    pub data: BTreeMap<String, BTreeMap<String, Vec<f64>>>,
    /// run key -> range key -> batch statistics.
    pub statistics: BTreeMap<String, BTreeMap<String, SampleSummary>>,
}

impl TrialResults {
    /// All samples for a range, pooled across runs in run-key order.
    pub fn pooled_samples(&self, range_key: &str) -> Vec<f64> {
        let mut pooled = Vec::new();
        for run_data in self.data.values() {
            if let Some(samples) = run_data.get(range_key) {
                pooled.extend_from_slice(samples);
            }
        }
        pooled
    }

    /// Total number of surviving samples across all runs and ranges.
    pub fn total_samples(&self) -> usize {
        self.data
            .values()
            .flat_map(|run| run.values())
            .map(|samples| samples.len())
            .sum()
    }
}

/// Anything that can produce one sample per request.
///
/// Implemented by the live [`crate::NumberGenerator`] and by the offline
/// [`crate::SimulatedSampler`]. `Ok(None)` marks a dropped sample (the
/// source answered but produced nothing usable).
#[allow(async_fn_in_trait)]
pub trait SampleSource {
    /// Draws one sample from [min, max].
    async fn sample(
        &mut self,
        min: f64,
        max: f64,
        style: PromptStyle,
    ) -> Result<Option<f64>, ProviderError>;

    /// Pause between consecutive draws; zero for offline sources.
    fn call_delay(&self) -> Duration {
        Duration::ZERO
    }
}

/// Runs a full consistency campaign against a source.
///
/// Sequential by design: provider rate limits are the binding constraint,
/// so one request is in flight at a time with the source's delay between
/// requests. Dropped samples shrink the batch rather than aborting the
/// campaign; the live client reports provider failures as dropped samples
/// once its retry budget is spent.
pub async fn run_consistency_test<S: SampleSource>(
    source: &mut S,
    plan: &CampaignPlan,
) -> Result<TrialResults, ProviderError> {
    let mut data = BTreeMap::new();
    let mut statistics = BTreeMap::new();

    for run in 0..plan.runs {
        let run_key = format!("run_{}", run + 1);
        info!(run = run + 1, total = plan.runs, "starting run");

        let mut run_data = BTreeMap::new();
        let mut run_stats = BTreeMap::new();

        for range in &plan.ranges {
            info!(range = %range, count = plan.samples_per_range, "sampling range");
            let samples = collect_batch(source, range, plan.samples_per_range, plan.prompt_style)
                .await?;

            if let Some(summary) = SampleSummary::from_samples(&samples) {
                run_stats.insert(range.key(), summary);
            }
            run_data.insert(range.key(), samples);
        }

        data.insert(run_key.clone(), run_data);
        statistics.insert(run_key, run_stats);
    }

    Ok(TrialResults {
        ranges: plan.ranges.clone(),
        samples_per_range: plan.samples_per_range,
        runs: plan.runs,
        prompt_style: plan.prompt_style,
        data,
        statistics,
    })
}

/// Collects one batch of samples for a range, skipping dropped samples.
async fn collect_batch<S: SampleSource>(
    source: &mut S,
    range: &RangeSpec,
    count: usize,
    style: PromptStyle,
) -> Result<Vec<f64>, ProviderError> {
    let mut samples = Vec::with_capacity(count);

    for i in 0..count {
        if let Some(number) = source.sample(range.min, range.max, style).await? {
            samples.push(number);
        }

        if i + 1 < count && !source.call_delay().is_zero() {
            tokio::time::sleep(source.call_delay()).await;
        }
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic source: walks the range in fixed steps, dropping every
    /// sample whose index is divisible by 10.
    struct StepSource {
        calls: usize,
    }

    impl SampleSource for StepSource {
        async fn sample(
            &mut self,
            min: f64,
            max: f64,
            _style: PromptStyle,
        ) -> Result<Option<f64>, ProviderError> {
            let i = self.calls;
            self.calls += 1;
            if i % 10 == 0 {
                return Ok(None);
            }
            let frac = (i % 100) as f64 / 100.0;
            Ok(Some(min + frac * (max - min)))
        }
    }

    fn plan() -> CampaignPlan {
        CampaignPlan::new(
            vec![
                RangeSpec::new(0.0, 1.0).unwrap(),
                RangeSpec::new(-1.0, 1.0).unwrap(),
            ],
            20,
            2,
            PromptStyle::Direct,
        )
        .unwrap()
    }

    #[test]
    fn test_range_spec_validation() {
        assert!(RangeSpec::new(0.0, 1.0).is_ok());
        assert!(RangeSpec::new(1.0, 1.0).is_err());
        assert!(RangeSpec::new(2.0, -2.0).is_err());
    }

    #[test]
    fn test_range_spec_key_and_midpoint() {
        let range = RangeSpec::new(-1.0, 1.0).unwrap();
        assert_eq!(range.key(), "-1-1");
        assert_eq!(range.midpoint(), 0.0);
        assert_eq!(range.width(), 2.0);
    }

    #[test]
    fn test_plan_validation() {
        assert!(CampaignPlan::new(vec![], 10, 1, PromptStyle::Direct).is_err());
        let ranges = vec![RangeSpec::new(0.0, 1.0).unwrap()];
        assert!(CampaignPlan::new(ranges.clone(), 0, 1, PromptStyle::Direct).is_err());
        assert!(CampaignPlan::new(ranges, 10, 0, PromptStyle::Direct).is_err());
    }

    #[test]
    fn test_plan_total_calls() {
        assert_eq!(plan().total_calls(), 2 * 20 * 2);
    }

    #[tokio::test]
    async fn test_campaign_shape() {
        let mut source = StepSource { calls: 0 };
        let results = run_consistency_test(&mut source, &plan()).await.unwrap();

        assert_eq!(results.runs, 2);
        assert_eq!(results.data.len(), 2);
        assert!(results.data.contains_key("run_1"));
        assert!(results.data.contains_key("run_2"));

        for run_data in results.data.values() {
            assert_eq!(run_data.len(), 2);
            for samples in run_data.values() {
                // Every 10th call dropped, so batches are smaller than asked.
                assert!(samples.len() >= 18 && samples.len() <= 20);
            }
        }
    }

    #[tokio::test]
    async fn test_campaign_statistics_attached() {
        let mut source = StepSource { calls: 0 };
        let results = run_consistency_test(&mut source, &plan()).await.unwrap();

        for (run_key, run_stats) in &results.statistics {
            for (range_key, summary) in run_stats {
                let samples = &results.data[run_key][range_key];
                assert_eq!(summary.count, samples.len());
            }
        }
    }

    #[tokio::test]
    async fn test_pooled_samples_concatenates_runs() {
        let mut source = StepSource { calls: 0 };
        let results = run_consistency_test(&mut source, &plan()).await.unwrap();

        let pooled = results.pooled_samples("0-1");
        let per_run: usize = results
            .data
            .values()
            .map(|run| run["0-1"].len())
            .sum();
        assert_eq!(pooled.len(), per_run);
        assert_eq!(results.total_samples(), pooled.len() + results.pooled_samples("-1-1").len());
    }

    #[tokio::test]
    async fn test_samples_stay_in_range() {
        let mut source = StepSource { calls: 0 };
        let results = run_consistency_test(&mut source, &plan()).await.unwrap();
        for range in &results.ranges {
            for sample in results.pooled_samples(&range.key()) {
                assert!(sample >= range.min && sample <= range.max);
            }
        }
    }
}
