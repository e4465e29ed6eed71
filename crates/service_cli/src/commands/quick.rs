//! Quick command implementation
//!
//! Reduced campaign (3 ranges, 20 samples, 2 runs) for a fast smoke check
//! of the full pipeline against a live model.

use std::time::Duration;

use tracing::info;

use sampler_analysis::{analyze_distribution, summarize};
use sampler_providers::{run_consistency_test, CampaignPlan, GeneratorConfig, NumberGenerator};
use sampler_report::Report;

use crate::{CliConfig, Result};

use super::{print_summary, quick_ranges};

/// Samples per range in quick mode.
const QUICK_SAMPLES: usize = 20;

/// Runs in quick mode.
const QUICK_RUNS: usize = 2;

/// Run the quick command
pub async fn run(config: &CliConfig, model: Option<&str>) -> Result<()> {
    let model = model.unwrap_or(&config.model);
    let plan = CampaignPlan::new(quick_ranges()?, QUICK_SAMPLES, QUICK_RUNS, config.prompt_style)?;

    info!("Quick test mode");
    info!("  Model: {}", model);
    info!("  Total API calls: {}", plan.total_calls());

    let generator_config = GeneratorConfig::builder(model)
        .temperature(config.temperature)
        .max_tokens(config.max_tokens)
        .call_delay(Duration::from_millis(config.call_delay_ms))
        .max_retries(config.max_retries)
        .build()?;
    let mut generator = NumberGenerator::new(generator_config)?;

    let results = run_consistency_test(&mut generator, &plan).await?;
    let analysis = analyze_distribution(&results)?;
    let summary = summarize(&analysis);
    let report = Report::new(results, analysis, summary);

    report.save("quick_test_results.json")?;

    print_summary(&report);
    println!("\nResults saved to: quick_test_results.json");
    println!("Run 'randlens plot --report quick_test_results.json' to render charts");

    Ok(())
}
