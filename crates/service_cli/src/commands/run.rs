//! Run command implementation
//!
//! Runs a full sampling campaign against a live model and writes the
//! report and charts.

use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

use sampler_analysis::{analyze_distribution, summarize};
use sampler_providers::{
    run_consistency_test, CampaignPlan, GeneratorConfig, NumberGenerator, PromptStyle,
};
use sampler_report::{render_all, Report};

use crate::{CliConfig, Result};

use super::{default_ranges, print_summary};

/// Run the run command
pub async fn run(
    config: &CliConfig,
    model: Option<&str>,
    samples: Option<usize>,
    runs: Option<usize>,
    style: Option<PromptStyle>,
    output: Option<&str>,
) -> Result<()> {
    let model = model.unwrap_or(&config.model);
    let samples = samples.unwrap_or(config.samples_per_range);
    let runs = runs.unwrap_or(config.runs);
    let style = style.unwrap_or(config.prompt_style);

    let plan = CampaignPlan::new(default_ranges()?, samples, runs, style)?;

    info!("Starting campaign...");
    info!("  Model: {}", model);
    info!("  Ranges: {}", plan.ranges.len());
    info!("  Samples per range: {}", samples);
    info!("  Runs: {}", runs);
    info!("  Prompt style: {}", style);
    info!("  Total API calls: {}", plan.total_calls());

    let generator_config = GeneratorConfig::builder(model)
        .temperature(config.temperature)
        .max_tokens(config.max_tokens)
        .call_delay(Duration::from_millis(config.call_delay_ms))
        .max_retries(config.max_retries)
        .build()?;
    let mut generator = NumberGenerator::new(generator_config)?;

    let results = run_consistency_test(&mut generator, &plan).await?;
    info!("Campaign complete: {} samples collected", results.total_samples());

    let analysis = analyze_distribution(&results)?;
    let summary = summarize(&analysis);
    let report = Report::new(results, analysis, summary);

    let out_dir = PathBuf::from(output.unwrap_or(&config.output_dir));
    let report_path = out_dir.join(format!("analysis_{}.json", model));
    report.save(&report_path)?;

    let charts_dir = out_dir.join(format!("charts_{}", model));
    let charts = render_all(&report, &charts_dir)?;
    info!("Wrote {} chart panels to {}", charts.len(), charts_dir.display());

    print_summary(&report);
    println!("\nReport saved to: {}", report_path.display());
    println!("Charts saved to: {}", charts_dir.display());

    Ok(())
}
