//! Demo command implementation
//!
//! Runs the full pipeline offline against the simulated sampler, so the
//! analysis and charts can be exercised without API keys. The sampler is
//! deliberately biased, which makes the resulting report a worked example
//! of what the analysis finds on a real model.

use std::path::PathBuf;

use tracing::info;

use sampler_analysis::{analyze_distribution, summarize};
use sampler_providers::{run_consistency_test, CampaignPlan, SimulatedSampler};
use sampler_report::{render_all, Report};

use crate::{CliConfig, CliError, Result};

use super::{default_ranges, print_summary};

/// Samples per range in demo mode; offline, so cheap.
const DEMO_SAMPLES: usize = 100;

/// Runs in demo mode.
const DEMO_RUNS: usize = 3;

/// Run the demo command
pub async fn run(config: &CliConfig, seed: u64, pull: f64, output: Option<&str>) -> Result<()> {
    if !(0.0..=1.0).contains(&pull) {
        return Err(CliError::InvalidArgument(format!(
            "pull must be in [0, 1], got {}",
            pull
        )));
    }

    let plan = CampaignPlan::new(default_ranges()?, DEMO_SAMPLES, DEMO_RUNS, config.prompt_style)?;

    info!("Demo mode: simulated sampler, seed {}, pull {}", seed, pull);
    let mut sampler = SimulatedSampler::from_seed(seed, pull);

    let results = run_consistency_test(&mut sampler, &plan).await?;
    let analysis = analyze_distribution(&results)?;
    let summary = summarize(&analysis);
    let report = Report::new(results, analysis, summary);

    let out_dir = PathBuf::from(output.unwrap_or(&config.output_dir));
    let report_path = out_dir.join("demo_results.json");
    report.save(&report_path)?;

    let charts_dir = out_dir.join("demo_charts");
    render_all(&report, &charts_dir)?;

    print_summary(&report);
    println!("\nReport saved to: {}", report_path.display());
    println!("Charts saved to: {}", charts_dir.display());

    Ok(())
}
