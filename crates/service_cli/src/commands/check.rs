//! Check command implementation
//!
//! Verifies the environment without spending API calls: which provider
//! keys are present, whether the configuration parses, and that the
//! statistics kernel produces sane verdicts on a known sample.

use tracing::info;

use sampler_providers::Provider;
use sampler_stats::{uniformity_test, SampleSummary};

use crate::{CliConfig, Result};

/// Run the check command
pub fn run(config: &CliConfig, config_path: &str) -> Result<()> {
    info!("Checking environment...");

    println!("Configuration ({})", config_path);
    println!("  model:             {}", config.model);
    println!("  prompt style:      {}", config.prompt_style);
    println!("  samples per range: {}", config.samples_per_range);
    println!("  runs:              {}", config.runs);
    println!("  output dir:        {}", config.output_dir);

    println!("\nProvider credentials");
    for provider in [Provider::OpenAi, Provider::Anthropic] {
        let status = if provider.has_api_key() {
            "present"
        } else {
            "MISSING"
        };
        println!("  {:<22} {}", provider.api_key_env(), status);
    }

    println!("\nStatistics kernel self-test");
    let grid: Vec<f64> = (0..200).map(|i| i as f64 / 199.0).collect();
    let test = uniformity_test(&grid, 0.0, 1.0)?;

    let summary_ok = SampleSummary::from_samples(&grid)
        .map(|s| (s.mean - 0.5).abs() < 1e-9)
        .unwrap_or(false);
    let uniform_ok = test.is_uniform_ks && test.is_uniform_chi2;
    println!(
        "  descriptive stats:     {}",
        if summary_ok { "ok" } else { "FAILED" }
    );
    println!(
        "  uniformity tests:      {}",
        if uniform_ok { "ok" } else { "FAILED" }
    );

    if summary_ok && uniform_ok {
        println!("\nAll checks passed");
    } else {
        println!("\nSome checks FAILED");
    }

    Ok(())
}
