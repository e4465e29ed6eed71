//! Analyze command implementation
//!
//! Re-runs the analysis over a saved report's raw results, so a report can
//! be refreshed after analysis changes without re-querying the provider.

use tracing::info;

use sampler_analysis::{analyze_distribution, summarize};
use sampler_report::Report;

use crate::{CliError, Result};

use super::print_summary;

/// Run the analyze command
pub fn run(report_path: &str, output: Option<&str>) -> Result<()> {
    if !std::path::Path::new(report_path).exists() {
        return Err(CliError::FileNotFound(report_path.to_string()));
    }

    info!("Re-analysing report {}", report_path);
    let report = Report::load(report_path)?;

    let analysis = analyze_distribution(&report.results)?;
    let summary = summarize(&analysis);
    let refreshed = Report::new(report.results, analysis, summary);

    let target = output.unwrap_or(report_path);
    refreshed.save(target)?;

    print_summary(&refreshed);
    println!("\nRefreshed report saved to: {}", target);

    Ok(())
}
