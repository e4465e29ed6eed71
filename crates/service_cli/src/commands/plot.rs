//! Plot command implementation
//!
//! Renders the chart panels from a saved report.

use tracing::info;

use sampler_report::{render_all, Report};

use crate::{CliError, Result};

/// Run the plot command
pub fn run(report_path: &str, output_dir: &str) -> Result<()> {
    if !std::path::Path::new(report_path).exists() {
        return Err(CliError::FileNotFound(report_path.to_string()));
    }

    info!("Rendering charts from {}", report_path);
    let report = Report::load(report_path)?;

    let written = render_all(&report, output_dir)?;

    println!("Wrote {} chart panels:", written.len());
    for path in &written {
        println!("  {}", path.display());
    }

    Ok(())
}
