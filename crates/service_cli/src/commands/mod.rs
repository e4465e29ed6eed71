//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod analyze;
pub mod check;
pub mod demo;
pub mod plot;
pub mod quick;
pub mod run;

use sampler_providers::RangeSpec;
use sampler_report::Report;

use crate::Result;

/// The standard set of ranges studied by full campaigns.
pub fn default_ranges() -> Result<Vec<RangeSpec>> {
    Ok(vec![
        RangeSpec::new(0.0, 1.0)?,    // Unit interval
        RangeSpec::new(1.0, 10.0)?,   // Small positive integers
        RangeSpec::new(1.0, 100.0)?,  // Larger positive integers
        RangeSpec::new(-1.0, 1.0)?,   // Symmetric around zero
        RangeSpec::new(0.0, 100.0)?,  // Large positive range
        RangeSpec::new(-100.0, 0.0)?, // Large negative range
        RangeSpec::new(-10.0, 10.0)?, // Symmetric larger range
    ])
}

/// Reduced range set for quick smoke campaigns.
pub fn quick_ranges() -> Result<Vec<RangeSpec>> {
    Ok(vec![
        RangeSpec::new(0.0, 1.0)?,
        RangeSpec::new(1.0, 10.0)?,
        RangeSpec::new(-1.0, 1.0)?,
    ])
}

/// Prints the per-range findings and the headline summary.
pub fn print_summary(report: &Report) {
    println!("\n┌────────────────┬─────────┬──────────┬──────────┬──────────┬──────────┐");
    println!("│ Range          │ Samples │ Bias     │ Coverage │ KS p     │ Chi² p   │");
    println!("├────────────────┼─────────┼──────────┼──────────┼──────────┼──────────┤");
    for (key, range) in &report.analysis.range_analysis {
        println!(
            "│ {:<14} │ {:>7} │ {:>8.3} │ {:>8.3} │ {:>8.4} │ {:>8.4} │",
            key,
            range.total_samples,
            range.mean_bias,
            range.range_coverage,
            range.uniformity_test.ks_p_value,
            range.uniformity_test.chi2_p_value,
        );
    }
    println!("└────────────────┴─────────┴──────────┴──────────┴──────────┴──────────┘");

    let summary = &report.summary;
    println!("\nSummary:");
    println!("  Ranges tested:         {}", summary.total_ranges_tested);
    println!("  Overall bias:          {:.4}", summary.overall_bias);
    if let Some(range) = &summary.most_biased_range {
        println!("  Most biased range:     {}", range);
    }
    if let Some(range) = &summary.least_consistent_range {
        println!("  Least consistent:      {}", range);
    }
    println!(
        "  Uniform (KS):          {}",
        summary.uniformity_findings.ks_test_uniform
    );
    println!(
        "  Uniform (Chi²):        {}",
        summary.uniformity_findings.chi2_test_uniform
    );
}
