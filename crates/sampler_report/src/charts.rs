//! SVG chart rendering for campaign reports.
//!
//! One SVG per panel, written into a target directory. Bar charts share a
//! plain numeric x-axis with one slot per range and a label formatter that
//! prints the range key under each slot.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::info;

use crate::error::ReportError;
use crate::report::Report;

/// Canvas size for every panel.
const CHART_SIZE: (u32, u32) = (900, 540);

/// Histogram bin count for the per-range distribution panels.
const HISTOGRAM_BINS: usize = 20;

fn chart_err(err: impl std::fmt::Display) -> ReportError {
    ReportError::Chart(err.to_string())
}

/// Renders every panel for a report into `dir`.
///
/// Writes `bias.svg`, `consistency.svg`, `uniformity.svg`, `coverage.svg`
/// and one `distribution_<range>.svg` per analysed range. Returns the
/// written paths.
pub fn render_all(report: &Report, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ReportError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();

    let path = dir.join("bias.svg");
    render_bias(report, &path)?;
    written.push(path);

    let path = dir.join("consistency.svg");
    render_consistency(report, &path)?;
    written.push(path);

    let path = dir.join("uniformity.svg");
    render_uniformity(report, &path)?;
    written.push(path);

    let path = dir.join("coverage.svg");
    render_coverage(report, &path)?;
    written.push(path);

    for range in &report.results.ranges {
        let key = range.key();
        if !report.analysis.range_analysis.contains_key(&key) {
            continue;
        }
        let path = dir.join(format!("distribution_{}.svg", key));
        render_distribution(report, &key, &path)?;
        written.push(path);
    }

    info!(dir = %dir.display(), panels = written.len(), "charts rendered");
    Ok(written)
}

/// Pooled sample histogram for one range, with the uniform reference level.
pub fn render_distribution(
    report: &Report,
    range_key: &str,
    path: &Path,
) -> Result<(), ReportError> {
    let range = report
        .results
        .ranges
        .iter()
        .find(|r| r.key() == range_key)
        .ok_or_else(|| ReportError::Chart(format!("unknown range key {}", range_key)))?;

    let samples = report.results.pooled_samples(range_key);
    let mut counts = vec![0u32; HISTOGRAM_BINS];
    for &x in &samples {
        let frac = (x - range.min) / range.width();
        let idx = ((frac * HISTOGRAM_BINS as f64) as usize).min(HISTOGRAM_BINS - 1);
        counts[idx] += 1;
    }

    let uniform_level = samples.len() as f64 / HISTOGRAM_BINS as f64;
    let y_max = counts
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(uniform_level.ceil() as u32) as f64
        * 1.1
        + 1.0;

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Sample distribution, range {}", range),
            ("sans-serif", 24),
        )
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(range.min..range.max, 0.0..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("generated number")
        .y_desc("frequency")
        .draw()
        .map_err(chart_err)?;

    let bin_width = range.width() / HISTOGRAM_BINS as f64;
    chart
        .draw_series(counts.iter().enumerate().map(|(i, &count)| {
            let x0 = range.min + i as f64 * bin_width;
            Rectangle::new(
                [(x0, 0.0), (x0 + bin_width, count as f64)],
                BLUE.mix(0.5).filled(),
            )
        }))
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            [(range.min, uniform_level), (range.max, uniform_level)],
            RED.stroke_width(2),
        ))
        .map_err(chart_err)?
        .label("uniform expectation")
        .legend(|(x, y)| PathElement::new([(x, y), (x + 16, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)
}

/// Mean bias per range; positive bars red, negative blue.
pub fn render_bias(report: &Report, path: &Path) -> Result<(), ReportError> {
    let keys: Vec<String> = report
        .analysis
        .bias_analysis
        .bias_by_range
        .keys()
        .cloned()
        .collect();
    let values: Vec<f64> = report
        .analysis
        .bias_analysis
        .bias_by_range
        .values()
        .copied()
        .collect();

    render_bars(
        path,
        "Mean bias by range",
        "bias",
        &keys,
        &values,
        Some(0.0),
        |v| if v >= 0.0 { RED.mix(0.7) } else { BLUE.mix(0.7) },
    )
}

/// CV of per-run means per range.
pub fn render_consistency(report: &Report, path: &Path) -> Result<(), ReportError> {
    let keys: Vec<String> = report.analysis.consistency_analysis.keys().cloned().collect();
    let values: Vec<f64> = report
        .analysis
        .consistency_analysis
        .values()
        .map(|c| c.cv_mean)
        .collect();

    render_bars(
        path,
        "Consistency across runs (CV of run means)",
        "coefficient of variation",
        &keys,
        &values,
        None,
        |_| GREEN.mix(0.7),
    )
}

/// Observed span over requested span per range, with the full-coverage line.
pub fn render_coverage(report: &Report, path: &Path) -> Result<(), ReportError> {
    let keys: Vec<String> = report.analysis.range_analysis.keys().cloned().collect();
    let values: Vec<f64> = report
        .analysis
        .range_analysis
        .values()
        .map(|r| r.range_coverage)
        .collect();

    render_bars(
        path,
        "Range coverage",
        "coverage ratio",
        &keys,
        &values,
        Some(1.0),
        |_| BLUE.mix(0.7),
    )
}

/// KS and Chi-square p-values per range, with the significance line.
pub fn render_uniformity(report: &Report, path: &Path) -> Result<(), ReportError> {
    let keys: Vec<String> = report.analysis.range_analysis.keys().cloned().collect();
    let n = keys.len();

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Uniformity test p-values", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(0.0..n.max(1) as f64, 0.0..1.05)
        .map_err(chart_err)?;

    let labels = keys.clone();
    chart
        .configure_mesh()
        .x_labels(n)
        .x_label_formatter(&move |x: &f64| {
            labels.get(*x as usize).cloned().unwrap_or_default()
        })
        .y_desc("p-value")
        .draw()
        .map_err(chart_err)?;

    let tests: Vec<_> = report.analysis.range_analysis.values().collect();

    chart
        .draw_series(tests.iter().enumerate().map(|(i, r)| {
            let x = i as f64;
            Rectangle::new(
                [(x + 0.10, 0.0), (x + 0.45, r.uniformity_test.ks_p_value)],
                BLUE.mix(0.7).filled(),
            )
        }))
        .map_err(chart_err)?
        .label("KS test")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], BLUE.mix(0.7).filled()));

    chart
        .draw_series(tests.iter().enumerate().map(|(i, r)| {
            let x = i as f64;
            Rectangle::new(
                [(x + 0.55, 0.0), (x + 0.90, r.uniformity_test.chi2_p_value)],
                GREEN.mix(0.7).filled(),
            )
        }))
        .map_err(chart_err)?
        .label("Chi-square test")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], GREEN.mix(0.7).filled()));

    chart
        .draw_series(LineSeries::new(
            [(0.0, sampler_stats::ALPHA), (n.max(1) as f64, sampler_stats::ALPHA)],
            RED.stroke_width(2),
        ))
        .map_err(chart_err)?
        .label("alpha = 0.05")
        .legend(|(x, y)| PathElement::new([(x, y), (x + 16, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)
}

/// Shared bar-chart renderer: one slot per range key on the x-axis, an
/// optional horizontal reference line, per-value bar colour.
fn render_bars(
    path: &Path,
    title: &str,
    y_desc: &str,
    keys: &[String],
    values: &[f64],
    reference: Option<f64>,
    colour: impl Fn(f64) -> RGBAColor,
) -> Result<(), ReportError> {
    let n = keys.len();

    let mut y_min = values.iter().copied().fold(0.0_f64, f64::min);
    let mut y_max = values.iter().copied().fold(0.0_f64, f64::max);
    if let Some(level) = reference {
        y_min = y_min.min(level);
        y_max = y_max.max(level);
    }
    let pad = ((y_max - y_min) * 0.1).max(1e-6);
    y_min -= pad;
    y_max += pad;

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(0.0..n.max(1) as f64, y_min..y_max)
        .map_err(chart_err)?;

    let labels = keys.to_vec();
    chart
        .configure_mesh()
        .x_labels(n)
        .x_label_formatter(&move |x: &f64| {
            labels.get(*x as usize).cloned().unwrap_or_default()
        })
        .y_desc(y_desc)
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(values.iter().enumerate().map(|(i, &v)| {
            let x = i as f64;
            Rectangle::new([(x + 0.15, 0.0), (x + 0.85, v)], colour(v).filled())
        }))
        .map_err(chart_err)?;

    if let Some(level) = reference {
        chart
            .draw_series(LineSeries::new(
                [(0.0, level), (n.max(1) as f64, level)],
                BLACK.stroke_width(1),
            ))
            .map_err(chart_err)?;
    }

    root.present().map_err(chart_err)
}
