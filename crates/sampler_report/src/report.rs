//! The persisted report document.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use sampler_analysis::{AnalysisSummary, DistributionAnalysis};
use sampler_providers::TrialResults;

use crate::error::ReportError;

/// Everything one campaign produced: raw results, analysis, summary.
///
/// Serialised as a single pretty-printed JSON document so a saved report
/// can be re-analysed or re-plotted later without touching the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Raw campaign results.
    pub results: TrialResults,
    /// Full distribution analysis.
    pub analysis: DistributionAnalysis,
    /// Headline summary.
    pub summary: AnalysisSummary,
}

impl Report {
    /// Bundles results with their analysis and summary.
    pub fn new(
        results: TrialResults,
        analysis: DistributionAnalysis,
        summary: AnalysisSummary,
    ) -> Self {
        Self {
            results,
            analysis,
            summary,
        }
    }

    /// Writes the report as pretty JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| ReportError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "report saved");
        Ok(())
    }

    /// Loads a report from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}
