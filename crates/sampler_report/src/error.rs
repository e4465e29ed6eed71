//! Error types for report persistence and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while saving, loading or rendering reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem failure with the path involved.
    #[error("IO error on {path}: {source}")]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The report JSON could not be serialised or parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Chart rendering failed.
    #[error("Chart error: {0}")]
    Chart(String),
}
