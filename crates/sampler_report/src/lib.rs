//! # sampler_report: Report Persistence and Charts
//!
//! Output layer of the workspace. A [`Report`] bundles the raw campaign
//! results with their analysis and summary, persists as pretty-printed
//! JSON, and renders a fixed set of SVG charts:
//!
//! - per-range sample histograms with the uniform reference level
//! - mean bias per range
//! - cross-run consistency (CV of run means) per range
//! - uniformity p-values per range with the significance line
//! - range coverage per range with the full-coverage line

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod charts;
pub mod error;
pub mod report;

pub use charts::render_all;
pub use error::ReportError;
pub use report::Report;
