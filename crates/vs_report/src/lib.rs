//! vs_report: pure, offline views over finished simulation results.
//!
//! - No I/O here. Callers supply results already in memory and decide where
//!   the rendered text goes.
//! - Stable section order and field names in every output.
//! - Number formatting is locale-free: integers plain (or comma-grouped in
//!   summary sentences), floats in shortest round-trip form.

#![deny(unsafe_code)]

use thiserror::Error;

pub mod compare;
pub mod export_csv;
#[cfg(feature = "render_json")]
pub mod render_json;
pub mod stats;

pub use compare::{compare, group_thousands, ComparisonSummary, Leaders, NamedValue};
pub use export_csv::{export, export_file_name, EXPORT_TITLE};
#[cfg(feature = "render_json")]
pub use render_json::{render_comparison_json, render_result_json, render_stats_json};
pub use stats::{dashboard_stats, DashboardStats};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("json render failed: {0}")]
    Json(String),
}

#[cfg(feature = "render_json")]
impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError::Json(e.to_string())
    }
}
