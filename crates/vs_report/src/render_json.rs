//! Pretty JSON of the typed structures (field order follows struct layout).

use vs_core::SimulationResult;

use crate::{ComparisonSummary, DashboardStats, ReportError};

pub fn render_result_json(result: &SimulationResult) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub fn render_comparison_json(summary: &ComparisonSummary) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

pub fn render_stats_json(stats: &DashboardStats) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(stats)?)
}
