//! Headline numbers over a newest-first result list.

#[cfg(feature = "render_json")]
use serde::Serialize;

use vs_core::{ElectionModel, SimulationResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "render_json", derive(Serialize))]
#[cfg_attr(feature = "render_json", serde(rename_all = "camelCase"))]
pub struct DashboardStats {
    pub total_simulations: usize,
    /// Rounded mean of `financial_cost`; 0 when there are no results.
    pub average_cost: u64,
    /// Model of the newest result.
    pub latest_model: Option<ElectionModel>,
}

/// `results` must be newest first (as every `ResultStore::list` returns them).
pub fn dashboard_stats(results: &[SimulationResult]) -> DashboardStats {
    if results.is_empty() {
        return DashboardStats::default();
    }
    let sum: u128 = results.iter().map(|r| u128::from(r.financial_cost)).sum();
    let n = results.len() as u128;
    DashboardStats {
        total_simulations: results.len(),
        // half-up on exact integers
        average_cost: ((2 * sum + n) / (2 * n)) as u64,
        latest_model: results.first().map(|r| r.params.model),
    }
}
