//! build_result.rs: assemble the immutable `SimulationResult`.
//!
//! The only impure step of a run lives here: a fresh `ResultId` (time-based
//! with an OS-random suffix) and the timestamp taken from the run clock.

use chrono::{DateTime, Datelike, Utc};
use rand_core::OsRng;

use vs_core::{CostBreakdown, RegionImpact, ResultId, ScenarioParams, SimulationResult, YearProjection};

/// Everything the formula stages computed for one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedMetrics {
    pub financial_cost: u64,
    pub administrative_workload: u32,
    pub governance_impact: f64,
    pub cost_breakdown: CostBreakdown,
    pub state_wise_impact: Vec<RegionImpact>,
    pub yearly_projection: Vec<YearProjection>,
    pub insights: Vec<String>,
}

/// First projected year for a run started at `now`.
#[inline]
pub fn base_year(now: DateTime<Utc>) -> i32 {
    now.year()
}

/// Snapshot `params` into a new result with a fresh id.
pub fn assemble(params: &ScenarioParams, metrics: ComputedMetrics, now: DateTime<Utc>) -> SimulationResult {
    SimulationResult {
        id: ResultId::generate(now, &mut OsRng),
        scenario_name: params.name.clone(),
        params: params.clone(),
        financial_cost: metrics.financial_cost,
        administrative_workload: metrics.administrative_workload,
        governance_impact: metrics.governance_impact,
        cost_breakdown: metrics.cost_breakdown,
        state_wise_impact: metrics.state_wise_impact,
        yearly_projection: metrics.yearly_projection,
        insights: metrics.insights,
        timestamp: now,
    }
}
