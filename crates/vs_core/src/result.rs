//! Output record produced once per engine run.

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::ResultId;
use crate::variables::ScenarioParams;

/// Fixed-proportion split of `financial_cost` (each part rounded independently).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CostBreakdown {
    pub personnel: u64,
    pub logistics: u64,
    pub security: u64,
    pub technology: u64,
}

impl CostBreakdown {
    pub fn total(&self) -> u64 {
        self.personnel + self.logistics + self.security + self.technology
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RegionImpact {
    pub region: String,
    pub cost: u64,
    pub disruption_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct YearProjection {
    pub year: i32,
    pub cost: u64,
    /// Zero in non-election years.
    pub election_event_count: u32,
}

/// Structured impact estimate for one scenario.
///
/// Costs are in crores. `governance_impact` is annualized disruption days and
/// is not integer-bounded (`round(mean days) * 5 / frequency`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SimulationResult {
    pub id: ResultId,
    pub scenario_name: String,
    pub params: ScenarioParams,
    pub financial_cost: u64,
    pub administrative_workload: u32,
    pub governance_impact: f64,
    pub cost_breakdown: CostBreakdown,
    pub state_wise_impact: Vec<RegionImpact>,
    pub yearly_projection: Vec<YearProjection>,
    pub insights: Vec<String>,
    pub timestamp: DateTime<Utc>,
}
