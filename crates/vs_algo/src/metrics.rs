//! Aggregate metrics: workload, governance impact, cost breakdown.

use vs_core::{CostBreakdown, ElectionModel};

use crate::factors::base_workload;
use crate::rounding::round_u64;

pub const WORKLOAD_CAP: u32 = 100;

/// Cost shares; they sum to 1.0.
pub const PERSONNEL_SHARE: f64 = 0.35;
pub const LOGISTICS_SHARE: f64 = 0.28;
pub const SECURITY_SHARE: f64 = 0.22;
pub const TECHNOLOGY_SHARE: f64 = 0.15;

/// Years in the reference cycle used to annualize disruption.
pub const CYCLE_YEARS: f64 = 5.0;

/// `min(100, round(base(model) * admin_scale))`. No lower clamp.
pub fn administrative_workload(model: ElectionModel, admin_scale: f64) -> u32 {
    (round_u64(base_workload(model) * admin_scale) as u32).min(WORKLOAD_CAP)
}

/// Annualized disruption days: `mean_days * (5 / election_frequency)`.
///
/// `election_frequency` must be ≥ 1; the pipeline validates before calling.
pub fn governance_impact(mean_days: u32, election_frequency: u32) -> f64 {
    debug_assert!(election_frequency >= 1);
    f64::from(mean_days) * (CYCLE_YEARS / f64::from(election_frequency))
}

/// Fixed-share split, each part rounded on its own. The parts may differ from
/// `total` by up to one unit each.
pub fn cost_breakdown(total: u64) -> CostBreakdown {
    let t = total as f64;
    CostBreakdown {
        personnel: round_u64(t * PERSONNEL_SHARE),
        logistics: round_u64(t * LOGISTICS_SHARE),
        security: round_u64(t * SECURITY_SHARE),
        technology: round_u64(t * TECHNOLOGY_SHARE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn workload_is_capped_at_100() {
        // 85 * 1.3 = 110.5
        assert_eq!(administrative_workload(ElectionModel::Current, 1.3), 100);
        assert_eq!(administrative_workload(ElectionModel::Current, 1.0), 85);
        assert_eq!(administrative_workload(ElectionModel::Partial, 1.3), 85);
        assert_eq!(administrative_workload(ElectionModel::Full, 0.8), 36);
    }

    #[test]
    fn impact_scales_with_frequency() {
        assert_eq!(governance_impact(45, 5), 45.0);
        assert_eq!(governance_impact(45, 1), 225.0);
        assert_eq!(governance_impact(0, 3), 0.0);
        assert!((governance_impact(27, 3) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_of_known_total() {
        let b = cost_breakdown(4720);
        assert_eq!(b.personnel, 1652);
        assert_eq!(b.logistics, 1322); // 1321.6
        assert_eq!(b.security, 1038); // 1038.4
        assert_eq!(b.technology, 708);
        assert_eq!(b.total(), 4720);
    }

    proptest! {
        #[test]
        fn breakdown_within_rounding_tolerance(total in 0u64..10_000_000) {
            let sum = cost_breakdown(total).total() as i64;
            prop_assert!((sum - total as i64).abs() <= 4);
        }
    }
}
