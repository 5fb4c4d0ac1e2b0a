//! Per-region impact rows and their aggregates.
//!
//! Rounding happens per row; aggregates sum the already-rounded values and are
//! never corrected afterwards.

use vs_core::{ReferenceTable, RegionImpact};

use crate::factors::FactorSet;
use crate::rounding::round_u64;

/// Disruption days per region before model/disruption scaling.
pub const BASE_DISRUPTION_DAYS: f64 = 45.0;

/// One row per selected region, in selection order.
///
/// Baselines are resolved in order, so fallback draws consume the table's RNG
/// stream deterministically.
pub fn region_impacts(
    regions: &[&str],
    table: &mut ReferenceTable,
    factors: &FactorSet,
) -> Vec<RegionImpact> {
    let days = round_u64(BASE_DISRUPTION_DAYS * factors.model.disruption * factors.disruption) as u32;
    regions
        .iter()
        .map(|&region| {
            let base = f64::from(table.base_cost(region));
            RegionImpact {
                region: region.to_string(),
                cost: round_u64(base * factors.model.cost * factors.admin_scale),
                disruption_days: days,
            }
        })
        .collect()
}

pub fn total_cost(rows: &[RegionImpact]) -> u64 {
    rows.iter().map(|r| r.cost).sum()
}

/// Rounded mean of `disruption_days`; 0 when there are no rows.
pub fn mean_disruption_days(rows: &[RegionImpact]) -> u32 {
    if rows.is_empty() {
        return 0;
    }
    let sum: u64 = rows.iter().map(|r| u64::from(r.disruption_days)).sum();
    round_u64(sum as f64 / rows.len() as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::{admin_scale_factor, disruption_multiplier, model_factors};
    use vs_core::reference::select_regions;
    use vs_core::{AdministrativeScale, ElectionModel, GovernanceDisruption};

    fn factors(m: ElectionModel, s: AdministrativeScale, d: GovernanceDisruption) -> FactorSet {
        FactorSet {
            model: model_factors(m),
            admin_scale: admin_scale_factor(s),
            disruption: disruption_multiplier(d),
        }
    }

    #[test]
    fn current_medium_moderate_uses_raw_baselines() {
        let mut t = ReferenceTable::seeded(0);
        let f = factors(ElectionModel::Current, AdministrativeScale::Medium, GovernanceDisruption::Moderate);
        let rows = region_impacts(select_regions(10), &mut t, &f);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].cost, 850);
        assert_eq!(total_cost(&rows), 4720);
        assert!(rows.iter().all(|r| r.disruption_days == 45));
        assert_eq!(mean_disruption_days(&rows), 45);
    }

    #[test]
    fn full_high_rounds_each_row_half_up() {
        let mut t = ReferenceTable::seeded(0);
        let f = factors(ElectionModel::Full, AdministrativeScale::High, GovernanceDisruption::Significant);
        let rows = region_impacts(select_regions(2), &mut t, &f);
        // 850 * 0.55 * 1.3 = 607.75, 650 * 0.55 * 1.3 = 464.75
        assert_eq!(rows[0].cost, 608);
        assert_eq!(rows[1].cost, 465);
        // 45 * 0.35 * 1.4 = 22.05
        assert_eq!(rows[0].disruption_days, 22);
    }

    #[test]
    fn empty_selection_has_zero_aggregates() {
        assert_eq!(total_cost(&[]), 0);
        assert_eq!(mean_disruption_days(&[]), 0);
    }
}
