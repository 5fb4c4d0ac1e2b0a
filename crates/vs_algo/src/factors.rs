//! Multiplier tables keyed by model, administrative scale and disruption level.

use vs_core::{AdministrativeScale, ElectionModel, GovernanceDisruption, ScenarioParams};

/// Per-model multiplier triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelFactors {
    pub cost: f64,
    pub workload: f64,
    pub disruption: f64,
}

pub fn model_factors(model: ElectionModel) -> ModelFactors {
    match model {
        ElectionModel::Current => ModelFactors { cost: 1.0, workload: 1.0, disruption: 1.0 },
        ElectionModel::Partial => ModelFactors { cost: 0.75, workload: 0.8, disruption: 0.6 },
        ElectionModel::Full => ModelFactors { cost: 0.55, workload: 0.5, disruption: 0.35 },
    }
}

pub fn admin_scale_factor(scale: AdministrativeScale) -> f64 {
    match scale {
        AdministrativeScale::Low => 0.8,
        AdministrativeScale::Medium => 1.0,
        AdministrativeScale::High => 1.3,
    }
}

pub fn disruption_multiplier(level: GovernanceDisruption) -> f64 {
    match level {
        GovernanceDisruption::Minimal => 0.7,
        GovernanceDisruption::Moderate => 1.0,
        GovernanceDisruption::Significant => 1.4,
    }
}

/// Baseline administrative workload (percent) before scaling.
pub fn base_workload(model: ElectionModel) -> f64 {
    match model {
        ElectionModel::Current => 85.0,
        ElectionModel::Partial => 65.0,
        ElectionModel::Full => 45.0,
    }
}

/// Election events held in an election year.
pub fn events_per_election_year(model: ElectionModel) -> u32 {
    match model {
        ElectionModel::Full => 1,
        ElectionModel::Partial => 2,
        ElectionModel::Current => 3,
    }
}

/// All factors resolved for one scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorSet {
    pub model: ModelFactors,
    pub admin_scale: f64,
    pub disruption: f64,
}

impl FactorSet {
    pub fn resolve(params: &ScenarioParams) -> Self {
        Self {
            model: model_factors(params.model),
            admin_scale: admin_scale_factor(params.administrative_scale),
            disruption: disruption_multiplier(params.governance_disruption),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synchronization_lowers_every_factor() {
        let cur = model_factors(ElectionModel::Current);
        let part = model_factors(ElectionModel::Partial);
        let full = model_factors(ElectionModel::Full);
        assert!(full.cost < part.cost && part.cost < cur.cost);
        assert!(full.workload < part.workload && part.workload < cur.workload);
        assert!(full.disruption < part.disruption && part.disruption < cur.disruption);
        assert!(base_workload(ElectionModel::Full) < base_workload(ElectionModel::Current));
    }

    #[test]
    fn event_counts() {
        assert_eq!(events_per_election_year(ElectionModel::Full), 1);
        assert_eq!(events_per_election_year(ElectionModel::Partial), 2);
        assert_eq!(events_per_election_year(ElectionModel::Current), 3);
    }
}
