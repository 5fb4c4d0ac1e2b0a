//! Narrative observations attached to a result.
//!
//! Order: the three model-specific lines, then the high-cost flag, then the
//! elevated-scale flag.

use vs_core::{AdministrativeScale, ElectionModel, ScenarioParams};

/// Total cost (crores) above which a scenario is flagged as high-cost.
pub const HIGH_COST_THRESHOLD: u64 = 10_000;

pub fn generate_insights(params: &ScenarioParams, total_cost: u64, mean_days: u32) -> Vec<String> {
    let mut out: Vec<String> = match params.model {
        ElectionModel::Current => vec![
            format!(
                "Current cycle maintains existing election schedules across {} states.",
                params.states_involved
            ),
            format!("Estimated annual MCC enforcement period: {mean_days} days per state on average."),
            "Higher frequency of elections may impact ongoing governance and development projects."
                .to_string(),
        ],
        ElectionModel::Partial => vec![
            "Partial synchronization could reduce administrative overhead by approximately 20-25%."
                .to_string(),
            "Clubbing elections in phases may optimize security force deployment.".to_string(),
            "Moderate reduction in governance disruption expected.".to_string(),
        ],
        ElectionModel::Full => vec![
            "Full synchronization projects significant cost savings of 40-45% over 5-year cycle."
                .to_string(),
            format!(
                "Single national election reduces MCC enforcement to once in {} years.",
                params.election_frequency
            ),
            "Requires constitutional amendments and consensus across all participating states."
                .to_string(),
        ],
    };

    if total_cost > HIGH_COST_THRESHOLD {
        out.push("High-cost scenario: Total projected expenditure exceeds ₹10,000 crores.".to_string());
    }
    if params.administrative_scale == AdministrativeScale::High {
        out.push("Elevated administrative scale increases personnel and logistics requirements.".to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vs_core::GovernanceDisruption;

    fn params(model: ElectionModel, scale: AdministrativeScale) -> ScenarioParams {
        ScenarioParams {
            id: "scenario_1".parse().unwrap(),
            name: "t".into(),
            model,
            states_involved: 12,
            election_frequency: 4,
            administrative_scale: scale,
            governance_disruption: GovernanceDisruption::Moderate,
        }
    }

    #[test]
    fn current_lines_are_parameterized() {
        let v = generate_insights(&params(ElectionModel::Current, AdministrativeScale::Low), 500, 45);
        assert_eq!(v.len(), 3);
        assert_eq!(v[0], "Current cycle maintains existing election schedules across 12 states.");
        assert_eq!(v[1], "Estimated annual MCC enforcement period: 45 days per state on average.");
    }

    #[test]
    fn full_mentions_frequency() {
        let v = generate_insights(&params(ElectionModel::Full, AdministrativeScale::Medium), 500, 16);
        assert_eq!(v[1], "Single national election reduces MCC enforcement to once in 4 years.");
    }

    #[test]
    fn flags_append_in_order() {
        let v = generate_insights(&params(ElectionModel::Partial, AdministrativeScale::High), 10_001, 27);
        assert_eq!(v.len(), 5);
        assert!(v[3].starts_with("High-cost scenario"));
        assert!(v[4].starts_with("Elevated administrative scale"));

        // Threshold is strict.
        let v = generate_insights(&params(ElectionModel::Partial, AdministrativeScale::Medium), 10_000, 27);
        assert_eq!(v.len(), 3);
    }
}
