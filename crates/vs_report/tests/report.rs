use chrono::{TimeZone, Utc};

use vs_core::{AdministrativeScale, ElectionModel, GovernanceDisruption, ScenarioParams, SimulationResult};
use vs_pipeline::{run_with_ctx, FixedClock, RunCtx};
use vs_report::{
    compare, dashboard_stats, export, export_file_name, render_comparison_json, render_result_json, EXPORT_TITLE,
};

fn simulate(name: &str, model: ElectionModel, states: i32, freq: i32) -> SimulationResult {
    let params = ScenarioParams {
        id: "scenario_1767225600000".parse().unwrap(),
        name: name.into(),
        model,
        states_involved: states,
        election_frequency: freq,
        administrative_scale: AdministrativeScale::Medium,
        governance_disruption: GovernanceDisruption::Moderate,
    };
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let mut ctx = RunCtx::seeded(9).with_clock(Box::new(FixedClock(at)));
    run_with_ctx(&params, &mut ctx).unwrap()
}

#[test]
fn export_layout_for_baseline() {
    let r = simulate("Baseline", ElectionModel::Current, 10, 5);
    let text = export(&r);
    let lines: Vec<&str> = text.split('\n').collect();

    assert_eq!(lines[0], EXPORT_TITLE);
    assert_eq!(lines[1], "Scenario: Baseline");
    assert_eq!(lines[2], "Model: current");
    assert_eq!(lines[3], "States Involved: 10");
    assert_eq!(lines[4], "Election Frequency: 5");
    assert_eq!(lines[5], "Administrative Scale: medium");
    assert_eq!(lines[6], "Governance Disruption: moderate");
    assert_eq!(lines[7], "Generated: 2026-01-01T00:00:00.000Z");
    assert_eq!(lines[8], "");
    assert_eq!(lines[10], "Total Financial Cost (₹ Crores),4720");
    assert_eq!(lines[11], "Administrative Workload (%),85");
    assert_eq!(lines[12], "Annual MCC Days,45");
    assert_eq!(lines[15], "Personnel,1652");

    let proj = lines.iter().position(|l| *l == "year,cost,electionEventCount").unwrap();
    assert_eq!(lines[proj + 1], "2026,4720,3");
    assert_eq!(lines[proj + 2], "2027,472,0");

    let states = lines.iter().position(|l| *l == "region,cost,disruptionDays").unwrap();
    assert_eq!(lines[states + 1], "Uttar Pradesh,850,45");
    assert_eq!(lines.len(), states + 1 + 10);
    assert!(!text.ends_with('\n'));
}

#[test]
fn export_without_regions_ends_at_header() {
    let r = simulate("Empty", ElectionModel::Full, 0, 5);
    assert!(export(&r).ends_with("State-wise Impact\nregion,cost,disruptionDays"));
}

#[test]
fn file_name_collapses_whitespace() {
    let r = simulate("My  Full\tSync plan", ElectionModel::Full, 5, 5);
    assert_eq!(export_file_name(&r), "My_Full_Sync_plan_simulation.csv");
}

#[test]
fn current_versus_full_summary() {
    let a = simulate("Baseline", ElectionModel::Current, 10, 5);
    let b = simulate("OneNation", ElectionModel::Full, 10, 5);
    let s = compare(&[a.clone(), b.clone()]);

    assert_eq!(s.cost_comparison[0].name, "Baseline");
    assert_eq!(s.cost_comparison[1].value, b.financial_cost);
    assert_eq!(s.leaders.cost, vec!["OneNation".to_string()]);
    assert_eq!(s.leaders.workload, vec!["OneNation".to_string()]);
    assert_eq!(s.leaders.disruption, vec!["OneNation".to_string()]);

    let savings = vs_report::group_thousands(a.financial_cost - b.financial_cost);
    assert!(savings.contains(','));
    assert_eq!(
        s.summary[0],
        format!("OneNation is the most cost-effective option, saving ₹{savings} crores compared to Baseline.")
    );
    assert_eq!(s.summary[1], "OneNation minimizes governance disruption with 16 MCC days annually.");
}

#[test]
fn ties_resolve_to_first_and_last() {
    let a = simulate("A", ElectionModel::Partial, 8, 2);
    let mut b = a.clone();
    b.scenario_name = "B".into();
    let s = compare(&[a, b]);
    assert_eq!(s.summary[0], "A is the most cost-effective option, saving ₹0 crores compared to B.");
    assert!(s.summary[1].starts_with("A minimizes"));
    assert_eq!(s.leaders.cost, vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn fractional_impact_is_printed_shortest() {
    let r = simulate("Triennial", ElectionModel::Current, 10, 3);
    let s = compare(&[r.clone(), r]);
    assert!(s.summary[1].ends_with("with 75 MCC days annually."));

    let r = simulate("Quad", ElectionModel::Current, 10, 4);
    let s = compare(&[r.clone(), r]);
    assert!(s.summary[1].ends_with("with 56.25 MCC days annually."), "{}", s.summary[1]);
}

#[test]
fn single_or_no_result_has_no_summary() {
    let r = simulate("Solo", ElectionModel::Full, 6, 5);
    assert!(compare(&[r]).summary.is_empty());

    let empty = compare(&[]);
    assert!(empty.summary.is_empty());
    assert!(empty.leaders.cost.is_empty());
}

#[test]
fn stats_over_newest_first_list() {
    let empty = dashboard_stats(&[]);
    assert_eq!((empty.total_simulations, empty.average_cost, empty.latest_model), (0, 0, None));

    let newest = simulate("New", ElectionModel::Full, 10, 5);
    let older = simulate("Old", ElectionModel::Current, 10, 5);
    let s = dashboard_stats(&[newest.clone(), older.clone()]);
    assert_eq!(s.total_simulations, 2);
    assert_eq!(s.latest_model, Some(ElectionModel::Full));
    assert_eq!(s.average_cost, (newest.financial_cost + older.financial_cost + 1) / 2);
}

#[test]
fn json_renderers_use_camel_case() {
    let r = simulate("Json", ElectionModel::Partial, 5, 2);
    let v: serde_json::Value = serde_json::from_str(&render_result_json(&r).unwrap()).unwrap();
    assert_eq!(v["scenarioName"], "Json");
    assert_eq!(v["params"]["model"], "partial");
    assert_eq!(v["stateWiseImpact"][0]["disruptionDays"], 27);

    let c = compare(&[r.clone(), r]);
    let v: serde_json::Value = serde_json::from_str(&render_comparison_json(&c).unwrap()).unwrap();
    assert!(v["costComparison"].is_array());
    assert_eq!(v["leaders"]["cost"].as_array().unwrap().len(), 2);
}
