//! Line-oriented export of one result, readable by spreadsheet tools.
//!
//! Sections are separated by blank lines; data rows are comma-separated
//! with no quoting. Region names never contain commas. The free-text
//! scenario name only appears on the `Scenario:` metadata line.

use chrono::SecondsFormat;

use vs_core::SimulationResult;

pub const EXPORT_TITLE: &str = "VoteSync Simulation Export";
const FILE_SUFFIX: &str = "_simulation.csv";

/// Render `result` as the export document (`\n`-joined, no trailing newline).
pub fn export(result: &SimulationResult) -> String {
    let p = &result.params;
    let b = &result.cost_breakdown;

    let mut lines: Vec<String> = vec![
        EXPORT_TITLE.to_string(),
        format!("Scenario: {}", result.scenario_name),
        format!("Model: {}", p.model),
        format!("States Involved: {}", p.states_involved),
        format!("Election Frequency: {}", p.election_frequency),
        format!("Administrative Scale: {}", p.administrative_scale),
        format!("Governance Disruption: {}", p.governance_disruption),
        format!("Generated: {}", result.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
        String::new(),
        "Key Metrics".to_string(),
        format!("Total Financial Cost (₹ Crores),{}", result.financial_cost),
        format!("Administrative Workload (%),{}", result.administrative_workload),
        format!("Annual MCC Days,{}", result.governance_impact),
        String::new(),
        "Cost Breakdown".to_string(),
        format!("Personnel,{}", b.personnel),
        format!("Logistics,{}", b.logistics),
        format!("Security,{}", b.security),
        format!("Technology,{}", b.technology),
        String::new(),
        "Yearly Projection".to_string(),
        "year,cost,electionEventCount".to_string(),
    ];
    lines.extend(
        result
            .yearly_projection
            .iter()
            .map(|y| format!("{},{},{}", y.year, y.cost, y.election_event_count)),
    );
    lines.push(String::new());
    lines.push("State-wise Impact".to_string());
    lines.push("region,cost,disruptionDays".to_string());
    lines.extend(
        result
            .state_wise_impact
            .iter()
            .map(|s| format!("{},{},{}", s.region, s.cost, s.disruption_days)),
    );

    lines.join("\n")
}

/// Suggested file name: whitespace runs in the scenario name become `_`.
pub fn export_file_name(result: &SimulationResult) -> String {
    let mut out = String::with_capacity(result.scenario_name.len() + FILE_SUFFIX.len());
    let mut in_space = false;
    for c in result.scenario_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out.push_str(FILE_SUFFIX);
    out
}
