// crates/vs_cli/src/text.rs
//
// Plain-text views for the terminal. JSON output goes through vs_report.

use std::fmt::Write as _;

use vs_core::SimulationResult;
use vs_report::{group_thousands, ComparisonSummary, DashboardStats};

pub fn result(r: &SimulationResult) -> String {
    let p = &r.params;
    let b = &r.cost_breakdown;
    let mut out = String::new();
    let _ = writeln!(out, "{}  {}", r.id, r.scenario_name);
    let _ = writeln!(
        out,
        "  {} | {} states | every {} years | {} scale | {} disruption",
        p.model.label(),
        p.states_involved,
        p.election_frequency,
        p.administrative_scale,
        p.governance_disruption
    );
    let _ = writeln!(out, "  cost      ₹{} crores", group_thousands(r.financial_cost));
    let _ = writeln!(
        out,
        "            personnel {} / logistics {} / security {} / technology {}",
        b.personnel, b.logistics, b.security, b.technology
    );
    let _ = writeln!(out, "  workload  {}%", r.administrative_workload);
    let _ = writeln!(out, "  MCC days  {} per year", r.governance_impact);
    out.push_str("  projection\n");
    for y in &r.yearly_projection {
        let _ = writeln!(out, "    {}  ₹{:>8}  events {}", y.year, group_thousands(y.cost), y.election_event_count);
    }
    out.push_str("  insights\n");
    for line in &r.insights {
        let _ = writeln!(out, "    - {line}");
    }
    out
}

pub fn list_row(r: &SimulationResult) -> String {
    format!(
        "{}  {}  {:<13}  ₹{:>8}  {}",
        r.id,
        r.timestamp.format("%Y-%m-%d %H:%M"),
        r.params.model.label(),
        group_thousands(r.financial_cost),
        r.scenario_name
    )
}

pub fn comparison(c: &ComparisonSummary) -> String {
    let mut out = String::new();
    let width = c.cost_comparison.iter().map(|v| v.name.chars().count()).max().unwrap_or(0);
    let _ = writeln!(out, "{:<width$}  {:>10}  {:>8}  {:>8}", "scenario", "cost", "workload", "MCC days");
    let rows = c.cost_comparison.iter().zip(&c.workload_comparison).zip(&c.disruption_comparison);
    for ((cost, work), dis) in rows {
        let _ = writeln!(
            out,
            "{:<width$}  {:>10}  {:>7}%  {:>8}",
            cost.name,
            group_thousands(cost.value),
            work.value,
            dis.value
        );
    }
    let _ = writeln!(out, "lowest cost: {}", c.leaders.cost.join(", "));
    let _ = writeln!(out, "lowest workload: {}", c.leaders.workload.join(", "));
    let _ = writeln!(out, "lowest disruption: {}", c.leaders.disruption.join(", "));
    for line in &c.summary {
        let _ = writeln!(out, "{line}");
    }
    out
}

pub fn stats(s: &DashboardStats) -> String {
    format!(
        "total simulations: {}\naverage cost: ₹{} crores\nlatest model: {}\n",
        s.total_simulations,
        group_thousands(s.average_cost),
        s.latest_model.map(|m| m.label()).unwrap_or("none")
    )
}
