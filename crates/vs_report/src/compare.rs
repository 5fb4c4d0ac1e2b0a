//! Side-by-side comparison of two or more results.
//!
//! Metric rows keep input order. Leaders and summary sentences are derived
//! from the same rows so the three views never disagree.

#[cfg(feature = "render_json")]
use serde::Serialize;

use vs_core::SimulationResult;

/// One metric value tagged with its scenario name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "render_json", derive(Serialize))]
pub struct NamedValue<T> {
    pub name: String,
    pub value: T,
}

/// Names holding the lowest value per metric (all ties included).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "render_json", derive(Serialize))]
pub struct Leaders {
    pub cost: Vec<String>,
    pub workload: Vec<String>,
    pub disruption: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "render_json", derive(Serialize))]
#[cfg_attr(feature = "render_json", serde(rename_all = "camelCase"))]
pub struct ComparisonSummary {
    pub cost_comparison: Vec<NamedValue<u64>>,
    pub workload_comparison: Vec<NamedValue<u32>>,
    pub disruption_comparison: Vec<NamedValue<f64>>,
    pub leaders: Leaders,
    /// Empty unless at least two results were compared.
    pub summary: Vec<String>,
}

pub fn compare(results: &[SimulationResult]) -> ComparisonSummary {
    let cost_comparison = metric_rows(results, |r| r.financial_cost);
    let workload_comparison = metric_rows(results, |r| r.administrative_workload);
    let disruption_comparison = metric_rows(results, |r| r.governance_impact);

    let leaders = Leaders {
        cost: lowest(&cost_comparison),
        workload: lowest(&workload_comparison),
        disruption: lowest(&disruption_comparison),
    };

    let summary = if results.len() >= 2 {
        vec![cost_sentence(results), disruption_sentence(results)]
    } else {
        Vec::new()
    };

    ComparisonSummary { cost_comparison, workload_comparison, disruption_comparison, leaders, summary }
}

fn metric_rows<T>(results: &[SimulationResult], f: impl Fn(&SimulationResult) -> T) -> Vec<NamedValue<T>> {
    results.iter().map(|r| NamedValue { name: r.scenario_name.clone(), value: f(r) }).collect()
}

fn lowest<T: PartialOrd + Copy>(rows: &[NamedValue<T>]) -> Vec<String> {
    let Some(min) = rows.iter().map(|r| r.value).reduce(|a, b| if b < a { b } else { a }) else {
        return Vec::new();
    };
    rows.iter().filter(|r| r.value == min).map(|r| r.name.clone()).collect()
}

fn cost_sentence(results: &[SimulationResult]) -> String {
    let mut sorted: Vec<&SimulationResult> = results.iter().collect();
    // stable: equal costs keep input order
    sorted.sort_by_key(|r| r.financial_cost);
    let (cheapest, priciest) = (sorted[0], sorted[sorted.len() - 1]);
    let savings = priciest.financial_cost - cheapest.financial_cost;
    format!(
        "{} is the most cost-effective option, saving ₹{} crores compared to {}.",
        cheapest.scenario_name,
        group_thousands(savings),
        priciest.scenario_name
    )
}

fn disruption_sentence(results: &[SimulationResult]) -> String {
    let mut best = &results[0];
    for r in &results[1..] {
        if r.governance_impact < best.governance_impact {
            best = r;
        }
    }
    format!(
        "{} minimizes governance disruption with {} MCC days annually.",
        best.scenario_name, best.governance_impact
    )
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
