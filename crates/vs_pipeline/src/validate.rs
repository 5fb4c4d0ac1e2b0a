//! crates/vs_pipeline/src/validate.rs
//! Parameter validation before any computation.
//! Deterministic output: issues are sorted (errors first, then by code).

use vs_core::{ScenarioParams, REGIONS};

/// Longest accepted scenario name, in characters.
pub const MAX_NAME_CHARS: usize = 100;
/// Expected `states_involved` range; values outside it only warn.
pub const EXPECTED_STATES: core::ops::RangeInclusive<i32> = 5..=30;
/// Projection horizon; frequencies beyond it leave a single election year.
pub const HORIZON_YEARS: i32 = 5;

/// Issue severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

/// One validation finding, tied to the offending field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: &'static str,
    pub field: &'static str,
    pub message: String,
}

/// pass = no Error-severity issue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub pass: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }
}

/// Top-level entry point.
pub fn validate(params: &ScenarioParams) -> ValidationReport {
    let mut issues = Vec::new();
    issues.extend(check_name(&params.name));
    issues.extend(check_states_involved(params.states_involved));
    issues.extend(check_election_frequency(params.election_frequency));

    sort_issues_stably(&mut issues);

    ValidationReport {
        pass: !issues.iter().any(|i| i.severity == Severity::Error),
        issues,
    }
}

fn issue(severity: Severity, code: &'static str, field: &'static str, message: String) -> ValidationIssue {
    ValidationIssue { severity, code, field, message }
}

fn check_name(name: &str) -> Vec<ValidationIssue> {
    let mut out = Vec::new();
    if name.trim().is_empty() {
        out.push(issue(Severity::Error, "Param.Name.Empty", "name", "scenario name must not be empty".into()));
    }
    let n = name.chars().count();
    if n > MAX_NAME_CHARS {
        out.push(issue(
            Severity::Error,
            "Param.Name.TooLong",
            "name",
            format!("scenario name has {n} characters; at most {MAX_NAME_CHARS} allowed"),
        ));
    }
    out
}

fn check_states_involved(states: i32) -> Vec<ValidationIssue> {
    const FIELD: &str = "statesInvolved";
    if states < 0 {
        return vec![issue(Severity::Error, "Param.StatesInvolved.Negative", FIELD, format!("must be >= 0, got {states}"))];
    }
    if states as usize > REGIONS.len() {
        return vec![issue(
            Severity::Warning,
            "Param.StatesInvolved.Truncated",
            FIELD,
            format!("{states} requested; only {} regions are available", REGIONS.len()),
        )];
    }
    if !EXPECTED_STATES.contains(&states) {
        return vec![issue(
            Severity::Warning,
            "Param.StatesInvolved.OutOfRange",
            FIELD,
            format!("{states} is outside the expected range {}..={}", EXPECTED_STATES.start(), EXPECTED_STATES.end()),
        )];
    }
    Vec::new()
}

fn check_election_frequency(freq: i32) -> Vec<ValidationIssue> {
    const FIELD: &str = "electionFrequency";
    if freq < 1 {
        return vec![issue(Severity::Error, "Param.ElectionFrequency.NonPositive", FIELD, format!("must be >= 1, got {freq}"))];
    }
    if freq > HORIZON_YEARS {
        return vec![issue(
            Severity::Warning,
            "Param.ElectionFrequency.BeyondHorizon",
            FIELD,
            format!("{freq}-year cycle exceeds the {HORIZON_YEARS}-year projection; only the first year holds elections"),
        )];
    }
    Vec::new()
}

fn sort_issues_stably(issues: &mut [ValidationIssue]) {
    issues.sort_by(|a, b| a.severity.cmp(&b.severity).then_with(|| a.code.cmp(b.code)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use vs_core::{AdministrativeScale, ElectionModel, GovernanceDisruption};

    fn params(name: &str, states: i32, freq: i32) -> ScenarioParams {
        ScenarioParams {
            id: "scenario_1".parse().unwrap(),
            name: name.into(),
            model: ElectionModel::Current,
            states_involved: states,
            election_frequency: freq,
            administrative_scale: AdministrativeScale::Medium,
            governance_disruption: GovernanceDisruption::Moderate,
        }
    }

    #[test]
    fn typical_params_pass_clean() {
        let r = validate(&params("Baseline", 15, 5));
        assert!(r.pass);
        assert!(r.issues.is_empty());
    }

    #[test]
    fn zero_frequency_is_an_error() {
        let r = validate(&params("Baseline", 15, 0));
        assert!(!r.pass);
        let e = r.errors().next().unwrap();
        assert_eq!(e.code, "Param.ElectionFrequency.NonPositive");
        assert_eq!(e.field, "electionFrequency");
    }

    #[test]
    fn blank_and_long_names_are_errors() {
        assert!(!validate(&params("   ", 15, 5)).pass);
        assert!(!validate(&params(&"n".repeat(101), 15, 5)).pass);
        assert!(validate(&params(&"n".repeat(100), 15, 5)).pass);
    }

    #[test]
    fn out_of_range_states_only_warn() {
        for states in [0, 4, 31, 500] {
            let r = validate(&params("x", states, 5));
            assert!(r.pass, "{states}");
            assert_eq!(r.warnings().count(), 1, "{states}");
        }
        assert!(!validate(&params("x", -1, 5)).pass);
    }

    #[test]
    fn errors_sort_before_warnings() {
        let r = validate(&params("", 40, 9));
        let sev: Vec<Severity> = r.issues.iter().map(|i| i.severity).collect();
        assert_eq!(sev, vec![Severity::Error, Severity::Warning, Severity::Warning]);
        assert_eq!(r.issues[1].code, "Param.ElectionFrequency.BeyondHorizon");
        assert_eq!(r.issues[2].code, "Param.StatesInvolved.Truncated");
    }
}
