//! vs_pipeline: simulation engine surface (validate → select → compute → assemble).
//!
//! I/O-free. Formulas live in `vs_algo`; this crate sequences them, guards the
//! inputs and stamps the result. The fallback RNG and the clock are injected
//! through [`RunCtx`] so that seeded runs are reproducible.

#![forbid(unsafe_code)]

use thiserror::Error;
use tracing::{debug, debug_span, warn};

use vs_algo::{
    administrative_workload, cost_breakdown, generate_insights, governance_impact,
    mean_disruption_days, region_impacts, total_cost, yearly_projection, FactorSet,
};
use vs_core::reference::select_regions;
use vs_core::{FallbackRng, ReferenceTable, ScenarioParams, SimulationResult};

pub mod build_result;
pub mod clock;
pub mod validate;

pub use build_result::{assemble, ComputedMetrics};
pub use clock::{Clock, FixedClock, SystemClock};
pub use validate::{validate, Severity, ValidationIssue, ValidationReport};

/// Single error surface for an engine run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A parameter violates its constraint; nothing was computed.
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
}

impl From<&ValidationIssue> for EngineError {
    fn from(i: &ValidationIssue) -> Self {
        EngineError::InvalidParameter { field: i.field, reason: i.message.clone() }
    }
}

/// Per-run dependencies: the baseline table (with its fallback RNG) and a clock.
pub struct RunCtx {
    table: ReferenceTable,
    clock: Box<dyn Clock>,
}

impl RunCtx {
    pub fn new(rng: FallbackRng, clock: Box<dyn Clock>) -> Self {
        Self { table: ReferenceTable::new(rng), clock }
    }

    /// Reproducible fallback costs, wall-clock timestamps.
    pub fn seeded(seed: u64) -> Self {
        Self::new(FallbackRng::from_seed_u64(seed), Box::new(SystemClock))
    }

    /// Entropy-seeded fallback costs, wall-clock timestamps.
    pub fn from_entropy() -> Self {
        Self::new(FallbackRng::from_entropy(), Box::new(SystemClock))
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Seed of the fallback stream (echo it to replay a run).
    pub fn seed(&self) -> u64 {
        self.table.rng().seed()
    }
}

impl Default for RunCtx {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Run one scenario with an entropy-seeded context.
pub fn run(params: &ScenarioParams) -> Result<SimulationResult, EngineError> {
    run_with_ctx(params, &mut RunCtx::default())
}

/// Run one scenario. Fails fast on the first validation error.
///
/// The context's RNG stream advances by one draw per region without a fixed
/// baseline, so reusing a context across runs yields different fallbacks.
pub fn run_with_ctx(params: &ScenarioParams, ctx: &mut RunCtx) -> Result<SimulationResult, EngineError> {
    let _span = debug_span!("simulate", scenario = %params.id, model = %params.model).entered();

    // --- VALIDATE ---
    let report = validate(params);
    for w in report.warnings() {
        warn!(code = w.code, field = w.field, "{}", w.message);
    }
    if let Some(err) = report.errors().next() {
        debug!(code = err.code, "rejecting scenario");
        return Err(EngineError::from(err));
    }
    // Both are non-negative / ≥ 1 past validation.
    let states = params.states_involved as usize;
    let frequency = params.election_frequency as u32;

    // --- SELECT + PER-REGION ---
    let regions = select_regions(states);
    let factors = FactorSet::resolve(params);
    let rows = region_impacts(regions, &mut ctx.table, &factors);
    debug!(regions = rows.len(), seed = ctx.seed(), "regional impact computed");

    // --- AGGREGATES ---
    let financial_cost = total_cost(&rows);
    let mean_days = mean_disruption_days(&rows);
    let now = ctx.clock.now_utc();

    let metrics = ComputedMetrics {
        financial_cost,
        administrative_workload: administrative_workload(params.model, factors.admin_scale),
        governance_impact: governance_impact(mean_days, frequency),
        cost_breakdown: cost_breakdown(financial_cost),
        state_wise_impact: rows,
        yearly_projection: yearly_projection(financial_cost, frequency, params.model, build_result::base_year(now)),
        insights: generate_insights(params, financial_cost, mean_days),
    };

    // --- BUILD ---
    let result = assemble(params, metrics, now);
    debug!(id = %result.id, financial_cost, "result assembled");
    Ok(result)
}
