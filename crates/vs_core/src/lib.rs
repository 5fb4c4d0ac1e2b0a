//! vs_core: Core types, enum domains, identifiers, reference data and seedable RNG.
//!
//! This crate is **I/O-free**. It defines the stable types shared across the
//! engine (`vs_algo`, `vs_pipeline`, `vs_report`, `vs_io`, `vs_cli`).
//!
//! - Identifiers: `ScenarioId` (opaque), `ResultId` (`sim_<millis>_<base36>`)
//! - Enum domains: `ElectionModel`, `AdministrativeScale`, `GovernanceDisruption`
//! - Input/output records: `ScenarioParams`, `SimulationResult`
//! - Reference Data Table: fixed region priority list + baseline costs
//! - Seedable RNG (ChaCha20) for the fallback baseline costs only
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod errors {
    use core::fmt;

    /// Minimal error set for core-domain parsing.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum CoreError {
        /// Unknown enum token; carries the domain name.
        UnknownToken(&'static str, String),
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::UnknownToken(domain, tok) => {
                    write!(f, "unknown {domain} token: {tok:?}")
                }
            }
        }
    }

    impl std::error::Error for CoreError {}
}

pub mod ids;
pub mod reference;
pub mod result;
pub mod rng;
pub mod variables;

pub use errors::CoreError;
pub use ids::{IdError, ResultId, ScenarioId};
pub use reference::{ReferenceTable, REGIONS};
pub use result::{CostBreakdown, RegionImpact, SimulationResult, YearProjection};
pub use rng::FallbackRng;
pub use variables::{AdministrativeScale, ElectionModel, GovernanceDisruption, ScenarioParams};
