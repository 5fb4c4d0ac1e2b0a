// crates/vs_algo/src/lib.rs
//! Formula layer for the simulation engine.
//!
//! Every function here is pure over `vs_core` types: the only state touched is
//! the caller's [`ReferenceTable`](vs_core::ReferenceTable) stream when a
//! region has no fixed baseline. Validation happens upstream in `vs_pipeline`;
//! these functions assume `election_frequency >= 1`.

#![forbid(unsafe_code)]

pub mod factors;
pub mod insights;
pub mod metrics;
pub mod projection;
pub mod regional;

pub mod rounding {
    //! Half-up rounding (`floor(x + 0.5)`), applied row by row.

    #[inline]
    pub fn round_half_up(x: f64) -> f64 {
        (x + 0.5).floor()
    }

    /// Half-up round into `u64`; negatives and NaN saturate to 0.
    #[inline]
    pub fn round_u64(x: f64) -> u64 {
        round_half_up(x).max(0.0) as u64
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn halves_round_up() {
            assert_eq!(round_half_up(2.5), 3.0);
            assert_eq!(round_half_up(607.75), 608.0);
            assert_eq!(round_half_up(467.5), 468.0);
            assert_eq!(round_half_up(-2.5), -2.0);
            assert_eq!(round_u64(-3.2), 0);
            assert_eq!(round_u64(f64::NAN), 0);
        }
    }
}

pub use factors::{FactorSet, ModelFactors};
pub use insights::generate_insights;
pub use metrics::{administrative_workload, cost_breakdown, governance_impact};
pub use projection::{yearly_projection, PROJECTION_YEARS};
pub use regional::{mean_disruption_days, region_impacts, total_cost};
pub use rounding::{round_half_up, round_u64};
