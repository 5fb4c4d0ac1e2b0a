//! Five-year cost projection.
//!
//! Offset `i` (0-based from the base year) is an election year iff
//! `i % election_frequency == 0`. Election years cost `total * (1 + i * 0.05)`
//! (the uplift compounds per offset, not per election cycle); other years
//! carry a 10% maintenance cost.

use vs_core::{ElectionModel, YearProjection};

use crate::factors::events_per_election_year;
use crate::rounding::round_u64;

pub const PROJECTION_YEARS: usize = 5;
pub const ANNUAL_UPLIFT: f64 = 0.05;
pub const MAINTENANCE_SHARE: f64 = 0.1;

/// `election_frequency` must be ≥ 1.
pub fn yearly_projection(
    total: u64,
    election_frequency: u32,
    model: ElectionModel,
    base_year: i32,
) -> Vec<YearProjection> {
    debug_assert!(election_frequency >= 1);
    let t = total as f64;
    (0..PROJECTION_YEARS as u32)
        .map(|i| {
            let election_year = i % election_frequency == 0;
            let cost = if election_year {
                t * (1.0 + f64::from(i) * ANNUAL_UPLIFT)
            } else {
                t * MAINTENANCE_SHARE
            };
            YearProjection {
                year: base_year + i as i32,
                cost: round_u64(cost),
                election_event_count: if election_year { events_per_election_year(model) } else { 0 },
            }
        })
        .collect()
}
