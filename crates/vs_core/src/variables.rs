//! variables.rs: Scenario enum domains and the `ScenarioParams` input record.
//!
//! Wire tokens are lowercase and explicit; field names are camelCase on the wire.
//! `states_involved` and `election_frequency` stay signed so that malformed
//! input reaches validation instead of failing at the type boundary.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ids::ScenarioId;

/// Define an enum with explicit wire tokens, `as_str`, `Display` and `FromStr`.
macro_rules! token_enum {
    ($(#[$m:meta])* $name:ident ($domain:literal) => { $($variant:ident = $token:literal),+ $(,)? }) => {
        $(#[$m])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $(
                #[cfg_attr(feature = "serde", serde(rename = $token))]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self { $($name::$variant => $token),+ }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
        }

        impl FromStr for $name {
            type Err = CoreError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($token => Ok($name::$variant),)+
                    _ => Err(CoreError::UnknownToken($domain, s.to_string())),
                }
            }
        }
    };
}

token_enum!(
    /// Election-synchronization strategy being simulated.
    ElectionModel("model") => {
        Current = "current",
        Partial = "partial",
        Full    = "full",
    }
);

token_enum!(
    AdministrativeScale("administrative scale") => {
        Low    = "low",
        Medium = "medium",
        High   = "high",
    }
);

token_enum!(
    GovernanceDisruption("governance disruption") => {
        Minimal     = "minimal",
        Moderate    = "moderate",
        Significant = "significant",
    }
);

impl ElectionModel {
    /// Human label used by hosts ("Current Cycle", "Partial Sync", "Full Sync").
    pub fn label(self) -> &'static str {
        match self {
            ElectionModel::Current => "Current Cycle",
            ElectionModel::Partial => "Partial Sync",
            ElectionModel::Full => "Full Sync",
        }
    }
}

/// One fully specified scenario. Immutable once handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScenarioParams {
    pub id: ScenarioId,
    pub name: String,
    pub model: ElectionModel,
    pub states_involved: i32,
    /// Years between synchronized election events (validated ≥ 1).
    pub election_frequency: i32,
    pub administrative_scale: AdministrativeScale,
    pub governance_disruption: GovernanceDisruption,
}
