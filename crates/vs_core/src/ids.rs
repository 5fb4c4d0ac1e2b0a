//! crates/vs_core/src/ids.rs
//! Scenario and result identifiers.
//! ASCII-only, strict shapes for engine-issued ids; scenario ids stay opaque.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Utc};
use rand_core::RngCore;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors returned when validating or parsing IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdError {
    Empty,
    NonAscii,
    TooLong,
    BadShape,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdError::Empty => f.write_str("id is empty"),
            IdError::NonAscii => f.write_str("id contains non-ASCII or control bytes"),
            IdError::TooLong => f.write_str("id is too long"),
            IdError::BadShape => f.write_str("id has an unexpected shape"),
        }
    }
}

impl std::error::Error for IdError {}

const MAX_ID_LEN: usize = 256;
const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Printable ASCII only (no control bytes).
#[inline]
fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| (0x20..0x7F).contains(&b))
}

macro_rules! simple_string_newtype {
    ($(#[$m:meta])* $name:ident) => {
        $(#[$m])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
        pub struct $name(String);

        impl $name {
            #[inline] pub fn as_str(&self) -> &str { &self.0 }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
        }

        impl TryFrom<&str> for $name {
            type Error = IdError;
            #[inline]
            fn try_from(value: &str) -> Result<Self, Self::Error> { value.parse() }
        }

        // Deserialization goes through `FromStr` so wire ids get the same checks.
        impl TryFrom<String> for $name {
            type Error = IdError;
            #[inline]
            fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
        }

        impl From<$name> for String {
            #[inline]
            fn from(id: $name) -> String { id.0 }
        }
    }
}

simple_string_newtype!(
    /// Opaque scenario identifier supplied by the caller.
    ScenarioId
);
simple_string_newtype!(
    /// "sim_" + <unix millis> + "_" + <lowercase base36 suffix>
    ResultId
);

impl FromStr for ScenarioId {
    type Err = IdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() { return Err(IdError::Empty); }
        if !is_printable_ascii(s) { return Err(IdError::NonAscii); }
        if s.len() > MAX_ID_LEN { return Err(IdError::TooLong); }
        Ok(ScenarioId(s.to_owned()))
    }
}

impl ScenarioId {
    /// Host-side default: `scenario_<unix millis>`.
    pub fn generate(now: DateTime<Utc>) -> Self {
        ScenarioId(format!("scenario_{}", now.timestamp_millis()))
    }
}

#[inline]
fn is_result_shape(s: &str) -> bool {
    let Some(rest) = s.strip_prefix("sim_") else { return false };
    let Some((millis, suffix)) = rest.split_once('_') else { return false };
    !millis.is_empty()
        && millis.bytes().all(|b| b.is_ascii_digit())
        && (1..=16).contains(&suffix.len())
        && suffix.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z'))
}

impl FromStr for ResultId {
    type Err = IdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() { return Err(IdError::Empty); }
        if !is_printable_ascii(s) { return Err(IdError::NonAscii); }
        if s.len() > MAX_ID_LEN { return Err(IdError::TooLong); }
        if !is_result_shape(s) { return Err(IdError::BadShape); }
        Ok(ResultId(s.to_owned()))
    }
}

impl ResultId {
    /// Time-based id with a random base36 suffix drawn from `rng`.
    pub fn generate<R: RngCore + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Self {
        let mut x = rng.next_u64();
        let mut suffix = String::with_capacity(SUFFIX_LEN);
        for _ in 0..SUFFIX_LEN {
            suffix.push(BASE36[(x % 36) as usize] as char);
            x /= 36;
        }
        ResultId(format!("sim_{}_{}", now.timestamp_millis().max(0), suffix))
    }
}

// === Tests ===
