//! crates/vs_io/src/lib.rs
//! Persistence for finished results. The engine never calls into this crate;
//! hosts compose it with `vs_pipeline`.
//!
//! - Shared error type (`IoError`) with `From` conversions used across modules.
//! - Canonical JSON (sorted keys, compact) is the on-disk and hashing form.

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod canonical_json;
pub mod hasher;
pub mod store;

pub use canonical_json::{to_canonical_json_bytes, write_atomic};
pub use hasher::{sha256_canonical, sha256_hex};
pub use store::{JsonFileStore, MemoryStore, ResultStore, STORE_VERSION};

/// Unified error for vs_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (create_dir_all, rename, fsync, etc.)
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON serialization/deserialization errors with a JSON Pointer hint.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// Stored digest does not match the stored results.
    #[error("hash error: {0}")]
    Hash(String),

    /// Store invariants (unknown version, duplicate id).
    #[error("invalid: {0}")]
    Invalid(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json keeps no pointer; callers enrich when they know the location.
        IoError::Json { pointer: "/".to_string(), msg: e.to_string() }
    }
}
