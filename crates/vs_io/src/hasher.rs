//! SHA-256 digests (lowercase hex) over raw bytes and canonical JSON.

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::canonical_json::to_canonical_json_bytes;
use crate::IoResult;

/// SHA-256 over raw bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// SHA-256 over the canonical bytes of `v` (key order does not matter).
pub fn sha256_canonical(v: &Value) -> IoResult<String> {
    Ok(sha256_hex(&to_canonical_json_bytes(v)?))
}
