//! Result stores: the external collaborator holding produced results.
//!
//! Every store lists newest first. The file store keeps the whole list in
//! memory and rewrites its envelope after each mutation:
//!
//! ```json
//! {"results":[...],"sha256":"<hex of canonical results>","version":1}
//! ```

use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tracing::{debug, info};

use vs_core::{ResultId, SimulationResult};

use crate::canonical_json::{to_canonical_json_bytes, write_atomic};
use crate::hasher::sha256_canonical;
use crate::{IoError, IoResult};

/// Envelope format version written by [`JsonFileStore`].
pub const STORE_VERSION: u64 = 1;

pub trait ResultStore {
    /// Insert at the front; fails on a duplicate id.
    fn create(&mut self, result: SimulationResult) -> IoResult<ResultId>;
    /// Newest first.
    fn list(&self) -> IoResult<Vec<SimulationResult>>;
    fn get(&self, id: &ResultId) -> IoResult<Option<SimulationResult>>;
    /// `false` when no result had this id.
    fn delete(&mut self, id: &ResultId) -> IoResult<bool>;
    fn clear(&mut self) -> IoResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    results: Vec<SimulationResult>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    fn as_slice(&self) -> &[SimulationResult] {
        &self.results
    }
}

impl ResultStore for MemoryStore {
    fn create(&mut self, result: SimulationResult) -> IoResult<ResultId> {
        if self.results.iter().any(|r| r.id == result.id) {
            return Err(IoError::Invalid(format!("duplicate result id {}", result.id)));
        }
        let id = result.id.clone();
        self.results.insert(0, result);
        Ok(id)
    }

    fn list(&self) -> IoResult<Vec<SimulationResult>> {
        Ok(self.results.clone())
    }

    fn get(&self, id: &ResultId) -> IoResult<Option<SimulationResult>> {
        Ok(self.results.iter().find(|r| &r.id == id).cloned())
    }

    fn delete(&mut self, id: &ResultId) -> IoResult<bool> {
        let before = self.results.len();
        self.results.retain(|r| &r.id != id);
        Ok(self.results.len() != before)
    }

    fn clear(&mut self) -> IoResult<()> {
        self.results.clear();
        Ok(())
    }
}

/// JSON-file backed store (single writer process).
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    mem: MemoryStore,
}

impl JsonFileStore {
    /// Load `path`; a missing file is an empty store and is not created until
    /// the first mutation.
    pub fn open(path: impl AsRef<Path>) -> IoResult<Self> {
        let path = path.as_ref().to_path_buf();
        let results = match std::fs::read(&path) {
            Ok(bytes) => decode_envelope(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(IoError::Path(format!("{}: {e}", path.display()))),
        };
        debug!(path = %path.display(), count = results.len(), "store loaded");
        Ok(Self { path, mem: MemoryStore { results } })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `next` to disk, then adopt it. On failure memory keeps the
    /// last persisted state.
    fn commit(&mut self, next: MemoryStore) -> IoResult<()> {
        let bytes = encode_envelope(next.as_slice())?;
        write_atomic(&self.path, &bytes)?;
        info!(path = %self.path.display(), count = next.len(), "store written");
        self.mem = next;
        Ok(())
    }
}

impl ResultStore for JsonFileStore {
    fn create(&mut self, result: SimulationResult) -> IoResult<ResultId> {
        let mut next = self.mem.clone();
        let id = next.create(result)?;
        self.commit(next)?;
        Ok(id)
    }

    fn list(&self) -> IoResult<Vec<SimulationResult>> {
        self.mem.list()
    }

    fn get(&self, id: &ResultId) -> IoResult<Option<SimulationResult>> {
        self.mem.get(id)
    }

    fn delete(&mut self, id: &ResultId) -> IoResult<bool> {
        let mut next = self.mem.clone();
        let removed = next.delete(id)?;
        if removed {
            self.commit(next)?;
        }
        Ok(removed)
    }

    fn clear(&mut self) -> IoResult<()> {
        self.commit(MemoryStore::new())
    }
}

fn encode_envelope(results: &[SimulationResult]) -> IoResult<Vec<u8>> {
    let results = serde_json::to_value(results)?;
    let digest = sha256_canonical(&results)?;
    to_canonical_json_bytes(&json!({
        "version": STORE_VERSION,
        "sha256": digest,
        "results": results,
    }))
}

fn decode_envelope(bytes: &[u8]) -> IoResult<Vec<SimulationResult>> {
    let mut root: Value = serde_json::from_slice(bytes)?;

    let version = root.get("version").and_then(Value::as_u64);
    if version != Some(STORE_VERSION) {
        return Err(IoError::Invalid(format!("unsupported store version {version:?}")));
    }
    let stored = root
        .get("sha256")
        .and_then(Value::as_str)
        .ok_or_else(|| IoError::Json { pointer: "/sha256".into(), msg: "missing digest".into() })?
        .to_string();
    let results = root
        .get_mut("results")
        .map(Value::take)
        .ok_or_else(|| IoError::Json { pointer: "/results".into(), msg: "missing results".into() })?;

    let actual = sha256_canonical(&results)?;
    if actual != stored {
        return Err(IoError::Hash(format!("digest mismatch: stored {stored}, computed {actual}")));
    }

    serde_json::from_value(results).map_err(|e| IoError::Json { pointer: "/results".into(), msg: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_envelope_round_trips() {
        let bytes = encode_envelope(&[]).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.starts_with(r#"{"results":[],"sha256":""#));
        assert!(text.ends_with(r#","version":1}"#));
        assert!(decode_envelope(&bytes).unwrap().is_empty());
    }

    #[test]
    fn wrong_version_is_rejected() {
        let err = decode_envelope(br#"{"version":9,"sha256":"x","results":[]}"#).unwrap_err();
        assert!(matches!(err, IoError::Invalid(_)));
    }

    #[test]
    fn missing_results_is_a_json_error() {
        let err = decode_envelope(br#"{"version":1,"sha256":"x"}"#).unwrap_err();
        assert!(matches!(err, IoError::Json { ref pointer, .. } if pointer == "/results"));
    }
}
