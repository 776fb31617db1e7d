//! JSON file-backed key-value store
//!
//! Persists the whole key space as one pretty-printed JSON object. Each `set`
//! is a read-modify-write of the file; a missing file reads as an empty store.

use super::{KeyValueStore, StoreError, StoreResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Key-value store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`
    ///
    /// The file is created lazily on the first `set`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_entries(&self) -> StoreResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::read_failure(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| StoreError::read_failure(format!("{}: {}", self.path.display(), e)))
    }

    fn save_entries(&self, entries: &HashMap<String, String>) -> StoreResult<()> {
        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::write_failure(e.to_string()))?;
        fs::write(&self.path, contents)
            .map_err(|e| StoreError::write_failure(format!("{}: {}", self.path.display(), e)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.load_entries()?;
        debug!("Store read of {} (found: {})", key, entries.contains_key(key));
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        // A corrupt file must not block future writes; start over from empty.
        let mut entries = self.load_entries().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.save_entries(&entries)?;
        debug!("Store write of {} to {}", key, self.path.display());
        Ok(())
    }
}
