//! In-memory key-value store
//!
//! Stands in for the browser-local storage the system was designed around.
//! Clones share the same underlying map, so several manager instances can
//! observe each other's writes the way multiple page loads share one
//! localStorage area.

use super::{KeyValueStore, StoreResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Shared in-memory store, primarily for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self
            .entries
            .lock()
            .map(|entries| entries.get(key).cloned())
            .unwrap_or(None))
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}
