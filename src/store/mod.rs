//! Key-value persistence capability
//!
//! The manager persists dynamically created codes and access logs through the
//! [`KeyValueStore`] trait, injected at construction. Two implementations are
//! provided: a shared in-memory map for tests and a JSON file store for the
//! CLI front-end. Store failures are never fatal to the manager; every caller
//! downgrades them to warnings.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors raised by key-value store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or parsing a stored value failed
    #[error("Store read failed: {0}")]
    ReadFailure(String),

    /// Writing a value failed
    #[error("Store write failed: {0}")]
    WriteFailure(String),
}

impl StoreError {
    /// Create a read failure
    pub fn read_failure(msg: impl Into<String>) -> Self {
        Self::ReadFailure(msg.into())
    }

    /// Create a write failure
    pub fn write_failure(msg: impl Into<String>) -> Self {
        Self::WriteFailure(msg.into())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A string-keyed, string-valued persistence capability
///
/// Values are JSON documents serialized by the caller. The store offers no
/// transaction isolation; read-modify-write races against other processes
/// sharing the same backing data are out of scope.
pub trait KeyValueStore {
    /// Fetch the value stored under `key`, if any
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}
