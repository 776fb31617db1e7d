//! Access-code entities and the manager component
//!
//! This module holds the [`AccessCode`] entity with its validity arithmetic,
//! the code-string generator, the audit log, aggregate statistics, and the
//! [`AccessCodeManager`] that ties them together over the injected store and
//! clock capabilities.

pub mod access_code;
pub mod audit;
pub mod generator;
pub mod manager;
pub mod statistics;

// Re-export the primary types for convenience
pub use access_code::{normalize_code, AccessCode};
pub use audit::{AccessLogEntry, MAX_LOG_ENTRIES};
pub use manager::{AccessCodeManager, AnnotatedCode, GeneratedCode, ValidationResult};
pub use statistics::CodeStatistics;
