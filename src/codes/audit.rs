//! Access audit log
//!
//! Every access attempt can be recorded as an immutable [`AccessLogEntry`].
//! The persisted log is bounded: only the most recent
//! [`MAX_LOG_ENTRIES`] entries are kept, oldest dropped first.

use crate::types::CodeKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of entries retained in the persisted access log
pub const MAX_LOG_ENTRIES: usize = 100;

/// One recorded access attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessLogEntry {
    /// Unique identifier of this entry
    pub entry_id: Uuid,
    /// Instant the attempt was recorded
    pub timestamp: DateTime<Utc>,
    /// The code that was presented (normalized)
    pub code: String,
    /// Display name resolved from the registries, or "unknown"
    pub resolved_name: String,
    /// Whether access was granted
    pub success: bool,
    /// Free-text details about the attempt
    pub details: String,
    /// Kind of the matched code; `None` when the code is unknown
    pub kind: Option<CodeKind>,
}

impl AccessLogEntry {
    /// Build a new entry with a fresh identifier
    pub fn new(
        timestamp: DateTime<Utc>,
        code: impl Into<String>,
        resolved_name: impl Into<String>,
        success: bool,
        details: impl Into<String>,
        kind: Option<CodeKind>,
    ) -> Self {
        Self {
            entry_id: Uuid::new_v4(),
            timestamp,
            code: code.into(),
            resolved_name: resolved_name.into(),
            success,
            details: details.into(),
            kind,
        }
    }

    /// Label of the matched code kind, "unknown" when unmatched
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            Some(CodeKind::Admin) => "admin",
            Some(CodeKind::Client) => "client",
            None => "unknown",
        }
    }
}

/// Append an entry, dropping the oldest entries beyond the cap
pub fn append_capped(entries: &mut Vec<AccessLogEntry>, entry: AccessLogEntry) {
    entries.push(entry);
    if entries.len() > MAX_LOG_ENTRIES {
        let excess = entries.len() - MAX_LOG_ENTRIES;
        entries.drain(0..excess);
    }
}
