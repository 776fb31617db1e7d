//! Passio Access Codes
//!
//! Client-side access-code validation for gating access to a presentation
//! page. Permanent admin codes grant unconditional access; temporary client
//! codes are valid for a whole-day window from their creation date. The
//! manager generates new client codes, tracks usage statistics, and persists
//! dynamically created codes plus a capped access log in an injected
//! key-value store.
//!
//! # Overview
//!
//! The whole system is a single manager component over two in-memory
//! registries. The persistence store and the clock are injected capabilities,
//! so hosts can swap the JSON file store for the in-memory one and pin the
//! clock in tests. Store failures are never fatal: the manager warns and
//! falls back to defaults or skips persistence.
//!
//! ## Quick Start
//!
//! ```rust
//! use passio_access_codes::clock::SystemClock;
//! use passio_access_codes::codes::AccessCodeManager;
//! use passio_access_codes::store::MemoryStore;
//!
//! let mut manager = AccessCodeManager::new(MemoryStore::new(), SystemClock);
//!
//! // The built-in admin code always validates.
//! let result = manager.validate("ADMIN2025");
//! assert!(result.valid);
//!
//! // Generate a week-long code for a client and validate it right away.
//! let generated = manager.generate("Acme Corp", 7);
//! assert!(manager.validate(&generated.code).valid);
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: enums, seed configuration, and CLI arguments
//! - [`codes`]: the access-code entity, generator, audit log, and manager
//! - [`store`]: the key-value persistence capability and its backends
//! - [`clock`]: the injected time source
//! - [`logging`]: tracing configuration
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod clock;
pub mod codes;
pub mod logging;
pub mod store;
pub mod types;

// Re-export the primary types at the crate root
pub use clock::{Clock, FixedClock, SystemClock};
pub use codes::{
    AccessCode, AccessCodeManager, AccessLogEntry, AnnotatedCode, CodeStatistics, GeneratedCode,
    ValidationResult, MAX_LOG_ENTRIES,
};
pub use logging::LoggingConfig;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};
pub use types::{CliArgs, CodeKind, CodeStatus, Command, SeedConfig, SeedError, ValidationKind};
