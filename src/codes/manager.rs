//! The access-code manager
//!
//! Owns the in-memory admin and client registries, keeps the client subset in
//! sync with the injected key-value store, validates presented codes against
//! their expiration windows, generates new codes, and records access attempts
//! in the capped audit log.
//!
//! Persistence is best-effort throughout: store failures are logged as
//! warnings and never propagate to callers. Validation failures are regular
//! result variants, not errors; no operation here returns `Err`.

use crate::clock::Clock;
use crate::codes::access_code::{normalize_code, AccessCode};
use crate::codes::audit::{append_capped, AccessLogEntry};
use crate::codes::generator::{derive_code, random_suffix};
use crate::codes::statistics::CodeStatistics;
use crate::store::KeyValueStore;
use crate::types::config::{store_keys, SeedConfig, DEFAULT_REDIRECT_TARGET};
use crate::types::{CodeStatus, ValidationKind};
use chrono::Datelike;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Outcome of validating a presented code
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// Whether access is granted
    pub valid: bool,
    /// Classification of the outcome
    pub kind: ValidationKind,
    /// The matched code, when one exists
    pub code: Option<AccessCode>,
    /// Days of validity left; `None` means unbounded (admin or permanent)
    pub days_remaining: Option<i64>,
    /// Human-readable outcome message
    pub message: String,
}

impl ValidationResult {
    fn admin(code: AccessCode) -> Self {
        Self {
            valid: true,
            kind: ValidationKind::Admin,
            code: Some(code),
            days_remaining: None,
            message: "Admin access authorized".to_string(),
        }
    }

    fn client(code: AccessCode, days_remaining: Option<i64>) -> Self {
        let message = format!("Access authorized for {}", code.name);
        Self { valid: true, kind: ValidationKind::Client, code: Some(code), days_remaining, message }
    }

    fn expired() -> Self {
        Self {
            valid: false,
            kind: ValidationKind::Expired,
            code: None,
            days_remaining: None,
            message: "Code expired, contact your representative".to_string(),
        }
    }

    fn invalid() -> Self {
        Self {
            valid: false,
            kind: ValidationKind::Invalid,
            code: None,
            days_remaining: None,
            message: "Incorrect code".to_string(),
        }
    }
}

/// A freshly generated client code
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedCode {
    /// The derived code string
    pub code: String,
    /// The stored entry
    pub entry: AccessCode,
    /// Human-readable expiration date
    pub expiration_date: String,
}

/// One row of the administrative code listing
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedCode {
    /// The underlying code entry
    #[serde(flatten)]
    pub entry: AccessCode,
    /// Display status of the code
    pub status: CodeStatus,
    /// Days of validity left; `None` means unbounded
    pub days_remaining: Option<i64>,
}

/// The access-code manager component
///
/// Admin codes are fixed at construction and never persisted. Client codes
/// start from the seed defaults, are overlaid with whatever the store holds,
/// and every mutation is written back (best-effort). Seeded client keys are
/// excluded from persistence so the built-in demo entry stays built-in.
#[derive(Debug)]
pub struct AccessCodeManager<S, C> {
    admin_codes: HashMap<String, AccessCode>,
    client_codes: HashMap<String, AccessCode>,
    seeded_client_keys: HashSet<String>,
    store: S,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> AccessCodeManager<S, C> {
    /// Create a manager seeded with the built-in configuration
    pub fn new(store: S, clock: C) -> Self {
        Self::with_seed(SeedConfig::default(), store, clock)
    }

    /// Create a manager from an explicit seed configuration
    ///
    /// Persisted client codes are merged on top of the seed defaults;
    /// a failed load logs a warning and leaves the defaults in place.
    pub fn with_seed(seed: SeedConfig, store: S, clock: C) -> Self {
        // Seed files may carry unnormalized keys; the registries never do.
        let normalize_entry = |mut entry: AccessCode| {
            entry.code = normalize_code(&entry.code);
            (entry.code.clone(), entry)
        };
        let admin_codes: HashMap<String, AccessCode> =
            seed.admin_codes.into_iter().map(normalize_entry).collect();
        let client_codes: HashMap<String, AccessCode> =
            seed.client_codes.into_iter().map(normalize_entry).collect();
        let seeded_client_keys: HashSet<String> = client_codes.keys().cloned().collect();

        let mut manager =
            Self { admin_codes, client_codes, seeded_client_keys, store, clock };
        manager.load_stored_codes();
        info!(
            "Access-code manager initialized with {} admin and {} client codes",
            manager.admin_codes.len(),
            manager.client_codes.len()
        );
        manager
    }

    /// Number of registered admin codes
    pub fn admin_count(&self) -> usize {
        self.admin_codes.len()
    }

    /// Number of registered client codes
    pub fn client_count(&self) -> usize {
        self.client_codes.len()
    }

    /// Look up a client code entry by its (case-insensitive) key
    pub fn client_code(&self, code: &str) -> Option<&AccessCode> {
        self.client_codes.get(&normalize_code(code))
    }

    /// Merge persisted client codes on top of the seeded defaults
    fn load_stored_codes(&mut self) {
        let raw = match self.store.get(store_keys::CLIENT_CODES) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                warn!("Failed to load stored codes: {}", e);
                return;
            }
        };
        match serde_json::from_str::<HashMap<String, AccessCode>>(&raw) {
            Ok(stored) => {
                debug!("Merging {} persisted client codes", stored.len());
                for (key, code) in stored {
                    self.client_codes.insert(normalize_code(&key), code);
                }
            }
            Err(e) => warn!("Failed to parse stored codes, using defaults: {}", e),
        }
    }

    /// Write every non-seeded client code back to the store
    ///
    /// Persistence is best-effort; failures are warned and swallowed so they
    /// never block validation.
    fn persist_client_codes(&mut self) {
        let dynamic: HashMap<&String, &AccessCode> = self
            .client_codes
            .iter()
            .filter(|(key, _)| !self.seeded_client_keys.contains(*key))
            .collect();
        let payload = match serde_json::to_string(&dynamic) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to serialize client codes: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(store_keys::CLIENT_CODES, &payload) {
            warn!("Failed to persist client codes: {}", e);
        }
    }

    /// Validate a presented code
    ///
    /// The input is trimmed and uppercased, then checked against the admin
    /// registry first and the client registry second. Client codes are tested
    /// against their validity window on the clock's current date.
    pub fn validate(&self, input_code: &str) -> ValidationResult {
        let code = normalize_code(input_code);

        if let Some(entry) = self.admin_codes.get(&code) {
            debug!("Admin code {} matched", code);
            return ValidationResult::admin(entry.clone());
        }

        if let Some(entry) = self.client_codes.get(&code) {
            let today = self.clock.today();
            if entry.is_valid_on(today) {
                let days_remaining = entry.days_remaining_on(today);
                debug!("Client code {} valid ({:?} days remaining)", code, days_remaining);
                return ValidationResult::client(entry.clone(), days_remaining);
            }
            debug!("Client code {} expired", code);
            return ValidationResult::expired();
        }

        debug!("Code {} not found", code);
        ValidationResult::invalid()
    }

    /// Generate, store, and persist a new client code
    ///
    /// The code string is the cleaned grantee name (uppercase, `A-Z0-9` only,
    /// at most eight characters) followed by the current year and a random
    /// two-digit suffix. No uniqueness check is performed: a colliding key
    /// silently overwrites the existing entry.
    pub fn generate(&mut self, client_name: &str, valid_days: u32) -> GeneratedCode {
        let today = self.clock.today();
        let suffix = random_suffix(&mut rand::thread_rng());
        let code = derive_code(client_name, today.year(), suffix);

        let entry =
            AccessCode::client(&code, client_name, today, valid_days, DEFAULT_REDIRECT_TARGET);
        info!("Generated client code {} for {} ({} days)", code, client_name, valid_days);

        self.client_codes.insert(entry.code.clone(), entry.clone());
        self.persist_client_codes();

        let expiration_date = entry.expiration_display();
        GeneratedCode { code: entry.code.clone(), entry, expiration_date }
    }

    /// Extend a client code's validity window by `additional_days`
    ///
    /// Returns `false` without touching any state when the code is unknown or
    /// permanent; the two cases are deliberately indistinguishable.
    pub fn extend(&mut self, code: &str, additional_days: u32) -> bool {
        let key = normalize_code(code);
        match self.client_codes.get_mut(&key) {
            Some(entry) if !entry.permanent => {
                entry.valid_days += additional_days;
                info!("Extended code {} by {} days (now {})", key, additional_days, entry.valid_days);
                self.persist_client_codes();
                true
            }
            _ => false,
        }
    }

    /// Classify every client code and return the aggregate counts
    pub fn statistics(&self) -> CodeStatistics {
        let today = self.clock.today();
        let mut stats = CodeStatistics {
            total_admins: self.admin_codes.len(),
            total_clients: self.client_codes.len(),
            ..CodeStatistics::default()
        };

        for entry in self.client_codes.values() {
            match entry.status_on(today) {
                CodeStatus::Expired => stats.expired_clients += 1,
                CodeStatus::Warning => stats.warning_clients += 1,
                _ => stats.active_clients += 1,
            }
        }
        stats
    }

    /// List every admin and client code, annotated for display
    ///
    /// Sorted ascending by grantee name, case-insensitively.
    pub fn list_all(&self) -> Vec<AnnotatedCode> {
        let today = self.clock.today();
        let mut all: Vec<AnnotatedCode> = self
            .admin_codes
            .values()
            .map(|entry| AnnotatedCode {
                entry: entry.clone(),
                status: CodeStatus::Admin,
                days_remaining: None,
            })
            .chain(self.client_codes.values().map(|entry| AnnotatedCode {
                entry: entry.clone(),
                status: entry.status_on(today),
                days_remaining: entry.days_remaining_on(today),
            }))
            .collect();

        all.sort_by(|a, b| {
            a.entry.name.to_lowercase().cmp(&b.entry.name.to_lowercase())
        });
        all
    }

    /// Record an access attempt in the persisted audit log
    ///
    /// The grantee name is resolved from the admin registry first, then the
    /// client registry, falling back to "unknown". The log is capped at the
    /// most recent 100 entries and persistence is best-effort.
    pub fn log_access(&mut self, code: &str, success: bool, details: &str) -> AccessLogEntry {
        let key = normalize_code(code);
        let matched = self.admin_codes.get(&key).or_else(|| self.client_codes.get(&key));
        let resolved_name =
            matched.map(|entry| entry.name.clone()).unwrap_or_else(|| "unknown".to_string());
        let kind = matched.map(|entry| entry.kind);

        let entry =
            AccessLogEntry::new(self.clock.now(), key.clone(), resolved_name, success, details, kind);
        info!(
            "[{}] {} {} ({}) - {}",
            entry.timestamp,
            if success { "GRANTED" } else { "DENIED" },
            entry.resolved_name,
            key,
            details
        );

        let mut logs = self.load_access_logs();
        append_capped(&mut logs, entry.clone());
        match serde_json::to_string(&logs) {
            Ok(payload) => {
                if let Err(e) = self.store.set(store_keys::ACCESS_LOGS, &payload) {
                    warn!("Failed to persist access log: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize access log: {}", e),
        }
        entry
    }

    /// Load the persisted access log, degrading to empty on any failure
    pub fn load_access_logs(&self) -> Vec<AccessLogEntry> {
        let raw = match self.store.get(store_keys::ACCESS_LOGS) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to load access log: {}", e);
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Failed to parse access log, starting fresh: {}", e);
            Vec::new()
        })
    }
}
