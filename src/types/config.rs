//! Configuration structures for the access-code system
//!
//! This module contains the built-in seed configuration (the permanent admin
//! code and the demo client code), the store-key and limit constants, and the
//! command line argument definitions for the CLI front-end.

use crate::codes::AccessCode;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Keys used in the persistent key-value store
pub mod store_keys {
    /// Store key holding the persisted client-code map
    pub const CLIENT_CODES: &str = "passio_client_codes";

    /// Store key holding the persisted access log
    pub const ACCESS_LOGS: &str = "passio_access_logs";
}

/// Default validity window for newly generated client codes, in days
pub const DEFAULT_VALID_DAYS: u32 = 7;

/// Destination resource granted on successful validation
pub const DEFAULT_REDIRECT_TARGET: &str = "presentacion.html";

/// Client codes with this many days or fewer remaining are flagged as warnings
pub const WARNING_THRESHOLD_DAYS: i64 = 2;

/// Errors raised while loading or validating seed configuration
#[derive(Debug, Error)]
pub enum SeedError {
    /// Reading the seed file failed
    #[error("Failed to read seed configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The seed file held malformed JSON
    #[error("Failed to parse seed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A seed entry failed a structural check
    #[error("Invalid seed entry: {0}")]
    Invalid(String),
}

/// Built-in seed data consumed at manager construction
///
/// Admin entries are fixed for the lifetime of the manager and never
/// persisted. Client entries are the defaults a fresh store starts from;
/// persisted codes are merged on top of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedConfig {
    /// Permanent administrator codes
    pub admin_codes: Vec<AccessCode>,
    /// Default client codes (the demo entry)
    pub client_codes: Vec<AccessCode>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        let created = NaiveDate::from_ymd_opt(2025, 10, 8)
            .unwrap_or_else(|| NaiveDate::default());
        Self {
            admin_codes: vec![AccessCode::admin(
                "ADMIN2025",
                "Administrador Principal",
                created,
                DEFAULT_REDIRECT_TARGET,
            )],
            client_codes: vec![AccessCode::client(
                "DEMO2025",
                "Cliente Demo",
                created,
                30,
                DEFAULT_REDIRECT_TARGET,
            )],
        }
    }
}

impl SeedConfig {
    /// Load a seed configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let contents = fs::read_to_string(path)?;
        let config: SeedConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the structural invariants of every seed entry
    pub fn validate(&self) -> Result<(), SeedError> {
        for entry in self.admin_codes.iter().chain(self.client_codes.iter()) {
            if entry.code.trim().is_empty() {
                return Err(SeedError::Invalid("code key must not be empty".to_string()));
            }
            if entry.name.trim().is_empty() {
                return Err(SeedError::Invalid(format!(
                    "code {} has an empty display name",
                    entry.code
                )));
            }
        }
        Ok(())
    }

    /// Serialize the configuration as pretty JSON
    pub fn print_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "passio-access-codes",
    version,
    about = "Access-code manager - validates, generates, and tracks access codes",
    long_about = "Manages permanent admin codes and temporary client codes for \
gating a presentation page. Dynamically created codes and access logs are \
persisted in a JSON file store.

EXAMPLES:
    # Validate a code
    passio-access-codes validate DEMO2025

    # Generate a 14-day code for a client
    passio-access-codes generate \"Acme Corp\" --days 14

    # Extend an existing code by 5 days
    passio-access-codes extend ACMECORP202542 5

    # Show code statistics
    passio-access-codes stats

    # List every registered code
    passio-access-codes list"
)]
pub struct CliArgs {
    /// Path of the JSON file backing the key-value store
    #[arg(
        long,
        default_value = "passio_store.json",
        help = "Path of the JSON file backing the key-value store"
    )]
    pub store: String,

    /// Optional seed configuration file (JSON format)
    #[arg(
        long,
        help = "Seed configuration file (JSON format)",
        long_help = "Path to a JSON file overriding the built-in admin and demo client seeds."
    )]
    pub seed: Option<String>,

    /// Print the default seed configuration and exit
    #[arg(long, help = "Print the default seed configuration in JSON format and exit")]
    pub print_seed: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands, one per manager operation
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate an access code
    Validate {
        /// The code to validate
        code: String,
    },
    /// Generate a new client code
    Generate {
        /// Display name of the grantee
        name: String,
        /// Validity window in days
        #[arg(long, default_value_t = DEFAULT_VALID_DAYS)]
        days: u32,
    },
    /// Extend the validity window of an existing client code
    Extend {
        /// The code to extend
        code: String,
        /// Additional days of validity
        days: u32,
    },
    /// Show code statistics
    Stats,
    /// List every registered code
    List,
    /// Record an access attempt in the audit log
    Log {
        /// The code that was presented
        code: String,
        /// Whether access was granted
        #[arg(long)]
        success: bool,
        /// Free-text details about the attempt
        #[arg(long, default_value = "")]
        details: String,
    },
}
