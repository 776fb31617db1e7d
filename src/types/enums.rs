//! Enumeration types for the access-code system
//!
//! This module contains the enumeration types used throughout the access-code
//! manager: code kinds, validation outcomes, and display statuses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of access codes held in the registries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeKind {
    /// Permanent administrator code, never expires
    Admin,
    /// Temporary client code with a validity window
    Client,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeKind::Admin => write!(f, "admin"),
            CodeKind::Client => write!(f, "client"),
        }
    }
}

impl FromStr for CodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" | "administrator" => Ok(CodeKind::Admin),
            "client" => Ok(CodeKind::Client),
            _ => Err(format!("Unknown code kind: {}", s)),
        }
    }
}

/// Outcome classification of a validation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationKind {
    /// Matched a permanent administrator code
    Admin,
    /// Matched a client code still inside its validity window
    Client,
    /// Matched a client code whose validity window has elapsed
    Expired,
    /// Did not match any registered code
    Invalid,
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationKind::Admin => write!(f, "admin"),
            ValidationKind::Client => write!(f, "client"),
            ValidationKind::Expired => write!(f, "expired"),
            ValidationKind::Invalid => write!(f, "invalid"),
        }
    }
}

impl FromStr for ValidationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(ValidationKind::Admin),
            "client" => Ok(ValidationKind::Client),
            "expired" => Ok(ValidationKind::Expired),
            "invalid" => Ok(ValidationKind::Invalid),
            _ => Err(format!("Unknown validation kind: {}", s)),
        }
    }
}

/// Display status of a code in administrative listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeStatus {
    /// Permanent administrator code
    Admin,
    /// Client code with more than two days remaining (or permanent)
    Active,
    /// Client code with two days or fewer remaining
    Warning,
    /// Client code past its validity window
    Expired,
}

impl fmt::Display for CodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeStatus::Admin => write!(f, "admin"),
            CodeStatus::Active => write!(f, "active"),
            CodeStatus::Warning => write!(f, "warning"),
            CodeStatus::Expired => write!(f, "expired"),
        }
    }
}

impl FromStr for CodeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(CodeStatus::Admin),
            "active" => Ok(CodeStatus::Active),
            "warning" => Ok(CodeStatus::Warning),
            "expired" => Ok(CodeStatus::Expired),
            _ => Err(format!("Unknown code status: {}", s)),
        }
    }
}
