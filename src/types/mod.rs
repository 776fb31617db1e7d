//! Core types and configuration for the access-code system
//!
//! This module provides the foundational data types of the crate:
//!
//! - **Enums**: type-safe code kinds, validation outcomes, and statuses
//! - **Configuration**: built-in seed data, store keys, and CLI arguments

pub mod config;
pub mod enums;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
