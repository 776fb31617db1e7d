//! Aggregate code statistics

use serde::{Deserialize, Serialize};

/// Counts of registered codes by classification
///
/// Clients are classified the way listings color them: permanent or
/// comfortably valid codes are active, valid codes close to expiry are
/// warnings, and everything else is expired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeStatistics {
    /// Total number of admin codes
    pub total_admins: usize,
    /// Total number of client codes, regardless of validity
    pub total_clients: usize,
    /// Client codes that are permanent or have more than two days remaining
    pub active_clients: usize,
    /// Client codes past their validity window
    pub expired_clients: usize,
    /// Valid client codes with two days or fewer remaining
    pub warning_clients: usize,
}
