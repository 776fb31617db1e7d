//! The access-code entity and its validity arithmetic
//!
//! Validity is a pure function of the creation date, the validity window, and
//! a supplied "today"; nothing here touches the wall clock. The window is
//! `[created, created + valid_days]` inclusive, measured in whole calendar
//! days: a 30-day code created Jan 1 expires exactly on day 31, never "one
//! month later".

use crate::types::{CodeKind, CodeStatus, WARNING_THRESHOLD_DAYS};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// One code's access rights
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessCode {
    /// Unique code key, normalized to uppercase and trimmed
    pub code: String,
    /// Whether this is an admin or client code
    pub kind: CodeKind,
    /// Display name of the grantee
    pub name: String,
    /// Calendar date the code became active
    pub created: NaiveDate,
    /// Permanent codes never expire; `valid_days` is irrelevant for them
    pub permanent: bool,
    /// Days of validity from `created`, when not permanent
    pub valid_days: u32,
    /// Destination resource granted on successful validation
    pub redirect_target: String,
}

impl AccessCode {
    /// Create a permanent administrator code
    pub fn admin(
        code: impl Into<String>,
        name: impl Into<String>,
        created: NaiveDate,
        redirect_target: impl Into<String>,
    ) -> Self {
        Self {
            code: normalize_code(&code.into()),
            kind: CodeKind::Admin,
            name: name.into(),
            created,
            permanent: true,
            valid_days: 0,
            redirect_target: redirect_target.into(),
        }
    }

    /// Create a time-boxed client code
    pub fn client(
        code: impl Into<String>,
        name: impl Into<String>,
        created: NaiveDate,
        valid_days: u32,
        redirect_target: impl Into<String>,
    ) -> Self {
        Self {
            code: normalize_code(&code.into()),
            kind: CodeKind::Client,
            name: name.into(),
            created,
            permanent: false,
            valid_days,
            redirect_target: redirect_target.into(),
        }
    }

    /// Whole calendar days elapsed between `created` and `today`
    ///
    /// Negative when the code's creation date lies in the future.
    pub fn days_passed(&self, today: NaiveDate) -> i64 {
        (today - self.created).num_days()
    }

    /// Whether the code is inside its validity window on `today`
    pub fn is_valid_on(&self, today: NaiveDate) -> bool {
        self.permanent || self.days_passed(today) <= i64::from(self.valid_days)
    }

    /// Days of validity left on `today`
    ///
    /// `None` for permanent codes (unbounded); never below zero otherwise.
    pub fn days_remaining_on(&self, today: NaiveDate) -> Option<i64> {
        if self.permanent {
            None
        } else {
            Some((i64::from(self.valid_days) - self.days_passed(today)).max(0))
        }
    }

    /// Display status of the code on `today`
    pub fn status_on(&self, today: NaiveDate) -> CodeStatus {
        if self.kind == CodeKind::Admin {
            return CodeStatus::Admin;
        }
        if self.permanent {
            return CodeStatus::Active;
        }
        if !self.is_valid_on(today) {
            return CodeStatus::Expired;
        }
        match self.days_remaining_on(today) {
            Some(days) if days <= WARNING_THRESHOLD_DAYS => CodeStatus::Warning,
            _ => CodeStatus::Active,
        }
    }

    /// The last calendar date the code is valid, `None` when permanent
    pub fn expires_on(&self) -> Option<NaiveDate> {
        if self.permanent {
            None
        } else {
            Some(self.created + Duration::days(i64::from(self.valid_days)))
        }
    }

    /// Human-readable expiration date (`DD/MM/YYYY`), or "never expires"
    pub fn expiration_display(&self) -> String {
        match self.expires_on() {
            Some(date) => date.format("%d/%m/%Y").to_string(),
            None => "never expires".to_string(),
        }
    }
}

/// Normalize a code key: trim surrounding whitespace and uppercase
pub fn normalize_code(input: &str) -> String {
    input.trim().to_uppercase()
}
