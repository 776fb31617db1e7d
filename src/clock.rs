//! Injected time source
//!
//! Validity computations depend on the current date, so the manager never
//! reads wall-clock time directly. It goes through the [`Clock`] capability,
//! letting tests simulate date progression deterministically.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::sync::{Arc, Mutex};

/// A source of the current time
pub trait Clock {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;

    /// The current calendar date, with the time component dropped
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock time source used in production
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to an explicit instant, advanced manually
///
/// Clones share the same instant, so a test can hold one handle while the
/// manager owns another and both observe every `advance` call.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedClock {
    /// Create a clock pinned to the given instant
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant: Arc::new(Mutex::new(instant)) }
    }

    /// Create a clock pinned to midnight UTC of the given date
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
    }

    /// Move the clock forward by the given duration
    pub fn advance(&self, duration: Duration) {
        if let Ok(mut instant) = self.instant.lock() {
            *instant = *instant + duration;
        }
    }

    /// Move the clock forward by whole days
    pub fn advance_days(&self, days: i64) {
        self.advance(Duration::days(days));
    }

    /// Pin the clock to a new instant
    pub fn set(&self, instant: DateTime<Utc>) {
        if let Ok(mut current) = self.instant.lock() {
            *current = instant;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant.lock().map(|instant| *instant).unwrap_or_else(|_| Utc::now())
    }
}
