//! Validation behavior across the admin and client registries

use chrono::NaiveDate;
use passio_access_codes::clock::FixedClock;
use passio_access_codes::codes::{AccessCode, AccessCodeManager};
use passio_access_codes::store::MemoryStore;
use passio_access_codes::types::{SeedConfig, ValidationKind};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seed_date() -> NaiveDate {
    date(2025, 10, 8)
}

/// Admin codes validate regardless of how far the clock has moved
#[test]
fn test_admin_codes_never_expire() {
    let clock = FixedClock::at_date(seed_date());
    let manager = AccessCodeManager::new(MemoryStore::new(), clock.clone());

    for years in [0, 1, 10, 50] {
        clock.advance_days(years * 365);
        let result = manager.validate("ADMIN2025");
        assert!(result.valid);
        assert_eq!(result.kind, ValidationKind::Admin);
        assert_eq!(result.days_remaining, None);
    }
}

/// Permanent client codes are always valid with unbounded days remaining
#[test]
fn test_permanent_client_code_is_unbounded() {
    let mut seed = SeedConfig::default();
    let mut forever = AccessCode::client("FOREVER1", "Forever Client", seed_date(), 0, "presentacion.html");
    forever.permanent = true;
    seed.client_codes.push(forever);

    let clock = FixedClock::at_date(seed_date());
    let manager = AccessCodeManager::with_seed(seed, MemoryStore::new(), clock.clone());

    clock.advance_days(10_000);
    let result = manager.validate("FOREVER1");
    assert!(result.valid);
    assert_eq!(result.kind, ValidationKind::Client);
    assert_eq!(result.days_remaining, None);
}

/// A code created exactly `valid_days` ago is still valid with zero days left
#[test]
fn test_last_day_of_window_is_valid() {
    let clock = FixedClock::at_date(seed_date());
    let manager = AccessCodeManager::new(MemoryStore::new(), clock.clone());

    // The demo code is valid for 30 days from its creation date.
    clock.advance_days(30);
    let result = manager.validate("DEMO2025");
    assert!(result.valid);
    assert_eq!(result.kind, ValidationKind::Client);
    assert_eq!(result.days_remaining, Some(0));
}

/// A code created `valid_days + 1` days ago has expired
#[test]
fn test_day_after_window_is_expired() {
    let clock = FixedClock::at_date(seed_date());
    let manager = AccessCodeManager::new(MemoryStore::new(), clock.clone());

    clock.advance_days(31);
    let result = manager.validate("DEMO2025");
    assert!(!result.valid);
    assert_eq!(result.kind, ValidationKind::Expired);
    assert_eq!(result.message, "Code expired, contact your representative");
}

/// Validation trims and uppercases the presented code
#[test]
fn test_input_normalization() {
    let manager =
        AccessCodeManager::new(MemoryStore::new(), FixedClock::at_date(seed_date()));

    assert!(manager.validate("demo2025").valid);
    assert!(manager.validate("  Demo2025  ").valid);
    assert!(manager.validate("\tADMIN2025\n").valid);
}

/// Unknown codes are invalid, not errors
#[test]
fn test_unknown_code_is_invalid() {
    let manager =
        AccessCodeManager::new(MemoryStore::new(), FixedClock::at_date(seed_date()));

    let result = manager.validate("NOSUCHCODE");
    assert!(!result.valid);
    assert_eq!(result.kind, ValidationKind::Invalid);
    assert_eq!(result.message, "Incorrect code");
    assert!(result.code.is_none());
}

/// The validity window counts whole calendar days, not month offsets
#[test]
fn test_thirty_day_window_from_january_first() {
    let mut seed = SeedConfig::default();
    seed.client_codes.push(AccessCode::client(
        "JANUARY1",
        "January Client",
        date(2025, 1, 1),
        30,
        "presentacion.html",
    ));
    let clock = FixedClock::at_date(date(2025, 1, 31));
    let manager = AccessCodeManager::with_seed(seed, MemoryStore::new(), clock.clone());

    // Day 30 (Jan 31) is the last valid day; Feb 1 is out.
    assert!(manager.validate("JANUARY1").valid);
    clock.advance_days(1);
    assert_eq!(manager.validate("JANUARY1").kind, ValidationKind::Expired);
}
