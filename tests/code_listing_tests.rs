//! Listing order, annotation, and statistics classification

use chrono::NaiveDate;
use passio_access_codes::clock::FixedClock;
use passio_access_codes::codes::{AccessCode, AccessCodeManager};
use passio_access_codes::store::MemoryStore;
use passio_access_codes::types::{CodeStatus, SeedConfig};
use std::collections::HashSet;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seed_date() -> NaiveDate {
    date(2025, 10, 8)
}

fn client(code: &str, name: &str, valid_days: u32) -> AccessCode {
    AccessCode::client(code, name, seed_date(), valid_days, "presentacion.html")
}

/// Every admin and client entry appears exactly once, sorted by name
#[test]
fn test_list_includes_everything_once_sorted() {
    let mut seed = SeedConfig::default();
    seed.client_codes.push(client("ZETA0001", "zeta industries", 10));
    seed.client_codes.push(client("ALPHA001", "Alpha Labs", 10));
    seed.client_codes.push(client("MANGO001", "mango & co", 10));

    let manager = AccessCodeManager::with_seed(
        seed,
        MemoryStore::new(),
        FixedClock::at_date(seed_date()),
    );
    let listing = manager.list_all();

    // 1 admin + 4 clients, no duplicates.
    assert_eq!(listing.len(), 5);
    let keys: HashSet<&str> = listing.iter().map(|a| a.entry.code.as_str()).collect();
    assert_eq!(keys.len(), 5);
    assert!(keys.contains("ADMIN2025"));
    assert!(keys.contains("DEMO2025"));

    // Ascending by name, case-insensitively.
    let names: Vec<&str> = listing.iter().map(|a| a.entry.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Administrador Principal",
            "Alpha Labs",
            "Cliente Demo",
            "mango & co",
            "zeta industries",
        ]
    );
}

/// Admin rows carry the admin status and unbounded days remaining
#[test]
fn test_admin_annotation() {
    let manager =
        AccessCodeManager::new(MemoryStore::new(), FixedClock::at_date(seed_date()));
    let listing = manager.list_all();

    let admin = listing.iter().find(|a| a.entry.code == "ADMIN2025").unwrap();
    assert_eq!(admin.status, CodeStatus::Admin);
    assert_eq!(admin.days_remaining, None);
}

/// Client rows move through active, warning, and expired as the clock advances
#[test]
fn test_client_annotation_follows_clock() {
    let clock = FixedClock::at_date(seed_date());
    let manager = AccessCodeManager::new(MemoryStore::new(), clock.clone());

    let demo = |manager: &AccessCodeManager<MemoryStore, FixedClock>| {
        manager
            .list_all()
            .into_iter()
            .find(|a| a.entry.code == "DEMO2025")
            .unwrap()
    };

    let row = demo(&manager);
    assert_eq!(row.status, CodeStatus::Active);
    assert_eq!(row.days_remaining, Some(30));

    clock.advance_days(28); // 2 days remaining
    let row = demo(&manager);
    assert_eq!(row.status, CodeStatus::Warning);
    assert_eq!(row.days_remaining, Some(2));

    clock.advance_days(3); // past the window
    let row = demo(&manager);
    assert_eq!(row.status, CodeStatus::Expired);
    assert_eq!(row.days_remaining, Some(0));
}

/// Statistics classify clients as active, warning, or expired
#[test]
fn test_statistics_classification() {
    let mut seed = SeedConfig::default();
    // Demo (30 days) stays active at the observation date below.
    seed.client_codes.push(client("LONG0001", "Long Window", 20)); // active
    seed.client_codes.push(client("EDGE0001", "Edge Window", 7)); // warning: 2 left
    seed.client_codes.push(client("GONE0001", "Gone Window", 3)); // expired
    let mut permanent = client("PERM0001", "Permanent", 0);
    permanent.permanent = true;
    seed.client_codes.push(permanent); // active

    let clock = FixedClock::at_date(seed_date());
    clock.advance_days(5);
    let manager = AccessCodeManager::with_seed(seed, MemoryStore::new(), clock);

    let stats = manager.statistics();
    assert_eq!(stats.total_admins, 1);
    assert_eq!(stats.total_clients, 5);
    assert_eq!(stats.active_clients, 3); // demo, long, permanent
    assert_eq!(stats.warning_clients, 1);
    assert_eq!(stats.expired_clients, 1);
    assert_eq!(
        stats.active_clients + stats.warning_clients + stats.expired_clients,
        stats.total_clients
    );
}
