//! Code generation and extension behavior

use chrono::NaiveDate;
use passio_access_codes::clock::FixedClock;
use passio_access_codes::codes::{AccessCode, AccessCodeManager};
use passio_access_codes::store::MemoryStore;
use passio_access_codes::types::{SeedConfig, ValidationKind};

fn seed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 8).unwrap()
}

fn manager_at_seed_date() -> AccessCodeManager<MemoryStore, FixedClock> {
    AccessCodeManager::new(MemoryStore::new(), FixedClock::at_date(seed_date()))
}

/// Generated codes follow `<cleaned-name><year><2-digit-suffix>`
#[test]
fn test_generated_code_layout() {
    let mut manager = manager_at_seed_date();
    let generated = manager.generate("Acme Corp!", 7);

    // Non-alphanumerics stripped, truncated to 8 leading chars, then year.
    assert!(generated.code.starts_with("ACMECORP2025"));
    assert_eq!(generated.code.len(), "ACMECORP".len() + 4 + 2);
    let suffix = &generated.code["ACMECORP2025".len()..];
    assert_eq!(suffix.len(), 2);
    assert!(suffix.chars().all(|c| c.is_ascii_digit()));
}

/// A generated code validates successfully immediately after creation
#[test]
fn test_generated_code_validates_immediately() {
    let mut manager = manager_at_seed_date();
    let generated = manager.generate("Acme Corp!", 7);

    let result = manager.validate(&generated.code);
    assert!(result.valid);
    assert_eq!(result.kind, ValidationKind::Client);
    assert_eq!(result.days_remaining, Some(7));
    assert_eq!(result.message, "Access authorized for Acme Corp!");
}

/// Generated entries carry the untruncated grantee name and today's date
#[test]
fn test_generated_entry_fields() {
    let mut manager = manager_at_seed_date();
    let generated = manager.generate("Acme Corp!", 14);

    assert_eq!(generated.entry.name, "Acme Corp!");
    assert_eq!(generated.entry.created, seed_date());
    assert_eq!(generated.entry.valid_days, 14);
    assert!(!generated.entry.permanent);
    assert_eq!(generated.entry.redirect_target, "presentacion.html");
    // created + 14 days, rendered DD/MM/YYYY
    assert_eq!(generated.expiration_date, "22/10/2025");
}

/// Extending a code pushes its expiration out and revives an expired code
#[test]
fn test_extend_pushes_expiration_out() {
    let clock = FixedClock::at_date(seed_date());
    let mut manager = AccessCodeManager::new(MemoryStore::new(), clock.clone());
    let generated = manager.generate("Short Lived", 3);

    clock.advance_days(5);
    assert_eq!(manager.validate(&generated.code).kind, ValidationKind::Expired);

    assert!(manager.extend(&generated.code, 5));
    let result = manager.validate(&generated.code);
    assert!(result.valid);
    // valid_days is now 8, 5 days have passed.
    assert_eq!(result.days_remaining, Some(3));
    assert_eq!(manager.client_code(&generated.code).unwrap().valid_days, 8);
}

/// Extending an unknown code is a no-op returning false
#[test]
fn test_extend_unknown_code() {
    let mut manager = manager_at_seed_date();
    assert!(!manager.extend("GHOST202599", 5));
}

/// Extending a permanent code is a no-op returning false
#[test]
fn test_extend_permanent_code() {
    let mut seed = SeedConfig::default();
    let mut forever = AccessCode::client("FOREVER1", "Forever Client", seed_date(), 0, "presentacion.html");
    forever.permanent = true;
    seed.client_codes.push(forever);
    let mut manager = AccessCodeManager::with_seed(
        seed,
        MemoryStore::new(),
        FixedClock::at_date(seed_date()),
    );

    assert!(!manager.extend("FOREVER1", 5));
    assert_eq!(manager.client_code("FOREVER1").unwrap().valid_days, 0);
}

/// Extension lookups are case-insensitive like validation
#[test]
fn test_extend_normalizes_input() {
    let mut manager = manager_at_seed_date();
    let generated = manager.generate("Acme", 7);

    assert!(manager.extend(&generated.code.to_lowercase(), 2));
    assert_eq!(manager.client_code(&generated.code).unwrap().valid_days, 9);
}

/// Colliding derived keys silently overwrite the previous entry
#[test]
fn test_collision_overwrites_existing_entry() {
    let mut seed = SeedConfig::default();
    seed.client_codes.push(AccessCode::client(
        "ACMECORP202542",
        "Old Acme",
        seed_date(),
        3,
        "presentacion.html",
    ));
    let mut manager = AccessCodeManager::with_seed(
        seed,
        MemoryStore::new(),
        FixedClock::at_date(seed_date()),
    );
    let before = manager.client_count();

    // Generate until the random suffix collides with the seeded key.
    for _ in 0..10_000 {
        let generated = manager.generate("Acme Corp!", 7);
        if generated.code == "ACMECORP202542" {
            break;
        }
    }

    if let Some(entry) = manager.client_code("ACMECORP202542") {
        if entry.name == "Acme Corp!" {
            // Overwritten in place: the registry never grew past the
            // generated keys, and the old grantee is gone.
            assert!(manager.client_count() <= before + 100);
            return;
        }
    }
    panic!("expected the generated code to eventually collide and overwrite");
}
