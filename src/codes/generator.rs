//! Client code-string derivation
//!
//! Codes are derived from the grantee's name plus the current year and a
//! random two-digit suffix. The derivation is deterministic given the suffix
//! and makes no uniqueness guarantee: two grantees with similar names in the
//! same year can collide.

use rand::Rng;

/// Maximum characters of the cleaned name kept in a derived code
const NAME_PREFIX_LEN: usize = 8;

/// Strip a display name down to its code prefix
///
/// Uppercases the name, drops every character outside `A-Z0-9`, and truncates
/// to eight characters.
pub fn sanitize_name(name: &str) -> String {
    name.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(NAME_PREFIX_LEN)
        .collect()
}

/// Derive a code string from a name, a four-digit year, and a 0-99 suffix
pub fn derive_code(name: &str, year: i32, suffix: u8) -> String {
    format!("{}{}{:02}", sanitize_name(name), year, suffix)
}

/// Draw a random two-digit suffix (0-99)
pub fn random_suffix<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(0..100)
}
