//! Human-readable receipt identifiers.
//!
//! Format: `ZNX-<year>-<base36 millis><4 random base36 chars>`, uppercase,
//! e.g. `ZNX-2026-MGX3K2P1Q7ZA`. Uniqueness is best effort only: nothing
//! records previously issued IDs.

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

/// Scheme tag every receipt ID starts with.
pub const RECEIPT_ID_PREFIX: &str = "ZNX";

/// Number of random characters appended after the timestamp.
const RANDOM_SUFFIX_LEN: usize = 4;

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates a receipt ID for the current time using the thread-local RNG.
pub fn generate_receipt_id() -> String {
    generate_receipt_id_with(&mut rand::thread_rng(), Utc::now())
}

/// Generates a receipt ID for `at` using the given random source.
pub fn generate_receipt_id_with<R: Rng + ?Sized>(rng: &mut R, at: DateTime<Utc>) -> String {
    let millis = u64::try_from(at.timestamp_millis()).unwrap_or(0);

    let mut suffix = String::with_capacity(RANDOM_SUFFIX_LEN);
    for _ in 0..RANDOM_SUFFIX_LEN {
        let idx = rng.gen_range(0..BASE36_DIGITS.len());
        suffix.push(BASE36_DIGITS[idx] as char);
    }

    format!(
        "{RECEIPT_ID_PREFIX}-{}-{}{suffix}",
        at.year(),
        to_base36(millis)
    )
}

/// Encodes `value` in uppercase base 36.
fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // Only ASCII digits and uppercase letters were pushed.
    String::from_utf8(digits).unwrap_or_default()
}
