//! Test card number generation.
//!
//! Generated numbers pass the Luhn check and classify to the requested
//! issuer, but they are not connected to real accounts. Use them for tests
//! and demos only.
//!
//! # Example
//!
//! ```
//! use cardform::generate::generate_card_deterministic;
//! use cardform::issuer::classify;
//! use cardform::luhn::is_luhn_valid;
//! use cardform::Issuer;
//!
//! let number = generate_card_deterministic(Issuer::Discover);
//! assert!(is_luhn_valid(&number));
//! assert_eq!(classify(&number), Some(Issuer::Discover));
//! ```

use crate::luhn;
use crate::Issuer;

#[cfg(feature = "generate")]
use rand::Rng;

/// Returns the prefix used when generating numbers for `issuer`.
pub const fn prefix_for_issuer(issuer: Issuer) -> &'static str {
    match issuer {
        Issuer::Visa => "4",
        Issuer::Mastercard => "51",
        Issuer::AmericanExpress => "37",
        Issuer::Discover => "6011",
    }
}

/// Returns the card number length used when generating for `issuer`.
pub const fn default_length(issuer: Issuer) -> usize {
    match issuer {
        Issuer::AmericanExpress => 15,
        _ => 16,
    }
}

/// Generates a valid number for `issuer` using random digits.
///
/// Requires the `generate` feature (which enables the `rand` dependency).
#[cfg(feature = "generate")]
pub fn generate_card(issuer: Issuer) -> String {
    let mut rng = rand::thread_rng();
    generate_card_with_rng(prefix_for_issuer(issuer), default_length(issuer), &mut rng)
}

/// Generates a valid number with the given prefix and length from `rng`.
///
/// Non-digit characters in `prefix` are ignored.
///
/// # Panics
///
/// Panics if the prefix has as many digits as `length` or more.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> String {
    let mut digits = prefix_digits(prefix, length);

    while digits.len() < length - 1 {
        digits.push(rng.gen_range(0..10));
    }

    finish(digits)
}

/// Generates a valid number for `issuer` without randomness.
///
/// The body is zero-filled, so the same issuer always yields the same number.
pub fn generate_card_deterministic(issuer: Issuer) -> String {
    generate_card_deterministic_with_prefix(prefix_for_issuer(issuer), default_length(issuer))
}

/// Generates a valid, zero-filled number with a custom prefix and length.
///
/// # Panics
///
/// Panics if the prefix has as many digits as `length` or more.
pub fn generate_card_deterministic_with_prefix(prefix: &str, length: usize) -> String {
    let mut digits = prefix_digits(prefix, length);
    digits.resize(length - 1, 0);
    finish(digits)
}

fn prefix_digits(prefix: &str, length: usize) -> Vec<u8> {
    let digits: Vec<u8> = prefix
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    assert!(
        digits.len() < length,
        "Prefix length must be less than total length"
    );

    digits
}

fn finish(mut digits: Vec<u8>) -> String {
    let check_digit = luhn::generate_check_digit(&digits);
    digits.push(check_digit);
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}
