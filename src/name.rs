//! Cardholder name validation.
//!
//! A name is one or more runs of ASCII letters separated by single spaces:
//! `"Franco"` and `"Franco Jeronimo"` pass, while digits, punctuation,
//! leading/trailing spaces and double spaces are rejected.

use once_cell::sync::Lazy;
use regex::Regex;

/// Names must be strictly shorter than this many characters.
pub const MAX_NAME_LENGTH: usize = 255;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+(?: [A-Za-z]+)*$").expect("name pattern is valid"));

/// Returns true if `name` is a valid cardholder first or last name.
///
/// # Example
///
/// ```
/// use cardform::name::is_valid_card_holder_name;
///
/// assert!(is_valid_card_holder_name("Franco Jeronimo"));
/// assert!(!is_valid_card_holder_name("Franco12"));
/// assert!(!is_valid_card_holder_name("& Daniel"));
/// ```
pub fn is_valid_card_holder_name(name: &str) -> bool {
    name.chars().count() < MAX_NAME_LENGTH && NAME_REGEX.is_match(name)
}
