//! Fuzz target for cardholder name checks.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cardform::name;

fuzz_target!(|data: &str| {
    if name::is_valid_card_holder_name(data) {
        assert!(data.chars().count() < name::MAX_NAME_LENGTH);
        assert!(!data.starts_with(' ') && !data.ends_with(' '));
        assert!(!data.contains("  "));
        assert!(data.chars().all(|c| c.is_ascii_alphabetic() || c == ' '));
    }
});
