//! Fuzz target for the Luhn checks.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cardform::luhn;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    // String form of the same digits must agree with the slice form
    let number: String = digits.iter().map(|&d| (b'0' + d) as char).collect();
    if !digits.is_empty() {
        assert_eq!(luhn::is_luhn_valid(&number), luhn::validate(&digits));
        assert!(luhn::contains_only_numbers(&number));
    }

    // Raw bytes as text must never panic
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = luhn::is_luhn_valid(text);
        let _ = luhn::contains_only_numbers(text);
    }

    // Adding check digit should make it valid
    if !digits.is_empty() && digits.len() <= 18 {
        let check = luhn::generate_check_digit(&digits);
        assert!(check <= 9, "Check digit should be 0-9");

        let mut with_check = digits.clone();
        with_check.push(check);
        assert!(luhn::validate(&with_check), "Adding check digit should make valid");
    }
});
