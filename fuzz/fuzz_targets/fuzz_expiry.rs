//! Fuzz target for expiry date parsing.
//!
//! Tests that expiry parsing never panics on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cardform::clock::{Clock, FixedClock};
use cardform::expiry;

fuzz_target!(|data: &str| {
    let clock = FixedClock::ymd(2025, 6, 1).unwrap();

    // These should never panic
    let _ = expiry::parse_expiry_at(data, &clock);
    let valid = expiry::is_valid_date(data, &clock);

    // A parsed date prints back as typed
    if let Ok(exp) = expiry::parse_expiry_at(data, &clock) {
        let (year, month) = clock.year_month();
        assert_eq!(valid, !exp.is_expired_in(year, month));
        assert_eq!(exp.to_string(), data);
    } else {
        assert!(!valid);
    }
});
