//! Fuzz target for form validation.
//!
//! Tests that the validator never panics on arbitrary form input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use cardform::clock::FixedClock;
use cardform::{CardData, Field, Validator, ValidatorOptions};

#[derive(Arbitrary, Debug)]
struct FormInput<'a> {
    card_number: &'a str,
    exp_date: &'a str,
    cvv: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    strict: bool,
}

fuzz_target!(|inputs: Vec<FormInput<'_>>| {
    let clock = FixedClock::ymd(2025, 6, 1).unwrap();
    let strict = inputs.first().map(|i| i.strict).unwrap_or(false);
    let options = if strict {
        ValidatorOptions::strict()
    } else {
        ValidatorOptions::default()
    };
    let mut validator = Validator::with_options(clock, options);

    // Several submissions through one validator exercise the issuer memory
    for input in &inputs {
        let data = CardData::new(
            input.card_number,
            input.exp_date,
            input.cvv,
            input.first_name,
            input.last_name,
        );
        let errors = validator.validate(data);
        assert!(errors.len() <= Field::ALL.len());
        if validator.issuer().is_none() {
            assert!(!validator.errors().contains(Field::Cvv));
        }
    }
});
