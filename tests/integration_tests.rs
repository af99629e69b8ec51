//! Integration tests for cardform.
//!
//! These cover full form submissions, including state carried between calls
//! on one validator instance.

use cardform::clock::FixedClock;
use cardform::form::{PaymentForm, SubmitOutcome};
use cardform::generate::{
    default_length, generate_card_deterministic_with_prefix, prefix_for_issuer,
};
use cardform::{
    luhn, validate_card, CardData, CardErrors, ErrorKind, Field, Issuer, Validator,
    ValidatorOptions,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// TEST DATA
// =============================================================================

mod test_cards {
    pub const VISA: &str = "4111111145551142";
    pub const VISA_13: &str = "4222222222222";
    pub const VISA_BAD_LUHN: &str = "4888556622578475";
    pub const MASTERCARD: &str = "5555555555554444";
    pub const AMEX: &str = "371449635398431";
    pub const AMEX_ZEROES: &str = "370000000000002";
    pub const DISCOVER: &str = "6011111111111117";
    /// Passes Luhn but matches no issuer rule
    pub const UNCLASSIFIED: &str = "323123123123";
}

/// A date on which "08/25" is still in the future.
fn clock() -> FixedClock {
    FixedClock::ymd(2025, 6, 1).unwrap()
}

fn valid_form() -> CardData {
    CardData::new(test_cards::VISA, "08/25", "557", "John", "Doe")
}

// =============================================================================
// END-TO-END SCENARIOS
// =============================================================================

#[test]
fn test_valid_visa_form() {
    let mut validator = Validator::with_clock(clock());
    assert_eq!(*validator.validate(valid_form()), CardErrors::new());
    assert!(validator.is_valid());
}

#[test]
fn test_valid_form_for_every_issuer() {
    let mut validator = Validator::with_clock(clock());

    for (number, cvv, issuer) in [
        (test_cards::VISA, "557", Issuer::Visa),
        (test_cards::VISA_13, "557", Issuer::Visa),
        (test_cards::MASTERCARD, "557", Issuer::Mastercard),
        (test_cards::AMEX, "1234", Issuer::AmericanExpress),
        (test_cards::DISCOVER, "557", Issuer::Discover),
    ] {
        let form = valid_form().with_card_number(number).with_cvv(cvv);
        assert!(validator.validate(form).is_empty(), "{} should be valid", number);
        assert!(validator.is_valid());
        assert_eq!(validator.issuer(), Some(issuer));
    }
}

#[test]
fn test_luhn_failure_reports_card_number() {
    let mut validator = Validator::with_clock(clock());
    let errors = validator.validate(valid_form().with_card_number(test_cards::VISA_BAD_LUHN));
    assert_eq!(
        *errors,
        CardErrors::from([(Field::CardNumber, ErrorKind::CardNumber)])
    );
    assert!(!validator.is_valid());
}

#[test]
fn test_past_expiry_reports_exp_date() {
    let mut validator = Validator::with_clock(clock());
    let errors = validator.validate(valid_form().with_exp_date("02/22"));
    assert_eq!(*errors, CardErrors::from([(Field::ExpDate, ErrorKind::ExpDate)]));
}

#[test]
fn test_four_digit_cvv_on_visa() {
    let mut validator = Validator::with_clock(clock());
    let errors = validator.validate(valid_form().with_cvv("1234"));
    assert_eq!(*errors, CardErrors::from([(Field::Cvv, ErrorKind::Cvv)]));
}

#[test]
fn test_three_digit_cvv_on_amex() {
    let mut validator = Validator::with_clock(clock());
    let errors = validator.validate(
        valid_form()
            .with_card_number(test_cards::AMEX_ZEROES)
            .with_cvv("123"),
    );
    assert_eq!(*errors, CardErrors::from([(Field::Cvv, ErrorKind::Cvv)]));
    assert_eq!(validator.issuer(), Some(Issuer::AmericanExpress));
}

#[test]
fn test_wrong_first_name() {
    let mut validator = Validator::with_clock(clock());
    let errors = validator.validate(valid_form().with_first_name("Amy 22"));
    assert_eq!(
        *errors,
        CardErrors::from([(Field::FirstName, ErrorKind::CardHolderName)])
    );
}

#[test]
fn test_errors_accumulate_with_remembered_issuer() {
    // One validator for a whole form session, as a form would hold it
    let mut validator = Validator::with_clock(clock());

    // An Amex submission leaves the issuer set to American Express
    let amex = valid_form()
        .with_card_number(test_cards::AMEX_ZEROES)
        .with_cvv("1234");
    assert!(validator.validate(amex).is_empty());

    // The next number matches no issuer, so the Amex issuer is kept and the
    // 3-digit CVV is checked against it
    let errors = validator.validate(
        valid_form()
            .with_card_number(test_cards::UNCLASSIFIED)
            .with_exp_date("02/D2")
            .with_last_name("& Daniel"),
    );

    assert_eq!(
        *errors,
        CardErrors::from([
            (Field::CardNumber, ErrorKind::CardNumber),
            (Field::ExpDate, ErrorKind::ExpDate),
            (Field::LastName, ErrorKind::CardHolderName),
            (Field::Cvv, ErrorKind::Cvv),
        ])
    );
    assert_eq!(validator.issuer(), Some(Issuer::AmericanExpress));
}

#[test]
fn test_strict_validator_skips_cvv_without_issuer() {
    let mut validator = Validator::with_options(clock(), ValidatorOptions::strict());
    let amex = valid_form()
        .with_card_number(test_cards::AMEX_ZEROES)
        .with_cvv("1234");
    assert!(validator.validate(amex).is_empty());

    let errors = validator.validate(
        valid_form()
            .with_card_number(test_cards::UNCLASSIFIED)
            .with_exp_date("02/D2")
            .with_last_name("& Daniel"),
    );

    assert_eq!(
        *errors,
        CardErrors::from([
            (Field::CardNumber, ErrorKind::CardNumber),
            (Field::ExpDate, ErrorKind::ExpDate),
            (Field::LastName, ErrorKind::CardHolderName),
        ])
    );
}

#[test]
fn test_first_submission_without_issuer_has_no_cvv_error() {
    let errors = validate_card(
        valid_form()
            .with_card_number(test_cards::UNCLASSIFIED)
            .with_cvv(""),
        &clock(),
    );
    assert_eq!(
        errors,
        CardErrors::from([(Field::CardNumber, ErrorKind::CardNumber)])
    );
}

#[test]
fn test_every_field_invalid() {
    let mut validator = Validator::with_clock(clock());
    validator.validate(valid_form());

    let errors = validator.validate(CardData::new("4111x", "13/25", "", " John", "Doe "));
    assert_eq!(errors.len(), 5);
    assert_eq!(errors.message(Field::CardNumber), Some("Invalid card number"));
    assert_eq!(errors.message(Field::Cvv), Some("Invalid CVV"));
    assert_eq!(errors.message(Field::ExpDate), Some("Invalid date"));
    assert_eq!(errors.message(Field::FirstName), Some("Invalid field"));
    assert_eq!(errors.message(Field::LastName), Some("Invalid field"));
}

#[test]
fn test_validity_reflects_last_call_only() {
    let mut validator = Validator::with_clock(clock());
    validator.validate(valid_form().with_cvv(""));
    assert!(!validator.is_valid());
    validator.validate(valid_form());
    assert!(validator.is_valid());
    validator.validate(valid_form().with_first_name(""));
    assert!(!validator.is_valid());
}

// =============================================================================
// EXPIRY BOUNDARIES
// =============================================================================

#[test]
fn test_expiry_month_boundaries() {
    let data = valid_form().with_exp_date("06/25");

    let on_first_day = FixedClock::ymd(2025, 6, 1).unwrap();
    let on_last_day = FixedClock::ymd(2025, 6, 30).unwrap();
    let next_month = FixedClock::ymd(2025, 7, 1).unwrap();

    assert!(validate_card(data.clone(), &on_first_day).is_empty());
    assert!(validate_card(data.clone(), &on_last_day).is_empty());
    assert_eq!(
        validate_card(data, &next_month),
        CardErrors::from([(Field::ExpDate, ErrorKind::ExpDate)])
    );
}

#[test]
fn test_expiry_across_year_boundary() {
    let december = FixedClock::ymd(2025, 12, 31).unwrap();
    assert!(validate_card(valid_form().with_exp_date("01/26"), &december).is_empty());
    assert!(!validate_card(valid_form().with_exp_date("11/25"), &december).is_empty());
}

// =============================================================================
// FORM ADAPTER
// =============================================================================

#[test]
fn test_payment_form_flow() {
    let mut form = PaymentForm::with_clock(clock());
    form.set_field(Field::CardNumber, test_cards::VISA);
    form.set_field(Field::ExpDate, "08/25");
    form.set_field(Field::Cvv, "557");
    form.set_field(Field::FirstName, "John");
    form.set_field(Field::LastName, "Doe 3rd");

    let outcome = form.submit();
    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(CardErrors::from([(
            Field::LastName,
            ErrorKind::CardHolderName
        )]))
    );
    assert_eq!(form.field_error(Field::LastName), Some("Invalid field"));

    form.set_field(Field::LastName, "Doe");
    assert!(form.submit().is_accepted());
    assert!(form.is_valid());
}

// =============================================================================
// RANDOMIZED CARDS
// =============================================================================

/// Builds a Luhn-valid number for `issuer` with a random body.
fn random_number(issuer: Issuer, rng: &mut StdRng) -> String {
    let prefix = prefix_for_issuer(issuer);
    let length = default_length(issuer);
    let body: String = (prefix.len()..length - 1)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();
    generate_card_deterministic_with_prefix(&format!("{}{}", prefix, body), length)
}

#[test]
fn test_random_numbers_validate_for_every_issuer() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut validator = Validator::with_clock(clock());

    for issuer in Issuer::ALL {
        let cvv = "7".repeat(issuer.cvv_length());
        for _ in 0..50 {
            let number = random_number(issuer, &mut rng);
            let form = valid_form().with_card_number(number.as_str()).with_cvv(cvv.as_str());
            assert!(validator.validate(form).is_empty(), "{} should be valid", number);
            assert_eq!(validator.issuer(), Some(issuer));
        }
    }
}

#[test]
fn test_random_numbers_with_wrong_check_digit_fail() {
    let mut rng = StdRng::seed_from_u64(42);

    for issuer in Issuer::ALL {
        for _ in 0..50 {
            let mut number = random_number(issuer, &mut rng);
            let check = number.pop().and_then(|c| c.to_digit(10)).unwrap();
            number.push(char::from_digit((check + 1) % 10, 10).unwrap());

            assert!(!luhn::is_luhn_valid(&number), "{} should fail Luhn", number);
            let errors = validate_card(valid_form().with_card_number(number.as_str()), &clock());
            assert_eq!(errors.get(Field::CardNumber), Some(ErrorKind::CardNumber));
        }
    }
}

#[cfg(feature = "generate")]
#[test]
fn test_seeded_generation_is_reproducible() {
    use cardform::generate::generate_card_with_rng;
    use cardform::issuer::classify;

    let first = generate_card_with_rng("37", 15, &mut StdRng::seed_from_u64(7));
    let second = generate_card_with_rng("37", 15, &mut StdRng::seed_from_u64(7));

    assert_eq!(first, second);
    assert!(luhn::is_luhn_valid(&first));
    assert_eq!(classify(&first), Some(Issuer::AmericanExpress));
}

// =============================================================================
// SECURITY
// =============================================================================

#[test]
fn test_debug_never_exposes_card_data() {
    let mut validator = Validator::with_clock(clock());
    validator.validate(valid_form());

    let debug = format!("{:?}", validator);
    assert!(!debug.contains(test_cards::VISA));
    assert!(!debug.contains("557"));
}

#[cfg(feature = "serde")]
mod serde_shapes {
    use super::*;

    #[test]
    fn test_errors_serialize_as_message_map() {
        let errors = CardErrors::from([
            (Field::CardNumber, ErrorKind::CardNumber),
            (Field::LastName, ErrorKind::CardHolderName),
        ]);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cardNumber": "Invalid card number",
                "lastName": "Invalid field",
            })
        );
    }

    #[test]
    fn test_card_data_uses_camel_case_keys() {
        let json = r#"{"cardNumber":"4111111145551142","expDate":"08/25","cvv":"557","firstName":"John","lastName":"Doe"}"#;
        let data: CardData = serde_json::from_str(json).unwrap();
        assert_eq!(data, valid_form());
    }

    #[test]
    fn test_issuer_serializes_screaming_case() {
        let json = serde_json::to_string(&Issuer::AmericanExpress).unwrap();
        assert_eq!(json, "\"AMERICAN_EXPRESS\"");
    }
}
