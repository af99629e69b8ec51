//! # cardform
//!
//! Payment card form validation for Rust.
//!
//! Give it the raw text of a payment form (card number, `MM/YY` expiry, CVV,
//! cardholder first and last name) and it works out the card issuer,
//! checks every field, and reports a sparse map of per-field errors with
//! fixed, display-ready messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardform::clock::FixedClock;
//! use cardform::{CardData, ErrorKind, Field, Validator};
//!
//! let mut validator = Validator::with_clock(FixedClock::ymd(2025, 6, 1).unwrap());
//!
//! let form = CardData::new("4111111145551142", "08/25", "557", "John", "Doe");
//! assert!(validator.validate(form.clone()).is_empty());
//! assert!(validator.is_valid());
//!
//! let errors = validator.validate(form.with_exp_date("02/22"));
//! assert_eq!(errors.get(Field::ExpDate), Some(ErrorKind::ExpDate));
//! assert_eq!(errors.message(Field::ExpDate), Some("Invalid date"));
//! ```
//!
//! ## Field Checks
//!
//! ```rust
//! use cardform::{cvv, issuer, luhn, name, Issuer};
//!
//! assert!(luhn::contains_only_numbers("4111111145551142"));
//! assert!(luhn::is_luhn_valid("4111111145551142"));
//! assert_eq!(issuer::classify("4111111145551142"), Some(Issuer::Visa));
//!
//! assert!(cvv::is_valid_cvv(Issuer::AmericanExpress, "1234"));
//! assert!(name::is_valid_card_holder_name("Franco Jeronimo"));
//! ```
//!
//! ## Error Messages
//!
//! | Error | Fields | Message |
//! |-------|--------|---------|
//! | `CardNumber` | `cardNumber` | Invalid card number |
//! | `Cvv` | `cvv` | Invalid CVV |
//! | `CardHolderName` | `firstName`, `lastName` | Invalid field |
//! | `ExpDate` | `expDate` | Invalid date |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/deserialize form data and error maps |
//! | `generate` | Random test card generation |
//! | `cli` | Command-line tool |
//!
//! ## Security
//!
//! - `CardData` is zeroized when dropped
//! - `Debug` output masks the card number and CVV
//! - Logging goes through `tracing` and only ever records masked numbers
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod clock;
pub mod cvv;
pub mod error;
pub mod expiry;
pub mod form;
pub mod generate;
pub mod issuer;
pub mod luhn;
pub mod mask;
pub mod name;
pub mod validate;

// Re-export main types at crate root
pub use card::{CardData, Field};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CardErrors, ErrorKind};
pub use form::{PaymentForm, SubmitOutcome};
pub use issuer::Issuer;
pub use validate::{validate_card, IssuerMemory, Validator, ValidatorOptions};

// Re-export the individual field checks
pub use cvv::is_valid_cvv;
pub use expiry::is_valid_date;
pub use issuer::{is_american_express_card, is_discover_card, is_mastercard_card, is_visa_card};
pub use luhn::{contains_only_numbers, is_luhn_valid};
pub use name::is_valid_card_holder_name;
