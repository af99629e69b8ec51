//! Validation engine for payment form submissions.
//!
//! A [`Validator`] lives as long as the form it serves. Every call to
//! [`Validator::validate`] runs the full check sequence:
//!
//! 1. Reset the error map and store the submitted [`CardData`]
//! 2. Card number: digits only, Luhn checksum, issuer classification
//! 3. CVV: length for the known issuer (skipped while no issuer is known)
//! 4. Expiration date: `MM/YY`, current month or later
//! 5. First and last name, each checked on its own
//!
//! Failures never stop later steps; each one becomes an entry in the
//! returned [`CardErrors`].
//!
//! # Issuer memory
//!
//! By default the last issuer derived from a good card number is kept across
//! calls, so a later submission with a broken number still has its CVV
//! checked against that issuer. [`IssuerMemory::Reset`] forgets the issuer at
//! the start of every call instead.

use crate::card::{CardData, Field};
use crate::clock::{Clock, SystemClock};
use crate::error::{CardErrors, ErrorKind};
use crate::issuer::{self, Issuer};
use crate::mask::mask_number;
use crate::{cvv, expiry, luhn, name};

/// What the validator does with the issuer derived by an earlier call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssuerMemory {
    /// Keep the last successfully derived issuer until a new one is derived.
    #[default]
    Retain,
    /// Forget the issuer at the start of every call.
    Reset,
}

/// Behavior switches for a [`Validator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidatorOptions {
    /// Issuer carry-over policy between calls.
    pub issuer_memory: IssuerMemory,
}

impl ValidatorOptions {
    /// Options where every call stands on its own.
    pub const fn strict() -> Self {
        Self {
            issuer_memory: IssuerMemory::Reset,
        }
    }
}

/// Stateful validator for one payment form.
///
/// # Example
///
/// ```
/// use cardform::clock::FixedClock;
/// use cardform::{CardData, ErrorKind, Field, Issuer, Validator};
///
/// let mut validator = Validator::with_clock(FixedClock::ymd(2025, 1, 1).unwrap());
///
/// let data = CardData::new("4111111145551142", "08/25", "557", "John", "Doe");
/// assert!(validator.validate(data.clone()).is_empty());
/// assert!(validator.is_valid());
/// assert_eq!(validator.issuer(), Some(Issuer::Visa));
///
/// let errors = validator.validate(data.with_cvv("1234"));
/// assert_eq!(errors.get(Field::Cvv), Some(ErrorKind::Cvv));
/// assert!(!validator.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct Validator<C: Clock = SystemClock> {
    card_data: CardData,
    errors: CardErrors,
    issuer: Option<Issuer>,
    clock: C,
    options: ValidatorOptions,
}

impl Validator<SystemClock> {
    /// Creates a validator that reads the local system date.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Validator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Validator<C> {
    /// Creates a validator with default options and the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self::with_options(clock, ValidatorOptions::default())
    }

    /// Creates a validator with explicit options.
    pub fn with_options(clock: C, options: ValidatorOptions) -> Self {
        Self {
            card_data: CardData::default(),
            errors: CardErrors::new(),
            issuer: None,
            clock,
            options,
        }
    }

    /// Validates a submission and returns the per-field errors.
    ///
    /// The previous error map is discarded. The returned map is also
    /// available through [`Validator::errors`] until the next call.
    pub fn validate(&mut self, card_data: CardData) -> &CardErrors {
        self.errors.clear();
        if self.options.issuer_memory == IssuerMemory::Reset {
            self.issuer = None;
        }
        self.card_data = card_data;

        tracing::trace!(
            card_number = %mask_number(self.card_data.card_number()),
            "validating card form"
        );

        self.validate_card_number();
        self.validate_cvv();
        self.validate_exp_date();
        self.validate_card_holder_name();

        tracing::debug!(
            error_count = self.errors.len(),
            issuer = ?self.issuer,
            "card form validated"
        );

        &self.errors
    }

    fn validate_card_number(&mut self) {
        let number = self.card_data.card_number();

        if !luhn::contains_only_numbers(number) {
            tracing::debug!("card number is not numeric");
            self.errors.insert(Field::CardNumber, ErrorKind::CardNumber);
            return;
        }

        if !luhn::is_luhn_valid(number) {
            tracing::debug!(card_number = %mask_number(number), "card number failed Luhn check");
            self.errors.insert(Field::CardNumber, ErrorKind::CardNumber);
            return;
        }

        match issuer::classify(number) {
            Some(issuer) => self.issuer = Some(issuer),
            None => {
                tracing::debug!(
                    card_number = %mask_number(number),
                    length = number.len(),
                    "card number matches no issuer"
                );
                self.errors.insert(Field::CardNumber, ErrorKind::CardNumber);
            }
        }
    }

    fn validate_cvv(&mut self) {
        let Some(issuer) = self.issuer else {
            tracing::debug!("no issuer known, skipping CVV check");
            return;
        };

        if !cvv::is_valid_cvv(issuer, self.card_data.cvv()) {
            tracing::debug!(%issuer, expected = issuer.cvv_length(), "CVV has wrong length");
            self.errors.insert(Field::Cvv, ErrorKind::Cvv);
        }
    }

    fn validate_exp_date(&mut self) {
        if let Err(e) = expiry::validate_expiry_at(self.card_data.exp_date(), &self.clock) {
            tracing::debug!(reason = %e, "expiration date rejected");
            self.errors.insert(Field::ExpDate, ErrorKind::ExpDate);
        }
    }

    fn validate_card_holder_name(&mut self) {
        for field in [Field::FirstName, Field::LastName] {
            if !name::is_valid_card_holder_name(self.card_data.get(field)) {
                tracing::debug!(%field, "cardholder name rejected");
                self.errors.insert(field, ErrorKind::CardHolderName);
            }
        }
    }

    /// Drops the stored record, errors and issuer, as if newly constructed.
    pub fn reset(&mut self) {
        self.card_data = CardData::default();
        self.errors.clear();
        self.issuer = None;
    }

    /// Returns true if the most recent [`Validator::validate`] call found no
    /// errors. A validator that has not validated anything yet reports true.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the errors from the most recent call.
    #[inline]
    pub fn errors(&self) -> &CardErrors {
        &self.errors
    }

    /// Returns the issuer currently known to the validator.
    #[inline]
    pub fn issuer(&self) -> Option<Issuer> {
        self.issuer
    }

    /// Returns the most recently submitted record.
    #[inline]
    pub fn card_data(&self) -> &CardData {
        &self.card_data
    }

    /// Returns the options this validator was built with.
    #[inline]
    pub fn options(&self) -> ValidatorOptions {
        self.options
    }

    /// Returns the clock used for expiry checks.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

/// Validates one submission with no carried-over state.
///
/// Equivalent to a fresh [`Validator`] using [`ValidatorOptions::strict`].
///
/// # Example
///
/// ```
/// use cardform::clock::FixedClock;
/// use cardform::{validate_card, CardData, Field};
///
/// let clock = FixedClock::ymd(2025, 1, 1).unwrap();
/// let data = CardData::new("4888556622578475", "08/25", "557", "John", "Doe");
///
/// let errors = validate_card(data, &clock);
/// assert_eq!(errors.len(), 1);
/// assert!(errors.contains(Field::CardNumber));
/// ```
pub fn validate_card<C: Clock>(card_data: CardData, clock: &C) -> CardErrors {
    let mut validator = Validator::with_options(clock, ValidatorOptions::strict());
    validator.validate(card_data);
    validator.errors
}
