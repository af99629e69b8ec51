//! Form-side adapter around the validator.
//!
//! [`PaymentForm`] holds the live values of the five inputs, runs the
//! validator on submit, and answers "what message goes under this field".
//! Messages only change when the form is submitted; editing a field does not
//! clear its error.
//!
//! # Example
//!
//! ```
//! use cardform::clock::FixedClock;
//! use cardform::form::{PaymentForm, SubmitOutcome};
//! use cardform::Field;
//!
//! let mut form = PaymentForm::with_clock(FixedClock::ymd(2025, 1, 1).unwrap());
//! form.set_field(Field::CardNumber, "4111111145551142");
//! form.set_field(Field::ExpDate, "08/25");
//! form.set_field(Field::Cvv, "55");
//! form.set_field(Field::FirstName, "John");
//! form.set_field(Field::LastName, "Doe");
//!
//! assert!(matches!(form.submit(), SubmitOutcome::Rejected(_)));
//! assert_eq!(form.field_error(Field::Cvv), Some("Invalid CVV"));
//!
//! form.set_field(Field::Cvv, "557");
//! assert_eq!(form.field_error(Field::Cvv), Some("Invalid CVV"));
//! assert_eq!(form.submit(), SubmitOutcome::Accepted);
//! assert_eq!(form.field_error(Field::Cvv), None);
//! ```

use crate::card::{CardData, Field};
use crate::clock::{Clock, SystemClock};
use crate::error::CardErrors;
use crate::validate::{Validator, ValidatorOptions};

/// Result of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the payment action may proceed.
    Accepted,
    /// At least one field failed.
    Rejected(CardErrors),
}

impl SubmitOutcome {
    /// Returns true for [`SubmitOutcome::Accepted`].
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Returns the errors of a rejected submission.
    pub fn errors(&self) -> Option<&CardErrors> {
        match self {
            Self::Accepted => None,
            Self::Rejected(errors) => Some(errors),
        }
    }
}

/// Live state of one payment form.
#[derive(Debug, Clone)]
pub struct PaymentForm<C: Clock = SystemClock> {
    values: CardData,
    validator: Validator<C>,
    submissions: usize,
}

impl PaymentForm<SystemClock> {
    /// Creates an empty form validated against the system date.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for PaymentForm<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PaymentForm<C> {
    /// Creates an empty form with the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self::with_validator(Validator::with_clock(clock))
    }

    /// Creates an empty form with explicit validator options.
    pub fn with_options(clock: C, options: ValidatorOptions) -> Self {
        Self::with_validator(Validator::with_options(clock, options))
    }

    /// Creates an empty form around an existing validator.
    pub fn with_validator(validator: Validator<C>) -> Self {
        Self {
            values: CardData::default(),
            validator,
            submissions: 0,
        }
    }

    /// Updates one input as the user types.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
    }

    /// Returns the current raw value of an input.
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Returns the current input values.
    pub fn values(&self) -> &CardData {
        &self.values
    }

    /// Validates the current values.
    ///
    /// The same validator is reused for every submission of this form, so
    /// its issuer memory applies across submissions.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.submissions += 1;
        let errors = self.validator.validate(self.values.clone());

        if errors.is_empty() {
            tracing::info!(submission = self.submissions, "payment form accepted");
            SubmitOutcome::Accepted
        } else {
            tracing::info!(
                submission = self.submissions,
                errors = %errors,
                "payment form rejected"
            );
            SubmitOutcome::Rejected(errors.clone())
        }
    }

    /// Returns the message to show under `field` after the last submit.
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.validator.errors().message(field)
    }

    /// Returns the errors from the last submit.
    pub fn errors(&self) -> &CardErrors {
        self.validator.errors()
    }

    /// Returns true if the last submit passed. True before the first submit.
    pub fn is_valid(&self) -> bool {
        self.validator.is_valid()
    }

    /// Returns how many times the form has been submitted.
    pub fn submissions(&self) -> usize {
        self.submissions
    }

    /// Returns the underlying validator.
    pub fn validator(&self) -> &Validator<C> {
        &self.validator
    }

    /// Clears every input and error, forgetting any derived issuer.
    pub fn reset(&mut self) {
        self.values = CardData::default();
        self.validator.reset();
        self.submissions = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::ErrorKind;
    use crate::Issuer;

    fn filled_form() -> PaymentForm<FixedClock> {
        let mut form = PaymentForm::with_clock(FixedClock::ymd(2025, 2, 1).unwrap());
        form.set_field(Field::CardNumber, "5555555555554444");
        form.set_field(Field::ExpDate, "08/25");
        form.set_field(Field::Cvv, "557");
        form.set_field(Field::FirstName, "John");
        form.set_field(Field::LastName, "Doe");
        form
    }

    #[test]
    fn test_accepts_valid_form() {
        let mut form = filled_form();
        assert_eq!(form.submit(), SubmitOutcome::Accepted);
        assert!(form.is_valid());
        assert_eq!(form.validator().issuer(), Some(Issuer::Mastercard));
        for field in Field::ALL {
            assert_eq!(form.field_error(field), None);
        }
    }

    #[test]
    fn test_empty_form_is_rejected() {
        let mut form = PaymentForm::with_clock(FixedClock::ymd(2025, 2, 1).unwrap());
        let outcome = form.submit();
        let errors = outcome.errors().unwrap();

        assert_eq!(errors.len(), 4);
        assert_eq!(form.field_error(Field::CardNumber), Some("Invalid card number"));
        assert_eq!(form.field_error(Field::ExpDate), Some("Invalid date"));
        assert_eq!(form.field_error(Field::FirstName), Some("Invalid field"));
        assert_eq!(form.field_error(Field::LastName), Some("Invalid field"));
        assert_eq!(form.field_error(Field::Cvv), None);
    }

    #[test]
    fn test_errors_stay_until_next_submit() {
        let mut form = filled_form();
        form.set_field(Field::ExpDate, "01/20");
        assert!(!form.submit().is_accepted());
        assert_eq!(form.errors().get(Field::ExpDate), Some(ErrorKind::ExpDate));

        form.set_field(Field::ExpDate, "08/25");
        assert_eq!(form.value(Field::ExpDate), "08/25");
        assert_eq!(form.field_error(Field::ExpDate), Some("Invalid date"));

        assert!(form.submit().is_accepted());
        assert_eq!(form.field_error(Field::ExpDate), None);
        assert_eq!(form.submissions(), 2);
    }

    #[test]
    fn test_strict_form_does_not_reuse_issuer() {
        let clock = FixedClock::ymd(2025, 2, 1).unwrap();
        let mut form = PaymentForm::with_options(clock, ValidatorOptions::strict());
        form.set_field(Field::CardNumber, "371449635398431");
        form.set_field(Field::ExpDate, "08/25");
        form.set_field(Field::Cvv, "1234");
        form.set_field(Field::FirstName, "John");
        form.set_field(Field::LastName, "Doe");
        assert!(form.submit().is_accepted());

        form.set_field(Field::CardNumber, "");
        form.set_field(Field::Cvv, "1");
        let outcome = form.submit();
        assert_eq!(
            outcome.errors(),
            Some(&CardErrors::from([(Field::CardNumber, ErrorKind::CardNumber)]))
        );
    }

    #[test]
    fn test_reset() {
        let mut form = filled_form();
        form.set_field(Field::Cvv, "");
        form.submit();
        form.reset();

        assert!(form.is_valid());
        assert_eq!(form.submissions(), 0);
        assert_eq!(form.values(), &CardData::default());
        assert_eq!(form.validator().issuer(), None);
    }
}
