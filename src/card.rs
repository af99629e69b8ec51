//! Card form input types.
//!
//! [`CardData`] is the raw record a form hands to the validator, and
//! [`Field`] names each of its five inputs.

use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One input field of the payment form.
///
/// Variants are ordered the way the validator checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Field {
    /// The card number.
    CardNumber,
    /// The card verification code.
    Cvv,
    /// The `MM/YY` expiration date.
    ExpDate,
    /// Cardholder first name.
    FirstName,
    /// Cardholder last name.
    LastName,
}

impl Field {
    /// Every field, in validation order.
    pub const ALL: [Field; 5] = [
        Field::CardNumber,
        Field::Cvv,
        Field::ExpDate,
        Field::FirstName,
        Field::LastName,
    ];

    /// Returns the key presentation layers use for this field.
    #[inline]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::CardNumber => "cardNumber",
            Self::Cvv => "cvv",
            Self::ExpDate => "expDate",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
        }
    }

    /// Returns the label shown next to the input.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CardNumber => "Card number",
            Self::Cvv => "CVV",
            Self::ExpDate => "MM/YY",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a field name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFieldError {
    input: String,
}

impl fmt::Display for ParseFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown field '{}' (expected cardNumber, cvv, expDate, firstName or lastName)",
            self.input
        )
    }
}

impl std::error::Error for ParseFieldError {}

impl FromStr for Field {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "cardnumber" | "number" => Ok(Self::CardNumber),
            "cvv" | "cvc" => Ok(Self::Cvv),
            "expdate" | "expiry" => Ok(Self::ExpDate),
            "firstname" => Ok(Self::FirstName),
            "lastname" => Ok(Self::LastName),
            _ => Err(ParseFieldError {
                input: s.to_string(),
            }),
        }
    }
}

/// Raw payment form input.
///
/// All fields are free text exactly as typed; an empty string is a legal
/// (usually invalid) value. Contents are zeroed when the record is dropped,
/// and `Debug` never prints the full card number or the CVV.
///
/// # Example
///
/// ```
/// use cardform::CardData;
///
/// let data = CardData::new("4111111145551142", "08/25", "557", "John", "Doe");
/// assert_eq!(data.cvv(), "557");
///
/// let debug = format!("{:?}", data);
/// assert!(!debug.contains("4111111145551142"));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CardData {
    card_number: String,
    exp_date: String,
    cvv: String,
    first_name: String,
    last_name: String,
}

impl CardData {
    /// Creates a record from the five raw form values.
    pub fn new(
        card_number: impl Into<String>,
        exp_date: impl Into<String>,
        cvv: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            exp_date: exp_date.into(),
            cvv: cvv.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Returns the raw card number.
    ///
    /// # Security Warning
    ///
    /// Never log the result. Use [`crate::mask::mask_number`] for display.
    #[inline]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Returns the raw expiration date.
    #[inline]
    pub fn exp_date(&self) -> &str {
        &self.exp_date
    }

    /// Returns the raw CVV.
    #[inline]
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Returns the cardholder first name.
    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the cardholder last name.
    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the raw value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CardNumber => &self.card_number,
            Field::Cvv => &self.cvv,
            Field::ExpDate => &self.exp_date,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
        }
    }

    /// Replaces the value of `field`, zeroing the previous contents.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::CardNumber => &mut self.card_number,
            Field::Cvv => &mut self.cvv,
            Field::ExpDate => &mut self.exp_date,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
        };
        slot.zeroize();
        *slot = value.into();
    }

    /// Returns a copy of this record with `field` replaced.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Returns a copy of this record with a new card number.
    pub fn with_card_number(self, value: impl Into<String>) -> Self {
        self.with(Field::CardNumber, value)
    }

    /// Returns a copy of this record with a new expiration date.
    pub fn with_exp_date(self, value: impl Into<String>) -> Self {
        self.with(Field::ExpDate, value)
    }

    /// Returns a copy of this record with a new CVV.
    pub fn with_cvv(self, value: impl Into<String>) -> Self {
        self.with(Field::Cvv, value)
    }

    /// Returns a copy of this record with a new first name.
    pub fn with_first_name(self, value: impl Into<String>) -> Self {
        self.with(Field::FirstName, value)
    }

    /// Returns a copy of this record with a new last name.
    pub fn with_last_name(self, value: impl Into<String>) -> Self {
        self.with(Field::LastName, value)
    }
}

impl fmt::Debug for CardData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardData")
            .field("card_number", &crate::mask::mask_number(&self.card_number))
            .field("exp_date", &self.exp_date)
            .field("cvv", &crate::mask::mask_secret(&self.cvv))
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}
