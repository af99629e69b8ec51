//! Card issuer classification from prefix and length.
//!
//! Classification is pattern based, not a BIN database lookup. Four networks
//! are recognized:
//!
//! | Issuer | Prefix | Length | CVV |
//! |--------|--------|--------|-----|
//! | Visa | 4 | 13, 16 | 3 |
//! | Mastercard | 5 | 16 | 3 |
//! | American Express | 34, 37 | 15 | 4 |
//! | Discover | 6 | 16 | 3 |
//!
//! # Example
//!
//! ```
//! use cardform::issuer::{classify, Issuer};
//!
//! assert_eq!(classify("4111111111111111"), Some(Issuer::Visa));
//! assert_eq!(classify("371449635398431"), Some(Issuer::AmericanExpress));
//! assert_eq!(classify("323123123123"), None);
//! ```

use std::fmt;
use std::str::FromStr;

/// Card networks recognized by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Issuer {
    /// Visa - Prefix 4, lengths 13, 16
    Visa,
    /// Mastercard - Prefix 5, length 16
    Mastercard,
    /// American Express - Prefix 34, 37, length 15
    AmericanExpress,
    /// Discover - Prefix 6, length 16
    Discover,
}

impl Issuer {
    /// Every issuer, in classification priority order.
    pub const ALL: [Issuer; 4] = [
        Issuer::Mastercard,
        Issuer::Visa,
        Issuer::Discover,
        Issuer::AmericanExpress,
    ];

    /// Returns a human-readable name for the issuer.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::AmericanExpress => "American Express",
            Self::Discover => "Discover",
        }
    }

    /// Returns the number of CVV digits printed on cards of this issuer.
    #[inline]
    pub const fn cvv_length(&self) -> usize {
        match self {
            Self::AmericanExpress => 4,
            _ => 3,
        }
    }

    /// Returns the card number lengths accepted for this issuer.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [usize] {
        match self {
            Self::Visa => &[13, 16],
            Self::Mastercard => &[16],
            Self::AmericanExpress => &[15],
            Self::Discover => &[16],
        }
    }

    /// Returns true if `number` matches this issuer's prefix and length rule.
    #[inline]
    pub fn matches(&self, number: &str) -> bool {
        match self {
            Self::Visa => is_visa_card(number),
            Self::Mastercard => is_mastercard_card(number),
            Self::AmericanExpress => is_american_express_card(number),
            Self::Discover => is_discover_card(number),
        }
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when an issuer name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssuerError {
    input: String,
}

impl fmt::Display for ParseIssuerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown issuer '{}' (expected visa, mastercard, amex or discover)",
            self.input
        )
    }
}

impl std::error::Error for ParseIssuerError {}

impl FromStr for Issuer {
    type Err = ParseIssuerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "visa" => Ok(Self::Visa),
            "mastercard" | "mc" => Ok(Self::Mastercard),
            "americanexpress" | "amex" => Ok(Self::AmericanExpress),
            "discover" => Ok(Self::Discover),
            _ => Err(ParseIssuerError {
                input: s.to_string(),
            }),
        }
    }
}

/// Returns true if `number` starts with '4' and is 13 or 16 characters long.
#[inline]
pub fn is_visa_card(number: &str) -> bool {
    matches!(number.as_bytes(), [b'4', ..]) && matches!(number.len(), 13 | 16)
}

/// Returns true if `number` starts with '5' and is 16 characters long.
#[inline]
pub fn is_mastercard_card(number: &str) -> bool {
    matches!(number.as_bytes(), [b'5', ..]) && number.len() == 16
}

/// Returns true if `number` starts with "34" or "37" and is 15 characters long.
#[inline]
pub fn is_american_express_card(number: &str) -> bool {
    matches!(number.as_bytes(), [b'3', b'4' | b'7', ..]) && number.len() == 15
}

/// Returns true if `number` starts with '6' and is 16 characters long.
#[inline]
pub fn is_discover_card(number: &str) -> bool {
    matches!(number.as_bytes(), [b'6', ..]) && number.len() == 16
}

/// Classifies a numeric string into an issuer.
///
/// Predicates are tried in the order Mastercard, Visa, Discover, American
/// Express and the first match wins. Returns `None` when no rule matches.
///
/// The input is expected to be digits only; the engine checks that before
/// classifying.
#[inline]
pub fn classify(number: &str) -> Option<Issuer> {
    Issuer::ALL.into_iter().find(|issuer| issuer.matches(number))
}
