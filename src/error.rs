//! Validation error kinds and the per-field error map.
//!
//! Each [`ErrorKind`] carries a fixed, user-facing message that presentation
//! layers display verbatim. [`CardErrors`] holds at most one kind per
//! [`Field`]; a missing key means that field passed.

use crate::card::Field;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Reasons a form field can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The card number is not numeric, fails Luhn, or matches no issuer.
    CardNumber,
    /// The CVV length does not match the issuer.
    Cvv,
    /// A cardholder name field is not letters and single spaces.
    CardHolderName,
    /// The expiration date is malformed or in the past.
    ExpDate,
}

impl ErrorKind {
    /// Returns the fixed message shown next to the field.
    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::CardNumber => "Invalid card number",
            Self::Cvv => "Invalid CVV",
            Self::CardHolderName => "Invalid field",
            Self::ExpDate => "Invalid date",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ErrorKind {}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Sparse map from form field to the reason it failed.
///
/// Iteration follows validation order (card number, CVV, expiry, first name,
/// last name). With the `serde` feature it serializes as
/// `{"cardNumber": "Invalid card number", ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardErrors {
    errors: BTreeMap<Field, ErrorKind>,
}

impl CardErrors {
    /// Creates an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `kind` for `field`, replacing any earlier entry.
    pub fn insert(&mut self, field: Field, kind: ErrorKind) {
        self.errors.insert(field, kind);
    }

    /// Returns the error recorded for `field`, if any.
    #[inline]
    pub fn get(&self, field: Field) -> Option<ErrorKind> {
        self.errors.get(&field).copied()
    }

    /// Returns the message to display for `field`, if it failed.
    #[inline]
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|kind| kind.message())
    }

    /// Returns true if `field` has an error.
    #[inline]
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Returns true if no field failed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of failed fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Iterates over `(field, kind)` pairs in validation order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.errors.iter(),
        }
    }
}

/// Iterator over the entries of a [`CardErrors`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, Field, ErrorKind>,
}

impl Iterator for Iter<'_> {
    type Item = (Field, ErrorKind);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&field, &kind)| (field, kind))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a CardErrors {
    type Item = (Field, ErrorKind);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(Field, ErrorKind)> for CardErrors {
    fn from_iter<I: IntoIterator<Item = (Field, ErrorKind)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(Field, ErrorKind); N]> for CardErrors {
    fn from(entries: [(Field, ErrorKind); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl fmt::Display for CardErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "no errors");
        }
        for (i, (field, kind)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", field, kind)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CardErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, kind) in self {
            map.serialize_entry(field.key(), kind.message())?;
        }
        map.end()
    }
}
