//! Credit card expiry date validation.
//!
//! Form input is accepted in exactly one shape, `MM/YY`: a two-digit month
//! (01-12), a slash, and a two-digit year. A date is valid when it names the
//! current calendar month or any later month.
//!
//! Two-digit years are expanded with a sliding window anchored on the clock's
//! current year: years up to 49 ahead land in the upcoming window, the rest
//! belong to the previous century. In 2026, `00`-`75` map to 2000-2075 and
//! `76`-`99` map to 1976-1999.
//!
//! The clock is read once per check; year expansion and the expired
//! comparison both use that single reading.
//!
//! # Example
//!
//! ```
//! use cardform::clock::FixedClock;
//! use cardform::expiry::{is_valid_date, parse_expiry_at};
//!
//! let clock = FixedClock::ymd(2025, 8, 20).unwrap();
//!
//! let expiry = parse_expiry_at("12/30", &clock).unwrap();
//! assert_eq!(expiry.month(), 12);
//! assert_eq!(expiry.year(), 2030);
//!
//! assert!(is_valid_date("08/25", &clock));
//! assert!(!is_valid_date("07/25", &clock));
//! assert!(!is_valid_date("11/2023", &clock));
//! ```

use crate::clock::Clock;
use std::fmt;

/// A parsed expiry month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpiryDate {
    /// Four-digit year (e.g., 2025)
    year: u16,
    /// Month (1-12)
    month: u8,
}

impl ExpiryDate {
    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns true if this month is before `(year, month)`.
    ///
    /// A card stays valid through the end of its expiry month.
    #[inline]
    pub fn is_expired_in(&self, year: i32, month: u32) -> bool {
        (self.year as i32, self.month as u32) < (year, month)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year % 100)
    }
}

/// Errors that can occur during expiry date parsing/validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiryError {
    /// The input string is empty.
    Empty,
    /// The input is not shaped like `MM/YY`.
    InvalidFormat,
    /// Month is out of range (must be 1-12).
    InvalidMonth(u8),
    /// The expiry month is before the current month.
    Expired {
        /// The expiry month.
        month: u8,
        /// The expiry year.
        year: u16,
    },
}

impl fmt::Display for ExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "expiry date is empty"),
            Self::InvalidFormat => write!(f, "invalid expiry format (expected MM/YY)"),
            Self::InvalidMonth(m) => write!(f, "invalid month {}: must be 1-12", m),
            Self::Expired { month, year } => write!(f, "card expired ({:02}/{})", month, year),
        }
    }
}

impl std::error::Error for ExpiryError {}

/// Expands a two-digit year using a window centred on `current_year`.
///
/// # Example
///
/// ```
/// use cardform::expiry::expand_two_digit_year;
///
/// assert_eq!(expand_two_digit_year(25, 2026), 2025);
/// assert_eq!(expand_two_digit_year(75, 2026), 2075);
/// assert_eq!(expand_two_digit_year(76, 2026), 1976);
/// ```
pub fn expand_two_digit_year(two_digit: u8, current_year: i32) -> i32 {
    let range_end = current_year + 50;
    let century = range_end.div_euclid(100) * 100;
    let yy = two_digit as i32;

    if yy >= range_end.rem_euclid(100) {
        century + yy - 100
    } else {
        century + yy
    }
}

/// Parses a strict `MM/YY` expiry string, expanding the year against
/// `current_year`.
pub fn parse_expiry_in(input: &str, current_year: i32) -> Result<ExpiryDate, ExpiryError> {
    if input.is_empty() {
        return Err(ExpiryError::Empty);
    }

    let (month, yy) = match input.as_bytes() {
        [m1, m2, b'/', y1, y2] if [m1, m2, y1, y2].iter().all(|b| b.is_ascii_digit()) => {
            ((m1 - b'0') * 10 + (m2 - b'0'), (y1 - b'0') * 10 + (y2 - b'0'))
        }
        _ => return Err(ExpiryError::InvalidFormat),
    };

    if !(1..=12).contains(&month) {
        return Err(ExpiryError::InvalidMonth(month));
    }

    let year = expand_two_digit_year(yy, current_year);
    let year = u16::try_from(year).map_err(|_| ExpiryError::InvalidFormat)?;

    Ok(ExpiryDate { year, month })
}

/// Parses a strict `MM/YY` expiry string, expanding the year against `clock`.
pub fn parse_expiry_at<C: Clock>(input: &str, clock: &C) -> Result<ExpiryDate, ExpiryError> {
    let (current_year, _) = clock.year_month();
    parse_expiry_in(input, current_year)
}

/// Parses an expiry string and rejects months before the clock's month.
pub fn validate_expiry_at<C: Clock>(input: &str, clock: &C) -> Result<ExpiryDate, ExpiryError> {
    let (year, month) = clock.year_month();
    let expiry = parse_expiry_in(input, year)?;

    if expiry.is_expired_in(year, month) {
        return Err(ExpiryError::Expired {
            month: expiry.month,
            year: expiry.year,
        });
    }

    Ok(expiry)
}

/// Returns true if `input` is a well-formed `MM/YY` date in the current or a
/// future month relative to `clock`.
#[inline]
pub fn is_valid_date<C: Clock>(input: &str, clock: &C) -> bool {
    validate_expiry_at(input, clock).is_ok()
}
