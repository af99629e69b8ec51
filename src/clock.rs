//! Calendar source for expiry checks.
//!
//! Expiry validation compares against "today". The engine never reads the
//! system time directly; it asks a [`Clock`], so tests can pin the date.

use chrono::{Datelike, Local, NaiveDate};

/// Source of the current calendar date.
pub trait Clock {
    /// Returns the current local calendar date.
    fn today(&self) -> NaiveDate;

    /// Returns the current `(year, month)` pair, month in 1-12.
    fn year_month(&self) -> (i32, u32) {
        let today = self.today();
        (today.year(), today.month())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Clock backed by the machine's local time zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date.
///
/// # Example
///
/// ```
/// use cardform::clock::{Clock, FixedClock};
///
/// let clock = FixedClock::ymd(2025, 8, 14).unwrap();
/// assert_eq!(clock.year_month(), (2025, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    /// Creates a clock that always reports `date`.
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Creates a clock from a year, month and day.
    ///
    /// Returns `None` if the date does not exist.
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::ymd(2024, 2, 29).unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(clock.year_month(), (2024, 2));
    }

    #[test]
    fn test_fixed_clock_rejects_bad_dates() {
        assert!(FixedClock::ymd(2023, 2, 29).is_none());
        assert!(FixedClock::ymd(2023, 13, 1).is_none());
    }

    #[test]
    fn test_clock_through_references() {
        let clock = FixedClock::ymd(2030, 1, 1).unwrap();
        let by_ref: &dyn Clock = &clock;
        let boxed: Box<dyn Clock> = Box::new(clock);
        assert_eq!(by_ref.year_month(), (2030, 1));
        assert_eq!(boxed.year_month(), (2030, 1));
    }

    #[test]
    fn test_system_clock_is_sane() {
        let (year, month) = SystemClock.year_month();
        assert!(year >= 2024);
        assert!((1..=12).contains(&month));
    }
}
