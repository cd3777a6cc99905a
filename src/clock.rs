//! Calendar date source.
//!
//! Room operations take "today" as an argument; the [`Hotel`](crate::Hotel)
//! asks its [`Clock`] once per operation. [`FixedClock`] lets tests pin and
//! move the date.

use std::cell::Cell;

use chrono::{Days, Local, NaiveDate};

/// Source of the current calendar date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually controlled date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hotel_desk::clock::{Clock, FixedClock};
///
/// let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// clock.advance(5);
/// assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Cell<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date: Cell::new(date) }
    }

    /// Pin the clock to `date`
    pub fn set(&self, date: NaiveDate) {
        self.date.set(date);
    }

    /// Move the clock forward by whole days
    pub fn advance(&self, days: u64) {
        let current = self.date.get();
        // Out-of-range dates leave the clock where it is
        if let Some(next) = current.checked_add_days(Days::new(days)) {
            self.date.set(next);
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Signed whole calendar days from `from` to `to`
#[inline]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
