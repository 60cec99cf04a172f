//! Source of "today" for date-dependent queries.

use chrono::{Local, NaiveDate};

/// Supplies the current date.
///
/// The birthday query takes the date from a `Clock` instead of reading the
/// system time itself, so it can be driven from tests.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date of the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
