//! Types for the upcoming-birthday window query.

use crate::domain::birthday::format_date;
use crate::domain::Birthday;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;

/// Default length of the birthday window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// How a birthday that already passed this year is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearWrap {
    /// Fall back to next year's occurrence, so a window that crosses
    /// New Year's Eve still sees January birthdays.
    #[default]
    NextOccurrence,

    /// Only look at this year's occurrence. Birthdays in the window that
    /// fall in the following January are missed.
    CurrentYearOnly,
}

/// How a February 29 birthday is placed in a year without that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeapDayPolicy {
    /// Celebrate on February 28.
    #[default]
    ClampToFeb28,

    /// No occurrence that year.
    Skip,
}

/// Options for [`AddressBook::get_upcoming_birthdays`](super::AddressBook::get_upcoming_birthdays).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingOptions {
    /// Inclusive window length counted from today.
    pub window_days: u32,
    pub year_wrap: YearWrap,
    pub leap_day: LeapDayPolicy,
    /// Move a Saturday or Sunday congratulation to the following Monday.
    pub shift_weekends: bool,
}

impl Default for UpcomingOptions {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            year_wrap: YearWrap::default(),
            leap_day: LeapDayPolicy::default(),
            shift_weekends: false,
        }
    }
}

impl UpcomingOptions {
    /// Last day of the window starting at `today`.
    pub fn window_end(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(u64::from(self.window_days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// The birthday's occurrence in `year` under the leap-day policy.
    pub fn anchor(&self, birthday: &Birthday, year: i32) -> Option<NaiveDate> {
        match birthday.in_year(year) {
            Some(date) => Some(date),
            None if birthday.is_leap_day() => match self.leap_day {
                LeapDayPolicy::ClampToFeb28 => NaiveDate::from_ymd_opt(year, 2, 28),
                LeapDayPolicy::Skip => None,
            },
            None => None,
        }
    }

    /// The occurrence of `birthday` inside the window starting at `today`,
    /// if there is one.
    pub fn occurrence(&self, birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anchor(birthday, today.year());
        let candidate = match self.year_wrap {
            YearWrap::CurrentYearOnly => this_year,
            YearWrap::NextOccurrence => match this_year {
                Some(date) if date >= today => Some(date),
                _ => today
                    .year()
                    .checked_add(1)
                    .and_then(|next| self.anchor(birthday, next)),
            },
        }?;

        (today <= candidate && candidate <= self.window_end(today)).then_some(candidate)
    }

    /// The day the congratulation is due for an occurrence on `date`.
    pub fn congratulation_date(&self, date: NaiveDate) -> NaiveDate {
        if !self.shift_weekends {
            return date;
        }
        let offset = match date.weekday() {
            Weekday::Sat => 2,
            Weekday::Sun => 1,
            _ => 0,
        };
        date.checked_add_days(Days::new(offset)).unwrap_or(date)
    }
}

/// One entry of the upcoming-birthday list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Date to congratulate on, in the year the birthday occurs.
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, format_date(self.date))
    }
}
