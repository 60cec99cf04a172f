//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A calendar date parsed from `DD.MM.YYYY`.
///
/// The structured date is kept rather than the raw text, so rendering is
/// always the zero-padded canonical form no matter how the input was padded
/// (`1.6.1990` renders as `01.06.1990`).
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("14.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "14.06.1990");
/// assert!(Birthday::new("31.02.2020").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// Day and month may be one or two digits; the year must be four and
    /// at least `0001`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the text does not
    /// match the pattern or names a date that does not exist in that year
    /// (`29.02.2023`, `31.04.2024`).
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        match Self::parse(&raw) {
            Some(date) => Ok(Self(date)),
            None => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Wrap an already valid date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    fn parse(raw: &str) -> Option<NaiveDate> {
        let mut parts = raw.split('.');
        let day = Self::numeric_part(parts.next()?, 1..=2)?;
        let month = Self::numeric_part(parts.next()?, 1..=2)?;
        let year = Self::numeric_part(parts.next()?, 4..=4)?;
        if parts.next().is_some() || year == 0 {
            return None;
        }
        NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
    }

    fn numeric_part(part: &str, width: std::ops::RangeInclusive<usize>) -> Option<u32> {
        if !width.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    }

    /// The birth date itself.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Whether this birthday falls on February 29.
    pub fn is_leap_day(&self) -> bool {
        self.0.month() == 2 && self.0.day() == 29
    }

    /// The same day and month in `year`.
    ///
    /// Returns `None` when the date does not exist in that year, which only
    /// happens for a February 29 birthday in a non-leap year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        self.0.with_year(year)
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn value(&self) -> &NaiveDate {
        &self.0
    }
}

/// Render a date in the canonical `DD.MM.YYYY` form.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}.{:02}.{:04}", date.day(), date.month(), date.year())
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        format_date(self.0).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_date(self.0))
    }
}
