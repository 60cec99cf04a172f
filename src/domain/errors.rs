//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// `InvalidPhone` and `InvalidBirthday` are the "invalid format" family:
/// the raw input is kept for diagnostics, while the display text is the
/// message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a valid `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl ValidationError {
    /// Whether this error reports malformed phone or date input.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidPhone(_) | Self::InvalidBirthday(_))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty."),
            Self::InvalidPhone(_) => write!(f, "Phone must contain exactly 10 digits."),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}
