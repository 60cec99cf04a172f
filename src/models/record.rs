//! Record model: one contact with its phones and optional birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Placeholder rendered when a record has no phones.
pub const NO_PHONES: &str = "No phones";

/// Placeholder rendered when a record has no birthday.
pub const NO_BIRTHDAY: &str = "No birthday";

/// A single contact.
///
/// The name is fixed at creation and is the record's key in the
/// [`AddressBook`](super::AddressBook). Phones keep insertion order and may
/// repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for an empty name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create an empty record from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// Duplicates are allowed.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.push_phone(phone);
        Ok(())
    }

    /// Append an already validated phone.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
    }

    /// Find the first phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Remove the first phone equal to `raw`.
    ///
    /// Returns whether anything was removed.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == raw) {
            Some(index) => {
                self.phones.remove(index);
                debug!(name = %self.name, phone = %raw, "Removed phone");
                true
            }
            None => false,
        }
    }

    /// Replace the first occurrence of `old` with `new`.
    ///
    /// The replacement is validated before anything is removed, so a
    /// failure leaves the phone list untouched. On success the new number
    /// is appended at the end of the list rather than taking the old slot.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if `old` is not on the record
    /// - `RecordError::Validation` if `new` is not a valid phone
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        if self.find_phone(old).is_none() {
            return Err(RecordError::PhoneNotFound(old.to_string()));
        }
        let replacement = PhoneNumber::new(new)?;

        self.remove_phone(old);
        self.push_phone(replacement);
        Ok(())
    }

    /// Validate `raw` and set it as the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(raw)?;
        debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Phones joined with `", "`, or an empty string when there are none.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            NO_PHONES.to_string()
        } else {
            self.phones_display()
        };
        match &self.birthday {
            Some(birthday) => write!(f, "{}: phones: {}; birthday: {}", self.name, phones, birthday),
            None => write!(f, "{}: phones: {}; birthday: {}", self.name, phones, NO_BIRTHDAY),
        }
    }
}
