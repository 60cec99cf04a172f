//! Data models for the contact assistant.
//!
//! This module contains the contact record, the address book that owns all
//! records, and the types used by the upcoming-birthday query.

pub mod address_book;
pub mod record;
pub mod upcoming;

pub use address_book::AddressBook;
pub use record::Record;
pub use upcoming::{
    LeapDayPolicy, UpcomingBirthday, UpcomingOptions, YearWrap, DEFAULT_WINDOW_DAYS,
};
