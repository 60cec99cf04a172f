//! Contact Assistant - an interactive command-line contact manager.
//!
//! Stores names, phone numbers, and birthdays in memory and answers textual
//! commands: add and edit phones, list contacts, and find upcoming birthdays.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: Contact records, the address book, and the birthday window query
//! - **commands**: Input parsing and one handler per command
//! - **assistant**: The interactive session and command dispatch
//! - **clock**: Source of today's date
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod assistant;
pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use assistant::{run_session, Assistant, Reply};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{Birthday, ContactName, Field, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, RecordError};
pub use models::{
    AddressBook, LeapDayPolicy, Record, UpcomingBirthday, UpcomingOptions, YearWrap,
};
