//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The display text of each error is exactly what the user sees in the conversation.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by operations on a single contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone to edit or remove is not on the record
    #[error("Old phone not found.")]
    PhoneNotFound(String),
}

/// Errors a command handler can report.
///
/// Handlers never print and never abort; the conversation loop renders
/// these as text and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record operation failed
    #[error(transparent)]
    Record(#[from] RecordError),

    /// No contact with this name exists
    #[error("Contact not found.")]
    ContactNotFound(String),

    /// The command was given fewer arguments than it needs
    #[error("Not enough arguments.")]
    NotEnoughArguments {
        command: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
