//! Command parsing and handlers.
//!
//! The parser turns a line of text into a [`Command`] plus arguments; the
//! handlers translate those arguments into address book operations.

pub mod handlers;
pub mod parser;

pub use handlers::{
    add_birthday, add_contact, birthdays, change_contact, show_all, show_birthday, show_phones,
};
pub use parser::{parse_input, Command, ParsedInput};
