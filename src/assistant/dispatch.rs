//! Dispatching parsed commands to their handlers.

use crate::clock::Clock;
use crate::commands::{self, parse_input, Command};
use crate::models::{AddressBook, UpcomingOptions};
use tracing::{trace, warn};

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// What the session should do after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading.
    Continue(String),
    /// Print the text and stop.
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }
}

/// The assistant's state: the address book it owns, the clock it asks for
/// today's date, and the birthday window settings.
///
/// This is the single place where handler errors become text.
pub struct Assistant<C: Clock> {
    book: AddressBook,
    clock: C,
    options: UpcomingOptions,
}

impl<C: Clock> Assistant<C> {
    /// Create an assistant with an empty address book.
    pub fn new(clock: C, options: UpcomingOptions) -> Self {
        Self::with_book(AddressBook::new(), clock, options)
    }

    /// Create an assistant around an existing address book.
    pub fn with_book(book: AddressBook, clock: C, options: UpcomingOptions) -> Self {
        Self {
            book,
            clock,
            options,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Handle one line of input.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let parsed = parse_input(line);
        trace!(command = %parsed.command.name(), args = parsed.args.len(), "Parsed input");
        let args = parsed.arg_refs();

        let result = match &parsed.command {
            Command::Exit => return Reply::Exit(FAREWELL.to_string()),
            Command::Hello => Ok(GREETING.to_string()),
            Command::Unknown(_) => Ok(INVALID_COMMAND.to_string()),
            Command::Add => commands::add_contact(&args, &mut self.book),
            Command::Change => commands::change_contact(&args, &mut self.book),
            Command::Phone => commands::show_phones(&args, &self.book),
            Command::All => commands::show_all(&self.book),
            Command::AddBirthday => commands::add_birthday(&args, &mut self.book),
            Command::ShowBirthday => commands::show_birthday(&args, &self.book),
            Command::Birthdays => {
                commands::birthdays(&self.book, self.clock.today(), &self.options)
            }
        };

        match result {
            Ok(text) => Reply::Continue(text),
            Err(err) => {
                warn!(command = %parsed.command.name(), error = ?err, "Command failed");
                Reply::Continue(err.to_string())
            }
        }
    }
}
