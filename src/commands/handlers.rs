//! Command handlers.
//!
//! Each handler takes the already tokenized arguments and the address book,
//! and returns the text to show the user. Handlers never print; failures
//! come back as [`CommandError`] for the caller to render.

use crate::domain::PhoneNumber;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record, UpcomingOptions};
use chrono::NaiveDate;
use tracing::debug;

pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const PHONE_UPDATED: &str = "Phone updated.";
pub const NO_CONTACTS: &str = "No contacts found.";
pub const BIRTHDAY_ADDED: &str = "Birthday added.";
pub const BIRTHDAY_NOT_SET: &str = "Birthday not set.";

/// The first `N` arguments, or `NotEnoughArguments`. Extra arguments are ignored.
fn take_args<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> CommandResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| <[&'a str; N]>::try_from(head).ok())
        .ok_or(CommandError::NotEnoughArguments {
            command,
            expected: N,
            got: args.len(),
        })
}

fn contact_not_found(name: &str) -> CommandError {
    CommandError::ContactNotFound(name.to_string())
}

/// `add <name> <phone>`: add a phone, creating the contact if needed.
///
/// The phone is validated first, so an invalid number never leaves an
/// empty new contact behind.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = take_args::<2>("add", args)?;
    let phone = PhoneNumber::new(phone)?;

    if let Some(record) = book.find_mut(name) {
        record.push_phone(phone);
        return Ok(CONTACT_UPDATED.to_string());
    }

    let mut record = Record::new(name)?;
    record.push_phone(phone);
    book.add_record(record);
    debug!(name = %name, "Created contact");
    Ok(CONTACT_ADDED.to_string())
}

/// `change <name> <old> <new>`: replace one of a contact's phones.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old, new] = take_args::<3>("change", args)?;
    let record = book.find_mut(name).ok_or_else(|| contact_not_found(name))?;
    record.edit_phone(old, new)?;
    Ok(PHONE_UPDATED.to_string())
}

/// `phone <name>`: the contact's phones, comma separated.
pub fn show_phones(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = take_args::<1>("phone", args)?;
    let record = book.find(name).ok_or_else(|| contact_not_found(name))?;
    Ok(record.phones_display())
}

/// `all`: every contact, one per line.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok(NO_CONTACTS.to_string());
    }
    Ok(book
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, date] = take_args::<2>("add-birthday", args)?;
    let record = book.find_mut(name).ok_or_else(|| contact_not_found(name))?;
    record.add_birthday(date)?;
    Ok(BIRTHDAY_ADDED.to_string())
}

/// `show-birthday <name>`
///
/// An unknown contact and a contact without a birthday both answer
/// [`BIRTHDAY_NOT_SET`].
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = take_args::<1>("show-birthday", args)?;
    match book.find(name).and_then(Record::birthday) {
        Some(birthday) => Ok(birthday.to_string()),
        None => Ok(BIRTHDAY_NOT_SET.to_string()),
    }
}

/// `birthdays`: contacts to congratulate within the window, one per line.
pub fn birthdays(
    book: &AddressBook,
    today: NaiveDate,
    options: &UpcomingOptions,
) -> CommandResult<String> {
    let upcoming = book.get_upcoming_birthdays(today, options);
    if upcoming.is_empty() {
        return Ok(format!(
            "No birthdays in the next {} days.",
            options.window_days
        ));
    }
    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
