//! Test fixtures for building address books and dates.

use chrono::NaiveDate;
use contact_assistant::{AddressBook, Assistant, FixedClock, Record, UpcomingOptions};

/// Build a date, panicking on invalid input.
#[allow(dead_code)]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Create a record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).expect("valid fixture name");
    for phone in phones {
        record.add_phone(phone).expect("valid fixture phone");
    }
    if let Some(raw) = birthday {
        record.add_birthday(raw).expect("valid fixture birthday");
    }
    record
}

/// Create an address book holding contacts with the given birthdays.
#[allow(dead_code)]
pub fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        book.add_record(sample_record(name, &["0123456789"], Some(birthday)));
    }
    book
}

/// An assistant with an empty book, pinned to `today`.
#[allow(dead_code)]
pub fn assistant_on(today: NaiveDate) -> Assistant<FixedClock> {
    Assistant::new(FixedClock(today), UpcomingOptions::default())
}

/// Send one line to the assistant and return the reply text.
#[allow(dead_code)]
pub fn say(assistant: &mut Assistant<FixedClock>, line: &str) -> String {
    assistant.handle_line(line).text().to_string()
}
