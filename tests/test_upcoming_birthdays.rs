//! Integration tests for the upcoming-birthday window query.
//!
//! Covers the date arithmetic edge cases: inclusive bounds, the New Year
//! boundary under both year-wrap modes, February 29 in common years, and
//! weekend shifting.

mod common;

use common::fixtures::*;
use contact_assistant::{AddressBook, LeapDayPolicy, UpcomingOptions, YearWrap};

fn rendered(book: &AddressBook, today: chrono::NaiveDate, options: &UpcomingOptions) -> Vec<String> {
    book.get_upcoming_birthdays(today, options)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_birthday_reanchored_to_current_year() {
    let book = book_with_birthdays(&[("alice", "14.06.1990")]);
    assert_eq!(
        rendered(&book, ymd(2024, 6, 10), &UpcomingOptions::default()),
        vec!["alice: 14.06.2024"]
    );
}

#[test]
fn test_already_passed_birthday_excluded() {
    let book = book_with_birthdays(&[("bob", "01.06.1990")]);
    assert!(rendered(&book, ymd(2024, 6, 10), &UpcomingOptions::default()).is_empty());
}

#[test]
fn test_window_edges_inclusive() {
    let book = book_with_birthdays(&[
        ("today", "10.06.2000"),
        ("last", "17.06.2000"),
        ("outside", "18.06.2000"),
    ]);
    assert_eq!(
        rendered(&book, ymd(2024, 6, 10), &UpcomingOptions::default()),
        vec!["today: 10.06.2024", "last: 17.06.2024"]
    );
}

#[test]
fn test_new_year_boundary_next_occurrence() {
    let book = book_with_birthdays(&[
        ("december", "31.12.1980"),
        ("january", "02.01.1990"),
        ("too_late", "06.01.1990"),
    ]);
    assert_eq!(
        rendered(&book, ymd(2024, 12, 29), &UpcomingOptions::default()),
        vec!["december: 31.12.2024", "january: 02.01.2025"]
    );
}

#[test]
fn test_new_year_boundary_current_year_only() {
    let book = book_with_birthdays(&[("december", "31.12.1980"), ("january", "02.01.1990")]);
    let legacy = UpcomingOptions {
        year_wrap: YearWrap::CurrentYearOnly,
        ..Default::default()
    };
    assert_eq!(
        rendered(&book, ymd(2024, 12, 29), &legacy),
        vec!["december: 31.12.2024"]
    );
}

#[test]
fn test_leap_day_clamped_in_common_year() {
    let book = book_with_birthdays(&[("leapling", "29.02.1996")]);
    assert_eq!(
        rendered(&book, ymd(2025, 2, 24), &UpcomingOptions::default()),
        vec!["leapling: 28.02.2025"]
    );
}

#[test]
fn test_leap_day_skipped_in_common_year() {
    let book = book_with_birthdays(&[("leapling", "29.02.1996")]);
    let skip = UpcomingOptions {
        leap_day: LeapDayPolicy::Skip,
        ..Default::default()
    };
    assert!(rendered(&book, ymd(2025, 2, 24), &skip).is_empty());
}

#[test]
fn test_leap_day_in_leap_year() {
    let book = book_with_birthdays(&[("leapling", "29.02.1996")]);
    for leap_day in [LeapDayPolicy::ClampToFeb28, LeapDayPolicy::Skip] {
        let options = UpcomingOptions {
            leap_day,
            ..Default::default()
        };
        assert_eq!(
            rendered(&book, ymd(2024, 2, 25), &options),
            vec!["leapling: 29.02.2024"]
        );
    }
}

#[test]
fn test_weekend_birthdays_shift_to_monday() {
    // 2024-06-15 is a Saturday, 2024-06-16 a Sunday.
    let book = book_with_birthdays(&[("saturday", "15.06.1990"), ("sunday", "16.06.1991")]);
    let options = UpcomingOptions {
        shift_weekends: true,
        ..Default::default()
    };
    assert_eq!(
        rendered(&book, ymd(2024, 6, 10), &options),
        vec!["saturday: 17.06.2024", "sunday: 17.06.2024"]
    );
}

#[test]
fn test_weekend_shift_can_cross_year() {
    // 2022-12-31 is a Saturday.
    let book = book_with_birthdays(&[("eve", "31.12.1999")]);
    let options = UpcomingOptions {
        shift_weekends: true,
        ..Default::default()
    };
    assert_eq!(
        rendered(&book, ymd(2022, 12, 28), &options),
        vec!["eve: 02.01.2023"]
    );
}

#[test]
fn test_longer_window() {
    let book = book_with_birthdays(&[("alice", "09.07.1990")]);
    let options = UpcomingOptions {
        window_days: 30,
        ..Default::default()
    };
    assert_eq!(
        rendered(&book, ymd(2024, 6, 10), &options),
        vec!["alice: 09.07.2024"]
    );
    assert!(rendered(&book, ymd(2024, 6, 10), &UpcomingOptions::default()).is_empty());
}

#[test]
fn test_records_without_birthday_are_ignored() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("nobday", &["0123456789"], None));
    book.add_record(sample_record("alice", &[], Some("11.06.1990")));
    assert_eq!(
        rendered(&book, ymd(2024, 6, 10), &UpcomingOptions::default()),
        vec!["alice: 11.06.2024"]
    );
}
