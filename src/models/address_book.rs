//! The address book: every contact, keyed by name.

use super::record::Record;
use super::upcoming::{UpcomingBirthday, UpcomingOptions};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

/// A name-keyed collection of records that remembers insertion order.
///
/// Every stored record's name equals its key. Records live in a `Vec` so
/// listing follows insertion order; `index` maps a name to its slot.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already there.
    ///
    /// A replaced record keeps its original listing position. No merging
    /// happens: the old record's phones and birthday are dropped.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&slot) => {
                debug!(name = %key, "Replacing record");
                self.records[slot] = record;
            }
            None => {
                debug!(name = %key, "Adding record");
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&slot) => self.records.get_mut(slot),
            None => None,
        }
    }

    /// Remove and return the record stored under `name`.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let slot = self.index.remove(name)?;
        let record = self.records.remove(slot);
        for position in self.index.values_mut() {
            if *position > slot {
                *position -= 1;
            }
        }
        debug!(name = %name, "Deleted record");
        Some(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Contacts whose birthday falls within the window starting at `today`.
    ///
    /// Results follow insertion order, not date order. Records without a
    /// birthday are ignored.
    pub fn get_upcoming_birthdays(
        &self,
        today: NaiveDate,
        options: &UpcomingOptions,
    ) -> Vec<UpcomingBirthday> {
        let upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = options.occurrence(birthday, today)?;
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    date: options.congratulation_date(date),
                })
            })
            .collect();

        debug!(
            today = %today,
            window_days = options.window_days,
            result_count = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
