//! The address book: every record, keyed by contact name.

use crate::models::record::Record;
use chrono::{Datelike, Duration, Local, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Days ahead, today included, that `get_upcoming_birthdays` looks.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// Mapping from contact name to its record.
///
/// Holds at most one record per name and iterates in insertion order.
/// Adding a record under an existing name replaces the old record and
/// keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        self.records.insert(key, record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name` if there is one.
    pub fn delete(&mut self, name: &str) {
        // shift_remove keeps the remaining records in insertion order
        self.records.shift_remove(name);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Names with a birthday in the next week, counted from today's local
    /// date.
    pub fn get_upcoming_birthdays(&self) -> Vec<&str> {
        let today = Local::now().date_naive();
        self.upcoming_birthdays(today, DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }

    /// Names whose birthday, moved into `today`'s year, falls within
    /// `today..=today + window_days`.
    ///
    /// Records without a birthday are skipped. The window never wraps into
    /// the next year: early-January birthdays are not reported in late
    /// December.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<&str> {
        let end = today + Duration::days(i64::from(window_days));

        self.records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let this_year = birthday.anniversary_in(today.year());
                (today <= this_year && this_year <= end).then(|| record.name().as_str())
            })
            .collect()
    }
}

/// On-disk shape of the address book.
#[derive(Serialize)]
struct Snapshot<'a> {
    contacts: Vec<&'a Record>,
}

#[derive(Deserialize)]
struct OwnedSnapshot {
    #[serde(default)]
    contacts: Vec<Record>,
}

impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Snapshot {
            contacts: self.records.values().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let snapshot = OwnedSnapshot::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in snapshot.contacts {
            book.add_record(record);
        }
        Ok(book)
    }
}
