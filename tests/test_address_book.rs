//! Tests for records and the address book working together through the
//! public API.

use chrono::NaiveDate;
use contact_book::domain::PhoneNumber;
use contact_book::{AddressBook, Birthday, Record};

fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).unwrap();
    }
    record
}

#[test]
fn test_phone_accepts_only_ten_digits() {
    for bad in ["", "1", "123456789", "12345678901", "12345 6789", "abcdefghij", "12345-6789"] {
        assert!(PhoneNumber::new(bad).is_err(), "accepted {:?}", bad);
    }
    for good in ["0123456789", "9999999999", "0987654321"] {
        assert_eq!(PhoneNumber::new(good).unwrap().to_string(), good);
    }
}

#[test]
fn test_birthday_renders_as_entered() {
    for text in ["10.04.1990", "01.01.2000", "29.02.2024", "31.12.1969"] {
        assert_eq!(Birthday::parse(text).unwrap().to_string(), text);
    }
    for bad in ["10-04-1990", "32.01.1990", "10.4.1990", "29.02.2023", "today"] {
        assert!(Birthday::parse(bad).is_err(), "accepted {:?}", bad);
    }
}

#[test]
fn test_add_find_round_trip() {
    let mut book = AddressBook::new();
    let record = sample_record("John", &["1234567890", "5555555555"], Some("10.04.1990"));
    book.add_record(record.clone());

    assert_eq!(book.find("John"), Some(&record));
}

#[test]
fn test_same_name_overwrites() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", &["1234567890"], None));
    book.add_record(sample_record("John", &["5555555555"], Some("01.01.1980")));

    assert_eq!(book.len(), 1);
    let john = book.find("John").unwrap();
    assert_eq!(john.phones_display(), "5555555555");
    assert_eq!(john.birthday().unwrap().to_string(), "01.01.1980");
}

#[test]
fn test_edit_phone_through_book() {
    let mut book = AddressBook::new();
    book.add_record(sample_record(
        "John",
        &["1111111111", "2222222222", "1111111111"],
        None,
    ));

    let john = book.find_mut("John").unwrap();
    assert!(john.edit_phone("1111111111", "3333333333").unwrap());
    assert!(!john.edit_phone("4444444444", "5555555555").unwrap());

    assert_eq!(
        book.find("John").unwrap().phones_display(),
        "3333333333; 2222222222; 1111111111"
    );
}

#[test]
fn test_upcoming_birthdays_scenario() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("Alice", &[], Some("05.06.1990")));
    book.add_record(sample_record("Bob", &[], Some("15.06.1985")));
    book.add_record(sample_record("Carol", &["1234567890"], None));

    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    assert_eq!(book.upcoming_birthdays(today, 7), vec!["Alice"]);
}

#[test]
fn test_get_upcoming_birthdays_uses_today() {
    let today = chrono::Local::now().date_naive();
    let mut book = AddressBook::new();
    let mut record = Record::new("Now");
    record.add_birthday(&today.format("%d.%m.%Y").to_string()).unwrap();
    book.add_record(record);

    assert_eq!(book.get_upcoming_birthdays(), vec!["Now"]);
}

#[test]
fn test_delete_then_find() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("John", &["1234567890"], None));

    book.delete("John");
    assert!(book.find("John").is_none());
    assert!(book.is_empty());

    // Deleting again is a no-op
    book.delete("John");
    assert!(book.is_empty());
}
