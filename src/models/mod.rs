//! Data models for the contact book.
//!
//! A [`Record`] is one contact; the [`AddressBook`] owns every record and
//! answers lookups and the upcoming-birthdays query.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use record::Record;
