//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text format birthdays are entered and rendered in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono accepts single-digit days and months, so the shape is checked first
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("valid birthday regex"));

/// A contact's birthday.
///
/// Always holds a valid calendar date. Entered as `DD.MM.YYYY` and rendered
/// back in the same form, so a parsed value displays exactly as typed.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("10.04.1990").unwrap();
/// assert_eq!(birthday.to_string(), "10.04.1990");
/// assert!(Birthday::parse("31.02.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not two
    /// digits, a dot, two digits, a dot and four digits, or if it does not
    /// name a real calendar date.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_SHAPE.is_match(text) {
            return Err(ValidationError::InvalidBirthday(text.to_string()));
        }

        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's month and day placed in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
