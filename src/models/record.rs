//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// Phones keep the order they were added in and may repeat. The name is
/// fixed at creation since the address book keys records by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not ten digits;
    /// the record is left unchanged.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Does nothing if there is none.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace the first phone equal to `old` with `new`, keeping its
    /// position.
    ///
    /// Returns `Ok(false)` without touching the phones when `old` is absent;
    /// `new` is only validated once a match is found.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let Some(slot) = self.phones.iter_mut().find(|p| p.as_str() == old) else {
            return Ok(false);
        };

        *slot = PhoneNumber::new(new)?;
        Ok(true)
    }

    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Parse `birthday` and set it, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    /// Phones joined with `"; "`, as shown by the `phone` command.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} | Birthday: ", self.name, self.phones_display())?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "N/A"),
        }
    }
}
