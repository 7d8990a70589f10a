//! Command handlers for the contact book.
//!
//! Each handler returns a [`CommandResult`] with the text to print. The
//! dispatcher is the only place errors become output: they are rendered as a
//! single `Error: ...` line and the session carries on.

use super::parser::{parse_input, Command};
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

pub const GREETING: &str = "How can I help you?";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Try again.";
pub const ERROR_PREFIX: &str = "Error: ";

/// What the session should do after a line has been dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print (blank input)
    Silent,
    /// Print this text and keep reading
    Message(String),
    /// Save and stop
    Exit,
}

/// Owns the address book for the lifetime of a session and runs commands
/// against it.
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    book: AddressBook,
    birthday_window_days: u32,
    fixed_today: Option<NaiveDate>,
}

impl CommandDispatcher {
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            fixed_today: None,
        }
    }

    pub fn with_birthday_window(mut self, days: u32) -> Self {
        self.birthday_window_days = days;
        self
    }

    /// Pin the date used by `birthdays` instead of reading the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Parse and run one input line.
    pub fn dispatch(&mut self, line: &str) -> Reply {
        let Some((command, args)) = parse_input(line) else {
            return Reply::Silent;
        };

        debug!("Dispatching '{}' with {} argument(s)", command, args.len());

        let result = match command {
            Command::Hello => Ok(GREETING.to_string()),
            Command::Add => self.add_contact(&args),
            Command::Change => self.change_contact(&args),
            Command::Phone => self.show_phone(&args),
            Command::All => Ok(self.show_all()),
            Command::AddBirthday => self.add_birthday(&args),
            Command::ShowBirthday => self.show_birthday(&args),
            Command::Birthdays => Ok(self.birthdays()),
            Command::Exit => return Reply::Exit,
            Command::Unknown(token) => {
                debug!("Unknown command '{}'", token);
                Ok(UNKNOWN_COMMAND.to_string())
            }
        };

        match result {
            Ok(message) => Reply::Message(message),
            Err(e) => {
                warn!("Command '{}' failed: {}", line.trim(), e);
                Reply::Message(format!("{}{}", ERROR_PREFIX, e))
            }
        }
    }

    fn add_contact(&mut self, args: &[&str]) -> CommandResult<String> {
        let [name, phone] = leading_args("add", "add <name> <phone>", args)?;

        match self.book.find_mut(name) {
            Some(record) => record.add_phone(phone)?,
            None => {
                let mut record = Record::new(name);
                record.add_phone(phone)?;
                self.book.add_record(record);
            }
        }

        Ok("Contact added or updated.".to_string())
    }

    fn change_contact(&mut self, args: &[&str]) -> CommandResult<String> {
        let [name, old_phone, new_phone] = exact_args(
            "change",
            "change <name> <old_phone> <new_phone>",
            args,
        )?;

        let updated = match self.book.find_mut(name) {
            Some(record) => record.edit_phone(old_phone, new_phone)?,
            None => false,
        };

        Ok(if updated {
            "Phone updated.".to_string()
        } else {
            "Contact or phone not found.".to_string()
        })
    }

    fn show_phone(&self, args: &[&str]) -> CommandResult<String> {
        let [name] = leading_args("phone", "phone <name>", args)?;

        Ok(self
            .book
            .find(name)
            .map(Record::phones_display)
            .unwrap_or_else(|| "Contact not found.".to_string()))
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "No contacts.".to_string();
        }

        self.book
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_birthday(&mut self, args: &[&str]) -> CommandResult<String> {
        let [name, birthday] = exact_args("add-birthday", "add-birthday <name> <DD.MM.YYYY>", args)?;

        match self.book.find_mut(name) {
            Some(record) => {
                record.add_birthday(birthday)?;
                Ok("Birthday added.".to_string())
            }
            None => Ok("Contact not found.".to_string()),
        }
    }

    fn show_birthday(&self, args: &[&str]) -> CommandResult<String> {
        let [name] = leading_args("show-birthday", "show-birthday <name>", args)?;

        Ok(self
            .book
            .find(name)
            .and_then(Record::birthday)
            .map(ToString::to_string)
            .unwrap_or_else(|| "Birthday not found.".to_string()))
    }

    fn birthdays(&self) -> String {
        let upcoming = self
            .book
            .upcoming_birthdays(self.today(), self.birthday_window_days);

        if upcoming.is_empty() {
            "No birthdays this week.".to_string()
        } else {
            format!("Upcoming birthdays:\n{}", upcoming.join("\n"))
        }
    }
}

/// The first `N` arguments; anything after them is ignored.
fn leading_args<'a, const N: usize>(
    command: &'static str,
    usage: &'static str,
    args: &[&'a str],
) -> CommandResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| head.try_into().ok())
        .ok_or(CommandError::MissingArguments { command, usage })
}

/// Exactly `N` arguments.
fn exact_args<'a, const N: usize>(
    command: &'static str,
    usage: &'static str,
    args: &[&'a str],
) -> CommandResult<[&'a str; N]> {
    if args.len() > N {
        return Err(CommandError::TooManyArguments { command, usage });
    }
    leading_args(command, usage, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(reply: Reply) -> String {
        match reply {
            Reply::Message(text) => text,
            other => panic!("Expected a message, got: {:?}", other),
        }
    }

    #[test]
    fn test_leading_args_ignores_extra() {
        let args = ["a", "b", "c"];
        let [first, second] = leading_args::<2>("add", "add <name> <phone>", &args).unwrap();
        assert_eq!((first, second), ("a", "b"));
    }

    #[test]
    fn test_leading_args_missing() {
        let result = leading_args::<2>("add", "add <name> <phone>", &["a"]);
        assert!(matches!(
            result,
            Err(CommandError::MissingArguments { command: "add", .. })
        ));
    }

    #[test]
    fn test_exact_args_rejects_extra() {
        let result = exact_args::<2>("add-birthday", "usage", &["a", "b", "c"]);
        assert!(matches!(result, Err(CommandError::TooManyArguments { .. })));
        assert!(exact_args::<2>("add-birthday", "usage", &["a", "b"]).is_ok());
    }

    #[test]
    fn test_blank_line_is_silent() {
        let mut dispatcher = CommandDispatcher::new(AddressBook::new());
        assert_eq!(dispatcher.dispatch("   "), Reply::Silent);
    }

    #[test]
    fn test_exit_and_close() {
        let mut dispatcher = CommandDispatcher::new(AddressBook::new());
        assert_eq!(dispatcher.dispatch("exit"), Reply::Exit);
        assert_eq!(dispatcher.dispatch("CLOSE"), Reply::Exit);
    }

    #[test]
    fn test_invalid_phone_for_new_contact_creates_nothing() {
        let mut dispatcher = CommandDispatcher::new(AddressBook::new());
        let reply = message(dispatcher.dispatch("add Alice 123"));
        assert!(reply.starts_with(ERROR_PREFIX));
        assert!(dispatcher.book().find("Alice").is_none());
    }

    #[test]
    fn test_birthdays_respects_window() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Alice");
        record.add_birthday("20.06.1990").unwrap();
        book.add_record(record);

        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut narrow = CommandDispatcher::new(book.clone()).with_today(today);
        let mut wide = CommandDispatcher::new(book)
            .with_today(today)
            .with_birthday_window(30);

        assert_eq!(message(narrow.dispatch("birthdays")), "No birthdays this week.");
        assert_eq!(
            message(wide.dispatch("birthdays")),
            "Upcoming birthdays:\nAlice"
        );
    }
}
