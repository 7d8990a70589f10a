//! Input line parsing.

use std::fmt;

/// A command selected by the first token of an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
    Unknown(String),
}

impl Command {
    /// Match a command token, ignoring case.
    pub fn from_token(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The canonical command word, as written to debug logs.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
            Self::Unknown(token) => token,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Split a line on whitespace into a command and its positional arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(Command, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = Command::from_token(tokens.next()?);
    Some((command, tokens.collect()))
}
