//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory. Every setting has a default, so running
//! with an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// Default snapshot file, relative to the working directory.
pub const DEFAULT_BOOK_FILE: &str = "addressbook.json";

const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 365;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book snapshot is stored
    pub book_file: PathBuf,

    /// How many days ahead the `birthdays` command looks (default: 7)
    pub birthday_window_days: u32,

    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: Snapshot path (default: `addressbook.json`)
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming-birthday window, 0-365 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let book_file = match env::var("CONTACT_BOOK_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_BOOK_FILE),
        };

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_WINDOW_DAYS)?;
        if birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_file,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_file: PathBuf::from(DEFAULT_BOOK_FILE),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            log_level: "warn".to_string(),
        }
    }
}
