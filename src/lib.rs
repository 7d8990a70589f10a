//! Contact Book - a command-line assistant that keeps names, phone numbers
//! and birthdays, and reports whose birthday is coming up.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contact records and the address book that owns them
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Loading and saving address book snapshots
//! - **cli**: Input parsing, command handlers and the interactive loop

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use cli::{CommandDispatcher, Reply, Session};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, SessionError, StorageError};
pub use models::{AddressBook, Record};
pub use repositories::{BookRepository, JsonFileRepository};
