//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Missing contacts and phones are not errors: lookups return `Option`/`bool`.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running a single command.
///
/// These never end the session; the dispatcher turns them into an
/// `Error: ...` line and keeps reading input.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command was given fewer arguments than it needs
    #[error("'{command}' expects: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// The command was given more arguments than it accepts
    #[error("'{command}' takes exactly: {usage}")]
    TooManyArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// A phone number or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be encoded or decoded
    #[error("Snapshot format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading input or writing output failed
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The final save failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
