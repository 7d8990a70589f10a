//! Interactive command-line surface.
//!
//! - **parser**: splits an input line into a [`Command`] and its arguments
//! - **dispatcher**: runs commands against the address book and renders replies
//! - **session**: the read-eval-print loop, bracketed by load and save

pub mod dispatcher;
pub mod parser;
pub mod session;

pub use dispatcher::{CommandDispatcher, Reply};
pub use parser::{parse_input, Command};
pub use session::Session;
