//! Contact Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr so they
//! never interleave with the conversation.

use anyhow::{Context, Result};
use contact_book::{Config, JsonFileRepository, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let repository = JsonFileRepository::new(&config.book_file);
    info!("Using address book at {}", repository.path().display());
    let mut session = match Session::start(repository, config.birthday_window_days) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e).with_context(|| {
                format!("Could not load {}", config.book_file.display())
            });
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = session.run(stdin.lock(), &mut stdout) {
        error!("Session ended with an error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
