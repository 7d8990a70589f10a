//! The interactive session loop.

use super::dispatcher::{CommandDispatcher, Reply};
use crate::error::{SessionError, StorageResult};
use crate::repositories::BookRepository;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// A single run of the assistant: load, read commands, save.
pub struct Session<R: BookRepository> {
    repository: R,
    dispatcher: CommandDispatcher,
}

impl<R: BookRepository> Session<R> {
    /// Load the address book from `repository` and wrap it in a session.
    pub fn start(repository: R, birthday_window_days: u32) -> StorageResult<Self> {
        let book = repository.load()?;
        let dispatcher = CommandDispatcher::new(book).with_birthday_window(birthday_window_days);
        Ok(Self::new(repository, dispatcher))
    }

    pub fn new(repository: R, dispatcher: CommandDispatcher) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Read commands from `input` until `close`/`exit` or end of input, then
    /// save the address book.
    ///
    /// Command errors are printed and never stop the loop. Input that is not
    /// valid UTF-8 is decoded lossily. If the streams fail, the save is still
    /// attempted before the I/O error is returned.
    pub fn run<I, O>(&mut self, mut input: I, output: &mut O) -> Result<(), SessionError>
    where
        I: BufRead,
        O: Write,
    {
        let conversation = self.converse(&mut input, output);
        if let Err(e) = &conversation {
            warn!("Terminal I/O failed, saving before exit: {}", e);
        }

        self.repository.save(self.dispatcher.book())?;
        info!("Session closed with {} contacts", self.dispatcher.book().len());
        conversation?;

        writeln!(output, "{}", FAREWELL)?;
        Ok(())
    }

    fn converse<I, O>(&mut self, input: &mut I, output: &mut O) -> std::io::Result<()>
    where
        I: BufRead,
        O: Write,
    {
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input, closing session");
                writeln!(output)?;
                return Ok(());
            }

            let line = String::from_utf8_lossy(&buf);
            match self.dispatcher.dispatch(&line) {
                Reply::Silent => {}
                Reply::Message(text) => writeln!(output, "{}", text)?,
                Reply::Exit => return Ok(()),
            }
        }
    }
}
