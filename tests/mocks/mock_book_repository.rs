use contact_book::error::{StorageError, StorageResult};
use contact_book::models::AddressBook;
use contact_book::repositories::BookRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock book repository for testing.
///
/// Keeps the saved book in memory and tracks method calls for
/// verification. Clones share state, so a test can keep a handle after
/// moving one into a session.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookRepository {
    stored: Arc<Mutex<Option<AddressBook>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a new repository with nothing saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = Some(book);
        repo
    }

    /// Make every later `save` fail.
    pub fn fail_saves(&self) {
        *self.fail_saves.lock().unwrap() = true;
    }

    /// The last saved book, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(StorageError::Io {
                path: "mock".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }

        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
