use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book.
///
/// Loads and saves are whole-book snapshots: there is no partial update.
/// Implementations decide where the snapshot lives (a JSON file, memory in
/// tests).
pub trait BookRepository {
    /// Load the saved address book.
    ///
    /// Returns an empty book when nothing has been saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Save the entire address book, replacing any previous snapshot.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
