use super::traits::BookRepository;
use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Stores the address book as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No snapshot at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(io_error(&self.path, e)),
        };

        let book: AddressBook = serde_json::from_str(&data)?;
        info!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }

        let json = serde_json::to_string_pretty(book)?;

        // Write beside the target then rename, so a failed write never
        // clobbers the previous snapshot
        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| io_error(&temp, e))?;
        fs::rename(&temp, &self.path).map_err(|e| io_error(&self.path, e))?;

        info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}
