//! Flat-file JSON store with atomic writes.

use crate::domain::Note;
use crate::infra::store::{NotesStore, StoreError};
use serde::{Deserialize, Serialize};
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// On-disk document: `{"notes": [...]}`.
#[derive(Serialize)]
struct NotesDocument<'a> {
    notes: &'a [Note],
}

/// A missing or `null` `notes` key reads as an empty collection.
#[derive(Deserialize)]
struct StoredNotes {
    #[serde(default)]
    notes: Option<Vec<Note>>,
}

/// Stores the whole collection in one JSON file.
///
/// Writes go to a temporary file in the same directory which is then
/// renamed over the target, so readers never observe a partial file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NotesStore for JsonFileStore {
    /// # Errors
    ///
    /// Returns `StoreError::Parse` if the file holds invalid JSON, or an
    /// I/O variant if it exists but cannot be read.
    fn read_all(&self) -> Result<Vec<Note>, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::from_io(&self.path, e)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let stored: StoredNotes =
            serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
                path: self.path.clone(),
                source: e,
            })?;
        Ok(stored.notes.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns `StoreError::ParentNotFound` if the parent directory doesn't
    /// exist, and `StoreError::AtomicWrite` if the final rename fails.
    fn write_all(&self, notes: &[Note]) -> Result<(), StoreError> {
        let parent = match self.path.parent() {
            Some(p) if p.as_os_str().is_empty() => Path::new("."),
            Some(p) => p,
            None => {
                return Err(StoreError::ParentNotFound {
                    path: self.path.clone(),
                });
            }
        };

        if !parent.is_dir() {
            return Err(StoreError::ParentNotFound {
                path: parent.into(),
            });
        }

        let content = serde_json::to_string_pretty(&NotesDocument { notes })
            .map_err(|e| StoreError::Serialize { source: e })?;

        let mut temp = temp_file_in(parent)?;

        temp.write_all(content.as_bytes())
            .map_err(|e| StoreError::from_io(&self.path, e))?;

        temp.persist(&self.path)
            .map_err(|e| StoreError::AtomicWrite {
                path: self.path.clone(),
                source: e.error,
            })?;

        Ok(())
    }
}

fn temp_file_in(dir: &Path) -> Result<NamedTempFile, StoreError> {
    NamedTempFile::new_in(dir).map_err(|e| StoreError::from_io(dir, e))
}
