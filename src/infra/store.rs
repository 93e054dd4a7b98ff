//! The notes store contract shared by every backend.

use crate::domain::Note;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Durable home of the full note collection.
///
/// The collection is always read and replaced as a whole. Callers assume a
/// single writer; nothing here coordinates concurrent read-modify-write.
pub trait NotesStore: Send + Sync {
    /// Returns every stored note in insertion order. An absent store is an
    /// empty collection, not an error.
    fn read_all(&self) -> Result<Vec<Note>, StoreError>;

    /// Replaces the stored collection with `notes`.
    fn write_all(&self, notes: &[Note]) -> Result<(), StoreError>;
}

/// Errors raised by store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse notes at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize notes: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("parent directory does not exist: {path}")]
    ParentNotFound { path: PathBuf },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },
}

impl StoreError {
    /// Maps an `io::Error` onto the closest variant.
    pub(crate) fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied { path: path.into() },
            _ => StoreError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}
