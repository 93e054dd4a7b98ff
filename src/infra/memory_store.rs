//! In-memory store for tests and embedding.

use crate::domain::Note;
use crate::infra::store::{NotesStore, StoreError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// Keeps the collection in memory. Writes can be made to fail on demand.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: Mutex<Vec<Note>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `notes`.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Mutex::new(notes),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Makes every following `write_all` fail with `StoreError::Unavailable`.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Returns a copy of the current collection.
    pub fn snapshot(&self) -> Vec<Note> {
        self.notes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NotesStore for MemoryStore {
    fn read_all(&self) -> Result<Vec<Note>, StoreError> {
        Ok(self.snapshot())
    }

    fn write_all(&self, notes: &[Note]) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                reason: "writes disabled".to_string(),
            });
        }
        *self.notes.lock().unwrap_or_else(PoisonError::into_inner) = notes.to_vec();
        Ok(())
    }
}
