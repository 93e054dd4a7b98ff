//! The note record as it is stored and served.

use crate::domain::NoteId;
use serde::{Deserialize, Serialize};

/// A stored note.
///
/// Title length rules apply only when a note is submitted, so any note
/// read back from the store is accepted as-is.
///
/// # Examples
///
/// ```
/// use notebox::domain::{Note, NoteId};
///
/// let id: NoteId = "note-1".parse().unwrap();
/// let note = Note::new(id, "Groceries", "eggs, milk");
/// assert_eq!(note.title(), "Groceries");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    title: String,
    #[serde(default)]
    content: String,
}

impl Note {
    pub fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's body text, possibly empty.
    pub fn content(&self) -> &str {
        &self.content
    }
}
