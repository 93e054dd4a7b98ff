//! Core types: Note, NoteId and id generators, form submissions

mod note;
mod note_id;
mod submission;

pub use note::Note;
pub use note_id::{IdGenerator, NoteId, ParseNoteIdError, SequentialIds, UlidGenerator};
pub use submission::{
    MIN_TITLE_LEN, NoteSubmission, ParseSubmissionError, RawSubmission, TITLE_TOO_SHORT,
    ValidationFailure, validate_title,
};
