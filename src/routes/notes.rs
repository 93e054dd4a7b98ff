//! List, detail and create handlers for the notes resource.

use tracing::{debug, info, warn};

use super::error::{CaughtResponse, RouteError};
use crate::domain::{IdGenerator, Note, NoteId, NoteSubmission, RawSubmission, ValidationFailure};
use crate::infra::NotesStore;

/// Path of the notes list; successful creates redirect here.
pub const NOTES_ROUTE: &str = "/notes";

/// How many generated ids may collide before giving up.
const MAX_ID_ATTEMPTS: usize = 16;

/// Result of a create request that did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The note was stored; the client should navigate to `location`.
    Redirect { location: String, created: Note },
    /// The submission was rejected; nothing was stored.
    Invalid(ValidationFailure),
}

/// Returns every note in stored order.
///
/// # Errors
///
/// A 404 `Caught` response when the store is empty; `Store` when it
/// cannot be read.
pub fn list_notes(store: &dyn NotesStore) -> Result<Vec<Note>, RouteError> {
    let notes = store.read_all()?;
    if notes.is_empty() {
        return Err(CaughtResponse::not_found("Found no notes").into());
    }
    debug!(count = notes.len(), "listed notes");
    Ok(notes)
}

/// Message for a detail request naming a note that isn't stored.
pub fn missing_note_message(id: impl std::fmt::Display) -> String {
    format!("Could not locate path for #{id}")
}

/// Returns the first note whose id equals `id`.
///
/// # Errors
///
/// A 404 `Caught` response naming `id` when no note matches.
pub fn note_detail(store: &dyn NotesStore, id: &NoteId) -> Result<Note, RouteError> {
    let note = store
        .read_all()?
        .into_iter()
        .find(|n| n.id() == id)
        .ok_or_else(|| CaughtResponse::not_found(missing_note_message(id)))?;
    debug!(id = %id, "found note");
    Ok(note)
}

/// Validates a submission and, if it passes, appends it to the store.
///
/// Rejected titles come back as `ActionOutcome::Invalid` and leave the
/// store untouched. The collection is read, extended in memory and
/// written back whole.
///
/// # Errors
///
/// A 400 `Caught` response when the submission has no title; `Store` when
/// reading or writing fails; `IdsExhausted` when the generator keeps
/// returning ids that are already taken.
pub fn create_note(
    store: &dyn NotesStore,
    ids: &dyn IdGenerator,
    raw: RawSubmission,
) -> Result<ActionOutcome, RouteError> {
    let submission = NoteSubmission::parse(raw)
        .map_err(|e| CaughtResponse::bad_request(e.to_string()))?;

    if let Err(failure) = submission.validate() {
        warn!(title = submission.title(), "rejected note submission");
        return Ok(ActionOutcome::Invalid(failure));
    }

    let mut notes = store.read_all()?;
    let id = unused_id(&notes, ids)?;
    let note = submission.into_note(id);
    notes.push(note.clone());
    store.write_all(&notes)?;

    info!(id = %note.id(), total = notes.len(), "created note");
    Ok(ActionOutcome::Redirect {
        location: NOTES_ROUTE.to_string(),
        created: note,
    })
}

fn unused_id(notes: &[Note], ids: &dyn IdGenerator) -> Result<NoteId, RouteError> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = ids.next_id();
        if !notes.iter().any(|n| n.id() == &candidate) {
            return Ok(candidate);
        }
        debug!(id = %candidate, "generated id already taken");
    }
    Err(RouteError::IdsExhausted {
        attempts: MAX_ID_ATTEMPTS,
    })
}
