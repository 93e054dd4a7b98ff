//! Parsing and validation of the new-note form.

use crate::domain::{Note, NoteId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum title length, counted in characters after trimming.
pub const MIN_TITLE_LEN: usize = 5;

/// Message returned when a title is too short.
pub const TITLE_TOO_SHORT: &str = "Title needs to have at least 5 words";

/// Form fields exactly as submitted. Fields other than these are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubmission {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Errors for submissions that lack required fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSubmissionError {
    #[error("malformed submission: missing field `{field}`")]
    MissingField { field: &'static str },
}

/// A validation failure, reported back to the form rather than raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub message: String,
}

impl ValidationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A well-formed new-note submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSubmission {
    title: String,
    content: String,
}

impl NoteSubmission {
    /// Builds a submission from raw form fields.
    ///
    /// `title` is required; a missing `content` is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns `ParseSubmissionError::MissingField` if `title` is absent.
    pub fn parse(raw: RawSubmission) -> Result<Self, ParseSubmissionError> {
        let title = raw
            .title
            .ok_or(ParseSubmissionError::MissingField { field: "title" })?;
        Ok(Self {
            title,
            content: raw.content.unwrap_or_default(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Checks the submission against the title rule.
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        validate_title(&self.title)
    }

    /// Turns the submission into a note with the given id. The title is
    /// kept verbatim; trimming only applies to validation.
    pub fn into_note(self, id: NoteId) -> Note {
        Note::new(id, self.title, self.content)
    }
}

/// Accepts a title iff it has at least [`MIN_TITLE_LEN`] characters once
/// surrounding whitespace is removed.
pub fn validate_title(title: &str) -> Result<(), ValidationFailure> {
    if title.trim().chars().count() < MIN_TITLE_LEN {
        return Err(ValidationFailure::new(TITLE_TOO_SHORT));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(title: Option<&str>, content: Option<&str>) -> RawSubmission {
        RawSubmission {
            title: title.map(String::from),
            content: content.map(String::from),
        }
    }

    #[test]
    fn four_chars_rejected_five_accepted() {
        assert_eq!(
            validate_title("abcd"),
            Err(ValidationFailure::new("Title needs to have at least 5 words"))
        );
        assert_eq!(validate_title("abcde"), Ok(()));
    }

    #[test]
    fn surrounding_whitespace_does_not_count() {
        assert!(validate_title("   abcd   ").is_err());
        assert!(validate_title("\tabcde\n").is_ok());
        assert!(validate_title("").is_err());
    }

    #[test]
    fn inner_whitespace_counts() {
        assert!(validate_title("a b c").is_ok());
    }

    #[test]
    fn length_is_counted_in_characters() {
        // 4 characters, 8 bytes
        assert!(validate_title("éééé").is_err());
        assert!(validate_title("ééééé").is_ok());
    }

    #[test]
    fn parse_requires_title() {
        assert_eq!(
            NoteSubmission::parse(raw(None, Some("body"))),
            Err(ParseSubmissionError::MissingField { field: "title" })
        );
    }

    #[test]
    fn parse_defaults_missing_content() {
        let submission = NoteSubmission::parse(raw(Some("My Note"), None)).unwrap();
        assert_eq!(submission.content(), "");
    }

    #[test]
    fn into_note_keeps_title_verbatim() {
        let submission = NoteSubmission::parse(raw(Some("  My Note "), Some("Hello"))).unwrap();
        assert!(submission.validate().is_ok());

        let note = submission.into_note("note-1".parse().unwrap());
        assert_eq!(note.title(), "  My Note ");
        assert_eq!(note.content(), "Hello");
    }

    #[test]
    fn validation_failure_serializes_as_message() {
        let json = serde_json::to_value(ValidationFailure::new(TITLE_TOO_SHORT)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "Title needs to have at least 5 words"})
        );
    }

    #[test]
    fn missing_field_display() {
        let err = ParseSubmissionError::MissingField { field: "title" };
        assert_eq!(err.to_string(), "malformed submission: missing field `title`");
    }
}
