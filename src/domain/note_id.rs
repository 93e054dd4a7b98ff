//! Note identifiers and the generators that mint them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use ulid::Ulid;

/// An opaque, non-empty note identifier.
///
/// Newly created notes get ULIDs, but the store may also hold ids minted by
/// other schemes (e.g. ISO-8601 timestamps), so the id is kept as a string
/// and only ever compared for equality.
///
/// # Examples
///
/// ```
/// use notebox::domain::NoteId;
///
/// let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
/// assert_eq!(id.as_str(), "01HQ3K5M7NXJK4QZPW8V2R6T9Y");
/// assert!(id.timestamp().is_some());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns when this id was minted, if the id encodes a time.
    ///
    /// Understands ULIDs and RFC 3339 timestamps; any other id yields `None`.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        if let Ok(ulid) = Ulid::from_string(&self.0) {
            return DateTime::from_timestamp_millis(ulid.timestamp_ms() as i64);
        }
        DateTime::parse_from_rfc3339(&self.0)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl From<Ulid> for NoteId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid.to_string())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an empty note id.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': id cannot be empty", self.value)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseNoteIdError {
                value: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Source of fresh note ids for the create path.
pub trait IdGenerator: Send + Sync {
    /// Returns a new id. Implementations should not repeat themselves.
    fn next_id(&self) -> NoteId;
}

/// Mints monotonic ULIDs: ids from one generator strictly increase even
/// within the same millisecond.
pub struct UlidGenerator {
    inner: Mutex<ulid::Generator>,
}

impl UlidGenerator {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ulid::Generator::new()),
        }
    }
}

impl Default for UlidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for UlidGenerator {
    fn next_id(&self) -> NoteId {
        let mut generator = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        // Overflow only happens after 2^80 ids in one millisecond.
        generator.generate().unwrap_or_else(|_| Ulid::new()).into()
    }
}

/// Deterministic `{prefix}-{n}` ids, counting from 1.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    /// Creates a generator whose first id uses `start`.
    pub fn starting_at(prefix: impl Into<String>, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(start),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> NoteId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        NoteId(format!("{}-{}", self.prefix, n))
    }
}
