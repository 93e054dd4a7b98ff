//! Error taxonomy for route handlers.

use axum::http::StatusCode;
use std::fmt;
use thiserror::Error;

use super::boundary::BoundaryKind;
use crate::infra::StoreError;

/// A deliberately raised response: a status plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaughtResponse {
    status: StatusCode,
    message: String,
}

impl CaughtResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Canonical reason phrase, e.g. "Not Found".
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CaughtResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.status.as_u16(),
            self.status_text(),
            self.message
        )
    }
}

/// Everything a route handler can fail with.
///
/// Only `Caught` is a structured response; every other variant is an
/// unexpected failure and goes to the error boundaries.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("{0}")]
    Caught(CaughtResponse),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("could not allocate a unique note id after {attempts} attempts")]
    IdsExhausted { attempts: usize },

    #[error("request handling was interrupted: {reason}")]
    Interrupted { reason: String },
}

impl RouteError {
    /// Which boundary family handles this error.
    pub fn kind(&self) -> BoundaryKind {
        match self {
            RouteError::Caught(_) => BoundaryKind::Caught,
            _ => BoundaryKind::Error,
        }
    }

    /// Returns the structured response, if this is one.
    pub fn as_caught(&self) -> Option<&CaughtResponse> {
        match self {
            RouteError::Caught(response) => Some(response),
            _ => None,
        }
    }
}

impl From<CaughtResponse> for RouteError {
    fn from(response: CaughtResponse) -> Self {
        RouteError::Caught(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn caught_response_exposes_status_text() {
        let response = CaughtResponse::not_found("Found no notes");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.status_text(), "Not Found");
        assert_eq!(response.to_string(), "404 Not Found: Found no notes");
    }

    #[test]
    fn kinds_split_caught_from_unexpected() {
        let caught = RouteError::from(CaughtResponse::bad_request("nope"));
        assert_eq!(caught.kind(), BoundaryKind::Caught);
        assert!(caught.as_caught().is_some());

        let store = RouteError::from(StoreError::Unavailable {
            reason: "down".into(),
        });
        assert_eq!(store.kind(), BoundaryKind::Error);
        assert!(store.as_caught().is_none());
        assert_eq!(store.to_string(), "store unavailable: down");

        let ids = RouteError::IdsExhausted { attempts: 16 };
        assert_eq!(ids.kind(), BoundaryKind::Error);
    }
}
