//! Request handlers and the boundary hierarchy they report errors through

mod boundary;
mod error;
mod notes;

pub use boundary::{
    BoundaryChain, BoundaryKind, BoundaryView, CatchBoundary, ErrorBoundary, HOME_LINK,
    ROOT_SCOPE, Scope,
};
pub use error::{CaughtResponse, RouteError};
pub use notes::{
    ActionOutcome, NOTES_ROUTE, create_note, list_notes, missing_note_message, note_detail,
};

const RESPONSE_FALLBACK: &str = "A response error has occured";

/// Boundaries of the application shell. Every route sits under these.
pub fn root_boundaries() -> BoundaryChain {
    BoundaryChain::new(
        CatchBoundary::new(RESPONSE_FALLBACK),
        ErrorBoundary::new("You have encountered an error that is coming from root"),
    )
}

/// Boundaries for the notes list and the create form.
pub fn notes_boundaries() -> BoundaryChain {
    root_boundaries().nest(
        Scope::new("notes")
            .catch(CatchBoundary::new(RESPONSE_FALLBACK).with_form(NOTES_ROUTE))
            .error(ErrorBoundary::new(
                "You have encountered an error in the notes section",
            )),
    )
}

/// Boundaries for a single note. The detail route registers none of its
/// own, so everything lands on the root.
pub fn note_detail_boundaries() -> BoundaryChain {
    root_boundaries().nest(Scope::new("note-detail"))
}
