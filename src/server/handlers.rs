//! HTTP adapters over the route handlers.

use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde_json::{Value, json};
use tracing::{debug, error};

use super::AppState;
use crate::domain::{Note, NoteId, RawSubmission};
use crate::routes::{
    ActionOutcome, BoundaryChain, BoundaryKind, CaughtResponse, NOTES_ROUTE, RouteError,
    create_note, list_notes, missing_note_message, note_detail, note_detail_boundaries,
    notes_boundaries, root_boundaries,
};

/// An error paired with the boundary chain of the route that raised it.
pub struct BoundaryResponse {
    chain: BoundaryChain,
    error: RouteError,
}

impl BoundaryResponse {
    pub fn new(chain: BoundaryChain, error: RouteError) -> Self {
        Self { chain, error }
    }
}

impl IntoResponse for BoundaryResponse {
    fn into_response(self) -> Response {
        let view = self.chain.render(&self.error);
        match self.error.kind() {
            BoundaryKind::Caught => debug!(
                scope = view.scope,
                status = view.status,
                message = %view.message,
                "caught response"
            ),
            BoundaryKind::Error => error!(
                scope = view.scope,
                error = %self.error,
                "unexpected error reached boundary"
            ),
        }
        let status =
            StatusCode::from_u16(view.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(view)).into_response()
    }
}

/// Runs store-bound work off the async executor.
async fn blocking<T, F>(task: F) -> Result<T, RouteError>
where
    F: FnOnce() -> Result<T, RouteError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| RouteError::Interrupted {
            reason: e.to_string(),
        })?
}

fn in_notes(error: RouteError) -> BoundaryResponse {
    BoundaryResponse::new(notes_boundaries(), error)
}

fn in_note_detail(error: RouteError) -> BoundaryResponse {
    BoundaryResponse::new(note_detail_boundaries(), error)
}

pub(crate) async fn landing_handler() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "links": { "notes": NOTES_ROUTE },
    }))
}

pub(crate) async fn list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Note>>, BoundaryResponse> {
    let store = state.store.clone();
    let notes = blocking(move || list_notes(store.as_ref()))
        .await
        .map_err(in_notes)?;
    Ok(Json(notes))
}

pub(crate) async fn detail_handler(
    State(state): State<AppState>,
    note_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Note>, BoundaryResponse> {
    let Path(note_id) = note_id.map_err(|rejection| {
        let response = CaughtResponse::new(rejection.status(), rejection.body_text());
        in_note_detail(response.into())
    })?;
    let id: NoteId = note_id.parse().map_err(|_| {
        let response = CaughtResponse::not_found(missing_note_message(&note_id));
        in_note_detail(response.into())
    })?;
    let store = state.store.clone();
    let note = blocking(move || note_detail(store.as_ref(), &id))
        .await
        .map_err(in_note_detail)?;
    Ok(Json(note))
}

pub(crate) async fn create_handler(
    State(state): State<AppState>,
    form: Result<Form<RawSubmission>, FormRejection>,
) -> Result<Response, BoundaryResponse> {
    let Form(raw) = form.map_err(|rejection| {
        let response =
            CaughtResponse::bad_request(format!("malformed submission: {}", rejection.body_text()));
        in_notes(response.into())
    })?;

    let AppState { store, ids } = state;
    let outcome = blocking(move || create_note(store.as_ref(), ids.as_ref(), raw))
        .await
        .map_err(in_notes)?;

    Ok(match outcome {
        ActionOutcome::Redirect { location, .. } => {
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
        ActionOutcome::Invalid(failure) => (StatusCode::OK, Json(failure)).into_response(),
    })
}

pub(crate) async fn fallback_handler(uri: Uri) -> BoundaryResponse {
    BoundaryResponse::new(
        root_boundaries(),
        CaughtResponse::not_found(format!("No route matches {}", uri.path())).into(),
    )
}

/// Answers a known path requested with a method it doesn't serve.
pub(crate) async fn method_not_allowed_handler(method: Method, uri: Uri) -> BoundaryResponse {
    BoundaryResponse::new(
        root_boundaries(),
        CaughtResponse::new(
            StatusCode::METHOD_NOT_ALLOWED,
            format!("{method} is not allowed on {}", uri.path()),
        )
        .into(),
    )
}
