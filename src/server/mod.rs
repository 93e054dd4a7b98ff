//! HTTP server: shared state, router and lifecycle

mod handlers;

use axum::Router;
use axum::routing::get;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::IdGenerator;
use crate::infra::NotesStore;
use crate::routes::NOTES_ROUTE;

pub use handlers::BoundaryResponse;

/// State shared by every request.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn NotesStore>,
    ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn new(store: impl NotesStore + 'static, ids: impl IdGenerator + 'static) -> Self {
        Self::from_shared(Arc::new(store), Arc::new(ids))
    }

    /// Builds state around handles the caller keeps, e.g. to inspect the
    /// store in tests.
    pub fn from_shared(store: Arc<dyn NotesStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::landing_handler))
        .route(
            NOTES_ROUTE,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route("/notes/{note_id}", get(handlers::detail_handler))
        .method_not_allowed_fallback(handlers::method_not_allowed_handler)
        .fallback(handlers::fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the application on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "listening");
    }
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "cannot listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
