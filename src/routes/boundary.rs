//! Hierarchical error boundaries.
//!
//! A [`BoundaryChain`] is the list of scopes enclosing a route, outermost
//! first. Each scope may register a catch boundary (structured responses)
//! and an error boundary (everything else). Dispatch walks from the
//! innermost scope outward and uses the first boundary registered for the
//! error's kind. The root scope always has both, so dispatch never fails.

use axum::http::StatusCode;
use serde::Serialize;

use super::error::{CaughtResponse, RouteError};

/// Name of the scope that backs every chain.
pub const ROOT_SCOPE: &str = "root";

/// Link rendered on every boundary view.
pub const HOME_LINK: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryKind {
    /// Structured status + message responses.
    Caught,
    /// Unexpected failures.
    Error,
}

/// Renders structured responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatchBoundary {
    fallback_message: &'static str,
    form_action: Option<&'static str>,
}

impl CatchBoundary {
    /// `fallback_message` is shown when the response carries no message.
    pub const fn new(fallback_message: &'static str) -> Self {
        Self {
            fallback_message,
            form_action: None,
        }
    }

    /// Also offers the form posting to `action` alongside the error.
    pub const fn with_form(mut self, action: &'static str) -> Self {
        self.form_action = Some(action);
        self
    }

    fn render(&self, scope: &'static str, response: &CaughtResponse) -> BoundaryView {
        let message = if response.message().trim().is_empty() {
            self.fallback_message.to_string()
        } else {
            response.message().to_string()
        };
        BoundaryView {
            scope,
            kind: BoundaryKind::Caught,
            status: response.status().as_u16(),
            status_text: response.status_text().to_string(),
            heading: response.status().as_u16().to_string(),
            message,
            link: HOME_LINK,
            form: self.form_action,
        }
    }
}

/// Renders unexpected failures under a fixed heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBoundary {
    heading: &'static str,
}

impl ErrorBoundary {
    pub const fn new(heading: &'static str) -> Self {
        Self { heading }
    }

    fn render(&self, scope: &'static str, error: &RouteError) -> BoundaryView {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        BoundaryView {
            scope,
            kind: BoundaryKind::Error,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            heading: self.heading.to_string(),
            message: error.to_string(),
            link: HOME_LINK,
            form: None,
        }
    }
}

/// One level of the route hierarchy with optional boundaries.
#[derive(Debug, Clone)]
pub struct Scope {
    name: &'static str,
    catch: Option<CatchBoundary>,
    error: Option<ErrorBoundary>,
}

impl Scope {
    /// A scope with no boundaries; everything defers to its parent.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            catch: None,
            error: None,
        }
    }

    pub fn catch(mut self, boundary: CatchBoundary) -> Self {
        self.catch = Some(boundary);
        self
    }

    pub fn error(mut self, boundary: ErrorBoundary) -> Self {
        self.error = Some(boundary);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// The scopes enclosing a route, rooted at a scope that handles everything.
#[derive(Debug, Clone)]
pub struct BoundaryChain {
    root_catch: CatchBoundary,
    root_error: ErrorBoundary,
    scopes: Vec<Scope>,
}

impl BoundaryChain {
    pub fn new(root_catch: CatchBoundary, root_error: ErrorBoundary) -> Self {
        Self {
            root_catch,
            root_error,
            scopes: Vec::new(),
        }
    }

    /// Adds `scope` inside the current innermost scope.
    pub fn nest(mut self, scope: Scope) -> Self {
        self.scopes.push(scope);
        self
    }

    /// Nearest catch boundary and the name of the scope that owns it.
    pub fn catch_boundary(&self) -> (&'static str, &CatchBoundary) {
        self.scopes
            .iter()
            .rev()
            .find_map(|s| s.catch.as_ref().map(|b| (s.name, b)))
            .unwrap_or((ROOT_SCOPE, &self.root_catch))
    }

    /// Nearest error boundary and the name of the scope that owns it.
    pub fn error_boundary(&self) -> (&'static str, &ErrorBoundary) {
        self.scopes
            .iter()
            .rev()
            .find_map(|s| s.error.as_ref().map(|b| (s.name, b)))
            .unwrap_or((ROOT_SCOPE, &self.root_error))
    }

    /// Renders `error` with the nearest boundary for its kind.
    pub fn render(&self, error: &RouteError) -> BoundaryView {
        match error {
            RouteError::Caught(response) => {
                let (scope, boundary) = self.catch_boundary();
                boundary.render(scope, response)
            }
            other => {
                let (scope, boundary) = self.error_boundary();
                boundary.render(scope, other)
            }
        }
    }
}

/// What a boundary shows the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryView {
    pub scope: &'static str,
    pub kind: BoundaryKind,
    pub status: u16,
    pub status_text: String,
    pub heading: String,
    pub message: String,
    pub link: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<&'static str>,
}
