//! Request failures and how they map to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Errors a request handler can end with.
#[derive(Debug, Error)]
pub enum WebError {
    /// No note matched the requesting user and note id.
    #[error("note not found")]
    NotFound,

    /// The request is malformed (bad route parameter, missing form field).
    #[error("{0}")]
    BadRequest(String),

    /// The session token is missing, unknown or expired.
    #[error("{0}")]
    Unauthorized(String),

    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The browser session could not be read or written.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// A page template failed to render.
    #[error("template error: {0}")]
    Render(#[from] minijinja::Error),

    /// Any other server-side failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            // Not-found carries no body, so nothing about the note leaks.
            WebError::NotFound => StatusCode::NOT_FOUND.into_response(),
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            WebError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg).into_response(),
            err @ (WebError::Store(_)
            | WebError::Session(_)
            | WebError::Render(_)
            | WebError::Internal(_)) => {
                error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
