//! HTTP service: the note edit page and the session endpoints it relies on.

mod auth;
mod edit;
mod error;


use std::sync::{Arc, Mutex};

use axum::Router;
use axum::routing::{get, post};
use chrono::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tower_sessions::MemoryStore;
use tracing::info;

use crate::render::Templates;
use crate::store::{Store, StoreResult};

pub use auth::{AuthUser, SESSION_COOKIE, safe_redirect};
pub use edit::{EditForm, EditPageData, NoteParam, NoteView};
pub use error::WebError;

/// Default lifetime of a login session.
pub const DEFAULT_SESSION_TTL_DAYS: i64 = 7;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<dyn Store + Send>>,
    templates: Arc<Templates>,
    sessions: MemoryStore,
    session_ttl: Duration,
}

impl AppState {
    /// Creates state around a store and the compiled templates.
    pub fn new<S>(store: S, templates: Templates) -> Self
    where
        S: Store + Send + 'static,
    {
        Self {
            store: Arc::new(Mutex::new(store)),
            templates: Arc::new(templates),
            sessions: MemoryStore::default(),
            session_ttl: Duration::days(DEFAULT_SESSION_TTL_DAYS),
        }
    }

    /// Sets how long an idle browser session stays signed in.
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    /// Returns the compiled templates.
    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Runs one repository call while holding the store lock.
    ///
    /// The lock is never held across an `.await`.
    pub fn with_store<T>(
        &self,
        f: impl FnOnce(&mut (dyn Store + Send)) -> StoreResult<T>,
    ) -> Result<T, WebError> {
        let mut guard = self
            .store
            .lock()
            .map_err(|_| WebError::Internal("store lock poisoned".into()))?;
        Ok(f(&mut *guard)?)
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/notes/{note_id}/edit",
            get(edit::load_note).post(edit::save_note),
        )
        .route("/login", get(auth::login))
        .route("/logout", post(auth::logout))
        .layer(auth::session_layer(
            state.sessions.clone(),
            state.session_ttl,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the application on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
