//! The note edit page: loader (GET) and action (POST).

use axum::Json;
use axum::extract::{Form, FromRequestParts, Path, State};
use axum::http::header::ACCEPT;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{AppState, AuthUser, WebError};
use crate::domain::{Note, NoteEdit, NoteId};
use crate::store::NoteRepository;

/// The `{note_id}` route parameter, parsed and validated.
///
/// A missing or malformed id rejects the request with `400` before any
/// handler code runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteParam(pub NoteId);

#[derive(Deserialize)]
struct NoteIdSegment {
    note_id: NoteId,
}

impl<S: Send + Sync> FromRequestParts<S> for NoteParam {
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<NoteIdSegment>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| WebError::BadRequest(rejection.body_text()))?;
        Ok(NoteParam(segment.note_id))
    }
}

/// Note fields exposed to the page.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteView {
    pub id: NoteId,
    pub title: String,
    pub body: String,
}

impl From<&Note> for NoteView {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id().clone(),
            title: note.title().to_string(),
            body: note.body().to_string(),
        }
    }
}

/// JSON shape of the loader's view data.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditPageData {
    pub note: NoteView,
}

/// Submitted edit form. Fields stay optional here so a missing one can be
/// reported by name instead of as a generic decode failure.
#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub title: Option<String>,
    pub body: Option<String>,
}

fn accepts(headers: &HeaderMap, mime: &str) -> bool {
    headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.contains(mime))
}

/// `GET /notes/{note_id}/edit`
pub(crate) async fn load_note(
    AuthUser(user_id): AuthUser,
    NoteParam(note_id): NoteParam,
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, WebError> {
    let note = state
        .with_store(|store| store.get_note(&user_id, &note_id))?
        .ok_or_else(|| {
            debug!(%user_id, %note_id, "note not found for user");
            WebError::NotFound
        })?;

    if accepts(&headers, "application/json") && !accepts(&headers, "text/html") {
        let data = EditPageData {
            note: NoteView::from(&note),
        };
        return Ok(Json(data).into_response());
    }

    let html = state.templates().render_edit(&note, uri.path())?;
    Ok(Html(html).into_response())
}

/// `POST /notes/{note_id}/edit`
pub(crate) async fn save_note(
    AuthUser(user_id): AuthUser,
    NoteParam(note_id): NoteParam,
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Form(form): Form<EditForm>,
) -> Result<Response, WebError> {
    let edit = NoteEdit::from_fields(form.title, form.body)
        .map_err(|e| WebError::BadRequest(e.to_string()))?;
    let update = edit.into_update(user_id.clone(), note_id.clone());

    let matched = state.with_store(|store| store.update_note(&update))?;
    if matched {
        info!(%user_id, %note_id, "note updated");
    } else {
        warn!(%user_id, %note_id, "update matched no note owned by user");
    }

    // A browser form post reloads the page through the loader.
    if accepts(&headers, "text/html") {
        return Ok(Redirect::to(uri.path()).into_response());
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}
