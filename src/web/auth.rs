//! Browser sessions: the `AuthUser` extractor and login/logout routes.
//!
//! The session cookie is managed by `tower-sessions`. The session holds the
//! login token the browser signed in with, and every request re-checks that
//! token against the store, so expiry and logout take effect immediately.

use axum::extract::{FromRequestParts, Query, State};
use axum::http::request::Parts;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use chrono::{Duration, Utc};
use serde::Deserialize;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};
use tracing::{debug, info};

use super::{AppState, WebError};
use crate::domain::{SessionToken, UserId};
use crate::store::AccountRepository;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "__session";

/// Session key holding the login token.
const LOGIN_TOKEN_KEY: &str = "login_token";

/// The user behind the request's session.
///
/// Extraction fails with a redirect to `/login?redirectTo=<current path>`
/// when there is no valid session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser(pub UserId);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let token = session
            .get::<SessionToken>(LOGIN_TOKEN_KEY)
            .await
            .map_err(|e| WebError::from(e).into_response())?;
        let Some(token) = token else {
            debug!(path = %parts.uri.path(), "no session");
            return Err(login_redirect(&parts.uri));
        };

        match state.with_store(|store| store.session_user(&token, Utc::now())) {
            Ok(Some(user_id)) => Ok(AuthUser(user_id)),
            Ok(None) => {
                debug!(?token, "login expired or revoked");
                Err(login_redirect(&parts.uri))
            }
            Err(err) => Err(err.into_response()),
        }
    }
}

/// Builds the session layer: a `__session` cookie that expires after `ttl`
/// of inactivity.
pub(crate) fn session_layer(store: MemoryStore, ttl: Duration) -> SessionManagerLayer<MemoryStore> {
    let expiry = match ttl.to_std().ok().and_then(|d| d.try_into().ok()) {
        Some(inactivity) => Expiry::OnInactivity(inactivity),
        None => Expiry::OnSessionEnd,
    };

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE)
        .with_secure(false)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_expiry(expiry)
}

fn login_redirect(uri: &Uri) -> Response {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let location = format!("/login?redirectTo={}", urlencoding::encode(target));
    Redirect::to(&location).into_response()
}

/// Returns `to` if it is a path on this site, otherwise `None`.
///
/// Browsers drop tabs and newlines from URLs and read `\` as `/`, so targets
/// with control characters or whitespace are rejected before the
/// protocol-relative (`//host`, `/\host`) check.
pub fn safe_redirect(to: Option<&str>) -> Option<&str> {
    let to = to?;
    if to.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return None;
    }
    if !to.starts_with('/') || to.starts_with("//") || to.starts_with("/\\") {
        return None;
    }
    Some(to)
}

/// Query of the login link printed by `jotter session`.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    token: Option<String>,
    #[serde(rename = "redirectTo")]
    redirect_to: Option<String>,
}

/// `GET /login`: trades an issued login token for a browser session.
pub(crate) async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<LoginQuery>,
) -> Result<Response, WebError> {
    let Some(raw) = query.token.as_deref() else {
        return Err(WebError::Unauthorized(
            "sign in with the link printed by `jotter session <user-id>`".into(),
        ));
    };
    let token = raw
        .parse::<SessionToken>()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let Some(user_id) = state.with_store(|store| store.session_user(&token, Utc::now()))? else {
        return Err(WebError::Unauthorized("session expired or unknown".into()));
    };

    // New id on sign-in so a planted cookie never gains a user.
    session.cycle_id().await?;
    session.insert(LOGIN_TOKEN_KEY, &token).await?;
    info!(%user_id, "signed in");

    let response = match safe_redirect(query.redirect_to.as_deref()) {
        Some(to) => Redirect::to(to).into_response(),
        None => (StatusCode::OK, format!("signed in as {}", user_id)).into_response(),
    };
    Ok(response)
}

/// `POST /logout`: revokes the login token and ends the browser session.
pub(crate) async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, WebError> {
    if let Some(token) = session.get::<SessionToken>(LOGIN_TOKEN_KEY).await? {
        state.with_store(|store| store.delete_session(&token))?;
        info!(?token, "signed out");
    }
    session.flush().await?;

    Ok(Redirect::to("/login").into_response())
}
