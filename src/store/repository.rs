//! Repository traits and result types.

use crate::domain::{Note, NoteId, NoteUpdate, SessionToken, UserId};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced user does not exist.
    #[error("user not found: {id}")]
    UserNotFound { id: String },

    /// A user with this email is already registered.
    #[error("email already registered: {email}")]
    DuplicateEmail { email: String },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored value could not be decoded.
    #[error("invalid stored data: {0}")]
    InvalidData(String),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A registered user account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    email: String,
    created: DateTime<Utc>,
}

impl User {
    /// Creates a user record.
    pub fn new(id: UserId, email: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            id,
            email: email.into(),
            created,
        }
    }

    /// Returns the user's identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the user's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns when the account was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }
}

/// Owner-scoped note persistence.
///
/// Every read and write names both the note and the user asking for it. An
/// implementation must never return or modify a note whose owner differs
/// from the given user.
pub trait NoteRepository {
    /// Creates a note owned by `user_id` with a freshly minted id.
    fn create_note(&mut self, user_id: &UserId, title: &str, body: &str) -> StoreResult<Note>;

    /// Fetches note `id` if it exists and is owned by `user_id`.
    fn get_note(&self, user_id: &UserId, id: &NoteId) -> StoreResult<Option<Note>>;

    /// Writes title and body to the note named by `update`.
    ///
    /// Returns `false` when no note matched `(user_id, id)`; nothing is
    /// written in that case.
    fn update_note(&mut self, update: &NoteUpdate) -> StoreResult<bool>;
}

/// Users and their login sessions.
pub trait AccountRepository {
    /// Registers a user with the given email.
    fn create_user(&mut self, email: &str) -> StoreResult<User>;

    /// Fetches a user by id.
    fn get_user(&self, id: &UserId) -> StoreResult<Option<User>>;

    /// Starts a session for `user_id` that is valid until `expires`.
    fn create_session(
        &mut self,
        user_id: &UserId,
        expires: DateTime<Utc>,
    ) -> StoreResult<SessionToken>;

    /// Resolves a session token to its user, if the session is still valid at `now`.
    fn session_user(&self, token: &SessionToken, now: DateTime<Utc>)
    -> StoreResult<Option<UserId>>;

    /// Ends a session (idempotent).
    fn delete_session(&mut self, token: &SessionToken) -> StoreResult<()>;
}

/// Everything the web service needs from its backing store.
pub trait Store: NoteRepository + AccountRepository {}

impl<T: NoteRepository + AccountRepository> Store for T {}
