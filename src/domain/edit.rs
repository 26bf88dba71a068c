//! A submitted edit of a note and the update it turns into.

use crate::domain::{NoteId, UserId};
use std::fmt;

/// Prepended to every title saved through the edit page.
pub const EDIT_TITLE_PREFIX: &str = "[Edit]: ";

/// The kind of error found in a submitted edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteEditErrorKind {
    MissingField(&'static str),
}

/// Error returned when a submitted edit is incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNoteEditError {
    kind: ParseNoteEditErrorKind,
}

impl ParseNoteEditError {
    /// Returns the name of the field that was missing.
    pub fn field(&self) -> &'static str {
        match self.kind {
            ParseNoteEditErrorKind::MissingField(name) => name,
        }
    }
}

impl fmt::Display for ParseNoteEditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteEditErrorKind::MissingField(name) => {
                write!(f, "missing form field '{}'", name)
            }
        }
    }
}

impl std::error::Error for ParseNoteEditError {}

/// Title and body as submitted by the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEdit {
    title: String,
    body: String,
}

impl NoteEdit {
    /// Creates an edit from submitted values.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Creates an edit from optional form fields.
    ///
    /// Absent fields are an error. Present but empty values are accepted.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteEditError` naming the first missing field, `title`
    /// before `body`.
    pub fn from_fields(
        title: Option<String>,
        body: Option<String>,
    ) -> Result<Self, ParseNoteEditError> {
        let missing = |name| ParseNoteEditError {
            kind: ParseNoteEditErrorKind::MissingField(name),
        };
        let title = title.ok_or_else(|| missing("title"))?;
        let body = body.ok_or_else(|| missing("body"))?;
        Ok(Self { title, body })
    }

    /// Returns the submitted title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the submitted body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Turns the edit into an update of `id` scoped to `user_id`.
    ///
    /// The stored title is `EDIT_TITLE_PREFIX` followed by the submitted
    /// title; the body is stored verbatim.
    pub fn into_update(self, user_id: UserId, id: NoteId) -> NoteUpdate {
        NoteUpdate {
            id,
            user_id,
            title: format!("{}{}", EDIT_TITLE_PREFIX, self.title),
            body: self.body,
        }
    }
}

/// A write of title and body to the note `(user_id, id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteUpdate {
    id: NoteId,
    user_id: UserId,
    title: String,
    body: String,
}

impl NoteUpdate {
    /// Returns the id of the note to update.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the user the update is scoped to.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the title to store.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body to store.
    pub fn body(&self) -> &str {
        &self.body
    }
}
