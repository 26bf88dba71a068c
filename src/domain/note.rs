//! Note struct: a titled text body owned by one user.

use crate::domain::{NoteId, UserId};
use chrono::{DateTime, Utc};
use std::fmt;

/// A note owned by exactly one user.
///
/// # Examples
///
/// ```
/// use jotter::domain::{Note, NoteId, UserId};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let note = Note::new(
///     "1".parse::<NoteId>().unwrap(),
///     "u1".parse::<UserId>().unwrap(),
///     "Shopping",
///     "Milk",
///     now,
///     now,
/// );
/// assert_eq!(note.title(), "Shopping");
/// assert_eq!(note.body(), "Milk");
/// ```
#[derive(Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    user_id: UserId,
    title: String,
    body: String,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl Note {
    /// Creates a note from all of its fields.
    ///
    /// Title and body are kept exactly as given.
    pub fn new(
        id: NoteId,
        user_id: UserId,
        title: impl Into<String>,
        body: impl Into<String>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: body.into(),
            created,
            modified,
        }
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the owner of the note.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns when the note was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns when the note was last modified.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("title", &self.title)
            .field("body", &self.body)
            .field("created", &self.created)
            .field("modified", &self.modified)
            .finish()
    }
}
