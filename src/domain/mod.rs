//! Core types: Note, NoteId, UserId, SessionToken, and the edit that updates a note

mod edit;
mod ident;
mod note;
mod note_id;
mod session_token;
mod user_id;

pub use edit::{EDIT_TITLE_PREFIX, NoteEdit, NoteUpdate, ParseNoteEditError};
pub use ident::{MAX_ID_LEN, ParseIdError};
pub use note::Note;
pub use note_id::NoteId;
pub use session_token::{ParseSessionTokenError, SessionToken};
pub use user_id::UserId;
