//! Command handlers for the CLI.

mod account;
mod completions;
mod note;
mod serve;


use anyhow::{Context, Result};
use std::path::Path;

use crate::store::SqliteStore;

pub use account::{create_user, handle_session, handle_user, login_url, start_session};
pub use completions::handle_completions;
pub use note::{create_note, find_note, handle_new, handle_show};
pub use serve::handle_serve;

/// Opens the database, creating it and its schema on first use.
pub(crate) fn open_store(db_path: &Path) -> Result<SqliteStore> {
    SqliteStore::open(db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))
}
