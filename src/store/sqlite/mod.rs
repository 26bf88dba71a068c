//! SQLite-backed store implementation.

mod connection;
mod repo_impl;


use rusqlite::Connection;

/// SQLite-backed note and account store.
///
/// Owns a single connection. Callers that share it across threads wrap the
/// store in a mutex.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
