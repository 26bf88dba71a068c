//! Note and account persistence: repository traits and the SQLite store

mod repository;
mod schema;
pub mod sqlite;

pub use repository::{
    AccountRepository, NoteRepository, Store, StoreError, StoreResult, User,
};
pub use schema::{SCHEMA_VERSION, create_schema};
pub use sqlite::SqliteStore;
