//! Isolated test environment with temp directory.

// Allow dead code since not every test crate uses every helper
#![allow(dead_code)]

use super::{JotterCommand, TestNote};
use jotter::domain::{NoteId, UserId};
use jotter::store::{AccountRepository, NoteRepository, SqliteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary database.
///
/// The database and config file live in a temp directory that is removed
/// when the environment is dropped.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the temp directory root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the SQLite database.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("jotter.db")
    }

    /// Returns the path of the (possibly absent) config file.
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Opens the environment's database directly.
    pub fn store(&self) -> SqliteStore {
        SqliteStore::open(&self.db_path()).expect("Failed to open store")
    }

    /// Registers a user and returns its id.
    pub fn add_user(&self, email: &str) -> UserId {
        let mut store = self.store();
        store
            .create_user(email)
            .expect("Failed to create user")
            .id()
            .clone()
    }

    /// Creates a note owned by `user` and returns its id.
    pub fn add_note(&self, user: &UserId, note: &TestNote) -> NoteId {
        let mut store = self.store();
        store
            .create_note(user, note.get_title(), note.get_body())
            .expect("Failed to create note")
            .id()
            .clone()
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a JotterCommand configured for this test environment.
    pub fn cmd(&self) -> JotterCommand {
        JotterCommand::new()
            .config(&self.config_path())
            .db(&self.db_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_paths_live_in_temp_dir() {
        let env = TestEnv::new();
        assert!(env.db_path().starts_with(env.root()));
        assert!(env.config_path().starts_with(env.root()));
    }

    #[test]
    fn test_env_add_note_is_readable() {
        let env = TestEnv::new();
        let user = env.add_user("t@example.com");
        let id = env.add_note(&user, &TestNote::new("Harness").body("text"));

        let note = env.store().get_note(&user, &id).unwrap().unwrap();
        assert_eq!(note.title(), "Harness");
        assert_eq!(note.body(), "text");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let args = env.cmd().get_args().to_vec();
        assert_eq!(args[0], "--db");
        assert_eq!(args[1], env.db_path().to_string_lossy());
    }
}
