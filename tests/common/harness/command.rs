//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `jotter` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct JotterCommand {
    args: Vec<String>,
    config: Option<PathBuf>,
}

impl JotterCommand {
    /// Creates a new command for the `jotter` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config: None,
        }
    }

    /// Sets the `--db` option to specify the database file.
    pub fn db(mut self, path: &Path) -> Self {
        self.args.push("--db".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points `JOTTER_CONFIG` at `path` so the user's own config is ignored.
    pub fn config(mut self, path: &Path) -> Self {
        self.config = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("jotter").expect("Failed to find jotter binary");
        cmd.env_remove("RUST_LOG");
        if let Some(config) = &self.config {
            cmd.env("JOTTER_CONFIG", config);
        }
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `user` command.
    pub fn user(self, email: &str) -> Self {
        self.args(["user", email])
    }

    /// Configures for the `new` command.
    pub fn new_note(self, user: &str, title: &str) -> Self {
        self.args(["new", "--user", user, title])
    }

    /// Configures for the `show` command.
    pub fn show(self, user: &str, note: &str) -> Self {
        self.args(["show", "--user", user, note])
    }

    /// Configures for the `session` command.
    pub fn session(self, user: &str) -> Self {
        self.args(["session", user])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for JotterCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        JotterCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_db() {
        let cmd = JotterCommand::new().db(Path::new("/tmp/j.db"));
        assert_eq!(cmd.get_args(), &["--db", "/tmp/j.db"]);
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = JotterCommand::new().show("u1", "n1").format_json();
        assert_eq!(
            cmd.get_args(),
            &["show", "--user", "u1", "n1", "--format", "json"]
        );
    }
}
