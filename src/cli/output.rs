//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A note as printed by `new` and `show`.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub body: String,
    pub modified: String,
}

/// A user as printed by `user`.
#[derive(Debug, Serialize)]
pub struct UserListing {
    pub id: String,
    pub email: String,
}
