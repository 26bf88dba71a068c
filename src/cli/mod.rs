//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::{NoteId, UserId};
use output::OutputFormat;

/// jotter - edit your notes in the browser
#[derive(Parser, Debug)]
#[command(name = "jotter", version, about, long_about = None)]
pub struct Cli {
    /// SQLite database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the web server
    Serve(ServeArgs),

    /// Create a user account
    User(UserArgs),

    /// Create a note
    New(NewArgs),

    /// Show a note's title and body
    Show(ShowArgs),

    /// Start a browser session for a user and print its login link
    Session(SessionArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `serve` command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to listen on (overrides config file)
    #[arg(short, long)]
    pub listen: Option<SocketAddr>,
}

/// Arguments for the `user` command
#[derive(Parser, Debug)]
pub struct UserArgs {
    /// Email address of the new user
    pub email: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: String,

    /// Owner of the note
    #[arg(short, long)]
    pub user: UserId,

    /// Note body
    #[arg(short, long, default_value = "")]
    pub body: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID
    pub note: NoteId,

    /// User the lookup is scoped to
    #[arg(short, long)]
    pub user: UserId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `session` command
#[derive(Parser, Debug)]
pub struct SessionArgs {
    /// User to sign in
    pub user: UserId,

    /// Public base URL of the server (defaults to the listen address)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Page to open after signing in, e.g. /notes/<id>/edit
    #[arg(long)]
    pub redirect_to: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
