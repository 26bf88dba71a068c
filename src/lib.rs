//! jotter - edit notes in the browser, backed by SQLite

pub mod cli;
pub mod domain;
pub mod render;
pub mod store;
pub mod web;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_completions, handle_new, handle_serve, handle_session, handle_show, handle_user,
    },
    logging,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    logging::init(&config.log_directive(cli.verbose));
    let db_path = config.database(cli.db.as_ref());

    match &cli.command {
        Command::Serve(args) => handle_serve(args, &db_path, &config),
        Command::User(args) => handle_user(args, &db_path),
        Command::New(args) => handle_new(args, &db_path),
        Command::Show(args) => handle_show(args, &db_path),
        Command::Session(args) => handle_session(args, &db_path, &config),
        Command::Completions(args) => handle_completions(args),
    }
}
