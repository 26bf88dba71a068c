//! New and Show command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::info;

use super::open_store;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{NewArgs, ShowArgs};
use crate::domain::{Note, NoteId, UserId};
use crate::store::NoteRepository;

pub fn handle_new(args: &NewArgs, db_path: &Path) -> Result<()> {
    let mut store = open_store(db_path)?;
    let note = create_note(&mut store, &args.user, &args.title, &args.body)?;

    match args.format {
        OutputFormat::Human => {
            println!("Created: {}", note);
            println!("Edit at: /notes/{}/edit", note.id());
        }
        OutputFormat::Json => print_json(&note)?,
    }

    Ok(())
}

/// Creates a note owned by `user_id`.
pub fn create_note(
    store: &mut impl NoteRepository,
    user_id: &UserId,
    title: &str,
    body: &str,
) -> Result<Note> {
    let note = store
        .create_note(user_id, title, body)
        .context("failed to create note")?;
    info!(note = %note.id(), user = %user_id, "created note");
    Ok(note)
}

pub fn handle_show(args: &ShowArgs, db_path: &Path) -> Result<()> {
    let store = open_store(db_path)?;
    let note = find_note(&store, &args.user, &args.note)?;

    match args.format {
        OutputFormat::Human => {
            println!("# {}", note.title());
            println!();
            println!(
                "ID: {}  Created: {}  Modified: {}",
                note.id(),
                note.created().format("%Y-%m-%d %H:%M"),
                note.modified().format("%Y-%m-%d %H:%M")
            );
            println!();
            if !note.body().is_empty() {
                println!("{}", note.body());
            }
        }
        OutputFormat::Json => print_json(&note)?,
    }

    Ok(())
}

/// Looks up a note the user owns. Notes owned by someone else are not found.
pub fn find_note(store: &impl NoteRepository, user_id: &UserId, id: &NoteId) -> Result<Note> {
    match store.get_note(user_id, id)? {
        Some(note) => Ok(note),
        None => bail!("note not found: '{}'", id),
    }
}

fn print_json(note: &Note) -> Result<()> {
    let listing = NoteListing {
        id: note.id().to_string(),
        user_id: note.user_id().to_string(),
        title: note.title().to_string(),
        body: note.body().to_string(),
        modified: note.modified().to_rfc3339(),
    };
    println!("{}", serde_json::to_string_pretty(&Output::new(listing))?);
    Ok(())
}
