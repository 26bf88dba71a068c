//! Serve command handler.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::net::TcpListener;
use tracing::info;

use super::open_store;
use crate::cli::ServeArgs;
use crate::cli::config::Config;
use crate::render::Templates;
use crate::web::{self, AppState};

pub fn handle_serve(args: &ServeArgs, db_path: &Path, config: &Config) -> Result<()> {
    let store = open_store(db_path)?;
    info!(db = %db_path.display(), "opened database");

    let templates = Templates::load(config.template.as_deref())?;
    let state = AppState::new(store, templates).with_session_ttl(config.session_ttl()?);
    let addr = config.listen(args.listen);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to listen on {}", addr))?;
        web::serve(listener, state).await.context("server error")
    })
}
