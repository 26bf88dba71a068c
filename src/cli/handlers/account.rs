//! User and session command handlers.

use anyhow::{Context, Result, bail};
use chrono::{Duration, Utc};
use std::path::Path;
use tracing::info;

use super::open_store;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, UserListing};
use crate::cli::{SessionArgs, UserArgs};
use crate::domain::{SessionToken, UserId};
use crate::store::{AccountRepository, User};
use crate::web::safe_redirect;

pub fn handle_user(args: &UserArgs, db_path: &Path) -> Result<()> {
    let mut store = open_store(db_path)?;
    let user = create_user(&mut store, &args.email)?;

    match args.format {
        OutputFormat::Human => println!("{}", user.id()),
        OutputFormat::Json => {
            let listing = UserListing {
                id: user.id().to_string(),
                email: user.email().to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&Output::new(listing))?);
        }
    }

    Ok(())
}

/// Registers a user after a basic sanity check of the address.
pub fn create_user(store: &mut impl AccountRepository, email: &str) -> Result<User> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        bail!("invalid email address: '{}'", email);
    }

    let user = store.create_user(email)?;
    info!(user = %user.id(), "created user");
    Ok(user)
}

pub fn handle_session(args: &SessionArgs, db_path: &Path, config: &Config) -> Result<()> {
    let mut store = open_store(db_path)?;
    let token = start_session(&mut store, &args.user, config.session_ttl()?)?;

    let base = match &args.base_url {
        Some(url) => url.clone(),
        None => format!("http://{}", config.listen(None)),
    };
    println!("{}", login_url(&base, &token, args.redirect_to.as_deref())?);

    Ok(())
}

/// Starts a session for an existing user that expires after `ttl`.
pub fn start_session(
    store: &mut impl AccountRepository,
    user_id: &UserId,
    ttl: Duration,
) -> Result<SessionToken> {
    if store.get_user(user_id)?.is_none() {
        bail!("user not found: '{}'", user_id);
    }

    let expires = Utc::now()
        .checked_add_signed(ttl)
        .with_context(|| format!("session lifetime out of range: {}", ttl))?;
    let token = store
        .create_session(user_id, expires)
        .context("failed to create session")?;
    info!(user = %user_id, "started session");
    Ok(token)
}

/// Builds the link that signs a browser in with `token`.
///
/// `redirect_to` must be a local path.
pub fn login_url(base: &str, token: &SessionToken, redirect_to: Option<&str>) -> Result<String> {
    let mut url = format!("{}/login?token={}", base.trim_end_matches('/'), token);

    if let Some(to) = redirect_to {
        let Some(to) = safe_redirect(Some(to)) else {
            bail!("redirect target must be a local path: '{}'", to);
        };
        url.push_str("&redirectTo=");
        url.push_str(&urlencoding::encode(to));
    }

    Ok(url)
}
