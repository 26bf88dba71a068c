//! Configuration file support.

use anyhow::{Context, Result, bail};
use chrono::Duration;
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::web::DEFAULT_SESSION_TTL_DAYS;

/// Longest session lifetime accepted from the config file, in days.
pub const MAX_SESSION_DAYS: i64 = 3650;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "JOTTER_CONFIG";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// SQLite database file
    pub database: Option<PathBuf>,

    /// Address the web server listens on
    pub listen: Option<SocketAddr>,

    /// Lifetime of login sessions, in days
    pub session_days: Option<i64>,

    /// Default tracing filter directive, e.g. "info" or "jotter=debug"
    pub log: Option<String>,

    /// Custom edit page template
    pub template: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        config
            .session_ttl()
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Returns the path to the config file.
    ///
    /// `$JOTTER_CONFIG` if set, otherwise `~/.config/jotter/config.toml`.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jotter")
            .join("config.toml")
    }

    /// Resolve the database path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `database` setting
    /// 3. `jotter.db` in the current directory
    pub fn database(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| PathBuf::from("jotter.db"))
    }

    /// Resolve the listen address: CLI, then config, then 127.0.0.1:3000.
    pub fn listen(&self, cli_listen: Option<SocketAddr>) -> SocketAddr {
        cli_listen
            .or(self.listen)
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::LOCALHOST, 3000)))
    }

    /// Returns how long a login session stays valid.
    ///
    /// `session_days` must be between 1 and `MAX_SESSION_DAYS`.
    pub fn session_ttl(&self) -> Result<Duration> {
        let days = self.session_days.unwrap_or(DEFAULT_SESSION_TTL_DAYS);
        if !(1..=MAX_SESSION_DAYS).contains(&days) {
            bail!(
                "session_days must be between 1 and {}, got {}",
                MAX_SESSION_DAYS,
                days
            );
        }
        Duration::try_days(days).with_context(|| format!("session_days out of range: {}", days))
    }

    /// Resolve the tracing filter directive.
    ///
    /// `-v` and `-vv` override the config file with `debug` and `trace`.
    pub fn log_directive(&self, verbose: u8) -> String {
        match verbose {
            0 => self.log.clone().unwrap_or_else(|| "info".to_string()),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}
