//! Runtime configuration from environment variables.
//!
//! - `TENNIS_PLAYER1_NAME` / `TENNIS_PLAYER2_NAME`: scoreboard names
//! - `TENNIS_LOG`: tracing filter directive (default `info`)
//! - `TENNIS_LOG_PATH`: file for scoreboard logs (unset: no logging, the
//!   scoreboard owns the terminal)

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub player1_name: String,
    pub player2_name: String,
    pub log_filter: String,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player1_name: "Player 1".to_string(),
            player2_name: "Player 2".to_string(),
            log_filter: "info".to_string(),
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        Self {
            player1_name: get("TENNIS_PLAYER1_NAME").unwrap_or(defaults.player1_name),
            player2_name: get("TENNIS_PLAYER2_NAME").unwrap_or(defaults.player2_name),
            log_filter: get("TENNIS_LOG").unwrap_or(defaults.log_filter),
            log_path: get("TENNIS_LOG_PATH"),
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_filter).unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Log to stderr (line-oriented tools).
    pub fn init_stderr_logging(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .init();
    }

    /// Log to `log_path` if configured; otherwise leave logging off.
    pub fn init_file_logging(&self) -> Result<()> {
        let Some(path) = &self.log_path else {
            return Ok(());
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open log file {path}"))?;
        tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
        Ok(())
    }
}
