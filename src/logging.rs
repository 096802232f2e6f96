//! File logging for the dashboard binary.
//!
//! The terminal belongs to the TUI, so events go to
//! `<user data dir>/sitekeeper.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context as _;
use sitekeeper_config::persistence::user_data_dir;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `sitekeeper=debug`.
pub const LOG_ENV: &str = "SITEKEEPER_LOG";

const LOG_FILE: &str = "sitekeeper.log";

/// Installs the global subscriber and returns the log file path.
pub fn init() -> anyhow::Result<PathBuf> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new("info"))
        .context("build log filter")?;

    let dir = user_data_dir().context("locate data directory")?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!("initialize tracing subscriber: {err}"))?;

    Ok(path)
}
