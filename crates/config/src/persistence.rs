//! Where settings live on disk, and how they are read and written.
//!
//! Settings are read as JSON5 (a superset of JSON, so plain `.json` files
//! work too) and written back as pretty-printed JSON.
//!
//! # Search Order
//!
//! 1. Working directory: `./sitekeeper.json5`, then `./sitekeeper.json`
//! 2. User config directory: `~/.config/sitekeeper/config.json5`, then
//!    `~/.config/sitekeeper/config.json`
//!
//! The first file that exists wins; nothing is merged.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ConfigError, Result};

/// Name of the per-user directory under the platform config and data dirs.
pub const APP_DIR: &str = "sitekeeper";

/// File names checked in the working directory, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["sitekeeper.json5", "sitekeeper.json"];

/// File names checked in the user config directory, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the settings file using the working directory and the platform
/// config directory.
///
/// # Examples
///
/// ```no_run
/// use sitekeeper_config::persistence::find_config_file;
///
/// match find_config_file() {
///     Some(path) => println!("settings from {}", path.display()),
///     None => println!("using built-in defaults"),
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = dirs::config_dir().map(|dir| dir.join(APP_DIR));
    find_config_file_in(Path::new("."), user_dir.as_deref())
}

/// Finds the settings file under explicit roots.
///
/// `local_dir` stands in for the working directory and `user_dir` for
/// `~/.config/sitekeeper`.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|candidate| candidate.is_file())
}

/// Returns `~/.config/sitekeeper` (or the platform equivalent).
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform config directory
/// is unknown.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the file new settings are saved to when none was loaded.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform config directory
/// is unknown.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(USER_FILE_NAMES[0]))
}

/// Returns `~/.local/share/sitekeeper` (or the platform equivalent), where
/// the log file goes.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform data directory
/// is unknown.
pub fn user_data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads and parses a settings file.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if its content does not describe a `T`.
pub fn read_config_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json5::from_str(&content)?)
}

/// Writes settings as pretty JSON, creating missing parent directories.
///
/// # Errors
///
/// Returns [`ConfigError::SerializeJson`] if `value` cannot be serialized
/// and [`ConfigError::WriteFile`] if the directory or file cannot be written.
pub fn write_config_file<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let content = serde_json::to_string_pretty(value)?;

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    std::fs::write(path, content).map_err(write_error)
}
