//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! operator settings for the sitekeeper dashboard.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::display::DisplaySettings;
use crate::error::Result;
use crate::notifications::NotificationSettings;
use crate::persistence::{
    default_user_config_path, find_config_file, read_config_file, write_config_file,
};
use crate::profile::Profile;

/// The main configuration struct for the sitekeeper dashboard.
///
/// # Examples
///
/// ```
/// use sitekeeper_config::{Config, Currency, DisplaySettings};
///
/// let config = Config::default();
/// assert!(config.notifications.renewal_reminders);
///
/// let config = Config {
///     display: DisplaySettings {
///         currency: Currency::Eur,
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// assert_eq!(config.display.currency.format(4500.0), "€4,500");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Who runs the dashboard.
    #[serde(default)]
    pub profile: Profile,

    /// Which notifications are wanted.
    #[serde(default)]
    pub notifications: NotificationSettings,

    /// How dates and revenue are rendered.
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Config {
    /// Creates a configuration with default values.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./sitekeeper.json5` or `./sitekeeper.json`
    /// 2. User: `~/.config/sitekeeper/config.json5` or `~/.config/sitekeeper/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    /// The path of the file that was read, if any, is returned alongside so
    /// that a later save goes back to the same place.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sitekeeper_config::Config;
    ///
    /// # fn example() -> sitekeeper_config::Result<()> {
    /// let (config, path) = Config::load()?;
    /// println!("Hello, {} ({:?})", config.profile.name, path);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        match find_config_file() {
            Some(path) => {
                let config = Self::load_from(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sitekeeper_config::Config;
    ///
    /// # fn example() -> sitekeeper_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the file cannot
    /// be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        self.validate()?;
        write_config_file(path, self)
    }

    /// Saves the configuration to the default user config file and returns
    /// its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, the
    /// configuration is invalid, or the file cannot be written.
    pub fn save_to_user_config(&self) -> Result<PathBuf> {
        let path = default_user_config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitekeeper_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.profile.email = "not-an-address".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.profile.validate()
    }
}
