//! Operator settings for the sitekeeper dashboard.
//!
//! This crate loads, validates and saves the settings edited in the
//! dashboard's settings tab.
//!
//! # Overview
//!
//! - [`config`]: The top-level [`Config`] and its load/save entry points
//! - [`profile`]: Operator name and contact details
//! - [`notifications`]: Notification switches
//! - [`display`]: Theme, date format and currency
//! - [`persistence`]: File discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # File Format
//!
//! ```json5
//! {
//!   profile: { name: "Jane Roe", email: "jane@studio.dev", company: "Studio", phone: "" },
//!   notifications: { renewal_reminders: true, marketing_emails: false },
//!   display: { theme: "system", date_format: "MM/DD/YYYY", currency: "USD" },
//! }
//! ```
//!
//! Every section and field is optional; missing values take their defaults.
//!
//! # Examples
//!
//! ```no_run
//! use sitekeeper_config::Config;
//!
//! # fn example() -> sitekeeper_config::Result<()> {
//! let (config, _path) = Config::load()?;
//! println!("Revenue shown in {}", config.display.currency.code());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod notifications;
pub mod persistence;
pub mod profile;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use display::{Currency, DateFormat, DisplaySettings, Theme};
pub use error::{ConfigError, Result};
pub use notifications::{Notification, NotificationSettings};
pub use profile::{Profile, ProfileField};
