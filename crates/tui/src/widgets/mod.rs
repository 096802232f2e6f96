//! Widget components for the sitekeeper TUI.
//!
//! Every widget is a plain function that draws state into a [`Buffer`], so
//! tests can render into an in-memory buffer and inspect the text.
//!
//! # Modules
//!
//! - [`dashboard`]: Portfolio totals, project cards and upcoming renewals
//! - [`tables`]: The projects and domains tables
//! - [`project_detail`]: One project's facts and the notes editor
//! - [`settings`]: The settings tab
//! - [`help`]: The keybinding overlay
//! - [`status_bar`]: The footer with hints and status messages
//! - [`palette`]: Colors per theme
//! - [`format`]: Date and day-count text
//!
//! # Colors
//!
//! | Element | Palette color |
//! |---------|---------------|
//! | Renewal within 30 days | `urgent` |
//! | Renewal further out, active project | `normal` |
//! | Completed project | `completed` |
//! | Selected row, card or column | `highlight` |
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use sitekeeper_config::DisplaySettings;
//! use sitekeeper_protocol::dummy::sample_projects;
//! use sitekeeper_tui::AppState;
//! use sitekeeper_tui::widgets::{self, RenderContext};
//!
//! let now = Utc::now();
//! let state = AppState::new(sample_projects(), now);
//! let ctx = RenderContext::new(DisplaySettings::default(), now);
//!
//! let area = Rect::new(0, 0, 100, 30);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_dashboard(&state, &ctx, area, &mut buf);
//! ```
//!
//! [`Buffer`]: ratatui::buffer::Buffer

use chrono::{DateTime, Utc};
use sitekeeper_config::DisplaySettings;

pub mod dashboard;
pub mod format;
pub mod help;
pub mod palette;
pub mod project_detail;
pub mod settings;
pub mod status_bar;
pub mod tables;

// Re-export primary rendering functions for convenience
pub use dashboard::render_dashboard;
pub use help::render_help_overlay;
pub use palette::Palette;
pub use project_detail::render_project_detail;
pub use settings::render_settings;
pub use status_bar::render_status_bar;
pub use tables::{render_domains_table, render_projects_table};

/// What every widget needs besides its own state: colors, display
/// preferences and the instant day counts are measured from.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Colors of the active theme.
    pub palette: Palette,
    /// Date format and currency.
    pub display: DisplaySettings,
    /// The reference instant for countdowns.
    pub now: DateTime<Utc>,
}

impl RenderContext {
    /// Creates a context for the given display settings.
    #[must_use]
    pub fn new(display: DisplaySettings, now: DateTime<Utc>) -> Self {
        Self {
            palette: Palette::for_theme(display.theme),
            display,
            now,
        }
    }

    /// Formats a raw date string with the configured date format.
    #[must_use]
    pub fn date(&self, raw: &str) -> String {
        format::display_date(raw, self.display.date_format)
    }
}
