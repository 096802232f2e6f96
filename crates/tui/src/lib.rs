//! Terminal UI for the sitekeeper dashboard.
//!
//! This crate provides a Ratatui-based terminal interface over a portfolio
//! of client web projects: totals and upcoming renewals on the dashboard,
//! sortable and searchable project and domain tables, a per-project detail
//! view with a notes editor, and a settings tab.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Tabs, tables, selection and search
//! - [`notes_state`]: The notes editor
//! - [`settings_state`]: The settings tab
//! - [`edit`]: The text buffer shared by both editors
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use sitekeeper_protocol::dummy::{sample_notes, sample_projects};
//! use sitekeeper_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(sample_projects(), sample_notes(), Utc::now());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod edit;
pub mod event;
pub mod layout;
pub mod notes_state;
pub mod settings_state;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{AppState, Focus, Tab};
