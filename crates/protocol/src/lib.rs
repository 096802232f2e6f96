//! Shared protocol types for the sitekeeper dashboard.
//!
//! This crate defines the project data model and the pure logic that the
//! terminal shell renders: renewal countdowns, the renewal feed, and the
//! sort and search functions behind every table.
//!
//! # Overview
//!
//! - [`project`]: Projects, clients, websites and service terms
//! - [`note`]: Project notes and the save hook
//! - [`date`]: Date parsing and the day-count rule
//! - [`renewal`]: Renewal feed derivation and urgency
//! - [`view`]: Table sorting and search
//! - [`summary`]: Dashboard overview figures
//! - [`message`]: TUI event messages
//! - [`dummy`]: Seed data
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use sitekeeper_protocol::dummy::sample_projects;
//! use sitekeeper_protocol::{SortState, ViewState, derive_renewal_feed};
//!
//! let projects = sample_projects();
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//!
//! let feed = derive_renewal_feed(&projects, now);
//! assert_eq!(feed.len(), 6);
//! assert_eq!(feed.items[0].id(), "1-domain");
//!
//! let mut view = ViewState::new(SortState::projects_default());
//! view.query = "godaddy".to_string();
//! let rows = view.apply(&projects);
//! assert_eq!(rows.len(), 2);
//! ```

pub mod date;
pub mod dummy;
pub mod error;
pub mod message;
pub mod note;
pub mod project;
pub mod renewal;
pub mod summary;
pub mod view;

// Re-export primary types at crate root for convenience
pub use date::{days_until, parse_date};
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use note::{DEFAULT_COLOR, LoggingNotesSink, MemoryNotesSink, NoteField, NotesSink, ProjectNote};
pub use project::{
    Client, Project, ProjectId, ProjectStatus, ServiceKind, ServiceTerm, Website, parse_projects,
};
pub use renewal::{
    RejectedProject, RenewalFeed, RenewalItem, URGENCY_THRESHOLD_DAYS, Urgency,
    derive_renewal_feed, project_renewals, urgency_class,
};
pub use summary::{DomainCountdown, PortfolioSummary, domain_countdown, find_project};
pub use view::{SortDirection, SortKey, SortState, ViewState, filter_projects, sort_projects};
