//! Shared layout measurements.

/// Height of the header bar (title, tabs and help cue) in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar at the bottom of the screen.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the stat boxes at the top of the dashboard.
pub const SUMMARY_HEIGHT: u16 = 4;

/// Height of one project card on the dashboard.
pub const PROJECT_CARD_HEIGHT: u16 = 4;

/// Minimum terminal height for useful rendering.
///
/// The project detail view is the tallest screen: project facts on top and
/// at least a few note fields below.
pub const MIN_HEIGHT: u16 = 12;

/// Minimum height at which the header is shown.
///
/// Between [`MIN_HEIGHT`] and this value the header is hidden to give the
/// content its rows back.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The domains table has seven columns that stay readable down to about
/// this width.
pub const MIN_WIDTH: u16 = 60;
