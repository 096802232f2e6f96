//! Terminal setup and teardown.
//!
//! The dashboard owns the whole terminal while it runs: raw mode plus the
//! alternate screen. [`restore_terminal`] undoes both, and the panic hook
//! installed by [`install_panic_hook`] does the same before a panic message
//! is printed.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Switches the terminal to raw mode on the alternate screen.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use sitekeeper_tui::terminal;
///
/// # fn example() -> Result<(), terminal::TerminalError> {
/// let mut terminal = terminal::setup_terminal()?;
/// terminal::restore_terminal(&mut terminal)?;
/// # Ok(())
/// # }
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Leaves raw mode and the alternate screen and shows the cursor again.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)?;
    Ok(())
}

/// Installs a panic hook that restores the terminal, then chains to the
/// hook that was installed before.
///
/// Call this once, before [`setup_terminal`].
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
