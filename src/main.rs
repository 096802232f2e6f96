//! sitekeeper - A terminal dashboard for client web projects and their
//! domain and hosting renewals.
//!
//! This is the main binary that launches the TUI application.

mod logging;

use chrono::Utc;
use sitekeeper_config::Config;
use sitekeeper_protocol::dummy::{sample_notes, sample_projects};
use sitekeeper_tui::{App, terminal};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match logging::init() {
        Ok(path) => info!(path = %path.display(), "logging started"),
        Err(err) => eprintln!("sitekeeper: logging disabled: {err:#}"),
    }

    let (config, config_path) = match Config::load() {
        Ok(loaded) => loaded,
        Err(err) => {
            warn!(%err, "using default settings");
            (Config::default(), None)
        }
    };
    if let Some(path) = &config_path {
        info!(path = %path.display(), "loaded settings");
    }

    let projects = sample_projects();
    for project in &projects {
        if let Err(err) = project.validate() {
            warn!(project = %project.id, %err, "invalid project record");
        }
    }
    info!(projects = projects.len(), "starting dashboard");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::with_config(projects, sample_notes(), Utc::now(), config, config_path);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
