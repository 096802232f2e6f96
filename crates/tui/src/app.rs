//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap},
};
use sitekeeper_config::Config;
use sitekeeper_protocol::{LoggingNotesSink, Message, NotesSink, Project, ProjectNote};
use tracing::{debug, info, warn};

use crate::{
    AppState,
    event::{InputMode, event_to_message, poll_event},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_BAR_HEIGHT},
    notes_state::NotesState,
    settings_state::SettingsState,
    state::Tab,
    terminal::AppTerminal,
    widgets::{
        RenderContext, render_dashboard, render_domains_table, render_help_overlay,
        render_project_detail, render_projects_table, render_settings, render_status_bar,
    },
};

/// The main application struct.
///
/// Owns the dashboard state, the notes form and the settings being edited,
/// and turns [`Message`]s into changes to them.
#[derive(Debug)]
pub struct App {
    state: AppState,
    notes: NotesState,
    settings: SettingsState,
    /// File the settings were loaded from; saves go back there.
    config_path: Option<PathBuf>,
    notes_sink: Box<dyn NotesSink>,
    /// Result of the last action, shown in the status bar.
    status: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates an application with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use sitekeeper_protocol::dummy::{sample_notes, sample_projects};
    /// use sitekeeper_tui::App;
    ///
    /// let app = App::new(sample_projects(), sample_notes(), Utc::now());
    /// assert!(!app.should_quit());
    /// ```
    #[must_use]
    pub fn new(projects: Vec<Project>, notes: ProjectNote, now: DateTime<Utc>) -> Self {
        Self::with_config(projects, notes, now, Config::default(), None)
    }

    /// Creates an application with the given settings.
    ///
    /// `config_path` is where [`Message::SettingsSave`] writes; without one,
    /// settings go to the default user config file.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use sitekeeper_config::Config;
    /// use sitekeeper_protocol::dummy::{sample_notes, sample_projects};
    /// use sitekeeper_tui::App;
    ///
    /// let config = Config::default();
    /// let app = App::with_config(sample_projects(), sample_notes(), Utc::now(), config, None);
    /// assert_eq!(app.config().profile.name, "John Doe");
    /// ```
    #[must_use]
    pub fn with_config(
        projects: Vec<Project>,
        notes: ProjectNote,
        now: DateTime<Utc>,
        config: Config,
        config_path: Option<PathBuf>,
    ) -> Self {
        Self {
            state: AppState::new(projects, now),
            notes: NotesState::new(notes),
            settings: SettingsState::new(config),
            config_path,
            notes_sink: Box::new(LoggingNotesSink),
            status: None,
            should_quit: false,
        }
    }

    /// Replaces where saved notes are sent.
    #[must_use]
    pub fn with_notes_sink(mut self, sink: impl NotesSink + 'static) -> Self {
        self.notes_sink = Box::new(sink);
        self
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the notes form.
    #[must_use]
    pub fn notes(&self) -> &NotesState {
        &self.notes
    }

    /// Returns the settings as currently edited, saved or not.
    #[must_use]
    pub fn config(&self) -> &Config {
        self.settings.config()
    }

    /// Returns the last status message.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns whether the application should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the key map for the current view.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.state.tab == Tab::Settings {
            InputMode::Settings {
                editing: self.settings.is_editing(),
            }
        } else if self.state.is_detail_visible() {
            InputMode::Notes {
                editing: self.notes.is_editing(),
            }
        } else if self.state.is_searching() {
            InputMode::Search
        } else {
            InputMode::Normal
        }
    }

    /// Processes a message and updates the application state.
    ///
    /// When the help overlay is visible, every message except `Quit`
    /// dismisses it instead of doing its normal action.
    pub fn update(&mut self, msg: Message) {
        if self.state.help_visible {
            match msg {
                Message::Quit => self.should_quit = true,
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        self.status = None;

        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::ToggleHelp => {
                self.state.toggle_help();
            }
            Message::NextTab => self.state.next_tab(),
            Message::PrevTab => self.state.prev_tab(),
            Message::GoToTab { index } => {
                let _ = self.state.go_to_index(index);
            }
            Message::Refresh => {
                self.state.refresh(Utc::now());
                self.status = Some("Renewals refreshed".to_string());
            }
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),
            Message::SortBySelected => self.state.sort_by_selected(),
            Message::Select => {
                if let Err(err) = self.state.select_highlighted() {
                    warn!(%err, "cannot open project");
                    self.status = Some(err.to_string());
                }
            }
            Message::Back | Message::Escape => {
                if self.state.close_detail() {
                    self.notes.cancel_edit();
                } else {
                    let _ = self.state.clear_search();
                }
            }
            Message::OpenWebsite => self.open_website(),
            Message::StartSearch => self.state.start_search(),
            Message::SearchInput { ch } => self.state.search_input(ch),
            Message::SearchBackspace => self.state.search_backspace(),
            Message::SearchConfirm => self.state.confirm_search(),
            Message::SearchCancel => self.state.cancel_search(),
            msg if self.state.is_detail_visible() => self.update_notes(msg),
            msg if self.state.tab == Tab::Settings => self.update_settings(msg),
            _ => {}
        }
    }

    fn update_notes(&mut self, msg: Message) {
        match msg {
            Message::NotesNavigate { delta } => self.notes.navigate(delta),
            Message::NotesEdit => self.notes.start_edit(),
            Message::NotesInput { ch } => self.notes.input_char(ch),
            Message::NotesNewline => self.notes.newline(),
            Message::NotesBackspace => self.notes.backspace(),
            Message::NotesConfirm => self.notes.confirm_edit(),
            Message::NotesCancel => self.notes.cancel_edit(),
            Message::NotesClearField => self.notes.clear_selected(),
            Message::NotesAddColor => self.notes.add_color(),
            Message::NotesRemoveColor => self.notes.remove_color(),
            Message::NotesSave => {
                self.notes_sink.save_notes(self.notes.notes());
                self.notes.mark_saved();
                info!("saved notes");
                self.status = Some("Notes saved".to_string());
            }
            _ => {}
        }
    }

    fn update_settings(&mut self, msg: Message) {
        match msg {
            Message::SettingsNextSection => self.settings.next_section(),
            Message::SettingsPrevSection => self.settings.prev_section(),
            Message::SettingsNavigate { delta } => self.settings.navigate(delta),
            Message::SettingsEdit => self.settings.start_edit(),
            Message::SettingsConfirm => self.settings.confirm_edit(),
            Message::SettingsCancel => self.settings.cancel_edit(),
            Message::SettingsInput { ch } => self.settings.input_char(ch),
            Message::SettingsBackspace => self.settings.backspace(),
            Message::SettingsSave => self.save_settings(),
            _ => {}
        }
    }

    fn save_settings(&mut self) {
        let config = self.settings.config();
        let result = match &self.config_path {
            Some(path) => config.save_to(path).map(|()| path.clone()),
            None => config.save_to_user_config(),
        };

        match result {
            Ok(path) => {
                self.settings.mark_saved();
                info!(path = %path.display(), "saved settings");
                self.status = Some(format!("Settings saved to {}", path.display()));
            }
            Err(err) => {
                warn!(%err, "failed to save settings");
                self.status = Some(format!("Save failed: {err}"));
            }
        }
    }

    fn open_website(&mut self) {
        let Some(url) = self
            .state
            .highlighted_project()
            .map(|project| project.website.url.clone())
            .filter(|url| !url.is_empty())
        else {
            self.status = Some("No website to open".to_string());
            return;
        };

        debug!(%url, "opening website");
        if let Err(err) = open::that(&url) {
            warn!(%url, %err, "failed to open website");
            self.status = Some(format!("Cannot open {url}: {err}"));
        }
    }

    /// Renders the application to the frame.
    ///
    /// Below [`MIN_WIDTH`]×[`MIN_HEIGHT`] only a notice is drawn; below
    /// [`MIN_HEIGHT_WITH_HEADER`] the header is dropped to make room.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.render_terminal_too_small(frame, area);
            return;
        }

        let ctx = RenderContext::new(self.settings.config().display, self.state.now);
        let header_height = if area.height >= MIN_HEIGHT_WITH_HEADER {
            HEADER_HEIGHT
        } else {
            0
        };

        let [header_area, content_area, status_area] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        if header_height > 0 {
            self.render_header(frame, header_area, &ctx);
        }
        self.render_content(frame, content_area, &ctx);

        let buf = frame.buffer_mut();
        render_status_bar(
            self.input_mode(),
            self.status.as_deref(),
            &ctx.palette,
            status_area,
            buf,
        );

        if self.state.help_visible {
            render_help_overlay(&ctx.palette, area, buf);
        }
    }

    fn render_content(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let state = &self.state;
        let buf = frame.buffer_mut();

        match state.tab {
            Tab::Dashboard => render_dashboard(state, ctx, area, buf),
            Tab::Projects => match state.selected_project() {
                Some(project) if state.is_detail_visible() => {
                    render_project_detail(project, &self.notes, ctx, area, buf);
                }
                _ => {
                    let rows = state.projects_table.rows(&state.projects);
                    render_projects_table(
                        &rows,
                        &state.projects_table,
                        state.is_searching(),
                        ctx,
                        area,
                        buf,
                    );
                }
            },
            Tab::Domains => {
                let rows = state.domains_table.rows(&state.projects);
                render_domains_table(
                    &rows,
                    &state.domains_table,
                    state.is_searching(),
                    ctx,
                    area,
                    buf,
                );
            }
            Tab::Settings => render_settings(&self.settings, ctx, area, buf),
        }
    }

    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Renders the header bar with the title, tab bar and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, tabs_area, help_area] = Layout::horizontal([
            Constraint::Length(13),
            Constraint::Min(0),
            Constraint::Length(17),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("sitekeeper", palette.title()))),
            title_area,
        );

        let titles = Tab::all()
            .iter()
            .map(|tab| format!("{} {}", tab.index() + 1, tab.title()));
        let tabs = Tabs::new(titles)
            .select(self.state.tab.index())
            .style(palette.muted())
            .highlight_style(palette.selected())
            .divider("|");
        frame.render_widget(tabs, tabs_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", palette.muted()),
            Span::styled("?", Style::default().fg(palette.highlight)),
            Span::styled(" for help", palette.muted()),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Runs the main application loop until the operator quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::Utc;
    /// use sitekeeper_protocol::dummy::{sample_notes, sample_projects};
    /// use sitekeeper_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(sample_projects(), sample_notes(), Utc::now());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.input_mode())
            {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }

            tokio::task::yield_now().await;
        }

        Ok(())
    }
}
