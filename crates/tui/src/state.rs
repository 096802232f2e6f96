//! Application state management.
//!
//! [`AppState`] owns the canonical project list, the clock snapshot every
//! day count is computed against, and the per-table [`ViewState`]s. Derived
//! rows are recomputed from these on demand and borrow from the project list.

use chrono::{DateTime, Utc};
use sitekeeper_protocol::{
    PortfolioSummary, Project, ProjectId, RenewalFeed, Result, SortKey, SortState, ViewState,
    derive_renewal_feed, find_project,
};
use tracing::debug;

/// Top-level screens, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Portfolio summary, project cards and the renewal feed.
    #[default]
    Dashboard,
    /// Sortable, searchable project table and the project detail view.
    Projects,
    /// Domain and hosting renewals per project.
    Domains,
    /// Operator settings.
    Settings,
}

impl Tab {
    /// Returns all tabs in order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Dashboard, Self::Projects, Self::Domains, Self::Settings]
    }

    /// Returns the tab title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Projects => "Projects",
            Self::Domains => "Domains",
            Self::Settings => "Settings",
        }
    }

    /// Returns the zero-based position in the tab bar.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the tab at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Returns the next tab (wrapping around).
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(wrap(self.index(), 1, Self::all().len())).unwrap_or_default()
    }

    /// Returns the previous tab (wrapping around).
    #[must_use]
    pub fn prev(self) -> Self {
        Self::from_index(wrap(self.index(), -1, Self::all().len())).unwrap_or_default()
    }
}

/// Which part of the current tab receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The tab's main content (cards, table rows, settings list).
    #[default]
    Content,
    /// The search line of the current table.
    Search,
    /// The project detail view and its notes editor.
    Detail,
}

/// Cursor and view state of one project table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Sort and search state handed to the engine.
    pub view: ViewState,
    /// Highlighted row within the derived rows.
    pub selected_row: usize,
    /// Highlighted sortable column.
    pub selected_column: usize,
    columns: &'static [SortKey],
}

impl TableView {
    /// Creates a table over the sortable `columns`, starting at `sort`.
    ///
    /// The column cursor starts on the sorted column.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitekeeper_protocol::{SortKey, SortState};
    /// use sitekeeper_tui::state::TableView;
    ///
    /// let table = TableView::new(SortKey::PROJECT_COLUMNS, SortState::projects_default());
    /// assert_eq!(table.selected_key(), Some(SortKey::StartDate));
    /// ```
    #[must_use]
    pub fn new(columns: &'static [SortKey], sort: SortState) -> Self {
        let selected_column = columns.iter().position(|key| *key == sort.key).unwrap_or(0);
        Self {
            view: ViewState::new(sort),
            selected_row: 0,
            selected_column,
            columns,
        }
    }

    /// Returns the sortable columns in display order.
    #[must_use]
    pub fn columns(&self) -> &'static [SortKey] {
        self.columns
    }

    /// Returns the sort key under the column cursor.
    #[must_use]
    pub fn selected_key(&self) -> Option<SortKey> {
        self.columns.get(self.selected_column).copied()
    }

    /// Moves the column cursor, wrapping around.
    pub fn move_column(&mut self, delta: isize) {
        self.selected_column = wrap(self.selected_column, delta, self.columns.len());
    }

    /// Moves the row cursor within `row_count` rows, wrapping around.
    pub fn move_row(&mut self, delta: isize, row_count: usize) {
        self.selected_row = wrap(self.selected_row, delta, row_count);
    }

    /// Sorts by the column under the cursor.
    ///
    /// Repeating the selection toggles the direction.
    pub fn sort_by_selected(&mut self) {
        if let Some(key) = self.selected_key() {
            self.view.sort.select(key);
            self.selected_row = 0;
            debug!(
                key = key.as_str(),
                direction = ?self.view.sort.direction,
                "sorted table"
            );
        }
    }

    /// Returns the rows of this table, sorted and filtered.
    #[must_use]
    pub fn rows<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        self.view.apply(projects)
    }
}

fn wrap(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (index as isize + delta).rem_euclid(len) as usize
}

/// The application state.
#[derive(Debug)]
pub struct AppState {
    /// The canonical project list.
    pub projects: Vec<Project>,
    /// Instant all day counts are computed against.
    pub now: DateTime<Utc>,
    /// Renewal feed derived from `projects` at `now`.
    pub feed: RenewalFeed,
    /// The visible tab.
    pub tab: Tab,
    /// Current focus within the tab.
    pub focus: Focus,
    /// The projects table.
    pub projects_table: TableView,
    /// The domains table.
    pub domains_table: TableView,
    /// Highlighted project card on the dashboard.
    pub dashboard_selected: usize,
    /// Project shown in the detail view.
    pub selected_project: Option<ProjectId>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl AppState {
    /// Creates the state for `projects`, with day counts taken at `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use sitekeeper_protocol::dummy::sample_projects;
    /// use sitekeeper_tui::{AppState, state::Tab};
    ///
    /// let state = AppState::new(sample_projects(), Utc::now());
    /// assert_eq!(state.tab, Tab::Dashboard);
    /// assert_eq!(state.feed.len(), 6);
    /// ```
    #[must_use]
    pub fn new(projects: Vec<Project>, now: DateTime<Utc>) -> Self {
        let feed = derive_renewal_feed(&projects, now);
        Self {
            projects,
            now,
            feed,
            tab: Tab::default(),
            focus: Focus::default(),
            projects_table: TableView::new(SortKey::PROJECT_COLUMNS, SortState::projects_default()),
            domains_table: TableView::new(SortKey::RENEWAL_COLUMNS, SortState::renewals_default()),
            dashboard_selected: 0,
            selected_project: None,
            help_visible: false,
        }
    }

    /// Takes a new clock snapshot and recomputes the renewal feed.
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        self.now = now;
        self.feed = derive_renewal_feed(&self.projects, now);
        debug!(%now, renewals = self.feed.len(), "refreshed");
    }

    /// Returns the dashboard summary.
    #[must_use]
    pub fn summary(&self) -> PortfolioSummary<'_> {
        PortfolioSummary::with_feed(&self.projects, &self.feed)
    }

    /// Returns the dashboard cards in display order: active projects, then
    /// completed ones.
    #[must_use]
    pub fn dashboard_projects(&self) -> Vec<&Project> {
        let summary = self.summary();
        summary.active.into_iter().chain(summary.completed).collect()
    }

    /// Switches to `tab`, leaving any search or detail view.
    pub fn go_to_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.focus = Focus::Content;
            self.selected_project = None;
            debug!(tab = tab.title(), "switched tab");
        }
    }

    /// Switches to the tab at `index`. Returns `false` if there is none.
    pub fn go_to_index(&mut self, index: usize) -> bool {
        match Tab::from_index(index) {
            Some(tab) => {
                self.go_to_tab(tab);
                true
            }
            None => false,
        }
    }

    /// Switches to the next tab.
    pub fn next_tab(&mut self) {
        self.go_to_tab(self.tab.next());
    }

    /// Switches to the previous tab.
    pub fn prev_tab(&mut self) {
        self.go_to_tab(self.tab.prev());
    }

    /// Returns the table of the current tab, if it has one.
    #[must_use]
    pub fn table(&self) -> Option<&TableView> {
        match self.tab {
            Tab::Projects => Some(&self.projects_table),
            Tab::Domains => Some(&self.domains_table),
            Tab::Dashboard | Tab::Settings => None,
        }
    }

    fn table_mut(&mut self) -> Option<&mut TableView> {
        match self.tab {
            Tab::Projects => Some(&mut self.projects_table),
            Tab::Domains => Some(&mut self.domains_table),
            Tab::Dashboard | Tab::Settings => None,
        }
    }

    /// Returns the rows of the current tab: dashboard cards or table rows.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&Project> {
        match self.tab {
            Tab::Dashboard => self.dashboard_projects(),
            Tab::Projects | Tab::Domains => self
                .table()
                .map(|table| table.rows(&self.projects))
                .unwrap_or_default(),
            Tab::Settings => Vec::new(),
        }
    }

    fn selected_row(&self) -> usize {
        match self.table() {
            Some(table) => table.selected_row,
            None => self.dashboard_selected,
        }
    }

    /// Returns the project under the cursor, or the one in the detail view.
    #[must_use]
    pub fn highlighted_project(&self) -> Option<&Project> {
        if self.focus == Focus::Detail {
            return self.selected_project();
        }
        self.visible_rows().get(self.selected_row()).copied()
    }

    /// Moves the row or card cursor up.
    pub fn navigate_up(&mut self) {
        self.move_row(-1);
    }

    /// Moves the row or card cursor down.
    pub fn navigate_down(&mut self) {
        self.move_row(1);
    }

    fn move_row(&mut self, delta: isize) {
        let row_count = self.visible_rows().len();
        match self.tab {
            Tab::Dashboard => {
                self.dashboard_selected = wrap(self.dashboard_selected, delta, row_count);
            }
            Tab::Projects | Tab::Domains => {
                if let Some(table) = self.table_mut() {
                    table.move_row(delta, row_count);
                }
            }
            Tab::Settings => {}
        }
    }

    /// Moves the column cursor left.
    pub fn navigate_left(&mut self) {
        if let Some(table) = self.table_mut() {
            table.move_column(-1);
        }
    }

    /// Moves the column cursor right.
    pub fn navigate_right(&mut self) {
        if let Some(table) = self.table_mut() {
            table.move_column(1);
        }
    }

    /// Sorts the current table by the column under the cursor.
    pub fn sort_by_selected(&mut self) {
        if let Some(table) = self.table_mut() {
            table.sort_by_selected();
        }
    }

    /// Opens the project under the cursor. Does nothing if there is none.
    ///
    /// # Errors
    ///
    /// Propagates [`AppState::on_project_selected`] errors.
    pub fn select_highlighted(&mut self) -> Result<()> {
        let Some(id) = self.highlighted_project().map(|project| project.id.clone()) else {
            return Ok(());
        };
        self.on_project_selected(&id)
    }

    /// Shows the detail view of project `id` on the projects tab.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectNotFound`](sitekeeper_protocol::ProtocolError::ProjectNotFound)
    /// if no project has `id`; the state is left unchanged.
    pub fn on_project_selected(&mut self, id: &ProjectId) -> Result<()> {
        find_project(&self.projects, id)?;
        self.tab = Tab::Projects;
        self.focus = Focus::Detail;
        self.selected_project = Some(id.clone());
        debug!(project = %id, "opened project");
        Ok(())
    }

    /// Returns the project shown in the detail view.
    #[must_use]
    pub fn selected_project(&self) -> Option<&Project> {
        let id = self.selected_project.as_ref()?;
        find_project(&self.projects, id).ok()
    }

    /// Returns `true` if the project detail view is shown.
    #[must_use]
    pub fn is_detail_visible(&self) -> bool {
        self.focus == Focus::Detail && self.selected_project.is_some()
    }

    /// Leaves the detail view. Returns `false` if it was not shown.
    pub fn close_detail(&mut self) -> bool {
        if self.focus != Focus::Detail {
            return false;
        }
        self.focus = Focus::Content;
        self.selected_project = None;
        true
    }

    /// Returns `true` while the search line is being edited.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.focus == Focus::Search
    }

    /// Starts editing the search line of the current table.
    pub fn start_search(&mut self) {
        if self.table().is_some() && self.focus == Focus::Content {
            self.focus = Focus::Search;
        }
    }

    /// Appends to the search text; the rows update as the operator types.
    pub fn search_input(&mut self, ch: char) {
        if let Some(table) = self.table_mut() {
            table.view.query.push(ch);
            table.selected_row = 0;
        }
    }

    /// Removes the last search character.
    pub fn search_backspace(&mut self) {
        if let Some(table) = self.table_mut() {
            table.view.query.pop();
            table.selected_row = 0;
        }
    }

    /// Keeps the search text and returns to the table.
    pub fn confirm_search(&mut self) {
        if self.focus == Focus::Search {
            self.focus = Focus::Content;
        }
    }

    /// Clears the search text and returns to the table.
    pub fn cancel_search(&mut self) {
        self.clear_search();
        if self.focus == Focus::Search {
            self.focus = Focus::Content;
        }
    }

    /// Clears the search text of the current table. Returns `false` if it
    /// was already empty.
    pub fn clear_search(&mut self) -> bool {
        match self.table_mut() {
            Some(table) if !table.view.query.is_empty() => {
                table.view.query.clear();
                table.selected_row = 0;
                true
            }
            _ => false,
        }
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay. Returns `false` if it was not visible.
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }
}
