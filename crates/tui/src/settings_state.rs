//! Settings tab state management.
//!
//! This module provides state management for the settings UI, including
//! section navigation, item selection, and edit mode handling. Changes are
//! applied to an in-memory [`Config`] straight away so that display choices
//! show up immediately; writing them to disk is a separate, explicit save.

use sitekeeper_config::{Config, Notification, ProfileField};
use tracing::debug;

use crate::edit::EditMode;

/// Sections of the settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsSection {
    /// Operator name and contact details.
    #[default]
    Profile,
    /// Notification switches.
    Notifications,
    /// Theme, date format and currency.
    Display,
}

impl SettingsSection {
    /// Returns the next section (wrapping around).
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Profile => Self::Notifications,
            Self::Notifications => Self::Display,
            Self::Display => Self::Profile,
        }
    }

    /// Returns the previous section (wrapping around).
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Profile => Self::Display,
            Self::Notifications => Self::Profile,
            Self::Display => Self::Notifications,
        }
    }

    /// Returns the display name for this section.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Notifications => "Notifications",
            Self::Display => "Display",
        }
    }

    /// Returns all sections in order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Profile, Self::Notifications, Self::Display]
    }

    /// Returns the items of this section in display order.
    #[must_use]
    pub fn items(self) -> Vec<SettingsItem> {
        match self {
            Self::Profile => ProfileField::all()
                .iter()
                .copied()
                .map(SettingsItem::Profile)
                .collect(),
            Self::Notifications => Notification::all()
                .iter()
                .copied()
                .map(SettingsItem::Notification)
                .collect(),
            Self::Display => vec![
                SettingsItem::Theme,
                SettingsItem::DateFormat,
                SettingsItem::Currency,
            ],
        }
    }
}

/// One row of the settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsItem {
    /// A free-text profile field, edited in place.
    Profile(ProfileField),
    /// A notification switch, toggled.
    Notification(Notification),
    /// The UI theme, cycled.
    Theme,
    /// The date format, cycled.
    DateFormat,
    /// The currency, cycled.
    Currency,
}

impl SettingsItem {
    /// Returns the row label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile(field) => field.label(),
            Self::Notification(which) => which.label(),
            Self::Theme => "Theme",
            Self::DateFormat => "Date Format",
            Self::Currency => "Currency",
        }
    }
}

/// State for the settings tab.
#[derive(Debug, Clone)]
pub struct SettingsState {
    /// The configuration being edited.
    config: Config,
    /// Whether the config has unsaved changes.
    dirty: bool,
    /// The currently selected section.
    section: SettingsSection,
    /// The selected item index within the current section.
    selected_item: usize,
    /// The current edit mode.
    edit_mode: EditMode,
}

impl SettingsState {
    /// Creates a new settings state from a configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitekeeper_config::Config;
    /// use sitekeeper_tui::settings_state::SettingsState;
    ///
    /// let state = SettingsState::new(Config::default());
    /// assert!(!state.is_dirty());
    /// ```
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            dirty: false,
            section: SettingsSection::default(),
            selected_item: 0,
            edit_mode: EditMode::None,
        }
    }

    /// Returns a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns whether the configuration has unsaved changes.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the configuration as saved (no longer dirty).
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Returns the currently selected section.
    #[must_use]
    pub fn section(&self) -> SettingsSection {
        self.section
    }

    /// Returns the selected item index within the current section.
    #[must_use]
    pub fn selected_item(&self) -> usize {
        self.selected_item
    }

    /// Returns the selected row.
    #[must_use]
    pub fn selected(&self) -> Option<SettingsItem> {
        self.section.items().get(self.selected_item).copied()
    }

    /// Returns a reference to the current edit mode.
    #[must_use]
    pub fn edit_mode(&self) -> &EditMode {
        &self.edit_mode
    }

    /// Returns `true` if currently in edit mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.edit_mode.is_editing()
    }

    /// Moves to the next section.
    pub fn next_section(&mut self) {
        self.section = self.section.next();
        self.selected_item = 0;
    }

    /// Moves to the previous section.
    pub fn prev_section(&mut self) {
        self.section = self.section.prev();
        self.selected_item = 0;
    }

    /// Navigates within the current section, wrapping around.
    ///
    /// # Arguments
    ///
    /// * `delta` - Direction to navigate (positive = down, negative = up)
    pub fn navigate(&mut self, delta: i32) {
        let item_count = self.item_count() as i32;
        if item_count == 0 {
            self.selected_item = 0;
            return;
        }
        self.selected_item = (self.selected_item as i32 + delta).rem_euclid(item_count) as usize;
    }

    /// Returns the number of items in the current section.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.section.items().len()
    }

    /// Acts on the selected item.
    ///
    /// Profile fields enter text editing, notification switches flip and
    /// display choices move to their next value.
    pub fn start_edit(&mut self) {
        let Some(item) = self.selected() else {
            return;
        };
        let display = &mut self.config.display;
        match item {
            SettingsItem::Profile(field) => {
                self.edit_mode = EditMode::text(self.config.profile.get(field));
                return;
            }
            SettingsItem::Notification(which) => {
                let enabled = self.config.notifications.toggle(which);
                debug!(setting = which.label(), enabled, "toggled notification");
            }
            SettingsItem::Theme => display.theme = display.theme.next(),
            SettingsItem::DateFormat => display.date_format = display.date_format.next(),
            SettingsItem::Currency => display.currency = display.currency.next(),
        }
        self.dirty = true;
    }

    /// Confirms the current edit.
    ///
    /// The value is stored even if it does not validate; validation happens
    /// on save so the operator can fix it in place.
    pub fn confirm_edit(&mut self) {
        let Some(value) = self.edit_mode.take() else {
            return;
        };
        if let Some(SettingsItem::Profile(field)) = self.selected() {
            self.config.profile.set(field, value.trim());
            self.dirty = true;
        }
    }

    /// Cancels the current edit.
    pub fn cancel_edit(&mut self) {
        self.edit_mode = EditMode::None;
    }

    /// Handles character input while in edit mode.
    pub fn input_char(&mut self, ch: char) {
        self.edit_mode.insert_char(ch);
    }

    /// Handles backspace while in edit mode.
    pub fn backspace(&mut self) {
        self.edit_mode.backspace();
    }
}
