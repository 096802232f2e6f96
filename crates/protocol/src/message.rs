//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use sitekeeper_protocol::Message;
///
/// let msg = Message::GoToTab { index: 2 };
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Switch to the next tab.
    NextTab,
    /// Switch to the previous tab.
    PrevTab,
    /// Jump to a tab by its zero-based position.
    GoToTab {
        /// Tab position.
        index: usize,
    },
    /// Move the column cursor left.
    NavigateLeft,
    /// Move the column cursor right.
    NavigateRight,
    /// Move the row selection up.
    NavigateUp,
    /// Move the row selection down.
    NavigateDown,
    /// Open the highlighted project.
    Select,
    /// Leave the project detail view.
    Back,
    /// Close an overlay or clear the search (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Re-read the clock and recompute day counts.
    Refresh,
    /// Toggle help overlay.
    ToggleHelp,
    /// Sort by the column under the cursor, toggling direction on repeat.
    SortBySelected,
    /// Open the highlighted project's website in the browser.
    OpenWebsite,

    // --- Search messages ---
    /// Start editing the search text of the current table.
    StartSearch,
    /// Append a character to the search text.
    SearchInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last search character.
    SearchBackspace,
    /// Keep the search text and return to the table.
    SearchConfirm,
    /// Clear the search text and return to the table.
    SearchCancel,

    // --- Notes messages ---
    /// Move between note fields.
    NotesNavigate {
        /// Direction to navigate (positive = down, negative = up).
        delta: i32,
    },
    /// Start editing the selected note field.
    NotesEdit,
    /// Input a character while editing a note field.
    NotesInput {
        /// The character that was input.
        ch: char,
    },
    /// Insert a line break while editing a note field.
    NotesNewline,
    /// Delete the last character while editing a note field.
    NotesBackspace,
    /// Commit the edit buffer into the note field.
    NotesConfirm,
    /// Discard the edit buffer.
    NotesCancel,
    /// Reset the selected note field to unset.
    NotesClearField,
    /// Append a color to the palette.
    NotesAddColor,
    /// Remove the last color from the palette.
    NotesRemoveColor,
    /// Hand the notes to the save hook.
    NotesSave,

    // --- Settings messages ---
    /// Move to the next settings section.
    SettingsNextSection,
    /// Move to the previous settings section.
    SettingsPrevSection,
    /// Navigate within the current settings section.
    SettingsNavigate {
        /// Direction to navigate (positive = down, negative = up).
        delta: i32,
    },
    /// Edit, toggle or cycle the selected setting.
    SettingsEdit,
    /// Confirm the current edit.
    SettingsConfirm,
    /// Cancel the current edit.
    SettingsCancel,
    /// Save settings to file.
    SettingsSave,
    /// Input a character while editing.
    SettingsInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last character while editing.
    SettingsBackspace,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitekeeper_protocol::Message;
    ///
    /// assert!(Message::NextTab.is_navigation());
    /// assert!(Message::NavigateUp.is_navigation());
    /// assert!(!Message::Select.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NextTab
                | Self::PrevTab
                | Self::GoToTab { .. }
                | Self::NavigateLeft
                | Self::NavigateRight
                | Self::NavigateUp
                | Self::NavigateDown
                | Self::NotesNavigate { .. }
                | Self::SettingsNavigate { .. }
                | Self::SettingsNextSection
                | Self::SettingsPrevSection
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitekeeper_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Back.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message edits the search text.
    #[must_use]
    pub fn is_search(&self) -> bool {
        matches!(
            self,
            Self::StartSearch
                | Self::SearchInput { .. }
                | Self::SearchBackspace
                | Self::SearchConfirm
                | Self::SearchCancel
        )
    }

    /// Returns `true` if this message is a notes-editor action.
    #[must_use]
    pub fn is_notes(&self) -> bool {
        matches!(
            self,
            Self::NotesNavigate { .. }
                | Self::NotesEdit
                | Self::NotesInput { .. }
                | Self::NotesNewline
                | Self::NotesBackspace
                | Self::NotesConfirm
                | Self::NotesCancel
                | Self::NotesClearField
                | Self::NotesAddColor
                | Self::NotesRemoveColor
                | Self::NotesSave
        )
    }

    /// Returns `true` if this message is a settings-related action.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitekeeper_protocol::Message;
    ///
    /// assert!(Message::SettingsSave.is_settings());
    /// assert!(!Message::NavigateLeft.is_settings());
    /// ```
    #[must_use]
    pub fn is_settings(&self) -> bool {
        matches!(
            self,
            Self::SettingsNextSection
                | Self::SettingsPrevSection
                | Self::SettingsNavigate { .. }
                | Self::SettingsEdit
                | Self::SettingsConfirm
                | Self::SettingsCancel
                | Self::SettingsSave
                | Self::SettingsInput { .. }
                | Self::SettingsBackspace
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_navigation_detection() {
        assert!(Message::NextTab.is_navigation());
        assert!(Message::PrevTab.is_navigation());
        assert!(Message::GoToTab { index: 0 }.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(Message::NotesNavigate { delta: 1 }.is_navigation());
        assert!(Message::SettingsNavigate { delta: -1 }.is_navigation());
        assert!(!Message::Select.is_navigation());
        assert!(!Message::SortBySelected.is_navigation());
        assert!(!Message::Quit.is_navigation());
    }

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
        assert!(!Message::SearchCancel.is_terminating());
    }

    #[test]
    fn message_category_detection() {
        assert!(Message::SearchInput { ch: 'g' }.is_search());
        assert!(Message::StartSearch.is_search());
        assert!(!Message::NotesInput { ch: 'g' }.is_search());

        assert!(Message::NotesSave.is_notes());
        assert!(Message::NotesAddColor.is_notes());
        assert!(!Message::SettingsSave.is_notes());

        assert!(Message::SettingsEdit.is_settings());
        assert!(Message::SettingsInput { ch: 'a' }.is_settings());
        assert!(!Message::NotesEdit.is_settings());
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::SortBySelected).expect("serialize");
        assert_eq!(json, r#""sort_by_selected""#);

        let json = serde_json::to_string(&Message::GoToTab { index: 1 }).expect("serialize");
        assert_eq!(json, r#"{"go_to_tab":{"index":1}}"#);

        let parsed: Message = serde_json::from_str(r#""notes_save""#).expect("deserialize");
        assert_eq!(parsed, Message::NotesSave);
    }
}
