//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Which keys mean what depends on the
//! [`InputMode`]: the same `Enter` selects a row, confirms a search, edits a
//! note field or toggles a setting.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sitekeeper_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Which key map is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Dashboard cards and table rows.
    #[default]
    Normal,
    /// Typing into a table's search line.
    Search,
    /// The project detail view with its notes editor.
    Notes {
        /// Whether a field is being edited.
        editing: bool,
    },
    /// The settings tab.
    Settings {
        /// Whether a text field is being edited.
        editing: bool,
    },
}

/// Converts a terminal event to an application message.
///
/// Only key presses are handled; releases, repeats, resizes and focus
/// changes map to `None`.
#[must_use]
pub fn event_to_message(event: &Event, mode: InputMode) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match mode {
            InputMode::Normal => key_to_message(*key),
            InputMode::Search => key_to_search_message(*key),
            InputMode::Notes { editing } => key_to_notes_message(*key, editing),
            InputMode::Settings { editing } => key_to_settings_message(*key, editing),
        },
        _ => None,
    }
}

fn is_ctrl(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

/// Tab switching and help, shared by every mode that is not editing text.
fn common_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Tab => Some(Message::NextTab),
        KeyCode::BackTab => Some(Message::PrevTab),
        KeyCode::Char(ch @ '1'..='4') => Some(Message::GoToTab {
            index: ch as usize - '1' as usize,
        }),
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        _ => None,
    }
}

/// Converts a key event to a message for dashboard and table navigation.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Tab` / `Shift+Tab` | Next / previous tab |
/// | `1`-`4` | Jump to tab |
/// | `Esc` | Escape (close detail or clear search) |
/// | `Left` / `Right` | Move column cursor |
/// | `Up` / `Down` | Move row cursor |
/// | `Enter` or `Space` | Open project |
/// | `Backspace` | Back |
/// | `s` | Sort by column under cursor |
/// | `/` | Search |
/// | `o` | Open website |
/// | `r` | Refresh |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(key, 'c') {
        return Some(Message::Quit);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),
        KeyCode::Backspace => Some(Message::Back),

        KeyCode::Char('s') => Some(Message::SortBySelected),
        KeyCode::Char('/') => Some(Message::StartSearch),
        KeyCode::Char('o') => Some(Message::OpenWebsite),

        _ => common_key(key),
    }
}

/// Converts a key event to a message while the search line is edited.
///
/// Printable characters go into the search text; `Enter` keeps it and
/// `Esc` clears it. `Up`/`Down` still move through the filtered rows.
#[must_use]
pub fn key_to_search_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(key, 'c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Message::SearchConfirm),
        KeyCode::Esc => Some(Message::SearchCancel),
        KeyCode::Backspace => Some(Message::SearchBackspace),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::SearchInput { ch })
        }
        _ => None,
    }
}

/// Converts a key event to a notes-editor message.
///
/// # Key Bindings (Notes Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Up` / `Down` | Select field |
/// | `Enter` | Edit field / confirm edit |
/// | `Alt+Enter` | New line (in edit mode) |
/// | `a` / `x` | Add / remove palette color |
/// | `d` | Clear field |
/// | `Ctrl+S` | Save notes |
/// | `o` | Open website |
/// | `Esc` or `Backspace` | Back to the table (cancel in edit mode) |
#[must_use]
pub fn key_to_notes_message(key: KeyEvent, is_editing: bool) -> Option<Message> {
    if is_ctrl(key, 'c') {
        return Some(Message::Quit);
    }

    if is_editing {
        return match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Message::NotesNewline)
            }
            KeyCode::Enter => Some(Message::NotesConfirm),
            KeyCode::Esc => Some(Message::NotesCancel),
            KeyCode::Backspace => Some(Message::NotesBackspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::NotesInput { ch })
            }
            _ => None,
        };
    }

    if is_ctrl(key, 's') {
        return Some(Message::NotesSave);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Backspace => Some(Message::Back),
        KeyCode::Up => Some(Message::NotesNavigate { delta: -1 }),
        KeyCode::Down => Some(Message::NotesNavigate { delta: 1 }),
        KeyCode::Enter => Some(Message::NotesEdit),
        KeyCode::Char('a') => Some(Message::NotesAddColor),
        KeyCode::Char('x') => Some(Message::NotesRemoveColor),
        KeyCode::Char('d') => Some(Message::NotesClearField),
        KeyCode::Char('o') => Some(Message::OpenWebsite),
        _ => common_key(key),
    }
}

/// Converts a key event to a settings-specific message.
///
/// # Key Bindings (Settings Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Left` / `Right` | Previous / next section |
/// | `Up` / `Down` | Navigate |
/// | `Enter` or `Space` | Edit, toggle or cycle |
/// | `Ctrl+S` | Save to file |
/// | `Esc` | Cancel (in edit mode) |
/// | `Backspace` | Backspace (in edit mode) |
/// | Any char | Input (in edit mode) |
#[must_use]
pub fn key_to_settings_message(key: KeyEvent, is_editing: bool) -> Option<Message> {
    if is_ctrl(key, 'c') {
        return Some(Message::Quit);
    }

    if is_editing {
        return match key.code {
            KeyCode::Enter => Some(Message::SettingsConfirm),
            KeyCode::Esc => Some(Message::SettingsCancel),
            KeyCode::Backspace => Some(Message::SettingsBackspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::SettingsInput { ch })
            }
            _ => None,
        };
    }

    if is_ctrl(key, 's') {
        return Some(Message::SettingsSave);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Left => Some(Message::SettingsPrevSection),
        KeyCode::Right => Some(Message::SettingsNextSection),
        KeyCode::Up => Some(Message::SettingsNavigate { delta: -1 }),
        KeyCode::Down => Some(Message::SettingsNavigate { delta: 1 }),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::SettingsEdit),
        _ => common_key(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        make_key_with_modifiers(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        assert_eq!(key_to_message(ctrl('c')), Some(Message::Quit));
        assert_eq!(key_to_search_message(ctrl('c')), Some(Message::Quit));
        assert_eq!(key_to_notes_message(ctrl('c'), true), Some(Message::Quit));
        assert_eq!(key_to_settings_message(ctrl('c'), true), Some(Message::Quit));
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Left)), Some(Message::NavigateLeft));
        assert_eq!(key_to_message(make_key(KeyCode::Right)), Some(Message::NavigateRight));
        assert_eq!(key_to_message(make_key(KeyCode::Up)), Some(Message::NavigateUp));
        assert_eq!(key_to_message(make_key(KeyCode::Down)), Some(Message::NavigateDown));
    }

    #[test]
    fn tab_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Tab)), Some(Message::NextTab));
        assert_eq!(key_to_message(make_key(KeyCode::BackTab)), Some(Message::PrevTab));
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('1'))),
            Some(Message::GoToTab { index: 0 })
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('4'))),
            Some(Message::GoToTab { index: 3 })
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('5'))), None);
    }

    #[test]
    fn action_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Enter)), Some(Message::Select));
        assert_eq!(key_to_message(make_key(KeyCode::Char(' '))), Some(Message::Select));
        assert_eq!(key_to_message(make_key(KeyCode::Backspace)), Some(Message::Back));
        assert_eq!(key_to_message(make_key(KeyCode::Esc)), Some(Message::Escape));
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('s'))),
            Some(Message::SortBySelected)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('/'))), Some(Message::StartSearch));
        assert_eq!(key_to_message(make_key(KeyCode::Char('o'))), Some(Message::OpenWebsite));
        assert_eq!(key_to_message(make_key(KeyCode::Char('r'))), Some(Message::Refresh));
        assert_eq!(key_to_message(make_key(KeyCode::Char('?'))), Some(Message::ToggleHelp));
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
        assert_eq!(key_to_message(ctrl('s')), None);
    }

    #[test]
    fn search_mode_captures_text() {
        assert_eq!(
            key_to_search_message(make_key(KeyCode::Char('s'))),
            Some(Message::SearchInput { ch: 's' })
        );
        assert_eq!(
            key_to_search_message(make_key(KeyCode::Char('1'))),
            Some(Message::SearchInput { ch: '1' })
        );
        assert_eq!(
            key_to_search_message(make_key(KeyCode::Enter)),
            Some(Message::SearchConfirm)
        );
        assert_eq!(key_to_search_message(make_key(KeyCode::Esc)), Some(Message::SearchCancel));
        assert_eq!(
            key_to_search_message(make_key(KeyCode::Backspace)),
            Some(Message::SearchBackspace)
        );
        assert_eq!(key_to_search_message(make_key(KeyCode::Down)), Some(Message::NavigateDown));
    }

    #[test]
    fn notes_navigation_mode() {
        assert_eq!(
            key_to_notes_message(make_key(KeyCode::Up), false),
            Some(Message::NotesNavigate { delta: -1 })
        );
        assert_eq!(
            key_to_notes_message(make_key(KeyCode::Enter), false),
            Some(Message::NotesEdit)
        );
        assert_eq!(
            key_to_notes_message(make_key(KeyCode::Char('a')), false),
            Some(Message::NotesAddColor)
        );
        assert_eq!(
            key_to_notes_message(make_key(KeyCode::Char('x')), false),
            Some(Message::NotesRemoveColor)
        );
        assert_eq!(
            key_to_notes_message(make_key(KeyCode::Char('d')), false),
            Some(Message::NotesClearField)
        );
        assert_eq!(key_to_notes_message(ctrl('s'), false), Some(Message::NotesSave));
        assert_eq!(key_to_notes_message(make_key(KeyCode::Esc), false), Some(Message::Back));
        assert_eq!(key_to_notes_message(make_key(KeyCode::Tab), false), Some(Message::NextTab));
    }

    #[test]
    fn notes_edit_mode() {
        assert_eq!(
            key_to_notes_message(make_key(KeyCode::Char('a')), true),
            Some(Message::NotesInput { ch: 'a' })
        );
        assert_eq!(
            key_to_notes_message(make_key(KeyCode::Enter), true),
            Some(Message::NotesConfirm)
        );
        assert_eq!(
            key_to_notes_message(
                make_key_with_modifiers(KeyCode::Enter, KeyModifiers::ALT),
                true
            ),
            Some(Message::NotesNewline)
        );
        assert_eq!(key_to_notes_message(make_key(KeyCode::Esc), true), Some(Message::NotesCancel));
        assert_eq!(
            key_to_notes_message(make_key(KeyCode::Backspace), true),
            Some(Message::NotesBackspace)
        );
        assert_eq!(key_to_notes_message(ctrl('s'), true), None);
    }

    #[test]
    fn settings_navigation_mode() {
        assert_eq!(
            key_to_settings_message(make_key(KeyCode::Right), false),
            Some(Message::SettingsNextSection)
        );
        assert_eq!(
            key_to_settings_message(make_key(KeyCode::Left), false),
            Some(Message::SettingsPrevSection)
        );
        assert_eq!(
            key_to_settings_message(make_key(KeyCode::Up), false),
            Some(Message::SettingsNavigate { delta: -1 })
        );
        assert_eq!(
            key_to_settings_message(make_key(KeyCode::Down), false),
            Some(Message::SettingsNavigate { delta: 1 })
        );
        assert_eq!(
            key_to_settings_message(make_key(KeyCode::Enter), false),
            Some(Message::SettingsEdit)
        );
        assert_eq!(key_to_settings_message(ctrl('s'), false), Some(Message::SettingsSave));
        assert_eq!(
            key_to_settings_message(make_key(KeyCode::Char('2')), false),
            Some(Message::GoToTab { index: 1 })
        );
    }

    #[test]
    fn settings_edit_mode() {
        assert_eq!(
            key_to_settings_message(make_key(KeyCode::Char('2')), true),
            Some(Message::SettingsInput { ch: '2' })
        );
        assert_eq!(
            key_to_settings_message(make_key(KeyCode::Backspace), true),
            Some(Message::SettingsBackspace)
        );
        assert_eq!(
            key_to_settings_message(make_key(KeyCode::Enter), true),
            Some(Message::SettingsConfirm)
        );
        assert_eq!(
            key_to_settings_message(make_key(KeyCode::Esc), true),
            Some(Message::SettingsCancel)
        );
    }

    #[test]
    fn event_to_message_uses_mode() {
        let event = Event::Key(make_key(KeyCode::Enter));
        assert_eq!(event_to_message(&event, InputMode::Normal), Some(Message::Select));
        assert_eq!(event_to_message(&event, InputMode::Search), Some(Message::SearchConfirm));
        assert_eq!(
            event_to_message(&event, InputMode::Notes { editing: false }),
            Some(Message::NotesEdit)
        );
        assert_eq!(
            event_to_message(&event, InputMode::Settings { editing: true }),
            Some(Message::SettingsConfirm)
        );
    }

    #[test]
    fn event_to_message_ignores_releases_and_resizes() {
        let mut release = make_key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(event_to_message(&Event::Key(release), InputMode::Normal), None);
        assert_eq!(event_to_message(&Event::Resize(80, 24), InputMode::Normal), None);
    }
}
