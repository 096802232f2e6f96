//! Single-field text editing shared by the notes editor and the settings tab.

/// Edit mode of a form.
///
/// # Examples
///
/// ```
/// use sitekeeper_tui::edit::EditMode;
///
/// let mut edit = EditMode::text("café");
/// edit.backspace();
/// edit.insert_char('e');
/// assert_eq!(edit.value(), Some("cafe"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Not currently editing.
    #[default]
    None,
    /// Editing a text field.
    Text {
        /// The current value being edited.
        value: String,
        /// Byte offset of the cursor within `value`.
        cursor: usize,
    },
}

impl EditMode {
    /// Starts editing `initial` with the cursor at its end.
    #[must_use]
    pub fn text(initial: impl Into<String>) -> Self {
        let value = initial.into();
        let cursor = value.len();
        Self::Text { value, cursor }
    }

    /// Returns `true` if currently in edit mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the current edit value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Text { value, .. } => Some(value),
        }
    }

    /// Returns the cursor position, if in edit mode.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Text { cursor, .. } => Some(*cursor),
        }
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        if let Self::Text { value, cursor } = self {
            value.insert(*cursor, ch);
            *cursor += ch.len_utf8();
        }
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if let Self::Text { value, cursor } = self
            && let Some((prev_boundary, _)) = value[..*cursor].char_indices().last()
        {
            value.remove(prev_boundary);
            *cursor = prev_boundary;
        }
    }

    /// Leaves edit mode, returning the edited value.
    pub fn take(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::None => None,
            Self::Text { value, .. } => Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_puts_cursor_at_end() {
        let edit = EditMode::text("abc");
        assert!(edit.is_editing());
        assert_eq!(edit.cursor(), Some(3));
    }

    #[test]
    fn none_ignores_input() {
        let mut edit = EditMode::None;
        edit.insert_char('x');
        edit.backspace();
        assert_eq!(edit, EditMode::None);
        assert_eq!(edit.value(), None);
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut edit = EditMode::text("");
        edit.backspace();
        assert_eq!(edit.value(), Some(""));
        assert_eq!(edit.cursor(), Some(0));
    }

    #[test]
    fn multibyte_characters() {
        let mut edit = EditMode::text("");
        edit.insert_char('€');
        edit.insert_char('5');
        assert_eq!(edit.cursor(), Some(4));
        edit.backspace();
        edit.backspace();
        assert_eq!(edit.value(), Some(""));
    }

    #[test]
    fn take_leaves_edit_mode() {
        let mut edit = EditMode::text("done");
        assert_eq!(edit.take().as_deref(), Some("done"));
        assert!(!edit.is_editing());
        assert_eq!(edit.take(), None);
    }
}
