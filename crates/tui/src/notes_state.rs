//! Notes editor state.
//!
//! The detail view lists every [`NoteField`]; the operator moves between
//! them, edits one at a time and saves the whole record through the
//! application's [`NotesSink`](sitekeeper_protocol::NotesSink).

use sitekeeper_protocol::{NoteField, ProjectNote};
use tracing::debug;

use crate::edit::EditMode;

/// State of the notes editor.
#[derive(Debug, Clone)]
pub struct NotesState {
    notes: ProjectNote,
    selected: usize,
    edit_mode: EditMode,
    dirty: bool,
}

impl NotesState {
    /// Creates an editor over `notes`, with the first field selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitekeeper_protocol::{NoteField, ProjectNote};
    /// use sitekeeper_tui::notes_state::NotesState;
    ///
    /// let mut state = NotesState::new(ProjectNote::default());
    /// state.start_edit();
    /// for ch in "https://admin.example.com".chars() {
    ///     state.input_char(ch);
    /// }
    /// state.confirm_edit();
    ///
    /// assert!(state.is_dirty());
    /// assert_eq!(
    ///     state.notes().admin_url.as_deref(),
    ///     Some("https://admin.example.com")
    /// );
    /// ```
    #[must_use]
    pub fn new(notes: ProjectNote) -> Self {
        Self {
            notes,
            selected: 0,
            edit_mode: EditMode::None,
            dirty: false,
        }
    }

    /// Returns the notes as edited so far.
    #[must_use]
    pub fn notes(&self) -> &ProjectNote {
        &self.notes
    }

    /// Returns the selected field.
    #[must_use]
    pub fn selected_field(&self) -> NoteField {
        NoteField::all()
            .get(self.selected)
            .copied()
            .unwrap_or(NoteField::AdminUrl)
    }

    /// Returns a reference to the current edit mode.
    #[must_use]
    pub fn edit_mode(&self) -> &EditMode {
        &self.edit_mode
    }

    /// Returns `true` while a field is being edited.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.edit_mode.is_editing()
    }

    /// Returns whether there are unsaved changes.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the notes as saved.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Moves the field selection, wrapping around. Ignored while editing.
    pub fn navigate(&mut self, delta: i32) {
        if self.is_editing() {
            return;
        }
        let count = NoteField::all().len() as i32;
        self.selected = (self.selected as i32 + delta).rem_euclid(count) as usize;
    }

    /// Starts editing the selected field.
    ///
    /// An unset field starts out empty; list fields are edited one entry
    /// per line.
    pub fn start_edit(&mut self) {
        let field = self.selected_field();
        let text = self.notes.field_text(field).unwrap_or_default();
        self.edit_mode = EditMode::text(text);
        debug!(field = field.label(), "editing note field");
    }

    /// Inserts a character into the edit buffer.
    pub fn input_char(&mut self, ch: char) {
        self.edit_mode.insert_char(ch);
    }

    /// Inserts a line break into the edit buffer.
    pub fn newline(&mut self) {
        self.edit_mode.insert_char('\n');
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        self.edit_mode.backspace();
    }

    /// Writes the edit buffer into the selected field.
    pub fn confirm_edit(&mut self) {
        if let Some(value) = self.edit_mode.take() {
            self.notes.set_field_text(self.selected_field(), &value);
            self.dirty = true;
        }
    }

    /// Discards the edit buffer.
    pub fn cancel_edit(&mut self) {
        self.edit_mode = EditMode::None;
    }

    /// Resets the selected field to unset.
    pub fn clear_selected(&mut self) {
        if self.is_editing() {
            return;
        }
        let field = self.selected_field();
        if self.notes.field_text(field).is_some() {
            self.notes.clear_field(field);
            self.dirty = true;
        }
    }

    /// Appends the default color to the palette and selects the palette.
    pub fn add_color(&mut self) {
        if self.is_editing() {
            return;
        }
        self.notes.add_color();
        self.select(NoteField::ColorPalette);
        self.dirty = true;
    }

    /// Removes the last palette color and selects the palette.
    pub fn remove_color(&mut self) {
        if self.is_editing() {
            return;
        }
        self.select(NoteField::ColorPalette);
        if self.notes.remove_last_color().is_some() {
            self.dirty = true;
        }
    }

    fn select(&mut self, field: NoteField) {
        if let Some(index) = NoteField::all().iter().position(|f| *f == field) {
            self.selected = index;
        }
    }
}
