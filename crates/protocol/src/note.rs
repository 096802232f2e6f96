//! Project notes and the save hook.
//!
//! [`ProjectNote`] holds the operator's free-form notes about a project:
//! admin URL, credential blobs, contact addresses and the brand color
//! palette. Every field is optional; `None` means the field was never set,
//! which is distinct from an empty string.
//!
//! Saving is delegated to a [`NotesSink`]. The application ships with
//! [`LoggingNotesSink`], which only records the save in the log.

use std::fmt;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Color appended to the palette when the operator adds a new swatch.
pub const DEFAULT_COLOR: &str = "#000000";

/// Free-form notes about a project.
///
/// # Examples
///
/// ```
/// use sitekeeper_protocol::{NoteField, ProjectNote};
///
/// let mut notes = ProjectNote::default();
/// assert!(notes.is_empty());
///
/// notes.set_field_text(NoteField::ProjectEmails, "info@example.com\nsupport@example.com");
/// assert_eq!(notes.project_emails.as_ref().map(Vec::len), Some(2));
///
/// notes.set_field_text(NoteField::AdminUrl, "");
/// assert_eq!(notes.admin_url.as_deref(), Some(""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectNote {
    /// URL of the site's admin panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_url: Option<String>,
    /// CMS or admin login details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_credentials: Option<String>,
    /// Mailbox login details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_credentials: Option<String>,
    /// SSH/FTP/panel access for the hosting account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosting_access: Option<String>,
    /// Email addresses used by the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_emails: Option<Vec<String>>,
    /// Brand colors, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_palette: Option<Vec<String>>,
    /// Anything else worth remembering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

/// The editable fields of a [`ProjectNote`], in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteField {
    /// [`ProjectNote::admin_url`].
    AdminUrl,
    /// [`ProjectNote::login_credentials`].
    LoginCredentials,
    /// [`ProjectNote::email_credentials`].
    EmailCredentials,
    /// [`ProjectNote::hosting_access`].
    HostingAccess,
    /// [`ProjectNote::project_emails`].
    ProjectEmails,
    /// [`ProjectNote::color_palette`].
    ColorPalette,
    /// [`ProjectNote::additional_notes`].
    AdditionalNotes,
}

impl NoteField {
    /// Returns all fields in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::AdminUrl,
            Self::LoginCredentials,
            Self::EmailCredentials,
            Self::HostingAccess,
            Self::ProjectEmails,
            Self::ColorPalette,
            Self::AdditionalNotes,
        ]
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AdminUrl => "Admin URL",
            Self::LoginCredentials => "Login Credentials",
            Self::EmailCredentials => "Email Credentials",
            Self::HostingAccess => "Hosting Access",
            Self::ProjectEmails => "Project Emails",
            Self::ColorPalette => "Color Palette",
            Self::AdditionalNotes => "Additional Notes",
        }
    }

    /// Returns `true` for fields that hold a list rather than a text blob.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::ProjectEmails | Self::ColorPalette)
    }
}

impl ProjectNote {
    /// Returns `true` if no field has ever been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the field as editable text, or `None` if it was never set.
    ///
    /// List fields are joined with newlines.
    #[must_use]
    pub fn field_text(&self, field: NoteField) -> Option<String> {
        match field {
            NoteField::AdminUrl => self.admin_url.clone(),
            NoteField::LoginCredentials => self.login_credentials.clone(),
            NoteField::EmailCredentials => self.email_credentials.clone(),
            NoteField::HostingAccess => self.hosting_access.clone(),
            NoteField::ProjectEmails => self.project_emails.as_ref().map(|list| list.join("\n")),
            NoteField::ColorPalette => self.color_palette.as_ref().map(|list| list.join("\n")),
            NoteField::AdditionalNotes => self.additional_notes.clone(),
        }
    }

    /// Sets a field from edited text.
    ///
    /// List fields split on newlines and commas, trimming each entry and
    /// dropping blanks. The field becomes set even when `text` is empty.
    pub fn set_field_text(&mut self, field: NoteField, text: &str) {
        let text_value = Some(text.to_string());
        match field {
            NoteField::AdminUrl => self.admin_url = text_value,
            NoteField::LoginCredentials => self.login_credentials = text_value,
            NoteField::EmailCredentials => self.email_credentials = text_value,
            NoteField::HostingAccess => self.hosting_access = text_value,
            NoteField::ProjectEmails => self.project_emails = Some(split_list(text)),
            NoteField::ColorPalette => self.color_palette = Some(split_list(text)),
            NoteField::AdditionalNotes => self.additional_notes = text_value,
        }
    }

    /// Resets a field to "never set".
    pub fn clear_field(&mut self, field: NoteField) {
        match field {
            NoteField::AdminUrl => self.admin_url = None,
            NoteField::LoginCredentials => self.login_credentials = None,
            NoteField::EmailCredentials => self.email_credentials = None,
            NoteField::HostingAccess => self.hosting_access = None,
            NoteField::ProjectEmails => self.project_emails = None,
            NoteField::ColorPalette => self.color_palette = None,
            NoteField::AdditionalNotes => self.additional_notes = None,
        }
    }

    /// Appends [`DEFAULT_COLOR`] to the palette, creating it if unset.
    pub fn add_color(&mut self) {
        self.color_palette
            .get_or_insert_with(Vec::new)
            .push(DEFAULT_COLOR.to_string());
    }

    /// Removes the last palette color, returning it.
    pub fn remove_last_color(&mut self) -> Option<String> {
        self.color_palette.as_mut().and_then(Vec::pop)
    }
}

fn split_list(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Receives committed notes edits.
///
/// The dashboard calls [`NotesSink::save_notes`] when the operator saves the
/// notes form. Implementations decide where (or whether) the notes go.
pub trait NotesSink: fmt::Debug + Send {
    /// Accepts the saved notes.
    fn save_notes(&mut self, notes: &ProjectNote);
}

/// A [`NotesSink`] that only logs the save.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotesSink;

impl NotesSink for LoggingNotesSink {
    fn save_notes(&mut self, notes: &ProjectNote) {
        tracing::info!(
            admin_url = notes.admin_url.as_deref().unwrap_or_default(),
            emails = notes.project_emails.as_ref().map_or(0, Vec::len),
            colors = notes.color_palette.as_ref().map_or(0, Vec::len),
            "saving notes"
        );
    }
}

/// A [`NotesSink`] that keeps every save in memory.
///
/// Clones share the same storage, so a test can hand one clone to the
/// application and inspect the other.
///
/// # Examples
///
/// ```
/// use sitekeeper_protocol::{MemoryNotesSink, NotesSink, ProjectNote};
///
/// let sink = MemoryNotesSink::default();
/// let mut handle = sink.clone();
/// handle.save_notes(&ProjectNote::default());
/// assert_eq!(sink.saved().len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryNotesSink {
    saved: Arc<Mutex<Vec<ProjectNote>>>,
}

impl MemoryNotesSink {
    /// Returns every note saved so far, oldest first.
    #[must_use]
    pub fn saved(&self) -> Vec<ProjectNote> {
        self.saved
            .lock()
            .map(|saved| saved.clone())
            .unwrap_or_default()
    }
}

impl NotesSink for MemoryNotesSink {
    fn save_notes(&mut self, notes: &ProjectNote) {
        if let Ok(mut saved) = self.saved.lock() {
            saved.push(notes.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_note_is_empty() {
        assert!(ProjectNote::default().is_empty());
    }

    #[test]
    fn empty_string_is_distinct_from_unset() {
        let mut notes = ProjectNote::default();
        assert_eq!(notes.field_text(NoteField::AdditionalNotes), None);

        notes.set_field_text(NoteField::AdditionalNotes, "");
        assert_eq!(notes.field_text(NoteField::AdditionalNotes), Some(String::new()));
        assert!(!notes.is_empty());

        notes.clear_field(NoteField::AdditionalNotes);
        assert!(notes.is_empty());
    }

    #[test]
    fn list_fields_split_on_newlines_and_commas() {
        let mut notes = ProjectNote::default();
        notes.set_field_text(
            NoteField::ProjectEmails,
            "info@shop.com, support@shop.com\n\n  billing@shop.com  ",
        );
        assert_eq!(
            notes.project_emails,
            Some(vec![
                "info@shop.com".to_string(),
                "support@shop.com".to_string(),
                "billing@shop.com".to_string(),
            ])
        );
    }

    #[test]
    fn list_field_text_joins_with_newlines() {
        let notes = ProjectNote {
            color_palette: Some(vec!["#FF5733".to_string(), "#33FF57".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            notes.field_text(NoteField::ColorPalette).as_deref(),
            Some("#FF5733\n#33FF57")
        );
    }

    #[test]
    fn add_and_remove_colors() {
        let mut notes = ProjectNote::default();
        notes.add_color();
        notes.add_color();
        assert_eq!(
            notes.color_palette,
            Some(vec![DEFAULT_COLOR.to_string(), DEFAULT_COLOR.to_string()])
        );

        assert_eq!(notes.remove_last_color().as_deref(), Some(DEFAULT_COLOR));
        assert_eq!(notes.color_palette.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn remove_color_from_unset_palette() {
        let mut notes = ProjectNote::default();
        assert_eq!(notes.remove_last_color(), None);
        assert_eq!(notes.color_palette, None);
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let notes = ProjectNote {
            admin_url: Some("https://admin.shop.com".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&notes).unwrap();
        assert_eq!(json, r#"{"adminUrl":"https://admin.shop.com"}"#);
    }

    #[test]
    fn memory_sink_shares_storage_between_clones() {
        let sink = MemoryNotesSink::default();
        let mut writer = sink.clone();

        let notes = ProjectNote {
            additional_notes: Some("Monthly maintenance".to_string()),
            ..Default::default()
        };
        writer.save_notes(&notes);
        writer.save_notes(&ProjectNote::default());

        let saved = sink.saved();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0], notes);
    }

    #[test]
    fn field_order_matches_form() {
        let labels: Vec<_> = NoteField::all().iter().map(|f| f.label()).collect();
        assert_eq!(labels.first(), Some(&"Admin URL"));
        assert_eq!(labels.last(), Some(&"Additional Notes"));
        assert_eq!(labels.len(), 7);
    }
}
