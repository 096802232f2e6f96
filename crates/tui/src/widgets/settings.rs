//! Settings tab widget.
//!
//! Lists the rows of the selected section with their current values. Profile
//! fields show the edit buffer while being edited; notification switches
//! show a checkbox and their description.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Widget},
};
use sitekeeper_config::Config;

use super::RenderContext;
use crate::settings_state::{SettingsItem, SettingsSection, SettingsState};

/// Renders the settings tab.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use sitekeeper_config::Config;
/// use sitekeeper_tui::settings_state::SettingsState;
/// use sitekeeper_tui::widgets::{RenderContext, render_settings};
///
/// let state = SettingsState::new(Config::default());
/// let ctx = RenderContext::new(state.config().display, Utc::now());
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_settings(&state, &ctx, area, &mut buf);
/// ```
pub fn render_settings(state: &SettingsState, ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let palette = &ctx.palette;
    let dirty = if state.is_dirty() { " (unsaved)" } else { "" };
    let block = Block::default()
        .title(Span::styled(format!(" Settings{dirty} "), palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let inner = block.inner(area);
    block.render(area, buf);

    let [tabs_area, _, content_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_section_tabs(state, ctx, tabs_area, buf);
    render_section_content(state, ctx, content_area, buf);
    render_settings_help(state, ctx, help_area, buf);
}

fn render_section_tabs(state: &SettingsState, ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let sections = SettingsSection::all();
    let mut spans = Vec::with_capacity(sections.len() * 2);

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }

        let style = if *section == state.section() {
            ctx.palette
                .selected()
                .add_modifier(Modifier::UNDERLINED)
        } else {
            ctx.palette.muted()
        };

        spans.push(Span::styled(section.name(), style));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn item_value(item: SettingsItem, config: &Config) -> String {
    let display = &config.display;
    match item {
        SettingsItem::Profile(field) => match config.profile.get(field) {
            "" => "(not set)".to_string(),
            value => value.to_string(),
        },
        SettingsItem::Notification(which) => {
            let checkbox = if config.notifications.is_enabled(which) {
                "[x]"
            } else {
                "[ ]"
            };
            format!("{checkbox} {}", which.description())
        }
        SettingsItem::Theme => display.theme.label().to_string(),
        SettingsItem::DateFormat => display.date_format.label().to_string(),
        SettingsItem::Currency => display.currency.label(),
    }
}

fn render_section_content(
    state: &SettingsState,
    ctx: &RenderContext,
    area: Rect,
    buf: &mut Buffer,
) {
    let palette = &ctx.palette;
    let items: Vec<ListItem> = state
        .section()
        .items()
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == state.selected_item();
            let style = if is_selected {
                palette.selected()
            } else {
                palette.text()
            };
            let prefix = if is_selected { "> " } else { "  " };

            let value = match (is_selected, state.edit_mode().value()) {
                (true, Some(buffer)) => format!("{buffer}_"),
                _ => item_value(item, state.config()),
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(format!("{:<22}", item.label()), palette.muted()),
                Span::styled(value, style),
            ]))
        })
        .collect();

    List::new(items).render(area, buf);
}

fn render_settings_help(state: &SettingsState, ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let help_text = if state.is_editing() {
        "Enter: confirm | Esc: cancel"
    } else {
        "←→: sections | ↑↓: navigate | Enter: edit/toggle | Ctrl+S: save"
    };

    Paragraph::new(Line::from(Span::styled(help_text, ctx.palette.muted())))
        .alignment(Alignment::Center)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use chrono::{TimeZone, Utc};

    fn render(state: &SettingsState) -> String {
        let ctx = RenderContext::new(
            state.config().display,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        let area = Rect::new(0, 0, 100, 16);
        let mut buf = Buffer::empty(area);
        render_settings(state, &ctx, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn profile_section_lists_fields() {
        let state = SettingsState::new(Config::default());
        let content = render(&state);

        assert!(content.contains("Settings"));
        assert!(content.contains("Profile | Notifications | Display"));
        assert!(content.contains("> Name"));
        assert!(content.contains("John Doe"));
        assert!(content.contains("john@example.com"));
    }

    #[test]
    fn notifications_show_checkboxes() {
        let mut state = SettingsState::new(Config::default());
        state.next_section();
        let content = render(&state);

        assert!(content.contains("[x] Get reminded before domain and hosting renewals"));
        assert!(content.contains("[ ] Receive news and promotional content"));
    }

    #[test]
    fn display_section_and_dirty_marker() {
        let mut state = SettingsState::new(Config::default());
        state.prev_section();
        state.navigate(2);
        state.start_edit();
        let content = render(&state);

        assert!(content.contains("Settings (unsaved)"));
        assert!(content.contains("EUR (€)"));
        assert!(content.contains("MM/DD/YYYY"));
        assert!(content.contains("System"));
    }

    #[test]
    fn edit_buffer_replaces_value() {
        let mut state = SettingsState::new(Config::default());
        state.navigate(3);
        state.start_edit();
        state.input_char('9');
        let content = render(&state);

        assert!(content.contains("+1 (555) 123-45679_"));
        assert!(content.contains("Enter: confirm | Esc: cancel"));
    }

    #[test]
    fn small_area_does_not_panic() {
        let state = SettingsState::new(Config::default());
        let ctx = RenderContext::new(state.config().display, Utc::now());
        let area = Rect::new(0, 0, 12, 4);
        let mut buf = Buffer::empty(area);
        render_settings(&state, &ctx, area, &mut buf);
    }
}
