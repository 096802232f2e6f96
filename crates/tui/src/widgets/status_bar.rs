//! Footer with keybinding hints and the last status message.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::Palette;
use crate::event::InputMode;

fn hints(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Normal => {
            "Tab: switch | ↑↓←→: move | Enter: open | s: sort | /: search | ?: help"
        }
        InputMode::Search => "Type to filter | Enter: keep | Esc: clear",
        InputMode::Notes { editing: true } => {
            "Enter: confirm | Alt+Enter: new line | Esc: cancel"
        }
        InputMode::Notes { editing: false } => {
            "↑↓: field | Enter: edit | a/x: color | d: clear | Ctrl+S: save | Esc: back"
        }
        InputMode::Settings { editing: true } => "Enter: confirm | Esc: cancel",
        InputMode::Settings { editing: false } => {
            "←→: section | ↑↓: move | Enter: change | Ctrl+S: save"
        }
    }
}

/// Renders the hints for `mode` on the left and `status` on the right.
pub fn render_status_bar(
    mode: InputMode,
    status: Option<&str>,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let status_width = status.map_or(0, |s| s.chars().count() as u16 + 1);
    let [hints_area, status_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).areas(area);

    Paragraph::new(Line::from(Span::styled(
        format!(" {}", hints(mode)),
        palette.muted(),
    )))
    .render(hints_area, buf);

    if let Some(status) = status {
        Paragraph::new(Line::from(Span::styled(status, palette.selected())))
            .alignment(Alignment::Right)
            .render(status_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn render(mode: InputMode, status: Option<&str>) -> String {
        let area = Rect::new(0, 0, 110, 1);
        let mut buf = Buffer::empty(area);
        render_status_bar(mode, status, &Palette::default(), area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn hints_follow_mode() {
        assert!(render(InputMode::Normal, None).contains("s: sort"));
        assert!(render(InputMode::Search, None).contains("Type to filter"));
        assert!(render(InputMode::Notes { editing: true }, None).contains("Alt+Enter"));
        assert!(render(InputMode::Settings { editing: false }, None).contains("Ctrl+S: save"));
    }

    #[test]
    fn status_is_right_aligned() {
        let content = render(InputMode::Normal, Some("Notes saved"));
        assert!(content.trim_end().ends_with("Notes saved"));
    }
}
