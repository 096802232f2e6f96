//! Help overlay widget.
//!
//! Lists every keybinding when the operator presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::Palette;

const HELP_WIDTH: u16 = 44;
const HELP_HEIGHT: u16 = 30;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("Tab/S-Tab", "Next / previous tab"),
            ("1-4", "Jump to tab"),
            ("↑ ↓", "Select row or card"),
            ("← →", "Select column"),
            ("Enter", "Open project"),
            ("Esc", "Close / clear search"),
        ],
    ),
    (
        "Tables",
        &[
            ("s", "Sort by selected column"),
            ("/", "Search"),
            ("o", "Open website"),
            ("r", "Refresh renewals"),
        ],
    ),
    (
        "Notes",
        &[
            ("Enter", "Edit field"),
            ("Alt+Enter", "New line while editing"),
            ("a / x", "Add / remove color"),
            ("d", "Clear field"),
            ("Ctrl+S", "Save notes or settings"),
        ],
    ),
    (
        "General",
        &[("?", "Toggle help"), ("Ctrl+C", "Quit")],
    ),
];

/// Renders a centered help overlay displaying all keybindings.
///
/// # Layout
///
/// ```text
/// ╭ Help ──────────────────────────────────╮
/// │                                        │
/// │  Navigation                            │
/// │  Tab/S-Tab   Next / previous tab       │
/// │  1-4         Jump to tab               │
/// │  ...                                   │
/// │  Press any key to close                │
/// ╰────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use sitekeeper_tui::widgets::{Palette, render_help_overlay};
///
/// let area = Rect::new(0, 0, 80, 40);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(&Palette::default(), area, &mut buf);
/// ```
pub fn render_help_overlay(palette: &Palette, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(" Help ", palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent));

    Paragraph::new(build_help_lines(palette))
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

fn build_help_lines(palette: &Palette) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(palette.highlight)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(palette.normal);
    let hint_style = palette.muted().add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    for (header, bindings) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {header}"), header_style)));
        lines.extend(bindings.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {key:<12}"), key_style),
                Span::styled(*action, palette.text()),
            ])
        }));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
