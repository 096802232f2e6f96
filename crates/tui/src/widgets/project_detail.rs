//! Project detail view with the notes editor.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use sitekeeper_protocol::{NoteField, Project, ServiceKind};

use super::RenderContext;
use super::format::days_cell;
use crate::notes_state::NotesState;

/// Renders a project's facts on the left and the notes editor on the right.
pub fn render_project_detail(
    project: &Project,
    notes: &NotesState,
    ctx: &RenderContext,
    area: Rect,
    buf: &mut Buffer,
) {
    let [facts_area, notes_area] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);

    render_facts(project, ctx, facts_area, buf);
    render_notes(notes, ctx, notes_area, buf);
}

fn fact(label: &str, value: impl Into<String>, ctx: &RenderContext) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<12}"), ctx.palette.muted()),
        Span::styled(value.into(), ctx.palette.text()),
    ])
}

fn render_facts(project: &Project, ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let palette = &ctx.palette;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Status      ", palette.muted()),
            Span::styled(
                project.status.label(),
                Style::default()
                    .fg(palette.status(project.status))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        fact("Client", project.client.name.clone(), ctx),
        fact("Phone", project.client.phone.clone(), ctx),
        fact("Website", project.website.name.clone(), ctx),
        fact("URL", project.website.url.clone(), ctx),
        fact("Started", ctx.date(&project.start_date), ctx),
    ];
    if let Some(completed) = &project.completed_date {
        lines.push(fact("Completed", ctx.date(completed), ctx));
    }
    lines.push(fact("Revenue", ctx.display.currency.format(project.revenue), ctx));

    for kind in ServiceKind::all() {
        let term = project.service(kind);
        let (days, urgency) = days_cell(&term.renewal_date, ctx.now);
        let days_color = urgency.map_or(palette.urgent, |urgency| palette.urgency(urgency));

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(kind.label(), palette.title())));
        lines.push(fact("Provider", term.provider.clone(), ctx));
        lines.push(fact("Purchased", ctx.date(&term.purchase_date), ctx));
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", "Renews"), palette.muted()),
            Span::styled(ctx.date(&term.renewal_date), palette.text()),
            Span::raw("  "),
            Span::styled(days, Style::default().fg(days_color)),
        ]));
    }

    if !project.notes.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(project.notes.clone(), palette.muted())));
    }

    let block = Block::default()
        .title(Span::styled(format!(" {} ", project.name), palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn render_notes(notes: &NotesState, ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let palette = &ctx.palette;
    let selected_field = notes.selected_field();
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0;

    for &field in NoteField::all() {
        let is_selected = field == selected_field;
        if is_selected {
            selected_line = lines.len();
        }

        let (prefix, label_style) = if is_selected {
            ("> ", palette.selected())
        } else {
            ("  ", palette.muted())
        };
        lines.push(Line::from(Span::styled(
            format!("{prefix}{}", field.label()),
            label_style,
        )));

        let editing = is_selected.then(|| notes.edit_mode().value()).flatten();
        match (editing, notes.notes().field_text(field)) {
            (Some(buffer), _) => {
                let text = format!("{buffer}_");
                lines.extend(text.split('\n').map(|line| {
                    Line::from(Span::styled(format!("    {line}"), palette.selected()))
                }));
            }
            (None, None) => {
                lines.push(Line::from(Span::styled("    (not set)", palette.muted())));
            }
            (None, Some(text)) if field == NoteField::ColorPalette => {
                lines.extend(text.lines().map(|color| swatch_line(color, ctx)));
            }
            (None, Some(text)) => {
                lines.extend(text.lines().map(|line| {
                    Line::from(Span::styled(format!("    {line}"), palette.text()))
                }));
            }
        }
    }

    let dirty = if notes.is_dirty() { " *" } else { "" };
    let block = Block::default()
        .title(Span::styled(format!(" Notes{dirty} "), palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if notes.is_editing() {
            palette.selected()
        } else {
            Style::default()
        });

    let visible = block.inner(area).height.saturating_sub(4);
    let scroll = u16::try_from(selected_line)
        .unwrap_or(u16::MAX)
        .saturating_sub(visible);

    Paragraph::new(lines)
        .block(block)
        .scroll((scroll, 0))
        .render(area, buf);
}

fn swatch_line(value: &str, ctx: &RenderContext) -> Line<'static> {
    let swatch = match value.parse::<Color>() {
        Ok(color) => Span::styled("██ ", Style::default().fg(color)),
        Err(_) => Span::styled("?? ", ctx.palette.muted()),
    };
    Line::from(vec![
        Span::raw("    "),
        swatch,
        Span::styled(value.to_string(), ctx.palette.text()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use chrono::{DateTime, TimeZone, Utc};
    use sitekeeper_config::DisplaySettings;
    use sitekeeper_protocol::{
        ProjectNote,
        dummy::{sample_notes, sample_projects},
    };

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn render(project: &Project, notes: &NotesState) -> String {
        let ctx = RenderContext::new(DisplaySettings::default(), now());
        let area = Rect::new(0, 0, 110, 40);
        let mut buf = Buffer::empty(area);
        render_project_detail(project, notes, &ctx, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn shows_project_facts_and_renewals() {
        let projects = sample_projects();
        let content = render(&projects[0], &NotesState::new(sample_notes()));

        assert!(content.contains("E-commerce Redesign"));
        assert!(content.contains("Fashion Boutique"));
        assert!(content.contains("https://fashionboutique.com"));
        assert!(content.contains("GoDaddy"));
        assert!(content.contains("DigitalOcean"));
        assert!(content.contains("14 days"));
    }

    #[test]
    fn shows_notes_fields_and_palette() {
        let projects = sample_projects();
        let content = render(&projects[0], &NotesState::new(sample_notes()));

        assert!(content.contains("> Admin URL"));
        assert!(content.contains("https://admin.fashionboutique.com"));
        assert!(content.contains("support@fashionboutique.com"));
        assert!(content.contains("██ #FF5733"));
    }

    #[test]
    fn unset_fields_and_edit_buffer() {
        let projects = sample_projects();
        let mut notes = NotesState::new(ProjectNote::default());
        notes.start_edit();
        notes.input_char('x');
        let content = render(&projects[1], &notes);

        assert!(content.contains("Notes"));
        assert!(content.contains("    x_"));
        assert!(content.contains("(not set)"));
    }

    #[test]
    fn dirty_notes_are_marked() {
        let projects = sample_projects();
        let mut notes = NotesState::new(ProjectNote::default());
        notes.add_color();
        let content = render(&projects[2], &notes);

        assert!(content.contains("Notes *"));
        assert!(content.contains("#000000"));
        assert!(content.contains("Completed"));
    }
}
