//! Dashboard tab: portfolio totals, project cards and the renewal feed.
//!
//! ```text
//! ╭ Active ───╮╭ Completed ╮╭ Revenue ──╮╭ Urgent ───╮
//! │ 2         ││ 1         ││ $12,500   ││ 2         │
//! ╰───────────╯╰───────────╯╰───────────╯╰───────────╯
//! ╭ Projects ───────────────────╮╭ Upcoming Renewals ──╮
//! │╭ E-commerce Redesign ─────╮ ││ 14 days  E-commerce │
//! ││ Fashion Boutique  Active │ ││ ...                 │
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Widget},
};
use sitekeeper_protocol::{Project, RenewalFeed, domain_countdown};

use super::RenderContext;
use super::format::{INVALID_DATE, days_label};
use crate::layout::{PROJECT_CARD_HEIGHT, SUMMARY_HEIGHT};
use crate::state::AppState;

/// Renders the dashboard tab.
pub fn render_dashboard(state: &AppState, ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let [summary_area, body_area] =
        Layout::vertical([Constraint::Length(SUMMARY_HEIGHT), Constraint::Min(0)]).areas(area);
    let [cards_area, feed_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(body_area);

    render_summary(state, ctx, summary_area, buf);
    render_project_cards(
        &state.dashboard_projects(),
        state.dashboard_selected,
        ctx,
        cards_area,
        buf,
    );
    render_renewal_feed(&state.feed, ctx, feed_area, buf);
}

fn render_summary(state: &AppState, ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let summary = state.summary();
    let palette = &ctx.palette;
    let urgent_color = if summary.urgent_renewals > 0 {
        palette.urgent
    } else {
        palette.normal
    };

    let stats = [
        ("Active Projects", summary.active.len().to_string(), palette.normal),
        ("Completed", summary.completed.len().to_string(), palette.completed),
        (
            "Total Revenue",
            ctx.display.currency.format(summary.total_revenue),
            palette.accent,
        ),
        ("Urgent Renewals", summary.urgent_renewals.to_string(), urgent_color),
    ];

    let boxes = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for ((label, value, color), box_area) in stats.into_iter().zip(boxes.iter()) {
        let block = Block::default()
            .title(Span::styled(format!(" {label} "), palette.muted()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.muted());
        Paragraph::new(Line::from(Span::styled(
            format!(" {value}"),
            Style::default().fg(color),
        )))
        .block(block)
        .render(*box_area, buf);
    }
}

/// Renders one card per project, scrolled so the selected card is visible.
fn render_project_cards(
    projects: &[&Project],
    selected: usize,
    ctx: &RenderContext,
    area: Rect,
    buf: &mut Buffer,
) {
    let palette = &ctx.palette;
    let block = Block::default()
        .title(Span::styled(" Projects ", palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    block.render(area, buf);

    if projects.is_empty() {
        Paragraph::new(Span::styled("No projects yet", palette.muted())).render(inner, buf);
        return;
    }

    let fits = usize::from((inner.height / PROJECT_CARD_HEIGHT).max(1));
    let first = selected.saturating_sub(fits - 1);

    for (slot, (index, project)) in projects.iter().enumerate().skip(first).take(fits).enumerate() {
        let offset = slot as u16 * PROJECT_CARD_HEIGHT;
        let card_area = Rect {
            y: inner.y + offset,
            height: PROJECT_CARD_HEIGHT.min(inner.height.saturating_sub(offset)),
            ..inner
        };
        render_project_card(project, index == selected, ctx, card_area, buf);
    }
}

fn render_project_card(
    project: &Project,
    is_selected: bool,
    ctx: &RenderContext,
    area: Rect,
    buf: &mut Buffer,
) {
    let palette = &ctx.palette;
    let border_style = if is_selected {
        palette.selected()
    } else {
        palette.muted()
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", project.name),
            if is_selected {
                palette.selected()
            } else {
                palette.text()
            },
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let header = Line::from(vec![
        Span::styled(project.client.name.clone(), palette.text()),
        Span::raw("  "),
        Span::styled(
            project.status.label(),
            Style::default().fg(palette.status(project.status)),
        ),
        Span::raw("  "),
        Span::styled(ctx.display.currency.format(project.revenue), palette.muted()),
    ]);

    let footer = match &project.completed_date {
        Some(completed) => Line::from(Span::styled(
            format!("Completed {}", ctx.date(completed)),
            Style::default().fg(palette.completed),
        )),
        None => match domain_countdown(project, ctx.now) {
            Ok(countdown) => Line::from(vec![
                Span::styled("Domain renews in ", palette.muted()),
                Span::styled(
                    days_label(countdown.days_left),
                    Style::default().fg(palette.urgency(countdown.urgency)),
                ),
            ]),
            Err(_) => Line::from(vec![
                Span::styled("Domain renewal: ", palette.muted()),
                Span::styled(INVALID_DATE, Style::default().fg(palette.urgent)),
            ]),
        },
    };

    Paragraph::new(vec![header, footer])
        .block(block)
        .render(area, buf);
}

fn render_renewal_feed(feed: &RenewalFeed, ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let palette = &ctx.palette;
    let block = Block::default()
        .title(Span::styled(" Upcoming Renewals ", palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let mut items: Vec<ListItem> = feed
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{:>9}  ", days_label(item.days_left)),
                        Style::default().fg(palette.urgency(item.urgency())),
                    ),
                    Span::styled(item.project_name.clone(), palette.text()),
                    Span::styled(format!(" ({})", item.kind.label()), palette.muted()),
                ]),
                Line::from(Span::styled(
                    format!(
                        "           {} · {}",
                        item.provider,
                        ctx.display.date_format.format(item.date.date_naive())
                    ),
                    palette.muted(),
                )),
            ])
        })
        .collect();

    if feed.is_empty() {
        items.push(ListItem::new(Span::styled("Nothing to renew", palette.muted())));
    }
    if !feed.rejected.is_empty() {
        items.push(ListItem::new(Span::styled(
            format!("{} project(s) skipped: {INVALID_DATE}", feed.rejected.len()),
            Style::default().fg(palette.urgent),
        )));
    }

    List::new(items).block(block).render(area, buf);
}
