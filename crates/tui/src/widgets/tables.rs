//! The projects and domains tables.
//!
//! Both tables render the rows the engine derives from their [`TableView`]:
//! the sorted column carries an arrow, the column under the cursor is
//! underlined, and the search line appears above the table while a query is
//! typed or active.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};
use sitekeeper_protocol::{Project, SortKey};

use super::RenderContext;
use super::format::days_cell;
use crate::state::TableView;

struct Column {
    title: &'static str,
    key: Option<SortKey>,
    width: Constraint,
}

const PROJECT_TABLE: [Column; 5] = [
    Column {
        title: "Project",
        key: Some(SortKey::Name),
        width: Constraint::Percentage(28),
    },
    Column {
        title: "Client",
        key: Some(SortKey::ClientName),
        width: Constraint::Percentage(26),
    },
    Column {
        title: "Start Date",
        key: Some(SortKey::StartDate),
        width: Constraint::Percentage(16),
    },
    Column {
        title: "Revenue",
        key: Some(SortKey::Revenue),
        width: Constraint::Percentage(15),
    },
    Column {
        title: "Status",
        key: Some(SortKey::Status),
        width: Constraint::Percentage(15),
    },
];

const DOMAIN_TABLE: [Column; 7] = [
    Column {
        title: "Project",
        key: None,
        width: Constraint::Percentage(20),
    },
    Column {
        title: "Domain Provider",
        key: Some(SortKey::DomainProvider),
        width: Constraint::Percentage(15),
    },
    Column {
        title: "Domain Renewal",
        key: Some(SortKey::DomainRenewalDate),
        width: Constraint::Percentage(15),
    },
    Column {
        title: "Days Left",
        key: None,
        width: Constraint::Percentage(10),
    },
    Column {
        title: "Hosting Provider",
        key: Some(SortKey::HostingProvider),
        width: Constraint::Percentage(15),
    },
    Column {
        title: "Hosting Renewal",
        key: Some(SortKey::HostingRenewalDate),
        width: Constraint::Percentage(15),
    },
    Column {
        title: "Days Left",
        key: None,
        width: Constraint::Percentage(10),
    },
];

/// Renders the projects table.
pub fn render_projects_table(
    rows: &[&Project],
    table: &TableView,
    searching: bool,
    ctx: &RenderContext,
    area: Rect,
    buf: &mut Buffer,
) {
    let palette = &ctx.palette;
    let body = rows
        .iter()
        .map(|project| {
            Row::new(vec![
                Cell::from(project.name.clone()),
                Cell::from(project.client.name.clone()),
                Cell::from(ctx.date(&project.start_date)),
                Cell::from(ctx.display.currency.format(project.revenue)),
                Cell::from(Span::styled(
                    project.status.label(),
                    Style::default().fg(palette.status(project.status)),
                )),
            ])
        })
        .collect();

    render_table(" Projects ", &PROJECT_TABLE, body, table, searching, ctx, area, buf);
}

/// Renders the domains table.
///
/// A renewal date that does not parse shows "invalid date" in its
/// days-left column.
pub fn render_domains_table(
    rows: &[&Project],
    table: &TableView,
    searching: bool,
    ctx: &RenderContext,
    area: Rect,
    buf: &mut Buffer,
) {
    let body = rows
        .iter()
        .map(|project| {
            Row::new(vec![
                Cell::from(project.name.clone()),
                Cell::from(project.domain.provider.clone()),
                Cell::from(ctx.date(&project.domain.renewal_date)),
                days_left(&project.domain.renewal_date, ctx),
                Cell::from(project.hosting.provider.clone()),
                Cell::from(ctx.date(&project.hosting.renewal_date)),
                days_left(&project.hosting.renewal_date, ctx),
            ])
        })
        .collect();

    render_table(" Domains ", &DOMAIN_TABLE, body, table, searching, ctx, area, buf);
}

fn days_left(raw: &str, ctx: &RenderContext) -> Cell<'static> {
    let (label, urgency) = days_cell(raw, ctx.now);
    let color = urgency.map_or(ctx.palette.urgent, |urgency| ctx.palette.urgency(urgency));
    Cell::from(Span::styled(label, Style::default().fg(color)))
}

#[allow(clippy::too_many_arguments)]
fn render_table(
    title: &str,
    columns: &[Column],
    body: Vec<Row<'_>>,
    table: &TableView,
    searching: bool,
    ctx: &RenderContext,
    area: Rect,
    buf: &mut Buffer,
) {
    let palette = &ctx.palette;
    let query = &table.view.query;
    let show_search = searching || !query.is_empty();

    let [search_area, table_area] = Layout::vertical([
        Constraint::Length(u16::from(show_search)),
        Constraint::Min(0),
    ])
    .areas(area);

    if show_search {
        let cursor = if searching { "_" } else { "" };
        Paragraph::new(Line::from(vec![
            Span::styled(" Search: ", palette.muted()),
            Span::styled(format!("{query}{cursor}"), palette.selected()),
        ]))
        .render(search_area, buf);
    }

    let row_count = body.len();
    let block = Block::default()
        .title(Span::styled(format!("{title}({row_count}) "), palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let header = Row::new(columns.iter().map(|column| header_cell(column, table, ctx)))
        .style(Style::default().add_modifier(Modifier::BOLD));

    let body = if body.is_empty() {
        vec![Row::new(vec![Cell::from(Span::styled(
            "No matching projects",
            palette.muted(),
        ))])]
    } else {
        body
    };

    let widget = Table::new(body, columns.iter().map(|column| column.width))
        .header(header)
        .block(block)
        .row_highlight_style(palette.selected())
        .highlight_symbol("> ");

    let selected = (row_count > 0).then_some(table.selected_row.min(row_count - 1));
    let mut table_state = TableState::default().with_selected(selected);
    StatefulWidget::render(widget, table_area, buf, &mut table_state);
}

fn header_cell(column: &Column, table: &TableView, ctx: &RenderContext) -> Cell<'static> {
    let Some(key) = column.key else {
        return Cell::from(Span::styled(column.title, ctx.palette.muted()));
    };

    let sort = table.view.sort;
    let arrow = if sort.key == key {
        format!(" {}", sort.direction.arrow())
    } else {
        String::new()
    };

    let mut style = ctx.palette.text();
    if table.selected_key() == Some(key) {
        style = style
            .fg(ctx.palette.highlight)
            .add_modifier(Modifier::UNDERLINED);
    }

    Cell::from(Span::styled(format!("{}{arrow}", column.title), style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use chrono::{DateTime, TimeZone, Utc};
    use sitekeeper_config::{DateFormat, DisplaySettings};
    use sitekeeper_protocol::{ServiceTerm, SortState, dummy::sample_projects};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn ctx() -> RenderContext {
        RenderContext::new(DisplaySettings::default(), now())
    }

    fn render_projects(projects: &[Project], table: &TableView, searching: bool) -> String {
        let rows = table.rows(projects);
        let area = Rect::new(0, 0, 100, 12);
        let mut buf = Buffer::empty(area);
        render_projects_table(&rows, table, searching, &ctx(), area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn projects_table_marks_sorted_column() {
        let projects = sample_projects();
        let table = TableView::new(SortKey::PROJECT_COLUMNS, SortState::projects_default());
        let content = render_projects(&projects, &table, false);

        assert!(content.contains("Projects (3)"));
        assert!(content.contains("Start Date ▼"));
        assert!(content.contains("Portfolio Website"));
        assert!(content.contains("$5,000"));
        assert!(content.contains("02/01/2024"));
        assert!(!content.contains("Search:"));
    }

    #[test]
    fn sorted_rows_render_in_order() {
        let projects = sample_projects();
        let table = TableView::new(SortKey::PROJECT_COLUMNS, SortState::projects_default());
        let content = render_projects(&projects, &table, false);

        let portfolio = content.find("Portfolio Website").unwrap();
        let ecommerce = content.find("E-commerce Redesign").unwrap();
        let restaurant = content.find("Restaurant Website").unwrap();
        assert!(portfolio < ecommerce && ecommerce < restaurant);
    }

    #[test]
    fn search_line_and_empty_result() {
        let projects = sample_projects();
        let mut table = TableView::new(SortKey::PROJECT_COLUMNS, SortState::projects_default());
        table.view.query = "zzz".to_string();
        let content = render_projects(&projects, &table, true);

        assert!(content.contains("Search: zzz_"));
        assert!(content.contains("Projects (0)"));
        assert!(content.contains("No matching projects"));
    }

    #[test]
    fn domains_table_shows_days_and_invalid_dates() {
        let mut projects = sample_projects();
        projects[2].hosting = ServiceTerm::new("2023-11-01", "not-a-date", "DigitalOcean");
        let table = TableView::new(SortKey::RENEWAL_COLUMNS, SortState::renewals_default());
        let rows = table.rows(&projects);

        let ctx = RenderContext::new(
            DisplaySettings {
                date_format: DateFormat::Iso,
                ..Default::default()
            },
            now(),
        );
        let area = Rect::new(0, 0, 140, 10);
        let mut buf = Buffer::empty(area);
        render_domains_table(&rows, &table, false, &ctx, area, &mut buf);
        let content = buffer_to_string(&buf);

        assert!(content.contains("Domain Renewal ▲"));
        assert!(content.contains("2024-01-15"));
        assert!(content.contains("14 days"));
        assert!(content.contains("invalid date"));
        assert!(content.contains("not-a-date"));
    }

    #[test]
    fn small_area_does_not_panic() {
        let projects = sample_projects();
        let table = TableView::new(SortKey::PROJECT_COLUMNS, SortState::projects_default());
        let rows = table.rows(&projects);
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        render_projects_table(&rows, &table, true, &ctx(), area, &mut buf);
    }
}
