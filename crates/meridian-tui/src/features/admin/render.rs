//! Admin dashboard view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use super::state::{AdminData, AdminScreen, AdminTab};
use crate::common::fields::{error_line, field_line, heading_line, hint_line};
use crate::common::text::truncate_with_ellipsis;

pub fn render(frame: &mut Frame, screen: &AdminScreen, area: Rect) {
    match &screen.data {
        AdminData::Loading => {
            let lines = vec![
                heading_line("Admin Dashboard"),
                Line::from(""),
                Line::from(Span::styled(
                    "Loading dashboard…",
                    Style::default().fg(Color::Yellow),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), area);
        }
        AdminData::Denied => {
            let lines = vec![
                heading_line("Admin Dashboard"),
                Line::from(""),
                error_line("You don't have permission to view this page."),
                Line::from(""),
                hint_line("Esc back"),
            ];
            frame.render_widget(Paragraph::new(lines), area);
        }
        AdminData::Failed(message) => {
            let lines = vec![
                heading_line("Admin Dashboard"),
                Line::from(""),
                error_line(message),
                Line::from(""),
                hint_line("R retry · Esc back"),
            ];
            frame.render_widget(Paragraph::new(lines), area);
        }
        AdminData::Ready { users, queries } => {
            render_ready(frame, screen, users.len(), queries.len(), area);
        }
    }
}

fn render_ready(
    frame: &mut Frame,
    screen: &AdminScreen,
    user_total: usize,
    query_total: usize,
    area: Rect,
) {
    let mut top = vec![
        heading_line("Admin Dashboard"),
        tabs_line(screen.tab, user_total, query_total),
        field_line(&screen.filter, screen.filter_focused),
        Line::from(""),
    ];
    if screen.tab == AdminTab::Users {
        top.push(hint_line(&format!(
            "sorted by {} · s cycles sort · / filter · R refresh",
            screen.sort.label()
        )));
    } else {
        top.push(hint_line("newest first · / filter · R refresh"));
    }

    let header_height = top.len() as u16;
    let header_area = Rect {
        height: header_height.min(area.height),
        ..area
    };
    frame.render_widget(Paragraph::new(top), header_area);

    let table_area = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height),
    };
    if table_area.height == 0 {
        return;
    }

    match screen.tab {
        AdminTab::Users => render_users(frame, screen, table_area),
        AdminTab::Inquiries => render_queries(frame, screen, table_area),
    }
}

fn tabs_line(active: AdminTab, user_total: usize, query_total: usize) -> Line<'static> {
    let tab = |label: String, is_active: bool| {
        let style = if is_active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(label, style)
    };
    Line::from(vec![
        tab(format!("[ Users {user_total} ]"), active == AdminTab::Users),
        Span::raw("  "),
        tab(
            format!("[ Inquiries {query_total} ]"),
            active == AdminTab::Inquiries,
        ),
    ])
}

fn render_users(frame: &mut Frame, screen: &AdminScreen, area: Rect) {
    let rows: Vec<Row> = screen
        .visible_users()
        .iter()
        .enumerate()
        .map(|(index, user)| {
            let style = if index == screen.selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            Row::new(vec![
                Cell::from(user.id.to_string()),
                Cell::from(truncate_with_ellipsis(&user.name, 24)),
                Cell::from(truncate_with_ellipsis(&user.email, 30)),
                Cell::from(user.phone.clone().unwrap_or_default()),
                Cell::from(user.role.label()),
                Cell::from(user.created_at.as_deref().map(format_since).unwrap_or_default()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(24),
            Constraint::Length(30),
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(header_row(&["ID", "Name", "Email", "Phone", "Role", "Since"]));
    frame.render_widget(table, area);
}

fn render_queries(frame: &mut Frame, screen: &AdminScreen, area: Rect) {
    let rows: Vec<Row> = screen
        .visible_queries()
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let style = if index == screen.selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            Row::new(vec![
                Cell::from(record.id.to_string()),
                Cell::from(record.kind.label()),
                Cell::from(truncate_with_ellipsis(&record.name, 20)),
                Cell::from(truncate_with_ellipsis(
                    record.subject.as_deref().unwrap_or("—"),
                    24,
                )),
                Cell::from(truncate_with_ellipsis(&record.message, 40)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Length(20),
            Constraint::Length(24),
            Constraint::Min(20),
        ],
    )
    .header(header_row(&["ID", "Kind", "From", "Subject", "Message"]));
    frame.render_widget(table, area);
}

/// Formats the backend's `YYYY-MM-DD HH:MM:SS` timestamps for the table;
/// anything else passes through untouched.
fn format_since(raw: &str) -> String {
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|datetime| datetime.format("%b %e, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn header_row(titles: &[&'static str]) -> Row<'static> {
    Row::new(
        titles
            .iter()
            .map(|title| Cell::from(*title))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}
