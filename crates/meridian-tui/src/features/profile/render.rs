//! Profile view.

use meridian_core::session::Session;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::ProfileScreen;
use crate::common::fields::{busy_line, error_line, field_line, heading_line, hint_line, notice_line};

pub fn render(
    frame: &mut Frame,
    screen: &ProfileScreen,
    session: &Session,
    details_busy: bool,
    password_busy: bool,
    area: Rect,
) {
    let mut lines = vec![heading_line("Your Profile"), Line::from("")];

    if let Some(identity) = session.identity() {
        lines.push(Line::from(vec![
            Span::styled("  Signed in as ", Style::default().fg(Color::DarkGray)),
            Span::styled(identity.email.clone(), Style::default().fg(Color::White)),
            Span::styled(
                format!(" ({})", identity.role.label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(field_line(&screen.name, screen.focus == 0));
    lines.push(field_line(&screen.phone, screen.focus == 1));
    if let Some(message) = &screen.details_error {
        lines.push(error_line(message));
    }
    if let Some(message) = &screen.details_notice {
        lines.push(notice_line(message));
    }
    if details_busy {
        lines.push(busy_line("Saving…"));
    }

    lines.push(Line::from(""));
    lines.push(heading_line("Change password"));
    lines.push(Line::from(""));
    lines.push(field_line(&screen.current_password, screen.focus == 2));
    lines.push(field_line(&screen.new_password, screen.focus == 3));
    lines.push(field_line(&screen.confirm_new_password, screen.focus == 4));
    if let Some(message) = &screen.password_error {
        lines.push(error_line(message));
    }
    if let Some(message) = &screen.password_notice {
        lines.push(notice_line(message));
    }
    if password_busy {
        lines.push(busy_line("Updating password…"));
    }

    lines.push(Line::from(""));
    lines.push(hint_line(
        "Tab next field · Enter saves the panel under focus · Ctrl+O sign out · Esc back",
    ));
    frame.render_widget(Paragraph::new(lines), area);
}
