//! Home view: marketing copy plus a few client excerpts.

use meridian_core::session::Session;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::fields::hint_line;
use crate::common::text::wrap_words;

const TAGLINE: &str = "Independent financial advice, built around your goals.";

const PITCH: &str = "Meridian Advisory helps families and founders plan, invest, \
and retire with confidence. Fee-only, fiduciary, and in your corner since 2011.";

const SERVICES: &[&str] = &[
    "Retirement and pension planning",
    "Portfolio reviews and investment strategy",
    "Tax-aware wealth structuring",
    "First-home and education savings plans",
];

const TESTIMONIALS: &[(&str, &str)] = &[
    (
        "They turned a drawer full of statements into a plan we actually follow.",
        "R.M., client since 2018",
    ),
    (
        "Clear fees, straight answers. Exactly what we wanted.",
        "S.T., client since 2021",
    ),
];

pub fn render(frame: &mut Frame, session: &Session, area: Rect) {
    let width = area.width.saturating_sub(4) as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            "MERIDIAN ADVISORY",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::White))),
        Line::from(""),
    ];

    for wrapped in wrap_words(PITCH, width) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "What we do",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    for service in SERVICES {
        lines.push(Line::from(Span::styled(
            format!("  • {service}"),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "What clients say",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    for (quote, who) in TESTIMONIALS {
        for wrapped in wrap_words(&format!("“{quote}”"), width.saturating_sub(2)) {
            lines.push(Line::from(Span::styled(
                format!("  {wrapped}"),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("    — {who}"),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));

    if session.is_authenticated() {
        lines.push(hint_line(
            "p profile · y ask an advisor · t rate us · Ctrl+K go anywhere",
        ));
    } else {
        lines.push(hint_line(
            "l sign in · r create account · c contact us · Ctrl+K go anywhere",
        ));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
