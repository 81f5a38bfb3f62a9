//! Shared rendering for labeled form fields and inline banners.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_segmentation::UnicodeSegmentation;

use super::TextField;

/// Renders one labeled field row. The focused row carries a pointer, a
/// highlighted label, and a visible cursor cell.
pub fn field_line(field: &TextField, focused: bool) -> Line<'static> {
    let pointer = if focused { "› " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = Style::default().fg(Color::White);

    let mut spans = vec![Span::styled(
        format!("{pointer}{:<20}", field.label),
        label_style,
    )];

    let display = field.display_value();
    if focused {
        let graphemes: Vec<&str> = display.graphemes(true).collect();
        let cursor = field.cursor().min(graphemes.len());
        let before: String = graphemes[..cursor].concat();
        let at: String = graphemes
            .get(cursor)
            .copied()
            .unwrap_or(" ")
            .to_string();
        let after: String = if cursor < graphemes.len() {
            graphemes[cursor + 1..].concat()
        } else {
            String::new()
        };
        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            at,
            Style::default().add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::styled(after, value_style));
    } else {
        spans.push(Span::styled(display, value_style));
    }

    Line::from(spans)
}

pub fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red),
    ))
}

pub fn notice_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Green),
    ))
}

pub fn busy_line(label: &str) -> Line<'static> {
    Line::from(Span::styled(
        label.to_string(),
        Style::default().fg(Color::Yellow),
    ))
}

pub fn hint_line(hint: &str) -> Line<'static> {
    Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

pub fn heading_line(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}
