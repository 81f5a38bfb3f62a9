//! Static pages: about, privacy policy, terms, and the social placeholders.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::fields::{heading_line, hint_line};
use crate::common::text::wrap_words;
use crate::routes::SocialNetwork;

const ABOUT: &str = "Meridian Advisory is an independent, fee-only advisory firm. \
We act as fiduciaries: our only compensation is the fee you pay us, and our only \
obligation is to you.\n\nOur advisors hold CFP and CFA designations and work in \
small, dedicated teams so you always know who to call.";

const PRIVACY: &str = "We collect the information you give us when registering or \
contacting us — your name, email address, and phone number — and use it solely to \
provide advisory services. We never sell client data.\n\nSession data is kept only \
as long as needed to keep you signed in. You can ask us to delete your account and \
its data at any time.";

const TERMS: &str = "Use of this portal does not by itself create an advisory \
relationship; that begins with a signed engagement letter.\n\nContent here is for \
general information and is not a recommendation to buy or sell any security. Past \
performance does not guarantee future results.";

fn render_prose(frame: &mut Frame, title: &str, body: &str, area: Rect) {
    let width = area.width.saturating_sub(4) as usize;
    let mut lines = vec![heading_line(title), Line::from("")];
    for wrapped in wrap_words(body, width) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(hint_line("Esc back · Ctrl+K go anywhere"));
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_about(frame: &mut Frame, area: Rect) {
    render_prose(frame, "About Meridian Advisory", ABOUT, area);
}

pub fn render_privacy(frame: &mut Frame, area: Rect) {
    render_prose(frame, "Privacy Policy", PRIVACY, area);
}

pub fn render_terms(frame: &mut Frame, area: Rect) {
    render_prose(frame, "Terms of Service", TERMS, area);
}

pub fn render_social(frame: &mut Frame, network: SocialNetwork, area: Rect) {
    let lines = vec![
        heading_line(&format!("Meridian Advisory on {}", network.label())),
        Line::from(""),
        Line::from(Span::styled(
            "This integration isn't live yet — check back soon.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        hint_line("Esc back · Ctrl+K go anywhere"),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
