//! Rating view.
//!
//! One rating per account; the backend answers `409` when the visitor has
//! already submitted, and the view turns that into a notice instead of an
//! error banner.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::fields::{busy_line, error_line, field_line, heading_line, hint_line, notice_line};
use crate::common::{TextField, field_input};
use crate::effects::UiEffect;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone)]
pub struct RatingForm {
    pub rating: u8,
    pub message: TextField,
    /// 0 = stars row, 1 = message field.
    pub focus: usize,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub already_rated: bool,
}

impl RatingForm {
    pub fn new() -> Self {
        Self {
            rating: 0,
            message: TextField::new("Comments"),
            focus: 0,
            error: None,
            notice: None,
            already_rated: false,
        }
    }
}

pub fn handle_key(form: &mut RatingForm, busy: bool, key: KeyEvent) -> Vec<UiEffect> {
    if form.already_rated {
        // Nothing left to edit; global keys still navigate away.
        return vec![];
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus = (form.focus + 1) % 2;
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = (form.focus + 1) % 2;
            vec![]
        }
        KeyCode::Enter if !busy => match validate(form) {
            Ok(effect) => {
                form.error = None;
                vec![effect]
            }
            Err(message) => {
                form.error = Some(message);
                vec![]
            }
        },
        KeyCode::Enter => vec![],
        KeyCode::Left if form.focus == 0 => {
            form.rating = form.rating.saturating_sub(1).max(MIN_RATING);
            vec![]
        }
        KeyCode::Right if form.focus == 0 => {
            form.rating = (form.rating + 1).min(MAX_RATING);
            vec![]
        }
        KeyCode::Char(ch @ '1'..='5') if form.focus == 0 => {
            form.rating = ch as u8 - b'0';
            vec![]
        }
        _ if form.focus == 1 => {
            field_input(&mut form.message, key);
            vec![]
        }
        _ => vec![],
    }
}

fn validate(form: &RatingForm) -> Result<UiEffect, String> {
    if !(MIN_RATING..=MAX_RATING).contains(&form.rating) {
        return Err("Pick a rating from 1 to 5 first.".to_string());
    }
    Ok(UiEffect::SendRating {
        rating: form.rating,
        message: form.message.trimmed().to_string(),
    })
}

pub fn render(frame: &mut Frame, form: &RatingForm, busy: bool, area: Rect) {
    let mut lines = vec![heading_line("How are we doing?"), Line::from("")];

    if form.already_rated {
        lines.push(notice_line(
            form.notice
                .as_deref()
                .unwrap_or("You've already shared a rating. Thank you!"),
        ));
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    lines.push(stars_line(form.rating, form.focus == 0));
    lines.push(Line::from(""));
    lines.push(field_line(&form.message, form.focus == 1));
    lines.push(Line::from(""));
    if let Some(message) = &form.error {
        lines.push(error_line(message));
    }
    if let Some(message) = &form.notice {
        lines.push(notice_line(message));
    }
    if busy {
        lines.push(busy_line("Submitting…"));
    }
    lines.push(Line::from(""));
    lines.push(hint_line(
        "1-5 or ←/→ pick stars · Tab comments · Enter submit · Esc back",
    ));
    frame.render_widget(Paragraph::new(lines), area);
}

fn stars_line(rating: u8, focused: bool) -> Line<'static> {
    let pointer = if focused { "› " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans = vec![Span::styled(format!("{pointer}{:<20}", "Rating"), label_style)];
    for step in MIN_RATING..=MAX_RATING {
        let (glyph, style) = if step <= rating {
            ("★ ", Style::default().fg(Color::Yellow))
        } else {
            ("☆ ", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(glyph, style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn unset_rating_blocks_submit() {
        let mut form = RatingForm::new();
        let effects = handle_key(&mut form, false, press(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(form.error.is_some());
    }

    #[test]
    fn digit_keys_pick_a_star_count() {
        let mut form = RatingForm::new();
        handle_key(&mut form, false, press(KeyCode::Char('4')));
        assert_eq!(form.rating, 4);

        let effects = handle_key(&mut form, false, press(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![UiEffect::SendRating {
                rating: 4,
                message: String::new(),
            }]
        );
    }

    #[test]
    fn arrows_stay_in_range() {
        let mut form = RatingForm::new();
        handle_key(&mut form, false, press(KeyCode::Char('5')));
        handle_key(&mut form, false, press(KeyCode::Right));
        assert_eq!(form.rating, 5);
        for _ in 0..10 {
            handle_key(&mut form, false, press(KeyCode::Left));
        }
        assert_eq!(form.rating, 1);
    }

    #[test]
    fn already_rated_locks_the_form() {
        let mut form = RatingForm::new();
        form.already_rated = true;
        let effects = handle_key(&mut form, false, press(KeyCode::Enter));
        assert!(effects.is_empty());
    }
}
