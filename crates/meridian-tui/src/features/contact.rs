//! Public contact form.
//!
//! Available to anonymous visitors; fields prefill from the session when
//! someone is signed in.

use crossterm::event::{KeyCode, KeyEvent};
use meridian_core::session::Session;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::common::fields::{busy_line, error_line, field_line, heading_line, hint_line, notice_line};
use crate::common::{TextField, field_input, is_valid_email};
use crate::effects::UiEffect;

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: TextField,
    pub email: TextField,
    pub message: TextField,
    pub focus: usize,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl ContactForm {
    pub const FIELDS: usize = 3;

    pub fn new(session: &Session) -> Self {
        let (name, email) = match session.identity() {
            Some(identity) => (identity.name.as_str(), identity.email.as_str()),
            None => ("", ""),
        };
        Self {
            name: TextField::with_value("Name", name),
            email: TextField::with_value("Email", email),
            message: TextField::new("Message"),
            focus: 0,
            error: None,
            notice: None,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> &mut TextField {
        match index {
            0 => &mut self.name,
            1 => &mut self.email,
            _ => &mut self.message,
        }
    }
}

pub fn handle_key(form: &mut ContactForm, busy: bool, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus = (form.focus + 1) % ContactForm::FIELDS;
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = (form.focus + ContactForm::FIELDS - 1) % ContactForm::FIELDS;
            vec![]
        }
        KeyCode::Enter if !busy => match validate(form) {
            Ok(effect) => {
                form.error = None;
                form.notice = None;
                vec![effect]
            }
            Err(message) => {
                form.error = Some(message);
                vec![]
            }
        },
        KeyCode::Enter => vec![],
        _ => {
            field_input(form.field_mut(form.focus), key);
            vec![]
        }
    }
}

fn validate(form: &ContactForm) -> Result<UiEffect, String> {
    if form.name.is_empty() {
        return Err("Enter your name.".to_string());
    }
    if !is_valid_email(form.email.trimmed()) {
        return Err("That email address doesn't look right.".to_string());
    }
    if form.message.is_empty() {
        return Err("Write a message first.".to_string());
    }
    Ok(UiEffect::SendContact {
        name: form.name.trimmed().to_string(),
        email: form.email.trimmed().to_string(),
        message: form.message.trimmed().to_string(),
    })
}

pub fn render(frame: &mut Frame, form: &ContactForm, busy: bool, area: Rect) {
    let mut lines = vec![
        heading_line("Contact Meridian Advisory"),
        Line::from(""),
        Line::from("Questions about our services? We usually reply within one business day."),
        Line::from(""),
        field_line(&form.name, form.focus == 0),
        field_line(&form.email, form.focus == 1),
        field_line(&form.message, form.focus == 2),
        Line::from(""),
    ];
    if let Some(message) = &form.error {
        lines.push(error_line(message));
    }
    if let Some(message) = &form.notice {
        lines.push(notice_line(message));
    }
    if busy {
        lines.push(busy_line("Sending…"));
    }
    lines.push(Line::from(""));
    lines.push(hint_line("Tab next field · Enter send · Esc back"));
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use meridian_core::session::{Identity, Role};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn prefills_from_an_authenticated_session() {
        let mut session = Session::new();
        session.complete_initial_check(Some(Identity {
            id: 4,
            name: "Kim Osei".to_string(),
            email: "kim@example.com".to_string(),
            phone: None,
            role: Role::Regular,
        }));
        let form = ContactForm::new(&session);
        assert_eq!(form.name.value(), "Kim Osei");
        assert_eq!(form.email.value(), "kim@example.com");
    }

    #[test]
    fn empty_message_blocks_submit() {
        let mut form = ContactForm::new(&Session::new());
        form.name.set_value("Kim");
        form.email.set_value("kim@example.com");

        let effects = handle_key(&mut form, false, press(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(form.error.is_some());
    }

    #[test]
    fn valid_form_emits_send_effect() {
        let mut form = ContactForm::new(&Session::new());
        form.name.set_value("Kim");
        form.email.set_value("kim@example.com");
        form.message.set_value("Tell me about your fees.");

        let effects = handle_key(&mut form, false, press(KeyCode::Enter));
        assert!(matches!(effects.as_slice(), [UiEffect::SendContact { .. }]));
    }
}
