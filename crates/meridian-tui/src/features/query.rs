//! Authenticated query form ("Ask an Advisor").
//!
//! Sender identity rides along from the session at submit time; the view
//! only collects subject and message.

use crossterm::event::{KeyCode, KeyEvent};
use meridian_core::session::Session;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::common::fields::{busy_line, error_line, field_line, heading_line, hint_line, notice_line};
use crate::common::{TextField, field_input};
use crate::effects::UiEffect;

#[derive(Debug, Clone)]
pub struct QueryForm {
    pub subject: TextField,
    pub message: TextField,
    pub focus: usize,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl QueryForm {
    pub const FIELDS: usize = 2;

    pub fn new() -> Self {
        Self {
            subject: TextField::new("Subject"),
            message: TextField::new("Message"),
            focus: 0,
            error: None,
            notice: None,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> &mut TextField {
        match index {
            0 => &mut self.subject,
            _ => &mut self.message,
        }
    }
}

pub fn handle_key(
    form: &mut QueryForm,
    session: &Session,
    busy: bool,
    key: KeyEvent,
) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus = (form.focus + 1) % QueryForm::FIELDS;
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = (form.focus + QueryForm::FIELDS - 1) % QueryForm::FIELDS;
            vec![]
        }
        KeyCode::Enter if !busy => match validate(form, session) {
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

fn validate(form: &QueryForm, session: &Session) -> Result<UiEffect, String> {
    // The guard keeps anonymous visitors out of this view; a missing
    // identity here means the session was cleared underneath us.
    let identity = session
        .identity()
        .ok_or_else(|| "Your session has expired. Please sign in again.".to_string())?;
    if form.subject.is_empty() {
        return Err("Give your query a subject.".to_string());
    }
    if form.message.is_empty() {
        return Err("Write your question first.".to_string());
    }
    Ok(UiEffect::SendQuery {
        user_id: identity.id,
        name: identity.name.clone(),
        email: identity.email.clone(),
        subject: form.subject.trimmed().to_string(),
        message: form.message.trimmed().to_string(),
    })
}

pub fn render(frame: &mut Frame, form: &QueryForm, busy: bool, area: Rect) {
    let mut lines = vec![
        heading_line("Ask an Advisor"),
        Line::from(""),
        Line::from("Your advisor will reply to the email on your account."),
        Line::from(""),
        field_line(&form.subject, form.focus == 0),
        field_line(&form.message, form.focus == 1),
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

    fn signed_in() -> Session {
        let mut session = Session::new();
        session.complete_initial_check(Some(Identity {
            id: 11,
            name: "Kim Osei".to_string(),
            email: "kim@example.com".to_string(),
            phone: None,
            role: Role::Regular,
        }));
        session
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn submit_carries_the_session_identity() {
        let mut form = QueryForm::new();
        form.subject.set_value("Fees");
        form.message.set_value("What is your management fee?");

        let effects = handle_key(&mut form, &signed_in(), false, press(KeyCode::Enter));
        match effects.as_slice() {
            [UiEffect::SendQuery {
                user_id,
                name,
                email,
                ..
            }] => {
                assert_eq!(*user_id, 11);
                assert_eq!(name, "Kim Osei");
                assert_eq!(email, "kim@example.com");
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn cleared_session_surfaces_inline() {
        let mut form = QueryForm::new();
        form.subject.set_value("Fees");
        form.message.set_value("What is your management fee?");

        let effects = handle_key(&mut form, &Session::new(), false, press(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(form.error.as_deref().unwrap().contains("expired"));
    }
}
