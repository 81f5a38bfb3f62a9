//! Auth feature views.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::state::{ForgotForm, LoginForm, RegisterForm, ResetForm};
use crate::common::fields::{busy_line, error_line, field_line, heading_line, hint_line, notice_line};

const FORM_HINT: &str = "Tab next field · Enter submit · Esc back";

pub fn render_login(frame: &mut Frame, form: &LoginForm, busy: bool, area: Rect) {
    let mut lines = vec![
        heading_line("Sign in to Meridian Advisory"),
        Line::from(""),
        field_line(&form.email, form.focus == 0),
        field_line(&form.password, form.focus == 1),
        Line::from(""),
    ];
    push_banners(&mut lines, form.error.as_deref(), form.notice.as_deref());
    if busy {
        lines.push(busy_line("Signing in…"));
    }
    lines.push(Line::from(""));
    lines.push(hint_line(FORM_HINT));
    lines.push(hint_line(
        "No account yet? Press Esc, then r to register. Forgot your password? /forgot-password via Ctrl+K.",
    ));
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_register(frame: &mut Frame, form: &RegisterForm, busy: bool, area: Rect) {
    let mut lines = vec![
        heading_line("Create your Meridian Advisory account"),
        Line::from(""),
        field_line(&form.name, form.focus == 0),
        field_line(&form.email, form.focus == 1),
        field_line(&form.password, form.focus == 2),
        field_line(&form.confirm_password, form.focus == 3),
        field_line(&form.phone, form.focus == 4),
        Line::from(""),
    ];
    push_banners(&mut lines, form.error.as_deref(), None);
    if busy {
        lines.push(busy_line("Creating account…"));
    }
    lines.push(Line::from(""));
    lines.push(hint_line(FORM_HINT));
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_forgot(frame: &mut Frame, form: &ForgotForm, busy: bool, area: Rect) {
    let mut lines = vec![
        heading_line("Forgot your password?"),
        Line::from(""),
        Line::from("We'll email you a reset token."),
        Line::from(""),
        field_line(&form.email, true),
        Line::from(""),
    ];
    push_banners(&mut lines, form.error.as_deref(), form.notice.as_deref());
    if busy {
        lines.push(busy_line("Sending reset link…"));
    }
    lines.push(Line::from(""));
    lines.push(hint_line("Enter submit · Esc back"));
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_reset(frame: &mut Frame, form: &ResetForm, busy: bool, area: Rect) {
    let mut lines = vec![
        heading_line("Reset your password"),
        Line::from(""),
        field_line(&form.token, form.focus == 0),
        field_line(&form.password, form.focus == 1),
        field_line(&form.confirm_password, form.focus == 2),
        Line::from(""),
    ];
    push_banners(&mut lines, form.error.as_deref(), None);
    if busy {
        lines.push(busy_line("Resetting password…"));
    }
    lines.push(Line::from(""));
    lines.push(hint_line(FORM_HINT));
    frame.render_widget(Paragraph::new(lines), area);
}

fn push_banners(lines: &mut Vec<Line<'static>>, error: Option<&str>, notice: Option<&str>) {
    if let Some(message) = error {
        lines.push(error_line(message));
    }
    if let Some(message) = notice {
        lines.push(notice_line(message));
    }
}
