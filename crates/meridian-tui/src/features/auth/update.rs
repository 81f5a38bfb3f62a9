//! Auth feature reducers.
//!
//! Key routing and submit validation for the sign-in, registration, and
//! password-reset forms. Validation failures render inline and emit no
//! effects; nothing is sent until the fields pass.

use crossterm::event::{KeyCode, KeyEvent};

use super::state::{ForgotForm, LoginForm, RegisterForm, ResetForm};
use crate::common::{MIN_PASSWORD_LEN, field_input, is_valid_email, is_valid_phone};
use crate::effects::UiEffect;

pub fn handle_login_key(form: &mut LoginForm, busy: bool, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus = (form.focus + 1) % LoginForm::FIELDS;
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = (form.focus + LoginForm::FIELDS - 1) % LoginForm::FIELDS;
            vec![]
        }
        KeyCode::Enter if !busy => match validate_login(form) {
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

fn validate_login(form: &LoginForm) -> Result<UiEffect, String> {
    let email = form.email.trimmed();
    if email.is_empty() {
        return Err("Enter your email address.".to_string());
    }
    if !is_valid_email(email) {
        return Err("That email address doesn't look right.".to_string());
    }
    if form.password.value().is_empty() {
        return Err("Enter your password.".to_string());
    }
    Ok(UiEffect::SubmitLogin {
        email: email.to_string(),
        password: form.password.value().to_string(),
    })
}

pub fn handle_register_key(form: &mut RegisterForm, busy: bool, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus = (form.focus + 1) % RegisterForm::FIELDS;
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = (form.focus + RegisterForm::FIELDS - 1) % RegisterForm::FIELDS;
            vec![]
        }
        KeyCode::Enter if !busy => match validate_register(form) {
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
        _ => {
            field_input(form.field_mut(form.focus), key);
            vec![]
        }
    }
}

fn validate_register(form: &RegisterForm) -> Result<UiEffect, String> {
    if form.name.is_empty() {
        return Err("Enter your full name.".to_string());
    }
    let email = form.email.trimmed();
    if !is_valid_email(email) {
        return Err("That email address doesn't look right.".to_string());
    }
    if form.password.value().len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        ));
    }
    if form.password.value() != form.confirm_password.value() {
        return Err("Passwords do not match.".to_string());
    }
    if !is_valid_phone(form.phone.trimmed()) {
        return Err("Enter a valid phone number.".to_string());
    }
    Ok(UiEffect::SubmitRegistration {
        name: form.name.trimmed().to_string(),
        email: email.to_string(),
        password: form.password.value().to_string(),
        confirm_password: form.confirm_password.value().to_string(),
        phone: form.phone.trimmed().to_string(),
    })
}

pub fn handle_forgot_key(form: &mut ForgotForm, busy: bool, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Enter if !busy => {
            let email = form.email.trimmed();
            if !is_valid_email(email) {
                form.error = Some("That email address doesn't look right.".to_string());
                return vec![];
            }
            form.error = None;
            vec![UiEffect::RequestResetLink {
                email: email.to_string(),
            }]
        }
        KeyCode::Enter => vec![],
        _ => {
            field_input(&mut form.email, key);
            vec![]
        }
    }
}

pub fn handle_reset_key(form: &mut ResetForm, busy: bool, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus = (form.focus + 1) % ResetForm::FIELDS;
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = (form.focus + ResetForm::FIELDS - 1) % ResetForm::FIELDS;
            vec![]
        }
        KeyCode::Enter if !busy => match validate_reset(form) {
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
        _ => {
            field_input(form.field_mut(form.focus), key);
            vec![]
        }
    }
}

fn validate_reset(form: &ResetForm) -> Result<UiEffect, String> {
    if form.token.is_empty() {
        return Err("Paste the reset token from your email.".to_string());
    }
    if form.password.value().len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        ));
    }
    if form.password.value() != form.confirm_password.value() {
        return Err("Passwords do not match.".to_string());
    }
    Ok(UiEffect::SubmitPasswordReset {
        token: form.token.trimmed().to_string(),
        password: form.password.value().to_string(),
        confirm_password: form.confirm_password.value().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_into(form: &mut LoginForm, text: &str) {
        for ch in text.chars() {
            handle_login_key(form, false, press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn malformed_email_blocks_submit() {
        let mut form = LoginForm::new();
        type_into(&mut form, "not-an-email");

        let effects = handle_login_key(&mut form, false, press(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(form.error.is_some());
    }

    #[test]
    fn valid_login_emits_submit_effect() {
        let mut form = LoginForm::new();
        type_into(&mut form, "kim@example.com");
        handle_login_key(&mut form, false, press(KeyCode::Tab));
        type_into(&mut form, "hunter42!");

        let effects = handle_login_key(&mut form, false, press(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![UiEffect::SubmitLogin {
                email: "kim@example.com".to_string(),
                password: "hunter42!".to_string(),
            }]
        );
    }

    #[test]
    fn enter_is_inert_while_a_call_is_outstanding() {
        let mut form = LoginForm::new();
        type_into(&mut form, "kim@example.com");
        handle_login_key(&mut form, false, press(KeyCode::Tab));
        type_into(&mut form, "hunter42!");

        let effects = handle_login_key(&mut form, true, press(KeyCode::Enter));
        assert!(effects.is_empty());
    }

    #[test]
    fn register_rejects_mismatched_passwords() {
        let mut form = RegisterForm::new();
        form.name.set_value("Kim Osei");
        form.email.set_value("kim@example.com");
        form.password.set_value("longenough1");
        form.confirm_password.set_value("longenough2");
        form.phone.set_value("555-014-2222");

        let effects = handle_register_key(&mut form, false, press(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(form.error.as_deref(), Some("Passwords do not match."));
    }

    #[test]
    fn register_happy_path() {
        let mut form = RegisterForm::new();
        form.name.set_value("Kim Osei");
        form.email.set_value("kim@example.com");
        form.password.set_value("longenough1");
        form.confirm_password.set_value("longenough1");
        form.phone.set_value("555-014-2222");

        let effects = handle_register_key(&mut form, false, press(KeyCode::Enter));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::SubmitRegistration { .. }]
        ));
    }

    #[test]
    fn reset_requires_a_token() {
        let mut form = ResetForm::new();
        form.password.set_value("longenough1");
        form.confirm_password.set_value("longenough1");

        let effects = handle_reset_key(&mut form, false, press(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(form.error.as_deref().unwrap().contains("token"));
    }
}
