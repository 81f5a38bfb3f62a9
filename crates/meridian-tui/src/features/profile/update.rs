//! Profile feature reducer.
//!
//! Enter submits the panel that currently holds focus: the details panel
//! saves name/phone, the password panel changes the password.

use crossterm::event::{KeyCode, KeyEvent};
use meridian_core::session::Session;

use super::state::{ProfilePanel, ProfileScreen};
use crate::common::{MIN_PASSWORD_LEN, field_input, is_valid_phone};
use crate::effects::UiEffect;

pub fn handle_key(
    screen: &mut ProfileScreen,
    session: &Session,
    details_busy: bool,
    password_busy: bool,
    key: KeyEvent,
) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            screen.focus = (screen.focus + 1) % ProfileScreen::FIELDS;
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            screen.focus = (screen.focus + ProfileScreen::FIELDS - 1) % ProfileScreen::FIELDS;
            vec![]
        }
        KeyCode::Enter => match screen.panel() {
            ProfilePanel::Details if !details_busy => match validate_details(screen, session) {
                Ok(effect) => {
                    screen.details_error = None;
                    screen.details_notice = None;
                    vec![effect]
                }
                Err(message) => {
                    screen.details_error = Some(message);
                    vec![]
                }
            },
            ProfilePanel::Password if !password_busy => match validate_password(screen) {
                Ok(effect) => {
                    screen.password_error = None;
                    screen.password_notice = None;
                    vec![effect]
                }
                Err(message) => {
                    screen.password_error = Some(message);
                    vec![]
                }
            },
            _ => vec![],
        },
        _ => {
            field_input(screen.field_mut(screen.focus), key);
            vec![]
        }
    }
}

fn validate_details(screen: &ProfileScreen, session: &Session) -> Result<UiEffect, String> {
    let identity = session
        .identity()
        .ok_or_else(|| "Your session has expired. Please sign in again.".to_string())?;
    if screen.name.is_empty() {
        return Err("Your name can't be empty.".to_string());
    }
    if !screen.phone.is_empty() && !is_valid_phone(screen.phone.trimmed()) {
        return Err("Enter a valid phone number.".to_string());
    }
    Ok(UiEffect::SaveProfile {
        id: identity.id,
        name: screen.name.trimmed().to_string(),
        phone: screen.phone.trimmed().to_string(),
    })
}

fn validate_password(screen: &ProfileScreen) -> Result<UiEffect, String> {
    if screen.current_password.value().is_empty() {
        return Err("Enter your current password.".to_string());
    }
    if screen.new_password.value().len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "New password must be at least {MIN_PASSWORD_LEN} characters."
        ));
    }
    if screen.new_password.value() != screen.confirm_new_password.value() {
        return Err("New passwords do not match.".to_string());
    }
    Ok(UiEffect::SubmitPasswordChange {
        current_password: screen.current_password.value().to_string(),
        new_password: screen.new_password.value().to_string(),
        confirm_new_password: screen.confirm_new_password.value().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use meridian_core::session::{Identity, Role};

    use super::*;

    fn signed_in() -> Session {
        let mut session = Session::new();
        session.complete_initial_check(Some(Identity {
            id: 23,
            name: "Kim Osei".to_string(),
            email: "kim@example.com".to_string(),
            phone: Some("555-0142".to_string()),
            role: Role::Regular,
        }));
        session
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn details_panel_saves_name_and_phone() {
        let session = signed_in();
        let mut screen = ProfileScreen::new(&session);
        screen.name.set_value("Kim O.");

        let effects = handle_key(&mut screen, &session, false, false, press(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![UiEffect::SaveProfile {
                id: 23,
                name: "Kim O.".to_string(),
                phone: "555-0142".to_string(),
            }]
        );
    }

    #[test]
    fn password_panel_validates_confirmation() {
        let session = signed_in();
        let mut screen = ProfileScreen::new(&session);
        screen.focus = 2;
        screen.current_password.set_value("old-secret");
        screen.new_password.set_value("longenough1");
        screen.confirm_new_password.set_value("different1");

        let effects = handle_key(&mut screen, &session, false, false, press(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(screen.password_error.is_some());
        assert!(screen.details_error.is_none());
    }

    #[test]
    fn busy_panel_ignores_enter() {
        let session = signed_in();
        let mut screen = ProfileScreen::new(&session);

        let effects = handle_key(&mut screen, &session, true, false, press(KeyCode::Enter));
        assert!(effects.is_empty());
    }
}
