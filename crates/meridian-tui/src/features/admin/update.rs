//! Admin dashboard reducer.

use crossterm::event::{KeyCode, KeyEvent};

use super::state::{AdminData, AdminScreen, AdminTab};
use crate::common::field_input;
use crate::effects::UiEffect;

/// Handles a key on the dashboard.
///
/// Returns the effects to run plus whether the key was consumed; an
/// unconsumed key falls through to the global handler (so Esc backs out of
/// the filter before it backs out of the screen).
pub fn handle_key(screen: &mut AdminScreen, key: KeyEvent) -> (Vec<UiEffect>, bool) {
    if screen.filter_focused {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                screen.filter_focused = false;
            }
            _ => {
                field_input(&mut screen.filter, key);
                screen.clamp_selection();
            }
        }
        return (vec![], true);
    }

    match key.code {
        KeyCode::Char('/') => {
            screen.filter_focused = true;
            (vec![], true)
        }
        KeyCode::Left | KeyCode::Char('u') => {
            screen.tab = AdminTab::Users;
            screen.clamp_selection();
            (vec![], true)
        }
        KeyCode::Right | KeyCode::Char('i') => {
            screen.tab = AdminTab::Inquiries;
            screen.clamp_selection();
            (vec![], true)
        }
        KeyCode::Up => {
            screen.selected = screen.selected.saturating_sub(1);
            (vec![], true)
        }
        KeyCode::Down => {
            screen.selected += 1;
            screen.clamp_selection();
            (vec![], true)
        }
        KeyCode::Char('s') if screen.tab == AdminTab::Users => {
            screen.sort = screen.sort.next();
            (vec![], true)
        }
        KeyCode::Char('R') => {
            // Manual refresh; the guard already admitted us to this screen.
            screen.data = AdminData::Loading;
            screen.selected = 0;
            (vec![UiEffect::LoadAdminDashboard], true)
        }
        _ => (vec![], false),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn slash_focuses_the_filter_and_esc_releases_it() {
        let mut screen = AdminScreen::new();
        let (_, consumed) = handle_key(&mut screen, press(KeyCode::Char('/')));
        assert!(consumed);
        assert!(screen.filter_focused);

        let (_, consumed) = handle_key(&mut screen, press(KeyCode::Esc));
        assert!(consumed);
        assert!(!screen.filter_focused);
    }

    #[test]
    fn typing_goes_to_the_filter_while_focused() {
        let mut screen = AdminScreen::new();
        handle_key(&mut screen, press(KeyCode::Char('/')));
        handle_key(&mut screen, press(KeyCode::Char('a')));
        handle_key(&mut screen, press(KeyCode::Char('n')));
        assert_eq!(screen.filter.value(), "an");
    }

    #[test]
    fn refresh_reloads_the_dashboard() {
        let mut screen = AdminScreen::new();
        let (effects, _) = handle_key(&mut screen, press(KeyCode::Char('R')));
        assert_eq!(effects, vec![UiEffect::LoadAdminDashboard]);
        assert!(matches!(screen.data, AdminData::Loading));
    }

    #[test]
    fn unhandled_keys_bubble_up() {
        let mut screen = AdminScreen::new();
        let (effects, consumed) = handle_key(&mut screen, press(KeyCode::Esc));
        assert!(effects.is_empty());
        assert!(!consumed);
    }
}
