//! Quick-navigation palette (Ctrl+K).
//!
//! A filterable list of every destination. Enter navigates, Esc closes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use meridian_core::session::Session;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::routes::{ALL_ROUTES, Route};

/// What the palette asks the reducer to do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteAction {
    Stay,
    Close,
    Navigate(Route),
}

#[derive(Debug, Clone)]
pub struct NavPaletteState {
    pub filter: String,
    pub selected: usize,
}

impl NavPaletteState {
    pub fn open() -> Self {
        Self {
            filter: String::new(),
            selected: 0,
        }
    }

    /// Routes matching the filter. The admin entry is hidden from visitors
    /// the guard would bounce anyway; the guard still decides on Enter.
    pub fn filtered_routes(&self, session: &Session) -> Vec<Route> {
        let needle = self.filter.to_lowercase();
        ALL_ROUTES
            .iter()
            .copied()
            .filter(|route| {
                if route.requires_admin() && !session.role().is_some_and(|role| role.is_admin()) {
                    return false;
                }
                needle.is_empty()
                    || route.title().to_lowercase().contains(&needle)
                    || route.path().contains(&needle)
            })
            .collect()
    }

    pub fn handle_key(&mut self, session: &Session, key: KeyEvent) -> PaletteAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => PaletteAction::Close,
            KeyCode::Char('c') if ctrl => PaletteAction::Close,
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                PaletteAction::Stay
            }
            KeyCode::Down => {
                let count = self.filtered_routes(session).len();
                if count > 0 && self.selected < count - 1 {
                    self.selected += 1;
                }
                PaletteAction::Stay
            }
            KeyCode::Enter => {
                match self.filtered_routes(session).get(self.selected) {
                    Some(route) => PaletteAction::Navigate(*route),
                    None => PaletteAction::Close,
                }
            }
            KeyCode::Backspace => {
                self.filter.pop();
                self.clamp_selection(session);
                PaletteAction::Stay
            }
            KeyCode::Char(ch) if !ctrl => {
                self.filter.push(ch);
                self.clamp_selection(session);
                PaletteAction::Stay
            }
            _ => PaletteAction::Stay,
        }
    }

    fn clamp_selection(&mut self, session: &Session) {
        let count = self.filtered_routes(session).len();
        self.selected = if count == 0 {
            0
        } else {
            self.selected.min(count - 1)
        };
    }

    pub fn render(&self, frame: &mut Frame, session: &Session, area: Rect) {
        let width = 44.min(area.width.saturating_sub(2));
        let height = 16.min(area.height.saturating_sub(2));
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 3,
            width,
            height,
        };

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Go to ");
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let filter_line = Line::from(vec![
            Span::styled("› ", Style::default().fg(Color::Cyan)),
            Span::styled(self.filter.clone(), Style::default().fg(Color::White)),
            Span::styled("▏", Style::default().fg(Color::DarkGray)),
        ]);
        let filter_area = Rect { height: 1, ..inner };
        frame.render_widget(Paragraph::new(filter_line), filter_area);

        let list_area = Rect {
            x: inner.x,
            y: inner.y + 1,
            width: inner.width,
            height: inner.height.saturating_sub(1),
        };
        let items: Vec<ListItem> = self
            .filtered_routes(session)
            .iter()
            .map(|route| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<20}", route.title()),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(route.path(), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();
        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        let list = List::new(items).highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_stateful_widget(list, list_area, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use meridian_core::session::{Identity, Role};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn session_with(role: Option<Role>) -> Session {
        let mut session = Session::new();
        session.complete_initial_check(role.map(|role| Identity {
            id: 1,
            name: "A".to_string(),
            email: "a@x.io".to_string(),
            phone: None,
            role,
        }));
        session
    }

    #[test]
    fn filter_narrows_by_title_or_path() {
        let session = session_with(None);
        let mut palette = NavPaletteState::open();
        for ch in "priv".chars() {
            palette.handle_key(&session, press(KeyCode::Char(ch)));
        }
        assert_eq!(
            palette.filtered_routes(&session),
            vec![Route::PrivacyPolicy]
        );
    }

    #[test]
    fn admin_entry_is_hidden_from_non_admins() {
        let session = session_with(Some(Role::Regular));
        let palette = NavPaletteState::open();
        assert!(!palette.filtered_routes(&session).contains(&Route::Admin));

        let session = session_with(Some(Role::Admin));
        assert!(palette.filtered_routes(&session).contains(&Route::Admin));
    }

    #[test]
    fn enter_navigates_to_the_selection() {
        let session = session_with(None);
        let mut palette = NavPaletteState::open();
        for ch in "contact".chars() {
            palette.handle_key(&session, press(KeyCode::Char(ch)));
        }
        assert_eq!(
            palette.handle_key(&session, press(KeyCode::Enter)),
            PaletteAction::Navigate(Route::Contact)
        );
    }

    #[test]
    fn empty_result_closes_on_enter() {
        let session = session_with(None);
        let mut palette = NavPaletteState::open();
        for ch in "zzzz".chars() {
            palette.handle_key(&session, press(KeyCode::Char(ch)));
        }
        assert_eq!(
            palette.handle_key(&session, press(KeyCode::Enter)),
            PaletteAction::Close
        );
    }
}
