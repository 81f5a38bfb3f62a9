//! Pure view/render functions for the portal.
//!
//! Functions here take `&AppState` by immutable reference and draw to a
//! ratatui frame; they never mutate state or return effects. The body
//! dispatch enforces the render-gating rule: while a protected navigation is
//! pending the boot check, the body is exactly the loading indicator.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::TaskKind;
use crate::common::text::truncate_with_ellipsis;
use crate::features::{admin, auth, contact, home, pages, profile, query, rating};
use crate::overlays::Overlay;
use crate::state::{AppState, Screen, StatusKind};

/// Height of the header (brand + crumb).
const HEADER_HEIGHT: u16 = 2;

/// Height of the footer status line.
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for the loading indicator.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire portal to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(frame.area());

    render_header(state, frame, header_area);
    render_body(state, frame, body_area.inner(ratatui::layout::Margin {
        horizontal: 2,
        vertical: 1,
    }));
    render_status(state, frame, status_area);

    if let Some(Overlay::NavPalette(palette)) = &state.overlay {
        palette.render(frame, &state.session, frame.area());
    }
}

fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let visitor = match state.session.identity() {
        Some(identity) => format!("{} · {}", identity.name, identity.role.label()),
        None if state.session.loading_complete() => "guest".to_string(),
        None => "…".to_string(),
    };

    let brand = Line::from(vec![
        Span::styled(
            " MERIDIAN ADVISORY ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            truncate_with_ellipsis(&visitor, area.width.saturating_sub(22) as usize),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let destination = state.pending_route.unwrap_or(state.route);
    let crumb = Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(destination.path(), Style::default().fg(Color::DarkGray)),
        Span::styled(" — ", Style::default().fg(Color::DarkGray)),
        Span::styled(destination.title(), Style::default().fg(Color::White)),
    ]);

    frame.render_widget(Paragraph::new(vec![brand, crumb]), area);
}

fn render_body(state: &AppState, frame: &mut Frame, area: Rect) {
    // Render-gating: a pending protected navigation shows only the loader.
    // No redirect has happened and no protected content is on screen.
    if state.pending_route.is_some() {
        render_loading(state, frame, area);
        return;
    }

    match &state.screen {
        Screen::Home => home::render(frame, &state.session, area),
        Screen::About => pages::render_about(frame, area),
        Screen::Privacy => pages::render_privacy(frame, area),
        Screen::Terms => pages::render_terms(frame, area),
        Screen::Social(network) => pages::render_social(frame, *network, area),
        Screen::Contact(form) => contact::render(
            frame,
            form,
            state.tasks.state(TaskKind::Contact).is_running(),
            area,
        ),
        Screen::Login(form) => auth::render::render_login(
            frame,
            form,
            state.tasks.state(TaskKind::Login).is_running(),
            area,
        ),
        Screen::Register(form) => auth::render::render_register(
            frame,
            form,
            state.tasks.state(TaskKind::Register).is_running(),
            area,
        ),
        Screen::Forgot(form) => auth::render::render_forgot(
            frame,
            form,
            state.tasks.state(TaskKind::ForgotPassword).is_running(),
            area,
        ),
        Screen::Reset(form) => auth::render::render_reset(
            frame,
            form,
            state.tasks.state(TaskKind::ResetPassword).is_running(),
            area,
        ),
        Screen::Profile(screen) => profile::render::render(
            frame,
            screen,
            &state.session,
            state.tasks.state(TaskKind::ProfileSave).is_running(),
            state.tasks.state(TaskKind::PasswordChange).is_running(),
            area,
        ),
        Screen::Query(form) => query::render(
            frame,
            form,
            state.tasks.state(TaskKind::Query).is_running(),
            area,
        ),
        Screen::Rating(form) => rating::render(
            frame,
            form,
            state.tasks.state(TaskKind::Rating).is_running(),
            area,
        ),
        Screen::Admin(screen) => admin::render::render(frame, screen, area),
    }
}

fn render_loading(state: &AppState, frame: &mut Frame, area: Rect) {
    let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{spinner} Checking your session…"),
            Style::default().fg(Color::Yellow),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(state: &AppState, frame: &mut Frame, area: Rect) {
    let line = match &state.status {
        Some(message) => {
            let style = match message.kind {
                StatusKind::Info => Style::default().fg(Color::Green),
                StatusKind::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(format!(" {}", message.text), style))
        }
        None => Line::from(Span::styled(
            format!(
                " Ctrl+K go anywhere · Esc home · Ctrl+C quit · {}",
                state.config.base_url
            ),
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use meridian_core::config::Config;
    use meridian_core::session::{Identity, Role};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::events::UiEvent;
    use crate::routes::Route;
    use crate::update::{navigate, update};

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(state, frame)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn pending_protected_route_renders_only_the_loader() {
        let mut state = AppState::new(Config::default());
        navigate(&mut state, Route::Profile);

        let text = draw(&state);
        assert!(text.contains("Checking your session"));
        assert!(!text.contains("Your Profile"));
        assert!(!text.contains("Sign in to Meridian"));
    }

    #[test]
    fn resolved_regular_session_renders_the_profile() {
        let mut state = AppState::new(Config::default());
        navigate(&mut state, Route::Profile);
        update(
            &mut state,
            UiEvent::SessionChecked {
                identity: Some(Identity {
                    id: 9,
                    name: "Kim Osei".to_string(),
                    email: "kim@example.com".to_string(),
                    phone: None,
                    role: Role::Regular,
                }),
            },
        );

        let text = draw(&state);
        assert!(text.contains("Your Profile"));
        assert!(!text.contains("Checking your session"));
    }

    #[test]
    fn anonymous_resolution_renders_the_login_view() {
        let mut state = AppState::new(Config::default());
        navigate(&mut state, Route::Profile);
        update(&mut state, UiEvent::SessionChecked { identity: None });

        let text = draw(&state);
        assert!(text.contains("Sign in to Meridian Advisory"));
    }
}
