//! Portal reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects. Session mutations always apply;
//! results owned by a view are dropped when the visitor has navigated away.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info, warn};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::{AdminOutcome, ProfileSaveOutcome, RatingOutcome, Submission, UiEvent};
use crate::features::admin::AdminData;
use crate::features::auth::LoginForm;
use crate::features::{admin, auth, contact, profile, query, rating};
use crate::guard::{self, RouteDecision};
use crate::overlays::{NavPaletteState, Overlay, PaletteAction};
use crate::routes::{ALL_ROUTES, Route};
use crate::state::{AppState, Screen, StatusMessage};

/// The main reducer function.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(state, term_event),

        UiEvent::TaskStarted { kind, started } => {
            state.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = state.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(state, *completed.result)
            } else {
                debug!(?kind, "dropping stale task completion");
                vec![]
            }
        }

        UiEvent::SessionChecked { identity } => {
            state.session.complete_initial_check(identity);
            info!(
                authenticated = state.session.is_authenticated(),
                "session check resolved"
            );
            match state.pending_route.take() {
                Some(route) => navigate(state, route),
                None => vec![],
            }
        }

        UiEvent::LoginComplete { outcome } => match outcome {
            Ok(identity) => {
                let name = identity.name.clone();
                state.session.set_identity(identity);
                state.status = Some(StatusMessage::info(format!("Signed in as {name}.")));
                navigate(state, Route::Home)
            }
            Err(message) => {
                if let Screen::Login(form) = &mut state.screen {
                    form.error = Some(message);
                    form.notice = None;
                }
                vec![]
            }
        },

        UiEvent::RegisterComplete { outcome } => match outcome {
            Submission::Accepted(message) => {
                state.route = Route::Login;
                state.screen = Screen::Login(LoginForm::with_notice(&message));
                vec![]
            }
            Submission::Rejected(message) => {
                if let Screen::Register(form) = &mut state.screen {
                    form.error = Some(message);
                }
                vec![]
            }
            Submission::Unauthorized => expire_session(state),
        },

        UiEvent::LogoutComplete { backend_ok } => {
            if !backend_ok {
                warn!("logout call failed; clearing session locally anyway");
            }
            state.session.clear();
            state.status = Some(StatusMessage::info("Signed out."));
            navigate(state, Route::Home)
        }

        UiEvent::ProfileSaved { outcome } => match outcome {
            ProfileSaveOutcome::Saved { identity, message } => {
                state.session.update_identity(identity);
                if let Screen::Profile(screen) = &mut state.screen {
                    screen.details_notice = Some(message);
                }
                vec![]
            }
            ProfileSaveOutcome::Rejected(message) => {
                if let Screen::Profile(screen) = &mut state.screen {
                    screen.details_error = Some(message);
                }
                vec![]
            }
            ProfileSaveOutcome::Unauthorized => expire_session(state),
        },

        UiEvent::PasswordChanged { outcome } => match outcome {
            Submission::Accepted(message) => {
                if let Screen::Profile(screen) = &mut state.screen {
                    screen.password_notice = Some(message);
                    screen.current_password.clear();
                    screen.new_password.clear();
                    screen.confirm_new_password.clear();
                }
                vec![]
            }
            Submission::Rejected(message) => {
                if let Screen::Profile(screen) = &mut state.screen {
                    screen.password_error = Some(message);
                }
                vec![]
            }
            Submission::Unauthorized => expire_session(state),
        },

        UiEvent::ContactDelivered { outcome } => match outcome {
            Submission::Accepted(message) => {
                if let Screen::Contact(form) = &mut state.screen {
                    form.notice = Some(message);
                    form.message.clear();
                }
                vec![]
            }
            Submission::Rejected(message) => {
                if let Screen::Contact(form) = &mut state.screen {
                    form.error = Some(message);
                }
                vec![]
            }
            Submission::Unauthorized => expire_session(state),
        },

        UiEvent::QueryDelivered { outcome } => match outcome {
            Submission::Accepted(message) => {
                if let Screen::Query(form) = &mut state.screen {
                    form.notice = Some(message);
                    form.subject.clear();
                    form.message.clear();
                    form.focus = 0;
                }
                vec![]
            }
            Submission::Rejected(message) => {
                if let Screen::Query(form) = &mut state.screen {
                    form.error = Some(message);
                }
                vec![]
            }
            Submission::Unauthorized => expire_session(state),
        },

        UiEvent::RatingDelivered { outcome } => match outcome {
            RatingOutcome::Accepted(message) => {
                if let Screen::Rating(form) = &mut state.screen {
                    form.already_rated = true;
                    form.notice = Some(message);
                }
                vec![]
            }
            RatingOutcome::AlreadyRated(message) => {
                if let Screen::Rating(form) = &mut state.screen {
                    form.already_rated = true;
                    form.notice = Some(message);
                }
                vec![]
            }
            RatingOutcome::Rejected(message) => {
                if let Screen::Rating(form) = &mut state.screen {
                    form.error = Some(message);
                }
                vec![]
            }
            RatingOutcome::Unauthorized => expire_session(state),
        },

        UiEvent::AdminDashboardLoaded { outcome } => {
            if let AdminOutcome::Unauthorized = outcome {
                return expire_session(state);
            }
            if let Screen::Admin(screen) = &mut state.screen {
                match outcome {
                    AdminOutcome::Loaded { users, queries } => {
                        screen.data = AdminData::Ready { users, queries };
                        screen.clamp_selection();
                    }
                    AdminOutcome::Denied => screen.data = AdminData::Denied,
                    AdminOutcome::Rejected(message) => screen.data = AdminData::Failed(message),
                    AdminOutcome::Unauthorized => {}
                }
            }
            vec![]
        }

        UiEvent::ResetLinkSent { outcome } => match outcome {
            Submission::Accepted(message) => {
                if let Screen::Forgot(form) = &mut state.screen {
                    form.notice = Some(message);
                }
                vec![]
            }
            Submission::Rejected(message) => {
                if let Screen::Forgot(form) = &mut state.screen {
                    form.error = Some(message);
                }
                vec![]
            }
            Submission::Unauthorized => expire_session(state),
        },

        UiEvent::PasswordResetComplete { outcome } => match outcome {
            Submission::Accepted(message) => {
                state.route = Route::Login;
                state.screen = Screen::Login(LoginForm::with_notice(&message));
                vec![]
            }
            Submission::Rejected(message) => {
                if let Screen::Reset(form) = &mut state.screen {
                    form.error = Some(message);
                }
                vec![]
            }
            Submission::Unauthorized => expire_session(state),
        },
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// Navigates to `route`, consulting the guard.
///
/// Redirect targets are always public, so the loop settles in at most two
/// steps. Entering the admin route is the only navigation with a side
/// effect, and only on `Allow`.
pub fn navigate(state: &mut AppState, route: Route) -> Vec<UiEffect> {
    let mut destination = route;
    loop {
        match guard::decide(&state.session, destination) {
            RouteDecision::Pending => {
                debug!(path = destination.path(), "navigation pending boot check");
                state.pending_route = Some(destination);
                return vec![];
            }
            RouteDecision::Redirect(target) => {
                debug!(
                    from = destination.path(),
                    to = target.path(),
                    "guard redirect"
                );
                destination = target;
            }
            RouteDecision::Allow => {
                state.pending_route = None;
                state.route = destination;
                state.screen = Screen::for_route(destination, &state.session);
                state.overlay = None;
                if destination == Route::Admin {
                    return vec![UiEffect::LoadAdminDashboard];
                }
                return vec![];
            }
        }
    }
}

/// A protected call came back 401: the stored session is no longer valid.
fn expire_session(state: &mut AppState) -> Vec<UiEffect> {
    warn!("session rejected by backend; clearing");
    state.session.clear();
    state.status = Some(StatusMessage::error(
        "Your session has expired. Please sign in again.",
    ));
    navigate(state, Route::Login)
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(state: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            handle_key(state, key)
        }
        Event::Paste(text) => {
            handle_paste(state, &text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // The palette swallows everything while open.
    if let Some(Overlay::NavPalette(palette)) = &mut state.overlay {
        return match palette.handle_key(&state.session, key) {
            PaletteAction::Stay => vec![],
            PaletteAction::Close => {
                state.overlay = None;
                vec![]
            }
            PaletteAction::Navigate(route) => {
                state.overlay = None;
                navigate(state, route)
            }
        };
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl {
        match key.code {
            KeyCode::Char('c') => return vec![UiEffect::Quit],
            KeyCode::Char('k') => {
                state.overlay = Some(Overlay::NavPalette(NavPaletteState::open()));
                return vec![];
            }
            KeyCode::Char('o') => {
                if state.session.is_authenticated()
                    && !state.tasks.state(TaskKind::Logout).is_running()
                {
                    return vec![UiEffect::SubmitLogout];
                }
                return vec![];
            }
            _ => {}
        }
    }

    // The admin screen gets first shot so its filter can claim Esc.
    if let Screen::Admin(screen) = &mut state.screen {
        let (effects, consumed) = admin::update::handle_key(screen, key);
        if consumed {
            return effects;
        }
    }

    if key.code == KeyCode::Esc {
        return if state.route == Route::Home {
            vec![]
        } else {
            navigate(state, Route::Home)
        };
    }

    if !state.screen.captures_text() {
        return handle_browse_key(state, key);
    }

    let tasks = &state.tasks;
    match &mut state.screen {
        Screen::Login(form) => {
            auth::update::handle_login_key(form, tasks.state(TaskKind::Login).is_running(), key)
        }
        Screen::Register(form) => auth::update::handle_register_key(
            form,
            tasks.state(TaskKind::Register).is_running(),
            key,
        ),
        Screen::Forgot(form) => auth::update::handle_forgot_key(
            form,
            tasks.state(TaskKind::ForgotPassword).is_running(),
            key,
        ),
        Screen::Reset(form) => auth::update::handle_reset_key(
            form,
            tasks.state(TaskKind::ResetPassword).is_running(),
            key,
        ),
        Screen::Contact(form) => {
            contact::handle_key(form, tasks.state(TaskKind::Contact).is_running(), key)
        }
        Screen::Query(form) => query::handle_key(
            form,
            &state.session,
            tasks.state(TaskKind::Query).is_running(),
            key,
        ),
        Screen::Rating(form) => {
            rating::handle_key(form, tasks.state(TaskKind::Rating).is_running(), key)
        }
        Screen::Profile(screen) => profile::update::handle_key(
            screen,
            &state.session,
            tasks.state(TaskKind::ProfileSave).is_running(),
            tasks.state(TaskKind::PasswordChange).is_running(),
            key,
        ),
        Screen::Home
        | Screen::About
        | Screen::Privacy
        | Screen::Terms
        | Screen::Social(_)
        | Screen::Admin(_) => vec![],
    }
}

/// Plain-letter navigation on screens that don't capture text.
fn handle_browse_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Char(ch) => {
            for route in ALL_ROUTES {
                if route.browse_key() == Some(ch) {
                    return navigate(state, *route);
                }
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_paste(state: &mut AppState, text: &str) {
    if let Some(Overlay::NavPalette(palette)) = &mut state.overlay {
        palette
            .filter
            .push_str(&text.replace(['\n', '\r'], ""));
        return;
    }
    match &mut state.screen {
        Screen::Login(form) => form.field_mut(form.focus).insert_str(text),
        Screen::Register(form) => form.field_mut(form.focus).insert_str(text),
        Screen::Forgot(form) => form.email.insert_str(text),
        Screen::Reset(form) => form.field_mut(form.focus).insert_str(text),
        Screen::Contact(form) => form.field_mut(form.focus).insert_str(text),
        Screen::Query(form) => form.field_mut(form.focus).insert_str(text),
        Screen::Rating(form) => {
            if form.focus == 1 {
                form.message.insert_str(text);
            }
        }
        Screen::Profile(screen) => screen.field_mut(screen.focus).insert_str(text),
        Screen::Admin(screen) => {
            if screen.filter_focused {
                screen.filter.insert_str(text);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use meridian_core::config::Config;
    use meridian_core::session::{Identity, Role};

    use super::*;
    use crate::common::{TaskId, TaskStarted};
    use crate::events::TaskCompleted;

    fn app() -> AppState {
        AppState::new(Config::default())
    }

    fn identity(role: Role) -> Identity {
        Identity {
            id: 5,
            name: "Kim Osei".to_string(),
            email: "kim@example.com".to_string(),
            phone: None,
            role,
        }
    }

    fn booted(role: Option<Role>) -> AppState {
        let mut state = app();
        update(
            &mut state,
            UiEvent::SessionChecked {
                identity: role.map(identity),
            },
        );
        state
    }

    #[test]
    fn protected_navigation_waits_for_the_boot_check() {
        let mut state = app();
        let effects = navigate(&mut state, Route::Profile);
        assert!(effects.is_empty());
        assert_eq!(state.pending_route, Some(Route::Profile));
        // Still on the previous (home) screen underneath the loader.
        assert!(matches!(state.screen, Screen::Home));
    }

    #[test]
    fn boot_check_resolves_the_pending_destination() {
        let mut state = app();
        navigate(&mut state, Route::Profile);

        update(
            &mut state,
            UiEvent::SessionChecked {
                identity: Some(identity(Role::Regular)),
            },
        );
        assert_eq!(state.pending_route, None);
        assert_eq!(state.route, Route::Profile);
        assert!(matches!(state.screen, Screen::Profile(_)));
    }

    #[test]
    fn anonymous_boot_redirects_the_pending_destination_to_login() {
        let mut state = app();
        navigate(&mut state, Route::Profile);

        update(&mut state, UiEvent::SessionChecked { identity: None });
        assert_eq!(state.route, Route::Login);
        assert!(matches!(state.screen, Screen::Login(_)));
    }

    #[test]
    fn regular_member_is_bounced_off_admin_without_a_fetch() {
        let mut state = booted(Some(Role::Regular));
        let effects = navigate(&mut state, Route::Admin);
        assert!(effects.is_empty());
        assert_eq!(state.route, Route::Home);
    }

    #[test]
    fn admin_navigation_fetches_the_dashboard() {
        let mut state = booted(Some(Role::Admin));
        let effects = navigate(&mut state, Route::Admin);
        assert_eq!(effects, vec![UiEffect::LoadAdminDashboard]);
        assert!(matches!(state.screen, Screen::Admin(_)));
    }

    #[test]
    fn login_failure_shows_inline_and_stays_put() {
        let mut state = booted(None);
        navigate(&mut state, Route::Login);

        let effects = update(
            &mut state,
            UiEvent::LoginComplete {
                outcome: Err("Invalid credentials".to_string()),
            },
        );
        assert!(effects.is_empty());
        assert!(!state.session.is_authenticated());
        assert_eq!(state.route, Route::Login);
        match &state.screen {
            Screen::Login(form) => {
                assert_eq!(form.error.as_deref(), Some("Invalid credentials"));
            }
            other => panic!("expected login screen, got {other:?}"),
        }
    }

    #[test]
    fn login_success_installs_the_identity_and_goes_home() {
        let mut state = booted(None);
        navigate(&mut state, Route::Login);

        update(
            &mut state,
            UiEvent::LoginComplete {
                outcome: Ok(identity(Role::Regular)),
            },
        );
        assert!(state.session.is_authenticated());
        assert_eq!(state.route, Route::Home);
    }

    #[test]
    fn logout_clears_the_session_even_when_the_call_failed() {
        let mut state = booted(Some(Role::Regular));

        update(&mut state, UiEvent::LogoutComplete { backend_ok: false });
        assert!(!state.session.is_authenticated());
        assert_eq!(state.route, Route::Home);

        // The next protected navigation redirects to login.
        navigate(&mut state, Route::Profile);
        assert_eq!(state.route, Route::Login);
    }

    #[test]
    fn duplicate_session_check_leaves_identity_alone() {
        let mut state = booted(Some(Role::Admin));
        update(
            &mut state,
            UiEvent::SessionChecked {
                identity: Some(identity(Role::Admin)),
            },
        );
        assert_eq!(state.session.role(), Some(Role::Admin));
    }

    #[test]
    fn unauthorized_profile_save_expires_the_session() {
        let mut state = booted(Some(Role::Regular));
        navigate(&mut state, Route::Profile);

        update(
            &mut state,
            UiEvent::ProfileSaved {
                outcome: ProfileSaveOutcome::Unauthorized,
            },
        );
        assert!(!state.session.is_authenticated());
        assert_eq!(state.route, Route::Login);
    }

    #[test]
    fn stale_task_completions_are_dropped() {
        let mut state = booted(None);
        state
            .tasks
            .state_mut(TaskKind::Login)
            .on_started(&TaskStarted { id: TaskId(7) });

        update(
            &mut state,
            UiEvent::TaskCompleted {
                kind: TaskKind::Login,
                completed: TaskCompleted {
                    id: TaskId(3),
                    result: Box::new(UiEvent::LoginComplete {
                        outcome: Ok(identity(Role::Regular)),
                    }),
                },
            },
        );
        // The stale login result never touched the session.
        assert!(!state.session.is_authenticated());
        assert!(state.tasks.state(TaskKind::Login).is_running());
    }

    #[test]
    fn rating_conflict_renders_as_already_rated() {
        let mut state = booted(Some(Role::Regular));
        navigate(&mut state, Route::Rating);

        update(
            &mut state,
            UiEvent::RatingDelivered {
                outcome: RatingOutcome::AlreadyRated("Already submitted.".to_string()),
            },
        );
        match &state.screen {
            Screen::Rating(form) => assert!(form.already_rated),
            other => panic!("expected rating screen, got {other:?}"),
        }
    }

    #[test]
    fn admin_403_renders_in_place_instead_of_redirecting() {
        let mut state = booted(Some(Role::Admin));
        navigate(&mut state, Route::Admin);

        update(
            &mut state,
            UiEvent::AdminDashboardLoaded {
                outcome: AdminOutcome::Denied,
            },
        );
        assert_eq!(state.route, Route::Admin);
        match &state.screen {
            Screen::Admin(screen) => assert!(matches!(screen.data, AdminData::Denied)),
            other => panic!("expected admin screen, got {other:?}"),
        }
    }

    #[test]
    fn results_for_an_abandoned_view_are_discarded() {
        let mut state = booted(Some(Role::Regular));
        navigate(&mut state, Route::Contact);
        navigate(&mut state, Route::Home);

        let effects = update(
            &mut state,
            UiEvent::ContactDelivered {
                outcome: Submission::Accepted("Thanks!".to_string()),
            },
        );
        assert!(effects.is_empty());
        assert!(matches!(state.screen, Screen::Home));
    }

    #[test]
    fn unmatched_path_lands_on_home() {
        let mut state = booted(None);
        let route = Route::parse("/definitely-not-a-page");
        navigate(&mut state, route);
        assert_eq!(state.route, Route::Home);
    }
}
