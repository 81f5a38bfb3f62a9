//! Portal runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! Async results arrive through a single inbox channel: handlers send
//! `UiEvent`s to `inbox_tx`, and the loop drains `inbox_rx` each frame.

mod handlers;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event;
use meridian_core::api::ApiClient;
use meridian_core::config::Config;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::common::{TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::{TaskCompleted, UiEvent};
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame interval while something is animating (60fps).
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU when nothing moves.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

/// Full-screen portal runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop, panic,
/// or Ctrl+C.
pub struct PortalRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    api: Arc<ApiClient>,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    last_tick: std::time::Instant,
    last_terminal_event: std::time::Instant,
}

impl PortalRuntime {
    pub fn new(config: Config) -> Result<Self> {
        let api = Arc::new(ApiClient::new(&config).context("Failed to create API client")?);

        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(config);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = std::time::Instant::now();
        Ok(Self {
            terminal,
            state,
            api,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Navigates before the event loop starts (used by `--open`).
    ///
    /// A protected destination lands in the guard's pending state until the
    /// boot check resolves.
    pub fn open(&mut self, route: crate::routes::Route) {
        let effects = update::navigate(&mut self.state, route);
        self.execute_effects(effects);
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        // The one-time boot check; `loading_complete` stays false until it
        // resolves and the guard renders loaders for protected destinations.
        self.execute_effect(UiEffect::CheckSession);

        let result = self.event_loop();

        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = std::time::Instant::now();
                }

                // Only Tick triggers render - this caps frame rate at tick
                // cadence; input events batch renders to the next Tick.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast cadence while calls are in flight, an overlay is animating,
        // or the visitor is actively typing; slow poll otherwise.
        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.tasks.is_any_running()
            || self.state.pending_route.is_some()
            || recent_terminal_activity;
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain the inbox - all async results arrive here.
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async handler under the task lifecycle for `kind`.
    ///
    /// Skipped if a task of that kind is already in flight - the submitting
    /// control is disabled while a call is outstanding, and this backstops
    /// the same rule at the spawn boundary.
    fn spawn_task<F>(&mut self, kind: TaskKind, fut: F)
    where
        F: Future<Output = UiEvent> + Send + 'static,
    {
        if self.state.tasks.state(kind).is_running() {
            return;
        }
        let id = self.state.task_seq.next_id();
        let tx = self.inbox_tx.clone();
        let _ = tx.send(UiEvent::TaskStarted {
            kind,
            started: TaskStarted { id },
        });
        tokio::spawn(async move {
            let result = fut.await;
            let _ = tx.send(UiEvent::TaskCompleted {
                kind,
                completed: TaskCompleted {
                    id,
                    result: Box::new(result),
                },
            });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        let api = Arc::clone(&self.api);
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }

            UiEffect::CheckSession => {
                self.spawn_task(TaskKind::SessionCheck, handlers::check_session(api));
            }

            UiEffect::SubmitLogin { email, password } => {
                self.spawn_task(TaskKind::Login, handlers::login(api, email, password));
            }

            UiEffect::SubmitRegistration {
                name,
                email,
                password,
                confirm_password,
                phone,
            } => {
                self.spawn_task(
                    TaskKind::Register,
                    handlers::register(api, name, email, password, confirm_password, phone),
                );
            }

            UiEffect::SubmitLogout => {
                self.spawn_task(TaskKind::Logout, handlers::logout(api));
            }

            UiEffect::SaveProfile { id, name, phone } => {
                self.spawn_task(
                    TaskKind::ProfileSave,
                    handlers::save_profile(api, id, name, phone),
                );
            }

            UiEffect::SubmitPasswordChange {
                current_password,
                new_password,
                confirm_new_password,
            } => {
                self.spawn_task(
                    TaskKind::PasswordChange,
                    handlers::change_password(api, current_password, new_password, confirm_new_password),
                );
            }

            UiEffect::SendContact {
                name,
                email,
                message,
            } => {
                self.spawn_task(
                    TaskKind::Contact,
                    handlers::send_contact(api, name, email, message),
                );
            }

            UiEffect::SendQuery {
                user_id,
                name,
                email,
                subject,
                message,
            } => {
                self.spawn_task(
                    TaskKind::Query,
                    handlers::send_query(api, user_id, name, email, subject, message),
                );
            }

            UiEffect::SendRating { rating, message } => {
                self.spawn_task(TaskKind::Rating, handlers::send_rating(api, rating, message));
            }

            UiEffect::LoadAdminDashboard => {
                self.spawn_task(TaskKind::AdminFetch, handlers::load_admin_dashboard(api));
            }

            UiEffect::RequestResetLink { email } => {
                self.spawn_task(
                    TaskKind::ForgotPassword,
                    handlers::request_reset_link(api, email),
                );
            }

            UiEffect::SubmitPasswordReset {
                token,
                password,
                confirm_password,
            } => {
                self.spawn_task(
                    TaskKind::ResetPassword,
                    handlers::reset_password(api, token, password, confirm_password),
                );
            }
        }
    }
}

impl Drop for PortalRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
