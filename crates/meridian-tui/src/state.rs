//! Application state composition.
//!
//! One [`AppState`] per running portal:
//!
//! ```text
//! AppState
//! ├── session: Session           (who the visitor is, boot-check flag)
//! ├── route / screen             (current destination and its view state)
//! ├── pending_route              (guard Pending: destination awaiting boot)
//! ├── overlay: Option<Overlay>   (navigation palette)
//! ├── tasks: Tasks               (one slot per in-flight backend call)
//! └── status                     (transient footer message)
//! ```
//!
//! The reducer owns all mutation; render reads only.

use meridian_core::config::Config;
use meridian_core::session::Session;

use crate::common::{TaskSeq, Tasks};
use crate::features::admin::AdminScreen;
use crate::features::auth::{ForgotForm, LoginForm, RegisterForm, ResetForm};
use crate::features::contact::ContactForm;
use crate::features::profile::ProfileScreen;
use crate::features::query::QueryForm;
use crate::features::rating::RatingForm;
use crate::overlays::Overlay;
use crate::routes::{Route, SocialNetwork};

/// The view state behind the current route.
///
/// Forms own only their local fields; navigating away drops them.
#[derive(Debug)]
pub enum Screen {
    Home,
    About,
    Privacy,
    Terms,
    Social(SocialNetwork),
    Contact(ContactForm),
    Login(LoginForm),
    Register(RegisterForm),
    Forgot(ForgotForm),
    Reset(ResetForm),
    Profile(ProfileScreen),
    Query(QueryForm),
    Rating(RatingForm),
    Admin(AdminScreen),
}

impl Screen {
    /// Builds the fresh view state for an allowed destination.
    pub fn for_route(route: Route, session: &Session) -> Self {
        match route {
            Route::Home => Screen::Home,
            Route::About => Screen::About,
            Route::PrivacyPolicy => Screen::Privacy,
            Route::TermsOfService => Screen::Terms,
            Route::Social(network) => Screen::Social(network),
            Route::Contact => Screen::Contact(ContactForm::new(session)),
            Route::Login => Screen::Login(LoginForm::new()),
            Route::Register => Screen::Register(RegisterForm::new()),
            Route::ForgotPassword => Screen::Forgot(ForgotForm::new()),
            Route::ResetPassword => Screen::Reset(ResetForm::new()),
            Route::Profile => Screen::Profile(ProfileScreen::new(session)),
            Route::Query => Screen::Query(QueryForm::new()),
            Route::Rating => Screen::Rating(RatingForm::new()),
            Route::Admin => Screen::Admin(AdminScreen::new()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::Home => Route::Home,
            Screen::About => Route::About,
            Screen::Privacy => Route::PrivacyPolicy,
            Screen::Terms => Route::TermsOfService,
            Screen::Social(network) => Route::Social(*network),
            Screen::Contact(_) => Route::Contact,
            Screen::Login(_) => Route::Login,
            Screen::Register(_) => Route::Register,
            Screen::Forgot(_) => Route::ForgotPassword,
            Screen::Reset(_) => Route::ResetPassword,
            Screen::Profile(_) => Route::Profile,
            Screen::Query(_) => Route::Query,
            Screen::Rating(_) => Route::Rating,
            Screen::Admin(_) => Route::Admin,
        }
    }

    /// Whether plain character keys belong to this screen's fields
    /// (suppresses browse-key navigation).
    pub fn captures_text(&self) -> bool {
        matches!(
            self,
            Screen::Contact(_)
                | Screen::Login(_)
                | Screen::Register(_)
                | Screen::Forgot(_)
                | Screen::Reset(_)
                | Screen::Profile(_)
                | Screen::Query(_)
                | Screen::Rating(_)
        )
    }
}

/// Kind of the transient footer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Combined portal state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Single source of truth for "who is the current visitor".
    pub session: Session,
    /// The destination currently rendered.
    pub route: Route,
    /// View state for `route`.
    pub screen: Screen,
    /// A protected destination waiting for the boot check to resolve.
    /// While set, the body renders only the loading indicator.
    pub pending_route: Option<Route>,
    /// Active modal overlay, if any.
    pub overlay: Option<Overlay>,
    /// Async task lifecycle slots.
    pub tasks: Tasks,
    /// Task id sequence.
    pub task_seq: TaskSeq,
    /// Transient footer message.
    pub status: Option<StatusMessage>,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
    /// Loaded configuration (base address shown in the footer).
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            session: Session::new(),
            route: Route::Home,
            screen: Screen::Home,
            pending_route: None,
            overlay: None,
            tasks: Tasks::default(),
            task_seq: TaskSeq::default(),
            status: None,
            spinner_frame: 0,
            config,
        }
    }
}
