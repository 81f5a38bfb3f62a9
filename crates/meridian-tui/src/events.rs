//! UI event types.
//!
//! Everything the reducer can react to: terminal input, ticks, and the
//! results of async backend calls. Handlers map [`meridian_core::api::ApiError`]
//! into the plain outcome enums here, so the reducer (and its tests) never
//! touch transport types.

use meridian_core::api::types::{AdminUser, InquiryRecord};
use meridian_core::session::Identity;

use crate::common::{TaskId, TaskKind, TaskStarted};

/// Outcome of a form submission.
#[derive(Debug, Clone)]
pub enum Submission {
    /// Backend accepted; carries the display message.
    Accepted(String),
    /// Backend rejected (domain `success:false` or a 4xx); inline message.
    Rejected(String),
    /// The session credential was rejected on a protected endpoint.
    Unauthorized,
}

/// Outcome of a profile save (success replaces the stored identity).
#[derive(Debug, Clone)]
pub enum ProfileSaveOutcome {
    Saved {
        identity: Identity,
        message: String,
    },
    Rejected(String),
    Unauthorized,
}

/// Outcome of a rating submission; `409` is its own case.
#[derive(Debug, Clone)]
pub enum RatingOutcome {
    Accepted(String),
    AlreadyRated(String),
    Rejected(String),
    Unauthorized,
}

/// Outcome of the admin dashboard fetch; `403` renders in place.
#[derive(Debug, Clone)]
pub enum AdminOutcome {
    Loaded {
        users: Vec<AdminUser>,
        queries: Vec<InquiryRecord>,
    },
    Denied,
    Rejected(String),
    Unauthorized,
}

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic timer (spinner animation, render cadence).
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),

    /// An async task began; records the active id for its kind.
    TaskStarted { kind: TaskKind, started: TaskStarted },
    /// An async task finished; the inner event is dispatched only if the id
    /// is still the active one for its kind.
    TaskCompleted { kind: TaskKind, completed: TaskCompleted },

    /// The one-time boot check resolved. Any failure was swallowed into
    /// "no identity" by the handler.
    SessionChecked { identity: Option<Identity> },
    /// Login finished; `Err` carries the inline display message.
    LoginComplete { outcome: Result<Identity, String> },
    RegisterComplete { outcome: Submission },
    /// Logout finished. The session clears regardless; `backend_ok` is only
    /// logged.
    LogoutComplete { backend_ok: bool },
    ProfileSaved { outcome: ProfileSaveOutcome },
    PasswordChanged { outcome: Submission },
    ContactDelivered { outcome: Submission },
    QueryDelivered { outcome: Submission },
    RatingDelivered { outcome: RatingOutcome },
    AdminDashboardLoaded { outcome: AdminOutcome },
    ResetLinkSent { outcome: Submission },
    PasswordResetComplete { outcome: Submission },
}

#[derive(Debug)]
pub struct TaskCompleted {
    pub id: TaskId,
    pub result: Box<UiEvent>,
}
