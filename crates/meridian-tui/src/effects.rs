//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations), which
//! keeps the reducer pure enough to unit test: it mutates state and returns
//! effects, never performs I/O itself.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// The one-time boot session check.
    CheckSession,

    SubmitLogin {
        email: String,
        password: String,
    },

    SubmitRegistration {
        name: String,
        email: String,
        password: String,
        confirm_password: String,
        phone: String,
    },

    /// Logout round trip; the session is cleared on completion regardless
    /// of the call's outcome.
    SubmitLogout,

    SaveProfile {
        id: u64,
        name: String,
        phone: String,
    },

    SubmitPasswordChange {
        current_password: String,
        new_password: String,
        confirm_new_password: String,
    },

    SendContact {
        name: String,
        email: String,
        message: String,
    },

    SendQuery {
        user_id: u64,
        name: String,
        email: String,
        subject: String,
        message: String,
    },

    SendRating {
        rating: u8,
        message: String,
    },

    /// Fetch the admin dashboard arrays. Only ever emitted after the guard
    /// allowed the admin route.
    LoadAdminDashboard,

    RequestResetLink {
        email: String,
    },

    SubmitPasswordReset {
        token: String,
        password: String,
        confirm_password: String,
    },
}
