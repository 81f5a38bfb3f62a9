//! Sign-in, registration, and password-reset views.

pub mod render;
pub mod state;
pub mod update;

pub use state::{ForgotForm, LoginForm, RegisterForm, ResetForm};
