//! Auth view state: login, registration, and the password-reset pair.
//!
//! Each form owns only its local fields; nothing here survives a
//! navigation away.

use crate::common::TextField;

/// Sign-in form.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: TextField,
    pub password: TextField,
    pub focus: usize,
    /// Inline failure banner (validation or backend message).
    pub error: Option<String>,
    /// Inline success/info banner (e.g. "account created, sign in").
    pub notice: Option<String>,
}

impl LoginForm {
    pub const FIELDS: usize = 2;

    pub fn new() -> Self {
        Self {
            email: TextField::new("Email"),
            password: TextField::masked("Password"),
            focus: 0,
            error: None,
            notice: None,
        }
    }

    pub fn with_notice(notice: &str) -> Self {
        Self {
            notice: Some(notice.to_string()),
            ..Self::new()
        }
    }

    pub fn field_mut(&mut self, index: usize) -> &mut TextField {
        match index {
            0 => &mut self.email,
            _ => &mut self.password,
        }
    }
}

/// Account creation form.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: TextField,
    pub email: TextField,
    pub password: TextField,
    pub confirm_password: TextField,
    pub phone: TextField,
    pub focus: usize,
    pub error: Option<String>,
}

impl RegisterForm {
    pub const FIELDS: usize = 5;

    pub fn new() -> Self {
        Self {
            name: TextField::new("Full name"),
            email: TextField::new("Email"),
            password: TextField::masked("Password"),
            confirm_password: TextField::masked("Confirm password"),
            phone: TextField::new("Phone"),
            focus: 0,
            error: None,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> &mut TextField {
        match index {
            0 => &mut self.name,
            1 => &mut self.email,
            2 => &mut self.password,
            3 => &mut self.confirm_password,
            _ => &mut self.phone,
        }
    }
}

/// Request-a-reset-link form.
#[derive(Debug, Clone)]
pub struct ForgotForm {
    pub email: TextField,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl ForgotForm {
    pub fn new() -> Self {
        Self {
            email: TextField::new("Email"),
            error: None,
            notice: None,
        }
    }
}

/// Complete-a-reset form (token arrives out of band, e.g. by email).
#[derive(Debug, Clone)]
pub struct ResetForm {
    pub token: TextField,
    pub password: TextField,
    pub confirm_password: TextField,
    pub focus: usize,
    pub error: Option<String>,
}

impl ResetForm {
    pub const FIELDS: usize = 3;

    pub fn new() -> Self {
        Self {
            token: TextField::new("Reset token"),
            password: TextField::masked("New password"),
            confirm_password: TextField::masked("Confirm new password"),
            focus: 0,
            error: None,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> &mut TextField {
        match index {
            0 => &mut self.token,
            1 => &mut self.password,
            _ => &mut self.confirm_password,
        }
    }
}
