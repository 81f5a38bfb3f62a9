//! Profile view state: account details panel plus change-password panel.

use meridian_core::session::Session;

use crate::common::TextField;

/// Which panel a focus index belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilePanel {
    Details,
    Password,
}

#[derive(Debug, Clone)]
pub struct ProfileScreen {
    pub name: TextField,
    pub phone: TextField,
    pub current_password: TextField,
    pub new_password: TextField,
    pub confirm_new_password: TextField,
    /// 0..2 details panel, 2..5 password panel.
    pub focus: usize,
    pub details_error: Option<String>,
    pub details_notice: Option<String>,
    pub password_error: Option<String>,
    pub password_notice: Option<String>,
}

impl ProfileScreen {
    pub const FIELDS: usize = 5;

    pub fn new(session: &Session) -> Self {
        let (name, phone) = match session.identity() {
            Some(identity) => (
                identity.name.as_str(),
                identity.phone.as_deref().unwrap_or(""),
            ),
            None => ("", ""),
        };
        Self {
            name: TextField::with_value("Full name", name),
            phone: TextField::with_value("Phone", phone),
            current_password: TextField::masked("Current password"),
            new_password: TextField::masked("New password"),
            confirm_new_password: TextField::masked("Confirm new password"),
            focus: 0,
            details_error: None,
            details_notice: None,
            password_error: None,
            password_notice: None,
        }
    }

    pub fn field_mut(&mut self, index: usize) -> &mut TextField {
        match index {
            0 => &mut self.name,
            1 => &mut self.phone,
            2 => &mut self.current_password,
            3 => &mut self.new_password,
            _ => &mut self.confirm_new_password,
        }
    }

    pub fn panel(&self) -> ProfilePanel {
        if self.focus < 2 {
            ProfilePanel::Details
        } else {
            ProfilePanel::Password
        }
    }
}
