//! Wire types for the advisory backend.
//!
//! Success payloads keep the backend's domain-specific `success` boolean;
//! views treat `success = false` as an inline failure with the payload
//! message.

use serde::{Deserialize, Serialize};

use crate::session::{Identity, Role};

// ============================================================================
// Responses
// ============================================================================

/// `GET /check_session.php`
#[derive(Debug, Clone, Deserialize)]
pub struct SessionCheck {
    #[serde(rename = "loggedIn")]
    pub logged_in: bool,
    #[serde(default)]
    pub user: Option<Identity>,
}

/// `POST /login.php`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginOutcome {
    pub success: bool,
    #[serde(default)]
    pub user: Option<Identity>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /register.php`
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// `POST /logout.php`
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub success: bool,
}

/// `POST /update_profile.php`
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileOutcome {
    pub success: bool,
    #[serde(default)]
    pub user: Option<Identity>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Shared `{success, message}` shape (password change, contact, query,
/// rating, forgot/reset password).
#[derive(Debug, Clone, Deserialize)]
pub struct MessageOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageOutcome {
    /// The display message, with a fallback for a silent backend.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// `GET /admin_queries.php`
#[derive(Debug, Clone, Deserialize)]
pub struct AdminDashboard {
    pub success: bool,
    #[serde(default)]
    pub users: Vec<AdminUser>,
    #[serde(default)]
    pub queries: Vec<InquiryRecord>,
}

/// A registered account row in the admin dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Whether an inquiry came through the public contact form or the
/// authenticated query form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryKind {
    Query,
    #[default]
    #[serde(other)]
    Contact,
}

impl InquiryKind {
    pub fn label(self) -> &'static str {
        match self {
            InquiryKind::Contact => "contact",
            InquiryKind::Query => "query",
        }
    }
}

/// An inquiry row in the admin dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct InquiryRecord {
    pub id: u64,
    #[serde(default)]
    pub user_id: Option<u64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: InquiryKind,
    #[serde(default)]
    pub created_at: Option<String>,
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdateRequest {
    pub id: u64,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: InquiryKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub user_id: u64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: InquiryKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingRequest {
    pub rating: u8,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_check_uses_camel_case_flag() {
        let check: SessionCheck = serde_json::from_str(
            r#"{"loggedIn":true,"user":{"id":3,"name":"Ana","email":"ana@x.io","role":"admin"}}"#,
        )
        .unwrap();
        assert!(check.logged_in);
        assert_eq!(check.user.unwrap().role, Role::Admin);
    }

    #[test]
    fn logged_out_check_omits_user() {
        let check: SessionCheck = serde_json::from_str(r#"{"loggedIn":false}"#).unwrap();
        assert!(!check.logged_in);
        assert!(check.user.is_none());
    }

    #[test]
    fn failed_login_carries_only_a_message() {
        let outcome: LoginOutcome =
            serde_json::from_str(r#"{"success":false,"message":"Invalid credentials"}"#).unwrap();
        assert!(!outcome.success);
        assert!(outcome.user.is_none());
        assert_eq!(outcome.message.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn admin_dashboard_tolerates_sparse_rows() {
        let dashboard: AdminDashboard = serde_json::from_str(
            r#"{
                "success": true,
                "users": [{"id":1,"name":"Ana","email":"ana@x.io","role":"owner"}],
                "queries": [
                    {"id":9,"name":"Bo","email":"bo@x.io","message":"hi","type":"query"},
                    {"id":10,"name":"Cy","email":"cy@x.io","message":"yo"}
                ]
            }"#,
        )
        .unwrap();
        // Unknown role string degrades rather than failing the whole payload.
        assert_eq!(dashboard.users[0].role, Role::Regular);
        assert_eq!(dashboard.queries[0].kind, InquiryKind::Query);
        assert_eq!(dashboard.queries[1].kind, InquiryKind::Contact);
        assert!(dashboard.queries[1].subject.is_none());
    }

    #[test]
    fn contact_request_tags_its_type() {
        let body = serde_json::to_value(ContactRequest {
            name: "Bo".to_string(),
            email: "bo@x.io".to_string(),
            message: "hello".to_string(),
            kind: InquiryKind::Contact,
        })
        .unwrap();
        assert_eq!(body["type"], "contact");
    }
}
