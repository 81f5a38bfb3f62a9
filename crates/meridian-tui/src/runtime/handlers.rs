//! Effect handlers: pure async functions from arguments to the event that
//! carries the result.
//!
//! All [`ApiError`] mapping happens here so the reducer only ever sees the
//! plain outcome enums. A 401 on a protected endpoint becomes
//! `Unauthorized`, which the reducer turns into a session reset.

use std::sync::Arc;

use meridian_core::api::types::{
    ContactRequest, ForgotPasswordRequest, InquiryKind, LoginRequest, MessageOutcome,
    PasswordChangeRequest, ProfileUpdateRequest, QueryRequest, RatingRequest, RegisterRequest,
    ResetPasswordRequest,
};
use meridian_core::api::{ApiClient, ApiError};
use reqwest::StatusCode;
use tracing::warn;

use crate::events::{AdminOutcome, ProfileSaveOutcome, RatingOutcome, Submission, UiEvent};

/// Boot-time session check. Every failure is swallowed into "logged out";
/// the boot check is never an error state and is never retried.
pub async fn check_session(api: Arc<ApiClient>) -> UiEvent {
    let identity = match api.check_session().await {
        Ok(check) if check.logged_in => check.user,
        Ok(_) => None,
        Err(err) => {
            warn!(error = %err, "session check failed; treating as logged out");
            None
        }
    };
    UiEvent::SessionChecked { identity }
}

pub async fn login(api: Arc<ApiClient>, email: String, password: String) -> UiEvent {
    let outcome = match api.login(&LoginRequest { email, password }).await {
        Ok(outcome) if outcome.success => match outcome.user {
            Some(identity) => Ok(identity),
            None => Err("The server accepted the login but sent no account.".to_string()),
        },
        Ok(outcome) => Err(outcome
            .message
            .unwrap_or_else(|| "Login failed.".to_string())),
        Err(err) => Err(err.display_message()),
    };
    UiEvent::LoginComplete { outcome }
}

pub async fn register(
    api: Arc<ApiClient>,
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    phone: String,
) -> UiEvent {
    let request = RegisterRequest {
        name,
        email,
        password,
        confirm_password,
        phone,
    };
    let outcome = match api.register(&request).await {
        Ok(outcome) if outcome.success => Submission::Accepted(
            outcome
                .message
                .unwrap_or_else(|| "Account created. Please sign in.".to_string()),
        ),
        Ok(outcome) => {
            let mut message = outcome
                .message
                .unwrap_or_else(|| "Registration failed.".to_string());
            if !outcome.errors.is_empty() {
                message = format!("{}: {}", message, outcome.errors.join(", "));
            }
            Submission::Rejected(message)
        }
        Err(err) => Submission::Rejected(err.display_message()),
    };
    UiEvent::RegisterComplete { outcome }
}

/// Logout is locally authoritative; the flag only records whether the
/// backend acknowledged it.
pub async fn logout(api: Arc<ApiClient>) -> UiEvent {
    let backend_ok = match api.logout().await {
        Ok(ack) => ack.success,
        Err(err) => {
            warn!(error = %err, "logout call failed");
            false
        }
    };
    UiEvent::LogoutComplete { backend_ok }
}

pub async fn save_profile(api: Arc<ApiClient>, id: u64, name: String, phone: String) -> UiEvent {
    let outcome = match api
        .update_profile(&ProfileUpdateRequest { id, name, phone })
        .await
    {
        Ok(outcome) if outcome.success => match outcome.user {
            Some(identity) => ProfileSaveOutcome::Saved {
                identity,
                message: outcome
                    .message
                    .unwrap_or_else(|| "Profile updated.".to_string()),
            },
            None => ProfileSaveOutcome::Rejected(
                "The server saved the profile but sent no account.".to_string(),
            ),
        },
        Ok(outcome) => ProfileSaveOutcome::Rejected(
            outcome
                .message
                .unwrap_or_else(|| "The profile could not be saved.".to_string()),
        ),
        Err(err) if err.is_unauthorized() => ProfileSaveOutcome::Unauthorized,
        Err(err) => ProfileSaveOutcome::Rejected(err.display_message()),
    };
    UiEvent::ProfileSaved { outcome }
}

pub async fn change_password(
    api: Arc<ApiClient>,
    current_password: String,
    new_password: String,
    confirm_new_password: String,
) -> UiEvent {
    let request = PasswordChangeRequest {
        current_password,
        new_password,
        confirm_new_password,
    };
    let outcome = submission(api.change_password(&request).await, "Password updated.");
    UiEvent::PasswordChanged { outcome }
}

pub async fn send_contact(
    api: Arc<ApiClient>,
    name: String,
    email: String,
    message: String,
) -> UiEvent {
    let request = ContactRequest {
        name,
        email,
        message,
        kind: InquiryKind::Contact,
    };
    let outcome = submission(api.contact(&request).await, "Message sent. Thank you!");
    UiEvent::ContactDelivered { outcome }
}

pub async fn send_query(
    api: Arc<ApiClient>,
    user_id: u64,
    name: String,
    email: String,
    subject: String,
    message: String,
) -> UiEvent {
    let request = QueryRequest {
        user_id,
        name,
        email,
        subject,
        message,
        kind: InquiryKind::Query,
    };
    let outcome = submission(
        api.submit_query(&request).await,
        "Your query is on its way to an advisor.",
    );
    UiEvent::QueryDelivered { outcome }
}

pub async fn send_rating(api: Arc<ApiClient>, rating: u8, message: String) -> UiEvent {
    let outcome = match api.submit_rating(&RatingRequest { rating, message }).await {
        Ok(outcome) if outcome.success => {
            RatingOutcome::Accepted(outcome.message_or("Thanks for the feedback!"))
        }
        Ok(outcome) => RatingOutcome::Rejected(outcome.message_or("The rating was rejected.")),
        Err(err) if err.status() == Some(StatusCode::CONFLICT) => {
            RatingOutcome::AlreadyRated(err.display_message())
        }
        Err(err) if err.is_unauthorized() => RatingOutcome::Unauthorized,
        Err(err) => RatingOutcome::Rejected(err.display_message()),
    };
    UiEvent::RatingDelivered { outcome }
}

pub async fn load_admin_dashboard(api: Arc<ApiClient>) -> UiEvent {
    let outcome = match api.admin_queries().await {
        Ok(dashboard) if dashboard.success => AdminOutcome::Loaded {
            users: dashboard.users,
            queries: dashboard.queries,
        },
        Ok(_) => AdminOutcome::Rejected("The dashboard could not be loaded.".to_string()),
        Err(ApiError::Forbidden) => AdminOutcome::Denied,
        Err(err) if err.is_unauthorized() => AdminOutcome::Unauthorized,
        Err(err) => AdminOutcome::Rejected(err.display_message()),
    };
    UiEvent::AdminDashboardLoaded { outcome }
}

pub async fn request_reset_link(api: Arc<ApiClient>, email: String) -> UiEvent {
    let outcome = submission(
        api.forgot_password(&ForgotPasswordRequest { email }).await,
        "If that address has an account, a reset email is on its way.",
    );
    UiEvent::ResetLinkSent { outcome }
}

pub async fn reset_password(
    api: Arc<ApiClient>,
    token: String,
    password: String,
    confirm_password: String,
) -> UiEvent {
    let request = ResetPasswordRequest {
        token,
        password,
        confirm_password,
    };
    let outcome = submission(
        api.reset_password(&request).await,
        "Password reset. Please sign in.",
    );
    UiEvent::PasswordResetComplete { outcome }
}

/// Shared mapping for `{success, message}` endpoints.
fn submission(result: Result<MessageOutcome, ApiError>, fallback: &str) -> Submission {
    match result {
        Ok(outcome) if outcome.success => Submission::Accepted(outcome.message_or(fallback)),
        Ok(outcome) => Submission::Rejected(outcome.message_or("The request was rejected.")),
        Err(err) if err.is_unauthorized() => Submission::Unauthorized,
        Err(err) => Submission::Rejected(err.display_message()),
    }
}
