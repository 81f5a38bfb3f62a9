//! Error taxonomy for backend calls.
//!
//! Every call resolves to a success payload or exactly one of these kinds.
//! The mapping from HTTP status to kind is defined once, here, instead of
//! being re-derived per view.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Body shape the backend uses for 4xx responses.
///
/// Either a single display `message`, a field-level `errors` list, or both.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Failure kinds surfaced by [`super::ApiClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// No usable response reached the client (DNS, connect, timeout).
    #[error("could not reach the server")]
    Network(#[source] reqwest::Error),

    /// 4xx — validation or authorization failure, with display content.
    #[error("{message}")]
    Client {
        status: StatusCode,
        message: String,
        errors: Vec<String>,
    },

    /// 403 on an admin-only endpoint.
    #[error("permission denied")]
    Forbidden,

    /// 5xx — backend fault.
    #[error("server error ({status})")]
    Server { status: StatusCode },

    /// A response that could not be parsed as the expected JSON shape.
    #[error("unexpected response from the server")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// The HTTP status behind this failure, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Client { status, .. } | ApiError::Server { status } => Some(*status),
            ApiError::Forbidden => Some(StatusCode::FORBIDDEN),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// Whether this failure means the session credential was rejected.
    ///
    /// Callers on protected endpoints map this back into a session reset.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// One-line text suitable for an inline form banner.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Client {
                message, errors, ..
            } if !errors.is_empty() => {
                format!("{}: {}", message, errors.join(", "))
            }
            other => other.to_string(),
        }
    }
}

/// Maps a non-success HTTP status plus its parsed body to an error kind.
pub fn classify(status: StatusCode, body: ErrorBody) -> ApiError {
    if status == StatusCode::FORBIDDEN {
        return ApiError::Forbidden;
    }
    if status.is_client_error() {
        return ApiError::Client {
            status,
            message: body
                .message
                .unwrap_or_else(|| "The request was rejected".to_string()),
            errors: body.errors,
        };
    }
    ApiError::Server { status }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(message: &str) -> ErrorBody {
        ErrorBody {
            message: Some(message.to_string()),
            errors: Vec::new(),
        }
    }

    #[test]
    fn forbidden_maps_to_its_own_kind() {
        let err = classify(StatusCode::FORBIDDEN, body("nope"));
        assert!(matches!(err, ApiError::Forbidden));
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    }

    #[test]
    fn unauthorized_is_a_client_error_and_flagged() {
        let err = classify(StatusCode::UNAUTHORIZED, body("log in first"));
        assert!(err.is_unauthorized());
        assert_eq!(err.display_message(), "log in first");
    }

    #[test]
    fn conflict_keeps_its_status() {
        let err = classify(StatusCode::CONFLICT, body("already submitted"));
        assert_eq!(err.status(), Some(StatusCode::CONFLICT));
    }

    #[test]
    fn field_errors_join_into_the_display_message() {
        let err = classify(
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorBody {
                message: Some("Validation failed".to_string()),
                errors: vec!["email is taken".to_string(), "phone invalid".to_string()],
            },
        );
        assert_eq!(
            err.display_message(),
            "Validation failed: email is taken, phone invalid"
        );
    }

    #[test]
    fn missing_body_gets_a_fallback_message() {
        let err = classify(StatusCode::BAD_REQUEST, ErrorBody::default());
        assert_eq!(err.display_message(), "The request was rejected");
    }

    #[test]
    fn five_hundreds_map_to_server() {
        let err = classify(StatusCode::BAD_GATEWAY, ErrorBody::default());
        assert!(matches!(err, ApiError::Server { .. }));
        assert!(!err.is_unauthorized());
    }
}
