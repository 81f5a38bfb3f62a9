//! HTTP client for the advisory backend.
//!
//! One client per running portal, configured with a fixed base address.
//! Bodies are JSON both ways and the session credential is a cookie the
//! transport carries automatically. No retries, no deduplication, no
//! caching: each call is fire-and-forget from the client's perspective.

mod error;
pub mod types;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

pub use self::error::{ApiError, ErrorBody, classify};
use self::types::{
    Ack, AdminDashboard, ContactRequest, ForgotPasswordRequest, LoginOutcome, LoginRequest,
    MessageOutcome, PasswordChangeRequest, ProfileOutcome, ProfileUpdateRequest, QueryRequest,
    RatingRequest, RegisterOutcome, RegisterRequest, ResetPasswordRequest, SessionCheck,
};
use crate::config::Config;

/// Client for the advisory backend.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client from the loaded configuration.
    ///
    /// The base address is validated once here; endpoint paths are joined
    /// onto it per call.
    pub fn new(config: &Config) -> Result<Self> {
        Url::parse(&config.base_url)
            .with_context(|| format!("Invalid base_url: {}", config.base_url))?;

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    // ========================================================================
    // Endpoints
    // ========================================================================

    /// One-time boot check: is the session cookie still valid?
    pub async fn check_session(&self) -> Result<SessionCheck, ApiError> {
        self.get("/check_session.php").await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginOutcome, ApiError> {
        self.post("/login.php", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterOutcome, ApiError> {
        self.post("/register.php", request).await
    }

    pub async fn logout(&self) -> Result<Ack, ApiError> {
        self.post("/logout.php", &serde_json::json!({})).await
    }

    pub async fn update_profile(
        &self,
        request: &ProfileUpdateRequest,
    ) -> Result<ProfileOutcome, ApiError> {
        self.post("/update_profile.php", request).await
    }

    pub async fn change_password(
        &self,
        request: &PasswordChangeRequest,
    ) -> Result<MessageOutcome, ApiError> {
        self.post("/change_password.php", request).await
    }

    pub async fn contact(&self, request: &ContactRequest) -> Result<MessageOutcome, ApiError> {
        self.post("/contact.php", request).await
    }

    pub async fn submit_query(&self, request: &QueryRequest) -> Result<MessageOutcome, ApiError> {
        self.post("/submit_query.php", request).await
    }

    /// Returns `409` (as `ApiError::Client`) when the visitor already rated.
    pub async fn submit_rating(&self, request: &RatingRequest) -> Result<MessageOutcome, ApiError> {
        self.post("/submit_rating.php", request).await
    }

    /// Admin session required; `403` surfaces as [`ApiError::Forbidden`].
    pub async fn admin_queries(&self) -> Result<AdminDashboard, ApiError> {
        self.get("/admin_queries.php").await
    }

    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<MessageOutcome, ApiError> {
        self.post("/forgot-password.php", request).await
    }

    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageOutcome, ApiError> {
        self.post("/reset-password.php", request).await
    }

    // ========================================================================
    // Transport
    // ========================================================================

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(ApiError::Network)?;
        Self::read_response(path, response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(ApiError::Network)?;
        Self::read_response(path, response).await
    }

    async fn read_response<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(ApiError::Decode);
        }

        // Non-success bodies may or may not carry the {message, errors}
        // shape; a missing or malformed body classifies the same way.
        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        let err = classify(status, body);
        warn!(path, %status, "request failed");
        Err(err)
    }
}
