//! Auth API facade: login, register, and current-profile lookup.
//!
//! No retry, caching, or validation happens here. Failures propagate to the
//! caller unchanged.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde_json::Value;

use super::http::{ApiError, HttpTransport};
use super::types::{Credentials, LoginResponse, Registration, UserProfile};
use crate::config::ClientConfig;
use crate::storage::TokenStorage;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const PROFILE_PATH: &str = "/auth/me";

/// Provider-neutral async trait for the auth service. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `POST /auth/register`. Returns the backend body verbatim.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    async fn register(&self, registration: &Registration) -> Result<Value, ApiError>;

    /// `GET /auth/me`, authenticated by the stored token.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or when
    /// the token is missing or rejected.
    async fn get_profile(&self) -> Result<UserProfile, ApiError>;
}

/// [`AuthApi`] backed by the real HTTP transport.
pub struct HttpAuthApi {
    transport: HttpTransport,
}

impl HttpAuthApi {
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig, storage: Arc<dyn TokenStorage>) -> Result<Self, ApiError> {
        Ok(Self { transport: HttpTransport::new(config, storage)? })
    }
}

#[async_trait::async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.transport.post_json(LOGIN_PATH, credentials).await
    }

    async fn register(&self, registration: &Registration) -> Result<Value, ApiError> {
        self.transport.post_json(REGISTER_PATH, registration).await
    }

    async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.transport.get_json(PROFILE_PATH).await
    }
}
