//! Identity transitions: register, verify OTP, login, logout.
//!
//! DESIGN
//! ======
//! Login writes token and user into the store in a single update, so the next
//! request and the next guard check already see the new role. Register and
//! OTP calls are pass-through and never touch the store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::{LoginRequest, LoginResponse, RegisterRequest, Role, User, VerifyOtpRequest};
use crate::state::session::TokenStore;
use crate::util::jwt::decode_role;

#[derive(Clone)]
pub struct AuthService {
    http: HttpClient,
}

impl AuthService {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    fn store(&self) -> &TokenStore {
        self.http.store()
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Propagates the backend failure unchanged; the store is untouched.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User, ApiError> {
        let response: LoginResponse = self.http.post("/auth/login", credentials, "data").await?;
        let mut user = response.user.unwrap_or_default();
        if user.role.is_none() {
            user.role = decode_role(&response.token);
        }
        if user.email.is_empty() {
            user.email.clone_from(&credentials.email);
        }
        self.store().set_session(response.token, Some(user.clone()));
        leptos::logging::log!("signed in as {:?}", user.role);
        Ok(user)
    }

    /// Drop the session and every cached profile. Local only; idempotent.
    pub fn logout(&self) {
        self.store().clear_auth();
    }

    /// Create an account. The backend then sends an OTP to the email.
    ///
    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn register(&self, data: &RegisterRequest) -> Result<Value, ApiError> {
        self.http.post("/auth/register", data, "data").await
    }

    /// Confirm the OTP sent after registration.
    ///
    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn verify_otp(&self, data: &VerifyOtpRequest) -> Result<Value, ApiError> {
        self.http.post("/auth/verify-otp", data, "data").await
    }

    /// Ask the backend to send a fresh OTP.
    ///
    /// # Errors
    ///
    /// Returns the backend failure.
    pub async fn resend_otp(&self, email: &str) -> Result<Value, ApiError> {
        self.http
            .post("/auth/resend-otp", &serde_json::json!({ "email": email }), "data")
            .await
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store().token()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.store().role()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.store().user()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store().is_authenticated()
    }
}
