//! The single request pipeline for all backend calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Domain services never touch the transport directly. Every call goes
//! through [`HttpClient::execute`], which attaches the session token and
//! reacts to failures in one place.
//!
//! ERROR HANDLING
//! ==============
//! Each failed call produces exactly one notice and the original error is
//! returned to the caller; a 2xx body that cannot be decoded counts as a
//! failed call. A 401 additionally clears the session and hard-redirects to
//! the login page. Nothing is retried or queued.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::net::error::{ApiError, FailureKind};
use crate::net::transport::{ApiRequest, ApiResponse, Body, Method, Transport};
use crate::net::types::{Page, unwrap_envelope};
use crate::state::notice::Notifier;
use crate::state::session::TokenStore;
use crate::util::navigate::{LOGIN_PATH, Navigator};

#[derive(Clone)]
pub struct HttpClient {
    config: Arc<ApiConfig>,
    transport: Arc<dyn Transport>,
    store: TokenStore,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl HttpClient {
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn Transport>,
        store: TokenStore,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self { config: Arc::new(config), transport, store, notifier, navigator }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Show the notice for `error` and hand it back.
    pub(crate) fn report(&self, error: ApiError) -> ApiError {
        let (level, title, message) = error.notice();
        self.notifier.notify(level, title, &message);
        error
    }

    // =========================================================================
    // PIPELINE
    // =========================================================================

    /// Send `request` with the current token and classify the outcome.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] after its notice has been shown.
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = request.with_bearer(self.store.token());
        let method = request.method;
        let url = request.url.clone();
        let had_session = request.bearer.is_some();

        let error = match self.transport.send(request).await {
            Ok(response) if response.is_success() => return Ok(response),
            Ok(response) if had_session => ApiError::from_response(&response),
            Ok(response) => ApiError::from_response(&response).without_session(),
            Err(e) => ApiError::Network(e.0),
        };
        leptos::logging::warn!("api call failed: {method:?} {url}: {error}");
        Err(self.fail(error))
    }

    fn fail(&self, error: ApiError) -> ApiError {
        let unauthorized = error.kind() == FailureKind::Unauthorized;
        if unauthorized {
            self.store.clear_auth();
        }
        let error = self.report(error);
        if unauthorized {
            self.navigator.redirect(LOGIN_PATH);
        }
        error
    }

    /// Build a request for `path` relative to the API base URL.
    #[must_use]
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, self.config.url(path))
    }

    // =========================================================================
    // JSON HELPERS
    // =========================================================================

    /// `GET` returning the raw JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the body is not JSON.
    pub async fn get_value(&self, path: &str, query: Vec<(String, String)>) -> Result<Value, ApiError> {
        let response = self.execute(self.request(Method::Get, path).with_query(query)).await?;
        self.parse(&response.body)
    }

    /// `GET` decoding the (possibly enveloped) `resource` payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not decode.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, resource: &str) -> Result<T, ApiError> {
        let value = self.get_value(path, Vec::new()).await?;
        self.decode(value, resource)
    }

    /// `POST` a JSON body and decode the `resource` payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not decode.
    pub async fn post<B, T>(&self, path: &str, body: &B, resource: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::Post, path, body, resource).await
    }

    /// `PUT` a JSON body and decode the `resource` payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not decode.
    pub async fn put<B, T>(&self, path: &str, body: &B, resource: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::Put, path, body, resource).await
    }

    /// `PATCH` a JSON body and decode the `resource` payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the payload does not decode.
    pub async fn patch<B, T>(&self, path: &str, body: &B, resource: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::Patch, path, body, resource).await
    }

    /// `DELETE` ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::Delete, path)).await?;
        Ok(())
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B, resource: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| self.report(ApiError::Decode(e.to_string())))?;
        let request = self.request(method, path).with_body(Some(Body::Json(body)));
        let response = self.execute(request).await?;
        let value = self.parse(&response.body)?;
        self.decode(value, resource)
    }

    // =========================================================================
    // DECODING
    // =========================================================================

    /// Parse a response body, reporting a body that is not JSON.
    pub(crate) fn parse(&self, body: &str) -> Result<Value, ApiError> {
        parse_body(body).map_err(|e| self.report(e))
    }

    /// Decode the `resource` payload, reporting a payload that does not fit.
    pub(crate) fn decode<T: DeserializeOwned>(&self, value: Value, resource: &str) -> Result<T, ApiError> {
        decode_payload(value, resource).map_err(|e| self.report(e))
    }

    /// Decode a paginated `resource` listing, reporting a payload that does
    /// not fit.
    pub(crate) fn decode_page<T: DeserializeOwned>(&self, value: Value, resource: &str) -> Result<Page<T>, ApiError> {
        Page::from_value(value, resource).map_err(|e| {
            leptos::logging::error!("failed to decode '{resource}' listing: {e}");
            self.report(ApiError::Decode(e.to_string()))
        })
    }
}

/// Percent-encode one path segment such as a resource id.
#[must_use]
pub fn segment(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Parse a response body; an empty body reads as `null`.
fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| {
        leptos::logging::error!("response body is not JSON: {e}");
        ApiError::Decode(e.to_string())
    })
}

/// Strip the envelope around `resource` and deserialize it.
fn decode_payload<T: DeserializeOwned>(value: Value, resource: &str) -> Result<T, ApiError> {
    serde_json::from_value(unwrap_envelope(value, resource)).map_err(|e| {
        leptos::logging::error!("failed to decode '{resource}' payload: {e}");
        ApiError::Decode(e.to_string())
    })
}
