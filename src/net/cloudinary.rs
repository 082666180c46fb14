//! Signed image upload/delete against the media host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Complaint and news images live on Cloudinary; the backend only stores the
//! returned URLs. Calls go straight through the transport: the media host is
//! not our backend, so no bearer token is sent and a rejected signature must
//! not end the user's session. Failures still raise exactly one notice.
//!
//! Uploads use the unsigned preset when configured; delete always needs the
//! signing key pair.

#[cfg(test)]
#[path = "cloudinary_test.rs"]
mod cloudinary_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::config::{CloudinaryConfig, SigningKey};
use crate::net::error::{ApiError, FALLBACK_MESSAGE, extract_message};
use crate::net::http::HttpClient;
use crate::net::transport::{ApiRequest, Body, Method};
use crate::net::types::{Mutation, MutationKind, Resource, UploadedImage};

/// Hex SHA-256 over the sorted `key=value` pairs followed by the API secret.
#[must_use]
pub fn sign(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params.iter().filter(|(_, value)| !value.is_empty()).collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    let joined = sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let digest = Sha256::digest(format!("{joined}{api_secret}").as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Encode raw file bytes as a `data:` URI accepted by the upload endpoint.
#[must_use]
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

fn unix_now() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let secs = (js_sys::Date::now() / 1000.0) as u64;
        secs
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}

fn signed_fields(signed: &[(&str, String)], key: &SigningKey) -> Vec<(String, String)> {
    vec![
        ("api_key".to_owned(), key.api_key.clone()),
        ("signature".to_owned(), sign(signed, &key.api_secret)),
        ("signature_algorithm".to_owned(), "sha256".to_owned()),
    ]
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Clone)]
pub struct CloudinaryService {
    http: HttpClient,
}

impl CloudinaryService {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.http.config().cloudinary.is_some()
    }

    fn settings(&self, what: &'static str) -> Result<CloudinaryConfig, ApiError> {
        self.http
            .config()
            .cloudinary
            .clone()
            .ok_or_else(|| self.http.report(ApiError::Disabled(what)))
    }

    fn signing(&self, settings: &CloudinaryConfig, what: &'static str) -> Result<SigningKey, ApiError> {
        settings
            .signing
            .clone()
            .ok_or_else(|| self.http.report(ApiError::Disabled(what)))
    }

    /// Upload an image given as a `data:` URI (or remote URL).
    ///
    /// # Errors
    ///
    /// Returns `Disabled` when the media host is not configured, otherwise the
    /// host's failure.
    pub async fn upload(&self, file: &str) -> Result<Mutation<UploadedImage>, ApiError> {
        self.upload_at(file, unix_now()).await
    }

    pub(crate) async fn upload_at(&self, file: &str, timestamp: u64) -> Result<Mutation<UploadedImage>, ApiError> {
        let settings = self.settings("Image upload")?;
        let mut fields = vec![("file".to_owned(), file.to_owned()), ("folder".to_owned(), settings.folder.clone())];
        if let Some(preset) = &settings.upload_preset {
            fields.push(("upload_preset".to_owned(), preset.clone()));
        } else {
            let key = self.signing(&settings, "Image upload")?;
            let signed = [("folder", settings.folder.clone()), ("timestamp", timestamp.to_string())];
            fields.push(("timestamp".to_owned(), timestamp.to_string()));
            fields.extend(signed_fields(&signed, &key));
        }

        let value = self.call(settings.upload_url(), fields).await?;
        let image: UploadedImage = self.http.decode(value, "image")?;
        Ok(Mutation::new(MutationKind::Created, Resource::Image, image))
    }

    /// Remove an uploaded image. Deleting an image that is already gone
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns `Disabled` when the media host is not configured, otherwise the
    /// host's failure.
    pub async fn delete(&self, public_id: &str) -> Result<Mutation<String>, ApiError> {
        self.delete_at(public_id, unix_now()).await
    }

    pub(crate) async fn delete_at(&self, public_id: &str, timestamp: u64) -> Result<Mutation<String>, ApiError> {
        let settings = self.settings("Image delete")?;
        let key = self.signing(&settings, "Image delete")?;
        let signed = [("public_id", public_id.to_owned()), ("timestamp", timestamp.to_string())];
        let mut fields: Vec<(String, String)> =
            signed.iter().map(|(k, v)| ((*k).to_owned(), v.clone())).collect();
        fields.extend(signed_fields(&signed, &key));

        let value = self.call(settings.destroy_url(), fields).await?;
        let outcome: DestroyResponse = serde_json::from_value(value)
            .map_err(|e| self.http.report(ApiError::Decode(e.to_string())))?;
        match outcome.result.as_str() {
            "ok" | "not found" => Ok(Mutation::new(MutationKind::Deleted, Resource::Image, public_id.to_owned())),
            other => Err(self.http.report(ApiError::Status { status: 200, message: format!("delete failed: {other}") })),
        }
    }

    async fn call(&self, url: String, fields: Vec<(String, String)>) -> Result<serde_json::Value, ApiError> {
        let request = ApiRequest::new(Method::Post, url).with_body(Some(Body::Form(fields)));
        match self.http.transport().send(request).await {
            Ok(response) if response.is_success() => self.http.parse(&response.body),
            Ok(response) => {
                let message = extract_message(&response.body).unwrap_or_else(|| FALLBACK_MESSAGE.to_owned());
                leptos::logging::warn!("media host rejected request: {} {message}", response.status);
                Err(self.http.report(ApiError::Status { status: response.status, message }))
            }
            Err(e) => Err(self.http.report(ApiError::Network(e.0))),
        }
    }
}
