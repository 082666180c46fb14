//! Client-side decoding of session tokens.
//!
//! DESIGN
//! ======
//! Tokens are JWT-shaped (`header.payload.signature`). The client only reads
//! the payload to learn the caller's role; the signature is the backend's
//! concern and is never checked here. Decoding is a pure function so the
//! store, the guard and tests can share it.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::net::types::Role;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is not three dot-separated segments")]
    Shape,
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token payload is not valid claims JSON: {0}")]
    Claims(String),
    #[error("unknown role '{0}'")]
    UnknownRole(String),
}

/// Payload fields the client cares about. Anything else is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Claims {
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Decode the token payload into [`Claims`].
///
/// # Errors
///
/// Returns an error if the token is not three segments, the payload is not
/// base64url, or the JSON lacks a `role`.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(TokenError::Shape);
    };
    if payload.is_empty() {
        return Err(TokenError::Shape);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}

/// Decode the token's role claim.
///
/// # Errors
///
/// Returns an error if the claims cannot be decoded or name a role outside
/// the known set.
pub fn try_decode_role(token: &str) -> Result<Role, TokenError> {
    let claims = decode_claims(token)?;
    Role::parse(&claims.role).ok_or(TokenError::UnknownRole(claims.role))
}

/// Role carried by `token`, or `None` when it cannot be decoded.
///
/// Malformed tokens are logged and treated as unauthenticated.
pub fn decode_role(token: &str) -> Option<Role> {
    match try_decode_role(token) {
        Ok(role) => Some(role),
        Err(e) => {
            leptos::logging::warn!("invalid session token: {e}");
            None
        }
    }
}
