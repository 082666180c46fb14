//! Failure taxonomy for backend calls.
//!
//! DESIGN
//! ======
//! Status codes map deterministically onto a small set of kinds. Only
//! `Unauthorized` carries a recovery action (session clear + re-login); every
//! other kind is shown once and handed back to the caller.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

use crate::net::transport::ApiResponse;
use crate::state::notice::NoticeLevel;

pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Unauthorized,
    Forbidden,
    NotFound,
    Server,
    Other,
}

/// Map a response status onto a failure kind; `None` means success.
#[must_use]
pub fn classify(status: u16) -> Option<FailureKind> {
    match status {
        200..=299 => None,
        401 => Some(FailureKind::Unauthorized),
        403 => Some(FailureKind::Forbidden),
        404 => Some(FailureKind::NotFound),
        500 => Some(FailureKind::Server),
        _ => Some(FailureKind::Other),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },
    /// 401 on a call made without a session, i.e. bad credentials.
    #[error("sign-in rejected: {message}")]
    SignInRejected { message: String },
    #[error("forbidden: {message}")]
    Forbidden { message: String },
    #[error("not found: {message}")]
    NotFound { message: String },
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("{0} is not configured")]
    Disabled(&'static str),
}

impl ApiError {
    /// Reinterpret a 401 for a call that carried no session token.
    #[must_use]
    pub fn without_session(self) -> Self {
        match self {
            Self::Unauthorized { message } => Self::SignInRejected { message },
            other => other,
        }
    }

    /// Build the error for a non-2xx response.
    #[must_use]
    pub fn from_response(response: &ApiResponse) -> Self {
        let status = response.status;
        let message = extract_message(&response.body).unwrap_or_else(|| FALLBACK_MESSAGE.to_owned());
        match classify(status) {
            Some(FailureKind::Unauthorized) => Self::Unauthorized { message },
            Some(FailureKind::Forbidden) => Self::Forbidden { message },
            Some(FailureKind::NotFound) => Self::NotFound { message },
            Some(FailureKind::Server) => Self::Server { status, message },
            Some(FailureKind::Other) | None => Self::Status { status, message },
        }
    }

    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Unauthorized { .. } | Self::SignInRejected { .. } => FailureKind::Unauthorized,
            Self::Forbidden { .. } => FailureKind::Forbidden,
            Self::NotFound { .. } => FailureKind::NotFound,
            Self::Server { .. } => FailureKind::Server,
            Self::Status { .. } | Self::Network(_) | Self::Decode(_) | Self::Disabled(_) => FailureKind::Other,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } | Self::SignInRejected { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Server { status, .. } | Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Disabled(_) => None,
        }
    }

    /// Best message to show a user for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized { .. } => "Your session has expired. Please sign in again.".to_owned(),
            Self::Forbidden { .. } => "You do not have permission to perform this action.".to_owned(),
            Self::NotFound { .. } => "The requested data could not be found.".to_owned(),
            Self::Server { .. } => "The server ran into a problem. Please try again later.".to_owned(),
            Self::Status { message, .. } | Self::SignInRejected { message } => message.clone(),
            Self::Network(message) if !message.trim().is_empty() => message.clone(),
            Self::Network(_) | Self::Decode(_) => FALLBACK_MESSAGE.to_owned(),
            Self::Disabled(what) => format!("{what} is not available."),
        }
    }

    /// Level, title, and body of the notice shown for this failure.
    #[must_use]
    pub fn notice(&self) -> (NoticeLevel, &'static str, String) {
        let title = match self.kind() {
            FailureKind::Unauthorized if matches!(self, Self::SignInRejected { .. }) => "Sign-in failed",
            FailureKind::Unauthorized => "Session expired",
            FailureKind::Forbidden => "Access denied",
            FailureKind::NotFound => "Not found",
            FailureKind::Server => "Server error",
            FailureKind::Other => "Request failed",
        };
        let level = match self.kind() {
            FailureKind::Unauthorized | FailureKind::Forbidden => NoticeLevel::Warning,
            _ => NoticeLevel::Error,
        };
        (level, title, self.user_message())
    }
}

/// Pull a human-readable message out of an error body.
///
/// Looks at `message`, `error`, `msg`, and the first entry of `errors`,
/// including the same keys nested under `data`.
#[must_use]
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    message_in(&value).or_else(|| value.get("data").and_then(message_in))
}

fn message_in(value: &Value) -> Option<String> {
    for key in ["message", "error", "msg"] {
        match value.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.trim().to_owned()),
            Some(inner @ Value::Object(_)) => {
                if let Some(found) = message_in(inner) {
                    return Some(found);
                }
            }
            _ => {}
        }
    }
    match value.get("errors")?.as_array()?.first()? {
        Value::String(s) => Some(s.clone()),
        entry => message_in(entry),
    }
}
