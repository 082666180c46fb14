//! Route access decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route runs [`evaluate`] on each navigation. The decision
//! depends only on the token already held by the store and the roles the page
//! requires; no request is made.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::util::jwt::try_decode_role;
use crate::util::navigate::LOGIN_PATH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyReason {
    MissingToken,
    InvalidToken,
    RoleNotAllowed(Role),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allowed(Role),
    Denied(DenyReason),
}

impl GuardDecision {
    /// Where a denied navigation is sent; `None` when allowed.
    #[must_use]
    pub fn redirect(self) -> Option<&'static str> {
        match self {
            Self::Allowed(_) => None,
            Self::Denied(_) => Some(LOGIN_PATH),
        }
    }
}

/// Decide whether a page requiring one of `required` may render.
///
/// Rules, first match wins: no token, undecodable token, and a role outside
/// `required` are denied; anything else is allowed.
#[must_use]
pub fn evaluate(token: Option<&str>, required: &[Role]) -> GuardDecision {
    let Some(token) = token else {
        return GuardDecision::Denied(DenyReason::MissingToken);
    };
    let role = match try_decode_role(token) {
        Ok(role) => role,
        Err(e) => {
            leptos::logging::warn!("route guard rejected token: {e}");
            return GuardDecision::Denied(DenyReason::InvalidToken);
        }
    };
    if required.contains(&role) {
        GuardDecision::Allowed(role)
    } else {
        GuardDecision::Denied(DenyReason::RoleNotAllowed(role))
    }
}
