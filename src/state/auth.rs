//! Reactive auth snapshot for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the token store into a signal so headers and route guards re-render
//! after login and logout. The store stays the source of truth.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};
use crate::state::session::TokenStore;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub role: Option<Role>,
}

impl AuthState {
    #[must_use]
    pub fn from_store(store: &TokenStore) -> Self {
        Self { user: store.user(), role: store.role() }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|user| if user.name.is_empty() { user.email.clone() } else { user.name.clone() })
            .unwrap_or_default()
    }
}
