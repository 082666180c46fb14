//! Session token store: the single source of truth for who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once at startup, handed to the HTTP client and auth service at
//! construction, and provided to route components through Leptos context.
//! Clones share state.
//!
//! DESIGN
//! ======
//! Only the token (plus the user payload returned with it) is stored. The role
//! is decoded from the token on every read, so it can never drift from the
//! token it came from. Every mutation is written through to storage before
//! the lock is released.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::net::types::{Role, User};
use crate::state::profile::ProfileCache;
use crate::util::jwt::decode_role;
use crate::util::storage::{MemoryStorage, StorageBackend, load_record, remove_record, save_record};

pub const TOKEN_STORAGE_KEY: &str = "laporin-token";

/// Persisted shape of the session record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

#[derive(Clone)]
pub struct TokenStore {
    inner: Arc<RwLock<SessionState>>,
    profile: ProfileCache,
    backend: Arc<dyn StorageBackend>,
}

impl TokenStore {
    /// Rehydrate the session and admin-profile records from `backend`.
    pub fn load(backend: Arc<dyn StorageBackend>) -> Self {
        let state = load_record::<SessionState>(backend.as_ref(), TOKEN_STORAGE_KEY).unwrap_or_default();
        let profile = ProfileCache::load(backend.clone());
        Self { inner: Arc::new(RwLock::new(state)), profile, backend }
    }

    /// Empty store backed by process memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::load(Arc::new(MemoryStorage::new()))
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.read().clone()
    }

    /// Role decoded from the stored token; `None` when absent or malformed.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.token().as_deref().and_then(decode_role)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    #[must_use]
    pub fn profile(&self) -> &ProfileCache {
        &self.profile
    }

    /// Store a token as-is. No validation is performed.
    pub fn set_token(&self, token: impl Into<String>) {
        self.update(|state| state.token = Some(token.into()));
    }

    /// Store a token and the user it was issued for in one write.
    pub fn set_session(&self, token: impl Into<String>, user: Option<User>) {
        self.update(|state| {
            state.token = Some(token.into());
            state.user = user;
        });
    }

    /// Drop the token, the cached user, and the admin profile cache.
    ///
    /// Safe to call when already signed out.
    pub fn clear_auth(&self) {
        {
            let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
            *guard = SessionState::default();
            remove_record(self.backend.as_ref(), TOKEN_STORAGE_KEY);
        }
        self.profile.clear();
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, apply: impl FnOnce(&mut SessionState)) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut guard);
        save_record(self.backend.as_ref(), TOKEN_STORAGE_KEY, &*guard);
    }
}
