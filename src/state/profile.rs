//! Persisted cache of the signed-in administrator's profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin pages show the operator's name and avatar without refetching on
//! every navigation. The record lives under its own storage key and is wiped
//! together with the session token.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::sync::{Arc, PoisonError, RwLock};

use crate::net::types::User;
use crate::util::storage::{StorageBackend, load_record, remove_record, save_record};

pub const ADMIN_STORAGE_KEY: &str = "laporin-admin";

#[derive(Clone)]
pub struct ProfileCache {
    inner: Arc<RwLock<Option<User>>>,
    backend: Arc<dyn StorageBackend>,
}

impl ProfileCache {
    /// Rehydrate the cache from `backend`.
    pub fn load(backend: Arc<dyn StorageBackend>) -> Self {
        let cached = load_record::<User>(backend.as_ref(), ADMIN_STORAGE_KEY);
        Self { inner: Arc::new(RwLock::new(cached)), backend }
    }

    #[must_use]
    pub fn get(&self) -> Option<User> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set(&self, profile: User) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        save_record(self.backend.as_ref(), ADMIN_STORAGE_KEY, &profile);
        *guard = Some(profile);
    }

    pub fn clear(&self) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        remove_record(self.backend.as_ref(), ADMIN_STORAGE_KEY);
        *guard = None;
    }
}
