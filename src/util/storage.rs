//! Persisted key/value storage for session records.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token and admin-profile records survive page reloads through
//! `localStorage`. Stores talk to a [`StorageBackend`] so the same code runs
//! against an in-memory map off the browser.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a failed write is logged and the in-memory
//! state stays authoritative for the rest of the tab's lifetime.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Schema version written into every persisted record.
pub const RECORD_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage operation failed: {0}")]
    Backend(String),
}

pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Process-local storage used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

/// Browser `localStorage`, looked up on every call.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
impl StorageBackend for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

#[derive(Serialize, Deserialize)]
struct Record<T> {
    state: T,
    version: u32,
}

/// Read a versioned record. Missing, corrupt, or stale records yield `None`.
pub fn load_record<T: DeserializeOwned>(backend: &dyn StorageBackend, key: &str) -> Option<T> {
    let raw = match backend.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            leptos::logging::warn!("storage read failed: key={key} error={e}");
            return None;
        }
    };
    match serde_json::from_str::<Record<T>>(&raw) {
        Ok(record) if record.version == RECORD_VERSION => Some(record.state),
        Ok(record) => {
            leptos::logging::warn!("discarding stale record: key={key} version={}", record.version);
            None
        }
        Err(e) => {
            leptos::logging::warn!("discarding corrupt record: key={key} error={e}");
            None
        }
    }
}

/// Write a versioned record, logging failures.
pub fn save_record<T: Serialize>(backend: &dyn StorageBackend, key: &str, state: &T) {
    let record = Record { state, version: RECORD_VERSION };
    let result = serde_json::to_string(&record)
        .map_err(|e| StorageError::Backend(e.to_string()))
        .and_then(|raw| backend.write(key, &raw));
    if let Err(e) = result {
        leptos::logging::warn!("storage write failed: key={key} error={e}");
    }
}

/// Remove a record, logging failures.
pub fn remove_record(backend: &dyn StorageBackend, key: &str) {
    if let Err(e) = backend.remove(key) {
        leptos::logging::warn!("storage remove failed: key={key} error={e}");
    }
}
