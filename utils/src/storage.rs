//! JSON-serializing wrapper over the host key-value storage capability.
//!
//! # Design
//! The host provides synchronous string storage behind `KeyValueStore`.
//! `Storage` layers JSON (de)serialization on top and swallows every
//! failure: writes log and return, reads log and fall back to the
//! caller-supplied default. Storage problems never surface to callers.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::error;

/// Error raised by a storage backend.
#[derive(Debug, Error)]
#[error("storage backend error: {0}")]
pub struct StorageError(pub String);

/// The host storage capability: synchronous string key-value access.
pub trait KeyValueStore: Send + Sync {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Typed storage over an injected backend.
pub struct Storage<S> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Serialize and store `value`. Failures are logged and swallowed.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(err) => {
                error!(key, %err, "storage set: serialization failed");
                return;
            }
        };
        if let Err(err) = self.store.set(key, &json) {
            error!(key, %err, "storage set failed");
        }
    }

    /// Read and deserialize `key`, falling back to `default` when the key is
    /// missing, the backend fails, or the stored JSON does not decode.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    error!(key, %err, "storage get: decode failed");
                    default
                }
            },
            Ok(None) => default,
            Err(err) => {
                error!(key, %err, "storage get failed");
                default
            }
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(err) = self.store.remove(key) {
            error!(key, %err, "storage remove failed");
        }
    }

    pub fn clear(&self) {
        if let Err(err) = self.store.clear() {
            error!(%err, "storage clear failed");
        }
    }
}

/// In-memory backend, the injectable fake for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.entries().clear();
        Ok(())
    }
}
