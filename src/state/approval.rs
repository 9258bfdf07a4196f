//! Approval state store
//!
//! Persists the approved subject ids as a JSON array under a single key:
//! `["MATH101","MATH201"]`.

use super::storage::{KeyValueStore, StoreResult};
use crate::models::DEFAULT_STORAGE_KEY;

/// Load/save interface the controller depends on
pub trait StateStore {
    /// Previously saved ids; missing or malformed state is an empty list
    fn load(&self) -> Vec<String>;

    /// Replace the stored ids with `ids`
    fn save(&mut self, ids: &[String]) -> StoreResult<()>;
}

/// State store backed by a key-value storage under a fixed key
#[derive(Debug, Clone)]
pub struct ApprovalStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> ApprovalStore<S> {
    /// Store using the default key
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Raw stored value, if any
    pub fn raw(&self) -> StoreResult<Option<String>> {
        self.storage.get_item(&self.key)
    }
}

impl<S: KeyValueStore> StateStore for ApprovalStore<S> {
    fn load(&self) -> Vec<String> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                eprintln!("Warning: Failed to read approval state: {}", e);
                return Vec::new();
            }
        };

        // `null` is what an explicit empty write looks like in some stores
        match serde_json::from_str::<Option<Vec<String>>>(&raw) {
            Ok(ids) => ids.unwrap_or_default(),
            Err(e) => {
                eprintln!(
                    "Warning: Stored approval state under '{}' is malformed: {}. Starting empty.",
                    self.key, e
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, ids: &[String]) -> StoreResult<()> {
        let value = serde_json::to_string(ids)?;
        self.storage.set_item(&self.key, &value)
    }
}
