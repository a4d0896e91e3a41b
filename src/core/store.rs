// ClientDesk - core/store.rs
//
// Key/value persistence seam used by the sort engine.
// The trait lives in core so engines can be tested against the in-memory
// implementation; the file-backed implementation lives in platform::store.

use crate::util::error::StoreError;
use std::collections::HashMap;
use std::fmt;

/// Minimal string key/value store.
///
/// `get` never fails: an unreadable backend behaves like a missing key.
/// `set` reports failure so the caller can log it, but callers treat writes
/// as best-effort.
pub trait KeyValueStore: fmt::Debug {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and `--ephemeral` sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    /// When set, every write fails with this reason.
    fail_writes: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Make all subsequent writes fail (simulates a full or locked store).
    pub fn fail_writes(&mut self, reason: &str) {
        self.fail_writes = Some(reason.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(ref reason) = self.fail_writes {
            return Err(StoreError::Unavailable {
                key: key.to_string(),
                reason: reason.clone(),
            });
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
