//! Failure-tolerant bridge between in-memory values and a durable slot.
//!
//! # Responsibility
//! - Decode a value from a named slot once, falling back to a default.
//! - Encode and write values back, replacing prior slot content.
//!
//! # Invariants
//! - `load` and `save` never return errors or panic; failures degrade to the
//!   fallback value (`load`) or a no-op (`save`) and are logged at `warn`.
//! - The adapter never retains the value beyond a single call.
//! - Absent keys and empty stored strings both count as "absent".

use super::{KeyValueStore, StoreError, StoreResult};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Outcome of a diagnostic read, distinguishing fallback causes.
#[derive(Debug)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Absent,
    Corrupt(serde_json::Error),
    StoreFailed(StoreError),
}

pub struct PersistentStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PersistentStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying backend.
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Reads and decodes the value at `key` without applying any fallback.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> LoadOutcome<T> {
        match self.store.get_item(key) {
            Ok(Some(raw)) if !raw.is_empty() => match serde_json::from_str(&raw) {
                Ok(value) => LoadOutcome::Loaded(value),
                Err(err) => LoadOutcome::Corrupt(err),
            },
            Ok(_) => LoadOutcome::Absent,
            Err(err) => LoadOutcome::StoreFailed(err),
        }
    }

    /// Reads the value at `key`, returning `default_value` when the slot is
    /// absent, undecodable, or the store is unreachable.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default_value: T) -> T {
        match self.try_load(key) {
            LoadOutcome::Loaded(value) => {
                debug!("event=store_load module=store status=ok key={key}");
                value
            }
            LoadOutcome::Absent => {
                debug!("event=store_load module=store status=fallback reason=absent key={key}");
                default_value
            }
            LoadOutcome::Corrupt(err) => {
                warn!(
                    "event=store_load module=store status=fallback reason=corrupt key={key} error={err}"
                );
                default_value
            }
            LoadOutcome::StoreFailed(err) => {
                warn!(
                    "event=store_load module=store status=fallback reason=store_error key={key} error={err}"
                );
                default_value
            }
        }
    }

    /// Encodes `value` and replaces the slot content at `key`.
    ///
    /// # Errors
    /// - `Encode` when serialization fails.
    /// - Backend errors (`Unavailable`, `QuotaExceeded`, `Db`) unchanged.
    pub fn try_save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let encoded = serde_json::to_string(value).map_err(StoreError::Encode)?;
        self.store.set_item(key, &encoded)
    }

    /// Writes `value` to `key`, logging and swallowing any failure.
    ///
    /// Returns whether the write landed; callers never need to act on it.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_save(key, value) {
            Ok(()) => {
                debug!("event=store_save module=store status=ok key={key}");
                true
            }
            Err(err) => {
                warn!("event=store_save module=store status=error key={key} error={err}");
                false
            }
        }
    }
}
