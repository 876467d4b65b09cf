//! Durable key-value store contracts and backends.
//!
//! # Responsibility
//! - Define the string-valued slot store the dashboard persists into.
//! - Provide SQLite and in-memory backends.
//! - Wrap any backend in the failure-tolerant `PersistentStore` adapter.
//!
//! # Invariants
//! - `set_item` fully replaces prior content at a key (no merge).
//! - Backends report failures as `StoreError`; only `PersistentStore`
//!   decides how failures degrade.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory_store;
pub mod persistent;
pub mod sqlite_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a durable store backend or while encoding a value.
#[derive(Debug)]
pub enum StoreError {
    /// Store is disabled, sandboxed or otherwise unreachable.
    Unavailable(String),
    /// Write would exceed the backend capacity.
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },
    Db(DbError),
    /// Value could not be serialized for writing.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "store unavailable: {reason}"),
            Self::QuotaExceeded { key, needed, quota } => write!(
                f,
                "quota exceeded writing `{key}`: needs {needed} bytes, quota is {quota}"
            ),
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode value: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Unavailable(_) | Self::QuotaExceeded { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Single-namespace string slot store, shaped after browser local storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove_item(&self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        (**self).remove_item(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        (**self).remove_item(key)
    }
}
