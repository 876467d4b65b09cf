//! Core state and persistence logic for the task dashboard.
//! This crate is the single source of truth for task invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::{config, init_config, DashboardConfig, DEFAULT_STORAGE_KEY};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{
    FilterSelection, Task, TaskId, TaskStatus, TaskValidationError, ALL_SELECTIONS, ALL_STATUSES,
    DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
};
pub use service::dashboard::Dashboard;
pub use service::draft::TaskDraft;
pub use service::task_collection::{SelectionCounts, TaskCollection};
pub use store::memory_store::MemoryKeyValueStore;
pub use store::persistent::{LoadOutcome, PersistentStore};
pub use store::sqlite_store::SqliteKeyValueStore;
pub use store::{KeyValueStore, StoreError, StoreResult};
