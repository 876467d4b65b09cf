//! Process-wide dashboard configuration.
//!
//! # Invariants
//! - Installed at most once per process; read-only afterwards.
//! - `config()` returns defaults when nothing was installed.

use crate::logging::default_log_level;
use once_cell::sync::{Lazy, OnceCell};
use std::path::PathBuf;

/// Durable slot holding the serialized task collection.
pub const DEFAULT_STORAGE_KEY: &str = "tasks";
const DB_FILE_NAME: &str = "taskboard.sqlite3";
const APP_DIR_NAME: &str = "taskboard";

static CONFIG: OnceCell<DashboardConfig> = OnceCell::new();
static DEFAULT_CONFIG: Lazy<DashboardConfig> = Lazy::new(DashboardConfig::default);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Key of the durable slot the collection is written to.
    pub storage_key: String,
    /// SQLite file backing the durable store.
    pub db_path: PathBuf,
    pub log_level: String,
    /// Log directory; file logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            db_path: default_data_dir().join(DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

/// Platform data directory for the dashboard, or `.` when unknown.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Installs `config` as the process-wide configuration.
///
/// # Errors
/// - Returns the rejected config when one is already installed and differs.
pub fn init_config(config: DashboardConfig) -> Result<&'static DashboardConfig, DashboardConfig> {
    let installed = CONFIG.get_or_init(|| config.clone());
    if *installed == config {
        Ok(installed)
    } else {
        Err(config)
    }
}

/// Returns the installed configuration, or defaults.
pub fn config() -> &'static DashboardConfig {
    CONFIG.get().unwrap_or_else(|| Lazy::force(&DEFAULT_CONFIG))
}
