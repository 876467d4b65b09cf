//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted task record (`id`, `title`, `description`, `status`).
//! - Provide boundary normalization for user-entered text.
//! - Define status and filter-selection vocabularies.
//!
//! # Invariants
//! - `id` is assigned at creation and never mutated.
//! - `title` is non-empty after creation; it is not re-validated afterwards.
//! - `status` is always one of `To Do | In Progress | Done`.
//! - Serialized field names and status labels match the persisted layout.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 100;
/// Maximum description length in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Opaque task identifier.
///
/// Persisted as a plain JSON string. Ids restored from storage may use any
/// string shape; ids generated here are `<epoch-millis>-<random hex>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh identifier.
    ///
    /// The random suffix keeps ids distinct when two calls land on the same
    /// millisecond.
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("{millis}-{}", &suffix[..12]))
    }

    /// Wraps an existing identifier string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Workflow state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Created but not started.
    #[serde(rename = "To Do")]
    Todo,
    /// Work is in progress.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Completed.
    #[serde(rename = "Done")]
    Done,
}

/// All statuses in workflow order.
pub const ALL_STATUSES: [TaskStatus; 3] =
    [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

impl TaskStatus {
    /// Display label, identical to the persisted value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskValidationError;

    /// Accepts only the exact display labels.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ALL_STATUSES
            .into_iter()
            .find(|status| status.label() == value)
            .ok_or_else(|| TaskValidationError::InvalidStatus(value.to_string()))
    }
}

/// View parameter choosing which tasks are visible. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterSelection {
    #[default]
    All,
    Todo,
    InProgress,
    Done,
}

/// All selections in display order.
pub const ALL_SELECTIONS: [FilterSelection; 4] = [
    FilterSelection::All,
    FilterSelection::Todo,
    FilterSelection::InProgress,
    FilterSelection::Done,
];

impl FilterSelection {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Todo => TaskStatus::Todo.label(),
            Self::InProgress => TaskStatus::InProgress.label(),
            Self::Done => TaskStatus::Done.label(),
        }
    }

    /// Status this selection narrows to; `None` for `All`.
    pub fn status(self) -> Option<TaskStatus> {
        match self {
            Self::All => None,
            Self::Todo => Some(TaskStatus::Todo),
            Self::InProgress => Some(TaskStatus::InProgress),
            Self::Done => Some(TaskStatus::Done),
        }
    }

    /// Returns whether `task` is visible under this selection.
    pub fn matches(self, task: &Task) -> bool {
        self.status().map_or(true, |status| task.status == status)
    }
}

impl Display for FilterSelection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterSelection {
    type Err = TaskValidationError;

    /// Accepts only the exact display labels.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ALL_SELECTIONS
            .into_iter()
            .find(|selection| selection.label() == value)
            .ok_or_else(|| TaskValidationError::InvalidSelection(value.to_string()))
    }
}

/// User-correctable input errors. Never logged as system faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty after trimming.
    TitleRequired,
    /// Status value is not one of the enumerated labels.
    InvalidStatus(String),
    /// Filter selection is neither `All` nor a status label.
    InvalidSelection(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleRequired => write!(f, "title required"),
            Self::InvalidStatus(value) => write!(f, "invalid status: {value}"),
            Self::InvalidSelection(value) => write!(f, "invalid filter selection: {value}"),
        }
    }
}

impl Error for TaskValidationError {}

/// One unit of trackable work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl Task {
    /// Creates a `To Do` task with a generated id from raw user input.
    ///
    /// # Errors
    /// - `TitleRequired` when `title` is blank after trimming.
    pub fn new(title: &str, description: &str) -> Result<Self, TaskValidationError> {
        Self::with_id(TaskId::generate(), title, description)
    }

    /// Creates a `To Do` task with a caller-provided id.
    ///
    /// Input is trimmed and truncated to `TITLE_MAX_CHARS` /
    /// `DESCRIPTION_MAX_CHARS`.
    pub fn with_id(
        id: TaskId,
        title: &str,
        description: &str,
    ) -> Result<Self, TaskValidationError> {
        let title = normalize_title(title)?;
        Ok(Self {
            id,
            title,
            description: normalize_description(description),
            status: TaskStatus::Todo,
        })
    }
}

/// Trims and truncates a title, rejecting blank input.
pub fn normalize_title(raw: &str) -> Result<String, TaskValidationError> {
    let title = truncate_chars(raw.trim(), TITLE_MAX_CHARS);
    if title.is_empty() {
        return Err(TaskValidationError::TitleRequired);
    }
    Ok(title)
}

/// Trims and truncates a description. Empty is allowed.
pub fn normalize_description(raw: &str) -> String {
    truncate_chars(raw.trim(), DESCRIPTION_MAX_CHARS)
}

/// Truncates to at most `max_chars` characters, then trims trailing space
/// exposed by the cut.
pub(crate) fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => value[..byte_idx].trim_end().to_string(),
        None => value.to_string(),
    }
}
