//! Task creation draft (form) state.
//!
//! # Invariants
//! - Field contents never exceed `TITLE_MAX_CHARS` / `DESCRIPTION_MAX_CHARS`.
//! - A pending validation error clears as soon as the title is edited.
//! - Successful submission clears both fields and the error.

use crate::model::task::{
    truncate_chars, Task, TaskValidationError, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
};
use crate::service::task_collection::TaskCollection;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    error: Option<TaskValidationError>,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Validation error from the last failed submission, if still pending.
    pub fn error(&self) -> Option<&TaskValidationError> {
        self.error.as_ref()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = truncate_chars(title, TITLE_MAX_CHARS);
        self.error = None;
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = truncate_chars(description, DESCRIPTION_MAX_CHARS);
    }

    /// `(used, limit)` character counter for the title field.
    pub fn title_chars(&self) -> (usize, usize) {
        (self.title.chars().count(), TITLE_MAX_CHARS)
    }

    /// `(used, limit)` character counter for the description field.
    pub fn description_chars(&self) -> (usize, usize) {
        (self.description.chars().count(), DESCRIPTION_MAX_CHARS)
    }

    /// Submits the draft into `collection`.
    ///
    /// On failure the input is kept and the error stays pending until the
    /// title is edited.
    pub fn submit(&mut self, collection: &mut TaskCollection) -> Result<Task, TaskValidationError> {
        match collection.add_task(&self.title, &self.description) {
            Ok(task) => {
                *self = Self::default();
                Ok(task)
            }
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}
