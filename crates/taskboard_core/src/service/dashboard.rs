//! Write-through task dashboard.
//!
//! # Responsibility
//! - Load the persisted collection once at startup.
//! - Apply mutations through `TaskCollection` and mirror every change to
//!   the durable slot before returning.
//! - Hold the transient filter selection.
//!
//! # Invariants
//! - `PersistentStore` and `TaskCollection` never reference each other.
//! - A failed write never rolls back in-memory state.
//! - The filter selection is never persisted.

use crate::model::task::{FilterSelection, Task, TaskId, TaskValidationError};
use crate::service::draft::TaskDraft;
use crate::service::task_collection::{SelectionCounts, TaskCollection};
use crate::store::persistent::PersistentStore;
use crate::store::KeyValueStore;
use log::info;

pub struct Dashboard<S: KeyValueStore> {
    store: PersistentStore<S>,
    key: String,
    tasks: TaskCollection,
    filter: FilterSelection,
}

impl<S: KeyValueStore> Dashboard<S> {
    /// Opens a dashboard over `store`, restoring the collection at `key`.
    ///
    /// Missing or corrupt state yields an empty collection.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let store = PersistentStore::new(store);
        let tasks = TaskCollection::from_tasks(store.load(&key, Vec::<Task>::new()));
        info!(
            "event=dashboard_open module=service status=ok key={key} tasks={}",
            tasks.len()
        );
        Self {
            store,
            key,
            tasks,
            filter: FilterSelection::All,
        }
    }

    pub fn tasks(&self) -> &TaskCollection {
        &self.tasks
    }

    pub fn add_task(
        &mut self,
        title: &str,
        description: &str,
    ) -> Result<Task, TaskValidationError> {
        let task = self.tasks.add_task(title, description)?;
        self.persist();
        Ok(task)
    }

    /// Submits a draft and persists the resulting task.
    pub fn submit_draft(&mut self, draft: &mut TaskDraft) -> Result<Task, TaskValidationError> {
        let task = draft.submit(&mut self.tasks)?;
        self.persist();
        Ok(task)
    }

    pub fn update_status(
        &mut self,
        task_id: &TaskId,
        new_status: &str,
    ) -> Result<bool, TaskValidationError> {
        let changed = self.tasks.update_status(task_id, new_status)?;
        if changed {
            self.persist();
        }
        Ok(changed)
    }

    /// Deletes immediately; the caller must have confirmed beforehand.
    pub fn delete_task(&mut self, task_id: &TaskId) -> bool {
        let removed = self.tasks.delete_task(task_id);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn filter(&self) -> FilterSelection {
        self.filter
    }

    pub fn set_filter(&mut self, selection: FilterSelection) {
        self.filter = selection;
    }

    /// Tasks visible under the current filter selection.
    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.filter_by(self.filter)
    }

    pub fn counts(&self) -> SelectionCounts {
        self.tasks.counts_by_selection()
    }

    fn persist(&self) {
        self.store.save(&self.key, self.tasks.tasks());
    }
}
