//! Task collection manager.
//!
//! # Responsibility
//! - Own the ordered task sequence for a session.
//! - Provide add / status update / delete mutations.
//! - Derive filtered views and per-selection counts.
//!
//! # Invariants
//! - Insertion order is preserved; deletion never reorders survivors.
//! - Task ids are unique within the collection.
//! - `counts_by_selection().get(s) == filter_by(s).count()` for every `s`.
//! - Unknown ids make `update_status`/`delete_task` no-ops, not errors.

use crate::model::task::{
    FilterSelection, Task, TaskId, TaskStatus, TaskValidationError, ALL_SELECTIONS,
};
use log::warn;
use std::collections::HashSet;

/// Per-selection task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCounts {
    pub all: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl SelectionCounts {
    pub fn get(&self, selection: FilterSelection) -> usize {
        match selection {
            FilterSelection::All => self.all,
            FilterSelection::Todo => self.todo,
            FilterSelection::InProgress => self.in_progress,
            FilterSelection::Done => self.done,
        }
    }

    /// Yields `(selection, count)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterSelection, usize)> + '_ {
        ALL_SELECTIONS
            .iter()
            .map(move |selection| (*selection, self.get(*selection)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a collection from persisted tasks.
    ///
    /// Tasks repeating an earlier id are dropped so the uniqueness invariant
    /// holds for hand-edited storage too.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut seen = HashSet::with_capacity(tasks.len());
        let mut kept = Vec::with_capacity(tasks.len());
        for task in tasks {
            if seen.insert(task.id.clone()) {
                kept.push(task);
            } else {
                warn!(
                    "event=collection_restore module=service status=dropped reason=duplicate_id id={}",
                    task.id
                );
            }
        }
        Self { tasks: kept }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == task_id)
    }

    fn contains(&self, task_id: &TaskId) -> bool {
        self.get(task_id).is_some()
    }

    /// Creates a `To Do` task from raw input and appends it.
    ///
    /// # Errors
    /// - `TitleRequired` when the trimmed title is empty; nothing is appended.
    pub fn add_task(
        &mut self,
        title: &str,
        description: &str,
    ) -> Result<Task, TaskValidationError> {
        let mut task = Task::new(title, description)?;
        while self.contains(&task.id) {
            task.id = TaskId::generate();
        }
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Parses `new_status` and applies it to the task with `task_id`.
    ///
    /// Returns `Ok(false)` when no task matches.
    ///
    /// # Errors
    /// - `InvalidStatus` when `new_status` is not an enumerated status, even
    ///   if `task_id` is unknown.
    pub fn update_status(
        &mut self,
        task_id: &TaskId,
        new_status: &str,
    ) -> Result<bool, TaskValidationError> {
        let status = new_status.parse::<TaskStatus>()?;
        Ok(self.set_status(task_id, status))
    }

    /// Replaces the status field of one task in place.
    ///
    /// Returns `false` when no task matches.
    pub fn set_status(&mut self, task_id: &TaskId, status: TaskStatus) -> bool {
        match self.tasks.iter_mut().find(|task| &task.id == task_id) {
            Some(task) => {
                task.status = status;
                true
            }
            None => false,
        }
    }

    /// Removes the task with `task_id`, irreversibly.
    ///
    /// Confirmation belongs to the caller. Returns `false` when absent.
    pub fn delete_task(&mut self, task_id: &TaskId) -> bool {
        match self.tasks.iter().position(|task| &task.id == task_id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Lazily yields tasks visible under `selection`, in insertion order.
    pub fn filter_by(&self, selection: FilterSelection) -> impl Iterator<Item = &Task> + '_ {
        self.tasks
            .iter()
            .filter(move |task| selection.matches(task))
    }

    pub fn counts_by_selection(&self) -> SelectionCounts {
        self.tasks.iter().fold(
            SelectionCounts {
                all: self.tasks.len(),
                ..SelectionCounts::default()
            },
            |mut counts, task| {
                match task.status {
                    TaskStatus::Todo => counts.todo += 1,
                    TaskStatus::InProgress => counts.in_progress += 1,
                    TaskStatus::Done => counts.done += 1,
                }
                counts
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::TaskCollection;
    use crate::model::task::{Task, TaskId, TaskStatus};

    fn task(id: &str, title: &str) -> Task {
        Task::with_id(TaskId::new(id), title, "").unwrap()
    }

    #[test]
    fn from_tasks_drops_duplicate_ids_keeping_first() {
        let collection = TaskCollection::from_tasks(vec![
            task("1", "first"),
            task("2", "second"),
            task("1", "shadow"),
        ]);

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.tasks()[0].title, "first");
        assert_eq!(collection.tasks()[1].title, "second");
    }

    #[test]
    fn set_status_leaves_position_untouched() {
        let mut collection =
            TaskCollection::from_tasks(vec![task("a", "A"), task("b", "B"), task("c", "C")]);

        assert!(collection.set_status(&TaskId::new("b"), TaskStatus::Done));

        let ids: Vec<&str> = collection.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(collection.tasks()[1].status, TaskStatus::Done);
    }
}
