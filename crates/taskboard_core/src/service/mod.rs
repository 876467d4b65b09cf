//! Core use-case services.
//!
//! # Responsibility
//! - Apply validated mutations to the task collection.
//! - Hold draft (form) input state for task creation.
//! - Compose the collection with persistence as a write-through dashboard.

pub mod dashboard;
pub mod draft;
pub mod task_collection;
