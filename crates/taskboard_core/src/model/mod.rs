//! Task domain model.
//!
//! # Responsibility
//! - Define the fixed-shape task record and its closed status enumeration.
//! - Define the transient filter selection used by derived views.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` unique within its collection.
//! - Input is normalized once at the creation boundary, never on read.

pub mod task;
