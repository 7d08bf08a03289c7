//! # Task-List Demo
//!
//! The task list is the canonical reducer example: a list of
//! `{id, text, done}` records driven by `added` / `changed` / `deleted`
//! actions.
//!
//! This demo showcases:
//! - An internally tagged action enum matching the JSON record form
//! - Raw dispatch across the untyped boundary, including the
//!   unknown-tag failure
//! - Wholesale replacement semantics (`changed` is idempotent)

/// Domain types: tasks, task-list state, actions
pub mod types;

/// The task-list reducer
pub mod reducer;

pub use reducer::TasksReducer;
pub use types::{Task, TaskAction, TasksState};
