//! Domain types for the task-list demo.
//!
//! A task list is an ordered sequence of tasks that can be added,
//! changed and deleted. The action vocabulary is the classic reducer
//! triple of tagged records: `added`, `changed`, `deleted`.

use serde::{Deserialize, Serialize};
use statecell_core::action::Action;

/// A single task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Caller-assigned identifier
    pub id: u32,
    /// What there is to do
    pub text: String,
    /// Whether it is done
    pub done: bool,
}

impl Task {
    /// Creates a new, not-yet-done task
    #[must_use]
    pub const fn new(id: u32, text: String) -> Self {
        Self {
            id,
            text,
            done: false,
        }
    }
}

/// State of the task list
///
/// Insertion order is preserved; the whole list is replaced on every
/// update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksState {
    /// All tasks, oldest first
    pub tasks: Vec<Task>,
}

impl TasksState {
    /// Creates an empty task list
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns a task by id
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Checks whether a task with this id exists
    #[must_use]
    pub fn exists(&self, id: u32) -> bool {
        self.get(id).is_some()
    }
}

/// Actions describing task-list transitions
///
/// The serde representation is the tagged-record form these actions take
/// at untyped boundaries: `{"type": "added", "id": 1, "text": "a"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TaskAction {
    /// Append a task to the list
    Added {
        /// Identifier for the new task
        id: u32,
        /// Task text
        text: String,
        /// Initial done flag; records that omit it mean "not done"
        #[serde(default)]
        done: bool,
    },

    /// Replace the task with a matching id, wholesale
    Changed {
        /// The full replacement task
        task: Task,
    },

    /// Remove the task with this id
    Deleted {
        /// Identifier of the task to remove
        id: u32,
    },
}

impl Action for TaskAction {
    const KNOWN_TAGS: &'static [&'static str] = &["added", "changed", "deleted"];

    fn tag(&self) -> &'static str {
        match self {
            Self::Added { .. } => "added",
            Self::Changed { .. } => "changed",
            Self::Deleted { .. } => "deleted",
        }
    }
}
