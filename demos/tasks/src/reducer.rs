//! Reducer logic for the task list.
//!
//! Every arm builds a fresh task vector from the current one; nothing is
//! mutated in place. `changed` replaces the matched entry wholesale, so
//! applying the same `changed` record twice equals applying it once.

use crate::types::{Task, TaskAction, TasksState};
use statecell_core::{Reducer, UnknownAction};

/// Reducer for the task list
///
/// Total over the `added` / `changed` / `deleted` tags; an unrecognized
/// tag cannot reach it through the typed action enum, only through the
/// raw-dispatch boundary, which rejects it first.
#[derive(Debug, Clone, Copy, Default)]
pub struct TasksReducer;

impl TasksReducer {
    /// Creates a new `TasksReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TasksReducer {
    type State = TasksState;
    type Action = TaskAction;

    fn reduce(
        &self,
        state: &TasksState,
        action: &TaskAction,
    ) -> Result<TasksState, UnknownAction> {
        let tasks = match action {
            TaskAction::Added { id, text, done } => {
                let mut tasks = state.tasks.clone();
                tasks.push(Task {
                    id: *id,
                    text: text.clone(),
                    done: *done,
                });
                tasks
            }

            TaskAction::Changed { task } => state
                .tasks
                .iter()
                .map(|existing| {
                    if existing.id == task.id {
                        task.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect(),

            TaskAction::Deleted { id } => state
                .tasks
                .iter()
                .filter(|task| task.id != *id)
                .cloned()
                .collect(),
        };

        Ok(TasksState { tasks })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;
    use statecell_testing::{ReducerTest, assert_idempotent};

    fn one_task() -> TasksState {
        TasksState {
            tasks: vec![Task::new(1, "Buy milk".to_owned())],
        }
    }

    #[test]
    fn test_added_appends() {
        ReducerTest::new(TasksReducer::new())
            .given_state(one_task())
            .when_action(TaskAction::Added {
                id: 2,
                text: "Walk the dog".to_owned(),
                done: false,
            })
            .then_state(|state| {
                assert_eq!(state.len(), 2);
                assert_eq!(state.tasks[1].text, "Walk the dog");
                // Insertion order is preserved.
                assert_eq!(state.tasks[0].id, 1);
            })
            .run();
    }

    #[test]
    fn test_changed_replaces_wholesale() {
        ReducerTest::new(TasksReducer::new())
            .given_state(one_task())
            .when_action(TaskAction::Changed {
                task: Task {
                    id: 1,
                    text: "Buy oat milk".to_owned(),
                    done: true,
                },
            })
            .then_state(|state| {
                let task = state.get(1).unwrap();
                assert_eq!(task.text, "Buy oat milk");
                assert!(task.done);
                assert_eq!(state.len(), 1);
            })
            .run();
    }

    #[test]
    fn test_changed_without_match_leaves_state_equal() {
        let before = one_task();

        ReducerTest::new(TasksReducer::new())
            .given_state(before.clone())
            .when_action(TaskAction::Changed {
                task: Task::new(99, "Nobody".to_owned()),
            })
            .then_state(move |state| {
                assert_eq!(*state, before);
            })
            .run();
    }

    #[test]
    fn test_deleted_removes_by_id() {
        ReducerTest::new(TasksReducer::new())
            .given_state(one_task())
            .when_action(TaskAction::Deleted { id: 1 })
            .then_state(|state| {
                assert!(state.is_empty());
            })
            .run();
    }

    #[test]
    fn test_deleted_without_match_leaves_state_equal() {
        let before = one_task();

        ReducerTest::new(TasksReducer::new())
            .given_state(before.clone())
            .when_action(TaskAction::Deleted { id: 99 })
            .then_state(move |state| {
                assert_eq!(*state, before);
            })
            .run();
    }

    #[test]
    fn test_changed_is_idempotent() {
        assert_idempotent(
            &TasksReducer::new(),
            &one_task(),
            &TaskAction::Changed {
                task: Task {
                    id: 1,
                    text: "Buy milk".to_owned(),
                    done: true,
                },
            },
        );
    }
}
