//! Recording observer for store tests
//!
//! Subscribes to a store and keeps every state it is notified with, so a
//! test can assert on the exact sequence of published states instead of
//! only the final one.

use statecell_core::action::Action;
use statecell_core::reducer::Reducer;
use statecell_core::state::State;
use statecell_runtime::{Store, SubscriptionId};
use std::sync::{Arc, Mutex, PoisonError};

/// Observer that records every state a store publishes
///
/// # Example
///
/// ```ignore
/// let recorder = StateRecorder::new();
/// recorder.attach(&store);
///
/// store.dispatch(TaskAction::Added { id: 1, text: "a".into(), done: false })?;
///
/// assert_eq!(recorder.len(), 1);
/// ```
#[derive(Debug)]
pub struct StateRecorder<S> {
    states: Arc<Mutex<Vec<S>>>,
}

impl<S> Default for StateRecorder<S> {
    fn default() -> Self {
        Self {
            states: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<S: State + Send + 'static> StateRecorder<S> {
    /// Create a recorder with no recorded states
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Subscribe this recorder to a store
    ///
    /// Every successful dispatch appends the new state to the record.
    pub fn attach<A, R>(&self, store: &Store<S, A, R>) -> SubscriptionId
    where
        A: Action,
        R: Reducer<State = S, Action = A>,
    {
        let states = Arc::clone(&self.states);
        store.subscribe(move |state: &S| {
            states
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(state.clone());
        })
    }

    /// All recorded states, oldest first
    #[must_use]
    pub fn states(&self) -> Vec<S> {
        self.states
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recently recorded state
    #[must_use]
    pub fn last(&self) -> Option<S> {
        self.states
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Number of recorded states
    #[must_use]
    pub fn len(&self) -> usize {
        self.states
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> Clone for StateRecorder<S> {
    fn clone(&self) -> Self {
        Self {
            states: Arc::clone(&self.states),
        }
    }
}
