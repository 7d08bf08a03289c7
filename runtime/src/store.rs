//! Store - the dispatcher that owns a state cell and a reducer.
//!
//! The store wires the three pieces of the pattern together: it reads the
//! cell, applies the reducer, writes the result back, and tells observers
//! about the new state. That is the whole dispatch path; there is no
//! queuing, batching or coalescing.

use crate::cell::StateCell;
use crate::error::StoreError;
use serde::de::DeserializeOwned;
use statecell_core::action::{Action, ActionDecodeError, RawAction};
use statecell_core::reducer::Reducer;
use statecell_core::state::State;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Handle identifying one registered observer
///
/// Returned by [`Store::subscribe`] and accepted by [`Store::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<S> = Box<dyn Fn(&S) + Send + Sync>;

/// The store - runtime coordinator for a reducer over one state cell
///
/// The store manages:
/// 1. The state cell (single writer, many readers)
/// 2. The reducer (all transition logic)
/// 3. The observer registry (explicit subscription, no hidden globals)
///
/// # Ordering
///
/// Dispatches apply strictly sequentially, in dispatch order. The store
/// holds the cell's writer side across the whole read-reduce-write step,
/// so concurrent dispatchers serialize rather than interleave. The
/// single-writer discipline is the documented contract; clones of the
/// store share the same cell and registry.
///
/// # Example
///
/// ```ignore
/// let store = Store::new(TasksState::default(), TasksReducer);
///
/// store.subscribe(|state: &TasksState| println!("{} tasks", state.len()));
/// store.dispatch(TaskAction::Added { id: 1, text: "a".into(), done: false })?;
///
/// assert_eq!(store.state(|s| s.len()), 1);
/// ```
pub struct Store<S, A, R>
where
    R: Reducer<State = S, Action = A>,
{
    cell: StateCell<S>,
    reducer: Arc<R>,
    observers: Arc<Mutex<Vec<(SubscriptionId, Observer<S>)>>>,
    next_subscription: Arc<AtomicU64>,
}

impl<S, A, R> Store<S, A, R>
where
    S: State,
    A: Action,
    R: Reducer<State = S, Action = A>,
{
    /// Create a store with the given initial state and reducer
    ///
    /// The initial state lives for the lifetime of the store and is
    /// replaced on every dispatched action; dropping the store discards
    /// it. Nothing is persisted.
    #[must_use]
    pub fn new(initial_state: S, reducer: R) -> Self {
        Self {
            cell: StateCell::new(initial_state),
            reducer: Arc::new(reducer),
            observers: Arc::new(Mutex::new(Vec::new())),
            next_subscription: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Dispatch an action to the store
    ///
    /// Equivalent to `cell.write(reducer.reduce(&cell.read(), &action)?)`,
    /// performed atomically, followed by observer notification with the
    /// new state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownAction`] if the reducer does not
    /// recognize the action's tag. The cell is untouched and no observer
    /// runs; the error is a programming defect and should be fatal to the
    /// calling scope.
    #[tracing::instrument(skip(self, action), name = "store_dispatch")]
    pub fn dispatch(&self, action: A) -> Result<(), StoreError> {
        let tag = action.tag();
        tracing::debug!(tag, "dispatching action");

        let next = self
            .cell
            .try_update(|state| self.reducer.reduce(state, &action))
            .map_err(|err| {
                tracing::warn!(tag = %err.tag, "dispatch rejected: unknown action tag");
                StoreError::from(err)
            })?;

        self.notify(&next);
        Ok(())
    }

    /// Dispatch a sequence of actions, in order
    ///
    /// Stops at the first failure; actions dispatched before the failure
    /// remain applied.
    ///
    /// # Errors
    ///
    /// Returns the first dispatch error, if any.
    pub fn dispatch_all(&self, actions: impl IntoIterator<Item = A>) -> Result<(), StoreError> {
        for action in actions {
            self.dispatch(action)?;
        }
        Ok(())
    }

    /// Decode an untyped tagged record and dispatch it
    ///
    /// This is the boundary where an unrecognized tag can actually occur:
    /// a typed action cannot carry one, a raw record can.
    ///
    /// # Errors
    ///
    /// - [`StoreError::UnknownAction`] if the record's tag is outside the
    ///   action type's known set
    /// - [`StoreError::MalformedAction`] if the tag is known but the
    ///   payload fields fail to decode
    ///
    /// In both cases the cell is untouched and no observer runs.
    pub fn dispatch_raw(&self, raw: RawAction) -> Result<(), StoreError>
    where
        A: DeserializeOwned,
    {
        let action: A = raw.decode().map_err(|err| match err {
            ActionDecodeError::UnknownTag(unknown) => {
                tracing::warn!(tag = %unknown.tag, "raw dispatch rejected: unknown action tag");
                StoreError::UnknownAction(unknown)
            }
            other => StoreError::MalformedAction(other),
        })?;

        self.dispatch(action)
    }

    /// Read a projection of the current state
    ///
    /// Runs `f` against the held value without cloning it.
    pub fn state<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        self.cell.with(f)
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn snapshot(&self) -> S {
        self.cell.read()
    }

    /// Register an observer called with the new state after every
    /// successful dispatch
    ///
    /// Observers run synchronously on the dispatching thread, in
    /// registration order, with the registry locked: an observer must not
    /// dispatch or (un)subscribe re-entrantly. A failed dispatch notifies
    /// nobody.
    pub fn subscribe(&self, observer: impl Fn(&S) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered observer
    ///
    /// Returns `true` if the subscription was still registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|(registered, _)| *registered != id);
        before != observers.len()
    }

    /// Number of registered observers
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, state: &S) {
        let observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, observer) in observers.iter() {
            observer(state);
        }
    }
}

impl<S, A, R> Clone for Store<S, A, R>
where
    R: Reducer<State = S, Action = A>,
{
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            reducer: Arc::clone(&self.reducer),
            observers: Arc::clone(&self.observers),
            next_subscription: Arc::clone(&self.next_subscription),
        }
    }
}

impl<S, A, R> std::fmt::Debug for Store<S, A, R>
where
    S: State,
    R: Reducer<State = S, Action = A>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.cell)
            .finish_non_exhaustive()
    }
}
