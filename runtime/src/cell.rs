//! Single-value state cell with snapshot reads and wholesale writes.
//!
//! The cell is the storage half of the store: it holds exactly one state
//! value, hands out clones on read, and replaces the value on write. It
//! never merges partial updates and it never notifies anyone; change
//! notification is the dispatcher's job.

use statecell_core::state::State;
use std::sync::{Arc, PoisonError, RwLock};

/// Holds one state value behind a reader/writer lock
///
/// The intended discipline is a single writer (the store's dispatch path)
/// and arbitrarily many readers. Clones of the cell share the same value.
///
/// Lock poisoning is recovered via [`PoisonError::into_inner`]: the cell
/// holds plain owned data, so a panicked writer cannot leave it torn.
#[derive(Debug)]
pub struct StateCell<S> {
    value: Arc<RwLock<S>>,
}

impl<S: State> StateCell<S> {
    /// Create a cell holding `initial`
    #[must_use]
    pub fn new(initial: S) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
        }
    }

    /// Snapshot of the held value
    #[must_use]
    pub fn read(&self) -> S {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Read access without cloning the whole value
    pub fn with<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        f(&*self.value.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replace the held value wholesale
    pub fn write(&self, next: S) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    /// Replace the held value with `f(current)`, atomically
    ///
    /// Holds the writer side of the lock across the whole
    /// read-apply-write step, so concurrent updates serialize in lock
    /// acquisition order instead of interleaving. On `Err` the held value
    /// is untouched.
    ///
    /// Returns a snapshot of the value just written.
    ///
    /// # Errors
    ///
    /// Propagates whatever `f` returns.
    pub fn try_update<E>(&self, f: impl FnOnce(&S) -> Result<S, E>) -> Result<S, E> {
        let mut guard = self.value.write().unwrap_or_else(PoisonError::into_inner);
        let next = f(&*guard)?;
        *guard = next.clone();
        Ok(next)
    }
}

impl<S> Clone for StateCell<S> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
        }
    }
}
