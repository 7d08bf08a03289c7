//! # Statecell Runtime
//!
//! Runtime for the statecell state container.
//!
//! This crate provides the [`StateCell`] that holds one value and the
//! [`Store`] that dispatches actions through a reducer and back into the
//! cell.
//!
//! ## Core Components
//!
//! - **`StateCell`**: holds one state value; snapshot reads, wholesale
//!   writes, exactly one writer
//! - **`Store`**: the dispatcher; `dispatch` routes an action through the
//!   reducer and stores the result, then notifies observers
//!
//! ## Example
//!
//! ```ignore
//! use statecell_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer);
//!
//! // Dispatch an action
//! store.dispatch(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

/// Single-value state cell
pub mod cell;

/// Store and dispatch
pub mod store;

/// Error types for the store runtime
pub mod error {
    use statecell_core::action::ActionDecodeError;
    use statecell_core::error::UnknownAction;
    use thiserror::Error;

    /// Errors that can occur when dispatching to a store
    ///
    /// All variants mean the state cell was left untouched and no
    /// observer was notified.
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// The action's tag is outside the reducer's known set
        ///
        /// A programming defect; callers should let it terminate the
        /// current operation rather than recover.
        #[error(transparent)]
        UnknownAction(#[from] UnknownAction),

        /// A raw action record named a known tag but could not be decoded
        #[error("malformed action record: {0}")]
        MalformedAction(#[source] ActionDecodeError),
    }
}

// Re-export the boundary action type so callers of `dispatch_raw` do not
// need a direct dependency on the core crate.
pub use statecell_core::action::RawAction;

pub use cell::StateCell;
pub use error::StoreError;
pub use store::{Store, SubscriptionId};
