//! # Counter Demo
//!
//! A simple counter demonstrating the statecell state container.
//!
//! This demo showcases:
//! - A pure reducer, total over its action tags
//! - Wholesale state replacement (no in-place mutation)
//! - Store usage and state queries
//!
//! The counter is deliberately the smallest possible state machine: one
//! number, three transitions, no failure modes.
//!
//! ## Example
//!
//! ```
//! use counter::{CounterAction, CounterReducer, CounterState};
//! use statecell_runtime::Store;
//!
//! # fn main() -> Result<(), statecell_runtime::StoreError> {
//! let store = Store::new(CounterState::default(), CounterReducer::new());
//!
//! store.dispatch(CounterAction::Increment)?;
//! assert_eq!(store.state(|s| s.count), 1);
//! # Ok(())
//! # }
//! ```

use statecell_core::{Action, Reducer, UnknownAction};

/// Counter state
///
/// The state is just a count. It is replaced wholesale on every
/// dispatch; `count` is never incremented in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    /// Current count value
    pub count: i64,
}

/// Counter actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    /// Increment the counter by 1
    Increment,
    /// Decrement the counter by 1
    Decrement,
    /// Reset the counter to 0
    Reset,
}

impl Action for CounterAction {
    const KNOWN_TAGS: &'static [&'static str] = &["increment", "decrement", "reset"];

    fn tag(&self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::Reset => "reset",
        }
    }
}

/// Counter reducer
///
/// Total over the counter's three tags, so it never rejects an action.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(
        &self,
        state: &CounterState,
        action: &CounterAction,
    ) -> Result<CounterState, UnknownAction> {
        let count = match action {
            CounterAction::Increment => state.count + 1,
            CounterAction::Decrement => state.count - 1,
            CounterAction::Reset => 0,
        };

        Ok(CounterState { count })
    }
}
