//! Deterministic replay of action sequences
//!
//! Because reducers are referentially transparent, folding the same
//! action sequence from the same initial state always lands on the same
//! final state. These helpers make that property directly checkable.

use statecell_core::error::UnknownAction;
use statecell_core::reducer::Reducer;

/// Fold a sequence of actions through a reducer, in order
///
/// Equivalent to dispatching the actions one by one against a fresh
/// store, without the store.
///
/// # Errors
///
/// Returns the first [`UnknownAction`] rejection; actions after it are
/// not applied.
pub fn replay<R: Reducer>(
    reducer: &R,
    initial: R::State,
    actions: &[R::Action],
) -> Result<R::State, UnknownAction> {
    let mut state = initial;
    for action in actions {
        state = reducer.reduce(&state, action)?;
    }
    Ok(state)
}

/// Assert that replaying a sequence twice yields structurally equal
/// outcomes, and return the first outcome
///
/// # Panics
///
/// Panics if the two replays disagree.
pub fn assert_deterministic<R>(
    reducer: &R,
    initial: &R::State,
    actions: &[R::Action],
) -> Result<R::State, UnknownAction>
where
    R: Reducer,
    R::State: PartialEq,
{
    let first = replay(reducer, initial.clone(), actions);
    let second = replay(reducer, initial.clone(), actions);

    assert_eq!(
        first, second,
        "Replaying the same actions from the same state diverged"
    );
    first
}

/// Assert that applying `action` twice equals applying it once
///
/// Holds for transitions that fully replace their target rather than
/// merging into it.
///
/// # Panics
///
/// Panics if the reducer rejects the action or if the second application
/// changes the state again.
#[allow(clippy::expect_used)] // Test helper can use expect
pub fn assert_idempotent<R>(reducer: &R, state: &R::State, action: &R::Action)
where
    R: Reducer,
    R::State: PartialEq,
{
    let once = reducer
        .reduce(state, action)
        .expect("idempotence check needs a recognized action");
    let twice = reducer
        .reduce(&once, action)
        .expect("idempotence check needs a recognized action");

    assert_eq!(
        once, twice,
        "Applying the action a second time changed the state"
    );
}
