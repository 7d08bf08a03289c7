//! Integration tests for the Store dispatch path
//!
//! Covers the dispatch contract end to end: sequential application,
//! error propagation with the cell left untouched, and explicit observer
//! subscription.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use serde::Deserialize;
use statecell_core::{Action, Reducer, UnknownAction};
use statecell_runtime::{RawAction, Store, StoreError};
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ListAction {
    /// Append a value to the list
    Pushed { value: u32 },
    /// Drop every value
    Cleared,
    /// Part of the action vocabulary, but outside this reducer's set
    Archived,
}

impl Action for ListAction {
    const KNOWN_TAGS: &'static [&'static str] = &["pushed", "cleared", "archived"];

    fn tag(&self) -> &'static str {
        match self {
            Self::Pushed { .. } => "pushed",
            Self::Cleared => "cleared",
            Self::Archived => "archived",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ListState {
    values: Vec<u32>,
}

/// Recognizes `pushed` and `cleared` only; `archived` belongs to a
/// collaborator this reducer does not implement.
struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Action = ListAction;

    fn reduce(&self, state: &ListState, action: &ListAction) -> Result<ListState, UnknownAction> {
        match action {
            ListAction::Pushed { value } => {
                let mut values = state.values.clone();
                values.push(*value);
                Ok(ListState { values })
            }
            ListAction::Cleared => Ok(ListState::default()),
            ListAction::Archived => Err(UnknownAction::new(action.tag())),
        }
    }
}

fn new_store() -> Store<ListState, ListAction, ListReducer> {
    Store::new(ListState::default(), ListReducer)
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn dispatch_replaces_state() {
    let store = new_store();

    store.dispatch(ListAction::Pushed { value: 1 }).unwrap();
    store.dispatch(ListAction::Pushed { value: 2 }).unwrap();

    assert_eq!(store.snapshot().values, vec![1, 2]);

    store.dispatch(ListAction::Cleared).unwrap();
    assert!(store.state(|s| s.values.is_empty()));
}

#[test]
fn dispatch_applies_in_order() {
    let store = new_store();

    store
        .dispatch_all((0..100).map(|value| ListAction::Pushed { value }))
        .unwrap();

    assert_eq!(store.snapshot().values, (0..100).collect::<Vec<_>>());
}

#[test]
fn unrecognized_action_fails_and_leaves_state_unchanged() {
    let store = new_store();
    store.dispatch(ListAction::Pushed { value: 1 }).unwrap();
    let before = store.snapshot();

    let err = store.dispatch(ListAction::Archived).unwrap_err();
    match err {
        StoreError::UnknownAction(unknown) => assert_eq!(unknown.tag, "archived"),
        other => panic!("expected UnknownAction, got {other:?}"),
    }

    assert_eq!(store.snapshot(), before);
}

#[test]
fn dispatch_all_stops_at_first_failure() {
    let store = new_store();

    let result = store.dispatch_all([
        ListAction::Pushed { value: 1 },
        ListAction::Archived,
        ListAction::Pushed { value: 2 },
    ]);

    assert!(result.is_err());
    // The action before the failure stays applied; the one after never ran.
    assert_eq!(store.snapshot().values, vec![1]);
}

#[test]
fn concurrent_dispatchers_serialize() {
    let store = new_store();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || {
                for value in 0..50 {
                    store.dispatch(ListAction::Pushed { value }).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("dispatcher thread panicked");
    }

    // Every dispatch landed exactly once; no read-modify-write was lost.
    assert_eq!(store.state(|s| s.values.len()), 8 * 50);
}

#[test]
fn clones_share_the_cell() {
    let store = new_store();
    let other = store.clone();

    store.dispatch(ListAction::Pushed { value: 7 }).unwrap();

    assert_eq!(other.snapshot().values, vec![7]);
}

// ============================================================================
// Raw dispatch
// ============================================================================

#[test]
fn raw_dispatch_with_known_tag() {
    let store = new_store();

    store
        .dispatch_raw(RawAction::new("pushed").with_field("value", 3))
        .unwrap();

    assert_eq!(store.snapshot().values, vec![3]);
}

#[test]
fn raw_dispatch_with_unknown_tag() {
    let store = new_store();
    store.dispatch(ListAction::Pushed { value: 1 }).unwrap();
    let before = store.snapshot();

    let err = store
        .dispatch_raw(RawAction::new("pushed662").with_field("value", 3))
        .unwrap_err();

    match err {
        StoreError::UnknownAction(unknown) => assert_eq!(unknown.tag, "pushed662"),
        other => panic!("expected UnknownAction, got {other:?}"),
    }
    assert_eq!(store.snapshot(), before);
}

#[test]
fn raw_dispatch_with_malformed_payload() {
    let store = new_store();

    let err = store
        .dispatch_raw(RawAction::new("pushed").with_field("value", "three"))
        .unwrap_err();

    assert!(matches!(err, StoreError::MalformedAction(_)));
    assert!(store.state(|s| s.values.is_empty()));
}

// ============================================================================
// Subscriptions
// ============================================================================

#[test]
fn observers_see_every_new_state() {
    let store = new_store();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let seen_by_observer = Arc::clone(&seen);
    store.subscribe(move |state: &ListState| {
        seen_by_observer.lock().unwrap().push(state.values.clone());
    });

    store.dispatch(ListAction::Pushed { value: 1 }).unwrap();
    store.dispatch(ListAction::Pushed { value: 2 }).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(*seen, vec![vec![1], vec![1, 2]]);
}

#[test]
fn failed_dispatch_notifies_nobody() {
    let store = new_store();
    let calls = Arc::new(Mutex::new(0_u32));

    let calls_by_observer = Arc::clone(&calls);
    store.subscribe(move |_: &ListState| {
        *calls_by_observer.lock().unwrap() += 1;
    });

    let _ = store.dispatch(ListAction::Archived);
    let _ = store.dispatch_raw(RawAction::new("bogus"));

    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = new_store();
    let calls = Arc::new(Mutex::new(0_u32));

    let calls_by_observer = Arc::clone(&calls);
    let subscription = store.subscribe(move |_: &ListState| {
        *calls_by_observer.lock().unwrap() += 1;
    });

    store.dispatch(ListAction::Pushed { value: 1 }).unwrap();
    assert!(store.unsubscribe(subscription));
    store.dispatch(ListAction::Pushed { value: 2 }).unwrap();

    assert_eq!(*calls.lock().unwrap(), 1);
    assert_eq!(store.observer_count(), 0);

    // A second unsubscribe with the same handle is a no-op.
    assert!(!store.unsubscribe(subscription));
}

#[test]
fn observers_run_in_registration_order() {
    let store = new_store();
    let order = Arc::new(Mutex::new(Vec::new()));

    for label in ["first", "second", "third"] {
        let order = Arc::clone(&order);
        store.subscribe(move |_: &ListState| order.lock().unwrap().push(label));
    }

    store.dispatch(ListAction::Cleared).unwrap();

    assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
}
