//! # Statecell Testing
//!
//! Testing utilities and helpers for the statecell state container.
//!
//! This crate provides:
//! - A fluent Given-When-Then harness for reducers
//! - Assertion helpers for reducer outcomes
//! - Deterministic replay of action sequences
//!
//! ## Example
//!
//! ```ignore
//! use statecell_testing::ReducerTest;
//!
//! ReducerTest::new(TasksReducer)
//!     .given_state(TasksState::default())
//!     .when_action(TaskAction::Added { id: 1, text: "a".into(), done: false })
//!     .then_state(|state| {
//!         assert_eq!(state.len(), 1);
//!     })
//!     .run();
//! ```


/// Recording observer for store tests
pub mod recording;

/// Deterministic replay helpers
pub mod replay;

// Re-export commonly used items
pub use recording::StateRecorder;
pub use reducer_test::{ReducerTest, assertions};
pub use replay::{assert_deterministic, assert_idempotent, replay};
