//! # Statecell Core
//!
//! Core traits and types for the statecell state container.
//!
//! This crate provides the fundamental abstractions for a single-owner
//! state container with a reducer-style update discipline.
//!
//! ## Core Concepts
//!
//! - **State**: the single source-of-truth value held by an owner
//! - **Action**: a tagged description of an intended state transition
//! - **Reducer**: pure function `(State, Action) → State`
//!
//! A reducer derives its result from nothing but its two parameters and
//! returns a fresh value instead of mutating its input, so replaying the
//! same action sequence from the same initial state always reproduces the
//! same final state.
//!
//! ## Example
//!
//! ```
//! use statecell_core::{action::Action, error::UnknownAction, reducer::Reducer};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug, serde::Deserialize)]
//! #[serde(tag = "type", rename_all = "lowercase")]
//! enum CounterAction {
//!     Incremented,
//!     Decremented,
//! }
//!
//! impl Action for CounterAction {
//!     const KNOWN_TAGS: &'static [&'static str] = &["incremented", "decremented"];
//!
//!     fn tag(&self) -> &'static str {
//!         match self {
//!             Self::Incremented => "incremented",
//!             Self::Decremented => "decremented",
//!         }
//!     }
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn reduce(
//!         &self,
//!         state: &CounterState,
//!         action: &CounterAction,
//!     ) -> Result<CounterState, UnknownAction> {
//!         let count = match action {
//!             CounterAction::Incremented => state.count + 1,
//!             CounterAction::Decremented => state.count - 1,
//!         };
//!         Ok(CounterState { count })
//!     }
//! }
//!
//! let next = CounterReducer.reduce(&CounterState { count: 0 }, &CounterAction::Incremented);
//! assert_eq!(next, Ok(CounterState { count: 1 }));
//! ```

/// State module - requirements on values held by a state cell
///
/// State is owned data, replaced wholesale on every update and never
/// mutated in place. Anything `Clone + Debug` qualifies; structural
/// equality (`PartialEq`) is additionally required wherever determinism
/// is asserted.
pub mod state {
    /// Marker trait for values usable as the held state of a cell
    ///
    /// Blanket-implemented; you never implement this by hand.
    pub trait State: Clone + std::fmt::Debug {}

    impl<T: Clone + std::fmt::Debug> State for T {}
}

/// Action module - tagged descriptions of state transitions
///
/// An action is a tagged record: a `type` discriminant plus arbitrary
/// payload fields. Domain code uses a typed enum implementing [`Action`];
/// untyped boundaries (decoded JSON, test fixtures) use [`RawAction`] and
/// decode it into the typed form, failing on tags outside the known set.
pub mod action {
    use crate::error::UnknownAction;
    use serde::de::DeserializeOwned;
    use serde_json::{Map, Value};
    use thiserror::Error;

    /// A tagged description of an intended state transition
    ///
    /// Implementors are almost always internally tagged serde enums:
    ///
    /// ```ignore
    /// #[derive(Clone, Debug, Serialize, Deserialize)]
    /// #[serde(tag = "type", rename_all = "lowercase")]
    /// enum TaskAction {
    ///     Added { id: u32, text: String },
    ///     Deleted { id: u32 },
    /// }
    /// ```
    ///
    /// `KNOWN_TAGS` declares the full set of tags the type recognizes and
    /// must match the serde variant names; `tag()` returns the
    /// discriminant of one value.
    pub trait Action: Clone + std::fmt::Debug {
        /// Every tag this action type recognizes
        const KNOWN_TAGS: &'static [&'static str];

        /// The `type` discriminant of this action value
        fn tag(&self) -> &'static str;

        /// Whether `tag` names a recognized action of this type
        #[must_use]
        fn recognizes(tag: &str) -> bool {
            Self::KNOWN_TAGS.contains(&tag)
        }
    }

    /// An untyped tagged record: `{ "type": <tag>, ...payload }`
    ///
    /// This is the boundary form of an action, before it has been checked
    /// against a reducer's known tag set. It exists so that an
    /// *unrecognized* tag is representable at all: a typed action enum
    /// cannot carry one.
    #[derive(Clone, Debug, PartialEq)]
    pub struct RawAction {
        /// The `type` discriminant
        pub tag: String,

        /// Payload fields, excluding the `type` discriminant itself
        pub payload: Map<String, Value>,
    }

    impl RawAction {
        /// Create a raw action with the given tag and no payload fields
        #[must_use]
        pub fn new(tag: impl Into<String>) -> Self {
            Self {
                tag: tag.into(),
                payload: Map::new(),
            }
        }

        /// Add a payload field
        #[must_use]
        pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
            self.payload.insert(key.into(), value.into());
            self
        }

        /// Build a raw action from a JSON value
        ///
        /// The value must be an object with a string `type` field; every
        /// other field becomes payload.
        ///
        /// # Errors
        ///
        /// Returns [`ActionDecodeError::MissingTag`] if the value is not an
        /// object or has no string `type` field.
        pub fn from_value(value: Value) -> Result<Self, ActionDecodeError> {
            let Value::Object(mut fields) = value else {
                return Err(ActionDecodeError::MissingTag);
            };

            match fields.remove("type") {
                Some(Value::String(tag)) => Ok(Self {
                    tag,
                    payload: fields,
                }),
                _ => Err(ActionDecodeError::MissingTag),
            }
        }

        /// Decode this record into a typed action
        ///
        /// The tag is checked against `A::KNOWN_TAGS` first, so an
        /// unrecognized tag is reported as [`UnknownAction`] rather than a
        /// generic deserialization failure.
        ///
        /// # Errors
        ///
        /// - [`ActionDecodeError::UnknownTag`] if the tag is outside
        ///   `A::KNOWN_TAGS`
        /// - [`ActionDecodeError::MalformedPayload`] if the tag is known
        ///   but the payload fields do not decode into the variant
        pub fn decode<A>(&self) -> Result<A, ActionDecodeError>
        where
            A: Action + DeserializeOwned,
        {
            if !A::recognizes(&self.tag) {
                return Err(ActionDecodeError::UnknownTag(UnknownAction::new(
                    &self.tag,
                )));
            }

            let mut fields = self.payload.clone();
            fields.insert("type".to_owned(), Value::String(self.tag.clone()));

            serde_json::from_value(Value::Object(fields)).map_err(|source| {
                ActionDecodeError::MalformedPayload {
                    tag: self.tag.clone(),
                    source,
                }
            })
        }
    }

    /// Failure to decode a [`RawAction`] into a typed action
    #[derive(Error, Debug)]
    pub enum ActionDecodeError {
        /// The record's tag is outside the target type's known set
        #[error(transparent)]
        UnknownTag(UnknownAction),

        /// The record is not an object with a string `type` field
        #[error("action record must be an object with a string `type` field")]
        MissingTag,

        /// The tag is recognized but the payload fields are wrong
        #[error("malformed payload for action `{tag}`: {source}")]
        MalformedPayload {
            /// The recognized tag whose payload failed to decode
            tag: String,
            /// The underlying deserialization error
            source: serde_json::Error,
        },
    }
}

/// Reducer module - the pure transition function
///
/// Reducers contain all transition logic. They are deterministic and
/// trivially testable: equal inputs yield structurally equal outputs, and
/// the input state is never touched (the signature takes it by shared
/// reference and a fresh value is returned).
pub mod reducer {
    use crate::action::Action;
    use crate::error::UnknownAction;
    use crate::state::State;

    /// Pure transition function from `(State, Action)` to the next state
    ///
    /// # Contract
    ///
    /// - Reads nothing outside its two parameters; no clocks, no
    ///   randomness, no shared mutable state.
    /// - Returns a new state rather than mutating the input.
    /// - Total over `Action::KNOWN_TAGS`; an unrecognized tag fails with
    ///   [`UnknownAction`], which is a programmer error and fatal to the
    ///   dispatching scope, not a recoverable condition.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State: State;

        /// The action type this reducer processes
        type Action: Action;

        /// Derive the next state from the current state and an action
        ///
        /// # Errors
        ///
        /// Returns [`UnknownAction`] for an action tag outside this
        /// reducer's known set.
        fn reduce(
            &self,
            state: &Self::State,
            action: &Self::Action,
        ) -> Result<Self::State, UnknownAction>;
    }
}

/// Error module - the single failure mode of the core
pub mod error {
    use thiserror::Error;

    /// An action tag outside the reducer's known set
    ///
    /// Raised by a reducer (or by raw-action decoding) when the `type`
    /// discriminant names no declared transition. This is a programming
    /// defect, not a runtime fault: callers propagate it and let the
    /// current operation die rather than recovering locally.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    #[error("unknown action tag `{tag}`")]
    pub struct UnknownAction {
        /// The offending tag
        pub tag: String,
    }

    impl UnknownAction {
        /// Create an error carrying the offending tag
        #[must_use]
        pub fn new(tag: impl Into<String>) -> Self {
            Self { tag: tag.into() }
        }
    }
}

pub use action::{Action, ActionDecodeError, RawAction};
pub use error::UnknownAction;
pub use reducer::Reducer;
