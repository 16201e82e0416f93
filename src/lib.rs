//! A library for emitting guarded-sum process specifications from finite state machines.
//!
//! A [`Model`] describes a transition system: an initial state, the ordered actions enabled in
//! each state, and the state each action leads to. An [`Emitter`] walks every state reachable
//! from the initial one and produces one [`Equation`] per distinct state, of the form
//! `Name = act(x).Next + ...`. Equations come out in depth-first post-order, so a state's
//! equation only appears once every state it reaches (that was not already emitted) has been
//! emitted.
//!
//! A small example follows.
//!
//! ```rust
//! use ccsgen::*;
//!
//! struct BinaryClock;
//!
//! impl Model for BinaryClock {
//!     type State = u8;
//!     type Action = &'static str;
//!     type Key = u8;
//!
//!     fn init_state(&self) -> Self::State { 0 }
//!
//!     fn actions(&self, _state: &Self::State, actions: &mut Vec<Self::Action>) {
//!         actions.push("flip");
//!     }
//!
//!     fn next_state(&self, state: &Self::State, _action: Self::Action) -> Option<Self::State> {
//!         Some(1 - *state)
//!     }
//!
//!     fn state_key(&self, state: &Self::State) -> Self::Key { *state }
//!     fn format_state(&self, state: &Self::State) -> String { format!("Clock{}", state) }
//!     fn format_action(&self, action: &Self::Action) -> String { action.to_string() }
//! }
//!
//! let equations: Vec<String> = BinaryClock.emitter()
//!     .equations()
//!     .iter()
//!     .map(|e| e.to_string())
//!     .collect();
//! assert_eq!(equations, vec![
//!     "Clock1 = flip(x).Clock0",
//!     "Clock0 = flip(x).Clock1",
//! ]);
//! ```
//!
//! The crate ships two concrete generators: the [`scheduler`] model, whose states are a token
//! holder plus a set of pending requests, and the fixed-shape [`ring`] template.

use std::hash::Hash;

mod config;
mod emitter;
mod error;
mod report;
pub mod ring;
pub mod scheduler;
#[cfg(test)]
mod test_util;
pub mod util;

pub use config::*;
pub use emitter::*;
pub use error::*;
pub use report::*;

/// Describes a finite transition system whose reachable states become equations.
pub trait Model: Sized {
    /// The type of state upon which this model operates.
    type State: Clone;

    /// The type of action that transitions between states.
    type Action;

    /// An exact, canonical identity for a state. Two states with equal content must map to equal
    /// keys regardless of how they were constructed.
    type Key: Eq + Hash;

    /// Returns the state that emission starts from.
    fn init_state(&self) -> Self::State;

    /// Collects the actions enabled in a state, in the order their terms should be written.
    fn actions(&self, state: &Self::State, actions: &mut Vec<Self::Action>);

    /// Converts a previous state and action to a resulting state. [`None`] indicates that the
    /// action does not change the state.
    fn next_state(&self, last_state: &Self::State, action: Self::Action) -> Option<Self::State>;

    /// Returns the memoization key for a state.
    fn state_key(&self, state: &Self::State) -> Self::Key;

    /// Returns the process name that identifies a state in the emitted text.
    fn format_state(&self, state: &Self::State) -> String;

    /// Returns the channel name of an action.
    fn format_action(&self, action: &Self::Action) -> String;

    /// The name bound to the initial state by the specification header.
    fn root_name(&self) -> String {
        "Root".to_string()
    }

    /// Pairs each enabled action with the state it leads to, preserving action order.
    fn transitions(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>
    where
        Self::Action: Clone,
    {
        let mut actions = Vec::new();
        self.actions(state, &mut actions);
        actions
            .into_iter()
            .map(|action| {
                let next_state = self
                    .next_state(state, action.clone())
                    .unwrap_or_else(|| state.clone());
                (action, next_state)
            })
            .collect()
    }

    /// Initializes a fresh emitter for this model.
    fn emitter(self) -> Emitter<Self> {
        Emitter::new(self)
    }
}
