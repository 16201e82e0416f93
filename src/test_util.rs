//! Utilities for tests.

use crate::Model;

/// A machine that cycles between two states, with a self-loop on the high state.
pub mod binary_clock {
    use super::*;

    pub struct BinaryClock;

    #[derive(Clone, Debug, PartialEq)]
    pub enum BinaryClockAction {
        GoLow,
        GoHigh,
    }

    pub type BinaryClockState = u8;

    impl Model for BinaryClock {
        type State = BinaryClockState;
        type Action = BinaryClockAction;
        type Key = BinaryClockState;

        fn init_state(&self) -> Self::State {
            0
        }

        fn actions(&self, state: &Self::State, actions: &mut Vec<Self::Action>) {
            actions.push(BinaryClockAction::GoHigh);
            if *state == 1 {
                actions.push(BinaryClockAction::GoLow);
            }
        }

        fn next_state(&self, _state: &Self::State, action: Self::Action) -> Option<Self::State> {
            match action {
                BinaryClockAction::GoLow => Some(0),
                BinaryClockAction::GoHigh => Some(1),
            }
        }

        fn state_key(&self, state: &Self::State) -> Self::Key {
            *state
        }

        fn format_state(&self, state: &Self::State) -> String {
            format!("Clock{}", state)
        }

        fn format_action(&self, action: &Self::Action) -> String {
            match action {
                BinaryClockAction::GoLow => "low",
                BinaryClockAction::GoHigh => "high",
            }
            .to_string()
        }
    }
}

/// A counter that increments up to a bound and can reset to zero from any value.
pub mod bounded_counter {
    use super::*;

    pub struct BoundedCounter {
        pub max: usize,
    }

    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum CounterAction {
        Increment,
        Reset,
    }

    impl Model for BoundedCounter {
        type State = usize;
        type Action = CounterAction;
        type Key = usize;

        fn init_state(&self) -> Self::State {
            0
        }

        fn actions(&self, state: &Self::State, actions: &mut Vec<Self::Action>) {
            if *state < self.max {
                actions.push(CounterAction::Increment);
            }
            actions.push(CounterAction::Reset);
        }

        fn next_state(&self, state: &Self::State, action: Self::Action) -> Option<Self::State> {
            match action {
                CounterAction::Increment => Some(state + 1),
                CounterAction::Reset if *state == 0 => None,
                CounterAction::Reset => Some(0),
            }
        }

        fn state_key(&self, state: &Self::State) -> Self::Key {
            *state
        }

        fn format_state(&self, state: &Self::State) -> String {
            format!("Count{}", state)
        }

        fn format_action(&self, action: &Self::Action) -> String {
            match action {
                CounterAction::Increment => "inc",
                CounterAction::Reset => "reset",
            }
            .to_string()
        }

        fn root_name(&self) -> String {
            "Counter".to_string()
        }
    }
}
