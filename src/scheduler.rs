//! A scheduler for a ring of processes.
//!
//! A state `(i, X)` records the current holder `i` and the set `X` of processes with a pending
//! request. From `(i, X)` the scheduler can:
//!
//! - serve any pending request `j ∈ X` (action `b_j`), reaching `(i, X \ {j})`, or
//! - if the holder has no pending request itself, register it and pass the token to the next
//!   process in the ring (action `a_i`), reaching `((i + 1) mod N, X ∪ {i})`.
//!
//! Serving actions come first in ascending order of `j`, and the passing action, when enabled, is
//! always last. Each state is named `Sched<i>x<j1><j2>...` with the pending requests in ascending
//! order and padded to three digits.

use crate::util::RequestSet;
use crate::{Model, Result, RingSize};
use std::fmt::{self, Display, Formatter};

/// The scheduler model for a fixed ring size.
#[derive(Clone, Debug)]
pub struct Scheduler {
    ring_size: RingSize,
}

impl Scheduler {
    pub fn new(ring_size: RingSize) -> Self {
        Scheduler { ring_size }
    }

    /// Convenience for [`Scheduler::new`]. Fails if `n` is zero.
    pub fn with_ring_size(n: usize) -> Result<Self> {
        Ok(Scheduler::new(RingSize::new(n)?))
    }

    pub fn ring_size(&self) -> RingSize {
        self.ring_size
    }
}

/// The current holder and the processes waiting to be served.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SchedulerState {
    pub holder: usize,
    pub requests: RequestSet,
}

impl SchedulerState {
    pub fn new(holder: usize, requests: impl IntoIterator<Item = usize>) -> Self {
        SchedulerState {
            holder,
            requests: requests.into_iter().collect(),
        }
    }

    /// The canonical identity of this state.
    pub fn key(&self) -> StateKey {
        StateKey {
            holder: self.holder,
            requests: self.requests.sorted(),
        }
    }
}

/// Identifies a [`SchedulerState`] by value: the holder plus the pending requests in ascending
/// order. Equal for any two states with the same holder and the same request set, however the set
/// was built.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StateKey {
    pub holder: usize,
    pub requests: Vec<usize>,
}

impl Display for StateKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Sched{}x", self.holder)?;
        for j in &self.requests {
            write!(f, "{:03}", j)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SchedulerAction {
    /// `a_i`: the holder registers its own request and passes the token on.
    Pass(usize),
    /// `b_j`: a pending request is served.
    Serve(usize),
}

impl Display for SchedulerAction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SchedulerAction::Pass(i) => write!(f, "a{:03}", i),
            SchedulerAction::Serve(j) => write!(f, "b{:03}", j),
        }
    }
}

impl Model for Scheduler {
    type State = SchedulerState;
    type Action = SchedulerAction;
    type Key = StateKey;

    fn init_state(&self) -> Self::State {
        SchedulerState::new(0, [])
    }

    fn actions(&self, state: &Self::State, actions: &mut Vec<Self::Action>) {
        for j in state.requests.sorted() {
            actions.push(SchedulerAction::Serve(j));
        }
        if !state.requests.contains(state.holder) {
            actions.push(SchedulerAction::Pass(state.holder));
        }
    }

    fn next_state(&self, last_state: &Self::State, action: Self::Action) -> Option<Self::State> {
        match action {
            SchedulerAction::Serve(j) => Some(SchedulerState {
                holder: last_state.holder,
                requests: last_state.requests.without(j),
            }),
            SchedulerAction::Pass(i) => Some(SchedulerState {
                holder: (i + 1) % self.ring_size.get(),
                requests: last_state.requests.with(i),
            }),
        }
    }

    fn state_key(&self, state: &Self::State) -> Self::Key {
        state.key()
    }

    fn format_state(&self, state: &Self::State) -> String {
        state.key().to_string()
    }

    fn format_action(&self, action: &Self::Action) -> String {
        action.to_string()
    }

    fn root_name(&self) -> String {
        "Scheduler".to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{reachable_states, Equation};
    use std::collections::HashSet;

    fn spec(n: usize) -> String {
        let mut output = Vec::new();
        Scheduler::with_ring_size(n)
            .unwrap()
            .emitter()
            .emit_spec(&mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn equations(n: usize) -> Vec<Equation> {
        Scheduler::with_ring_size(n).unwrap().emitter().equations()
    }

    fn transitions(n: usize, state: SchedulerState) -> Vec<(String, String)> {
        let model = Scheduler::with_ring_size(n).unwrap();
        model
            .transitions(&state)
            .into_iter()
            .map(|(a, s)| (model.format_action(&a), model.format_state(&s)))
            .collect()
    }

    fn pair(action: &str, state: &str) -> (String, String) {
        (action.to_string(), state.to_string())
    }

    #[test]
    fn key_ignores_insertion_order() {
        let orders = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        let keys: HashSet<StateKey> = orders
            .iter()
            .map(|order| {
                let mut requests = RequestSet::new();
                for j in order {
                    requests.insert(*j);
                }
                SchedulerState { holder: 1, requests }.key()
            })
            .collect();
        assert_eq!(keys.len(), 1);
        assert_eq!(
            keys.into_iter().next().unwrap().to_string(),
            "Sched1x000001002"
        );
    }

    #[test]
    fn key_distinguishes_holder_and_requests() {
        let key = SchedulerState::new(0, [1]).key();
        assert_ne!(key, SchedulerState::new(1, [1]).key());
        assert_ne!(key, SchedulerState::new(0, [1, 2]).key());
        assert_ne!(key, SchedulerState::new(0, []).key());
        assert_eq!(key, SchedulerState::new(0, [1, 1]).key());
    }

    #[test]
    fn empty_requests_only_pass() {
        assert_eq!(
            transitions(3, SchedulerState::new(0, [])),
            vec![pair("a000", "Sched1x000")]
        );
        // The ring wraps around.
        assert_eq!(
            transitions(3, SchedulerState::new(2, [])),
            vec![pair("a002", "Sched0x002")]
        );
        assert_eq!(
            transitions(1, SchedulerState::new(0, [])),
            vec![pair("a000", "Sched0x000")]
        );
    }

    #[test]
    fn serves_in_ascending_order_then_passes() {
        assert_eq!(
            transitions(3, SchedulerState::new(1, [2, 0])),
            vec![
                pair("b000", "Sched1x002"),
                pair("b002", "Sched1x000"),
                pair("a001", "Sched2x000001002"),
            ]
        );
    }

    #[test]
    fn pending_holder_does_not_pass() {
        assert_eq!(
            transitions(3, SchedulerState::new(1, [1, 2])),
            vec![pair("b001", "Sched1x002"), pair("b002", "Sched1x001")]
        );
    }

    #[test]
    fn emits_exact_spec_for_one_process() {
        assert_eq!(
            spec(1),
            "\
Scheduler = Sched0x
Sched0x000 = b000(x).Sched0x
Sched0x = a000(x).Sched0x000
Scheduler
"
        );
    }

    #[test]
    fn emits_exact_spec_for_two_processes() {
        assert_eq!(
            spec(2),
            "\
Scheduler = Sched0x
Sched1x001 = b001(x).Sched1x
Sched1x000001 = b000(x).Sched1x001 + b001(x).Sched1x000
Sched0x001 = b001(x).Sched0x + a000(x).Sched1x000001
Sched1x = a001(x).Sched0x001
Sched0x000 = b000(x).Sched0x
Sched0x000001 = b000(x).Sched0x001 + b001(x).Sched0x000
Sched1x000 = b000(x).Sched1x + a001(x).Sched0x000001
Sched0x = a000(x).Sched1x000
Scheduler
"
        );
    }

    #[test]
    fn output_is_deterministic() {
        for n in 1..=5 {
            assert_eq!(spec(n), spec(n));
        }
    }

    #[test]
    fn emits_every_reachable_state_once() {
        for (n, expected) in [(1, 2), (2, 8), (3, 24), (4, 64)] {
            let model = Scheduler::with_ring_size(n).unwrap();
            let reachable: HashSet<String> = reachable_states(&model)
                .iter()
                .map(|s| model.format_state(s))
                .collect();
            let equations = equations(n);
            let names: HashSet<String> = equations.iter().map(|e| e.name.clone()).collect();
            assert_eq!(names.len(), equations.len(), "duplicate equation for n={}", n);
            assert_eq!(names, reachable);
            assert_eq!(equations.len(), expected);
        }
    }

    #[test]
    fn right_hand_sides_are_well_formed() {
        for n in 1..=4 {
            for equation in equations(n) {
                let sum = equation.sum();
                assert!(!sum.starts_with(" + ") && !sum.ends_with(" + "), "{}", equation);
                let terms: Vec<&str> = sum.split(" + ").collect();
                assert!(!terms.is_empty());
                assert_eq!(terms.len(), equation.terms.len());
                for term in terms {
                    assert!(!term.is_empty(), "{}", equation);
                    assert!(term.contains("(x).Sched"), "{}", equation);
                }
            }
        }
    }

    #[test]
    fn pending_holder_equations_have_no_pass_term() {
        let model = Scheduler::with_ring_size(4).unwrap();
        let by_name: std::collections::HashMap<String, SchedulerState> = reachable_states(&model)
            .into_iter()
            .map(|s| (model.format_state(&s), s))
            .collect();
        for equation in equations(4) {
            let state = &by_name[&equation.name];
            let channels: Vec<&str> = equation.terms.iter().map(|t| t.channel.as_str()).collect();
            if state.requests.contains(state.holder) {
                assert_eq!(channels.len(), state.requests.len());
                assert!(channels.iter().all(|c| c.starts_with('b')));
            } else {
                assert_eq!(channels.len(), state.requests.len() + 1);
                assert_eq!(
                    channels.last().copied(),
                    Some(format!("a{:03}", state.holder).as_str())
                );
                assert!(channels[..channels.len() - 1].iter().all(|c| c.starts_with('b')));
            }
        }
    }
}
