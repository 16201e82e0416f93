//! Private module for selective re-export.

use crate::Model;
use std::collections::{HashSet, VecDeque};

/// Enumerates every state reachable from [`Model::init_state`] in breadth-first order.
///
/// This walks the same transition relation as [`Emitter`](crate::Emitter) but shares none of its
/// bookkeeping, which makes it useful for sizing a state space before emitting it and for
/// cross-checking the emitter.
pub fn reachable_states<M>(model: &M) -> Vec<M::State>
where
    M: Model,
    M::Action: Clone,
{
    let init_state = model.init_state();
    let mut generated: HashSet<M::Key, ahash::RandomState> = HashSet::default();
    generated.insert(model.state_key(&init_state));
    let mut pending = VecDeque::from([init_state]);
    let mut reached = Vec::new();
    while let Some(state) = pending.pop_front() {
        for (_, next_state) in model.transitions(&state) {
            if generated.insert(model.state_key(&next_state)) {
                pending.push_back(next_state);
            }
        }
        reached.push(state);
    }
    log::debug!("Reached {} states breadth-first.", reached.len());
    reached
}
