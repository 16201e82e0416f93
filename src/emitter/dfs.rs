//! Private module for selective re-export.

use crate::{Emitter, Equation, EquationVisitor, Model, Term};
use std::io;
use std::time::Instant;

// A state whose successors are being explored. `cursor` indexes the next transition to follow.
struct Frame<M: Model> {
    state: M::State,
    transitions: Vec<(M::Action, M::State)>,
    cursor: usize,
}

impl<M> Emitter<M>
where
    M: Model,
    M::Action: Clone,
{
    /// Emits the equation of `state` and of every state reachable from it that this emitter has
    /// not expanded before. Does nothing if `state` itself was already expanded.
    ///
    /// Successors are explored in the order of [`Model::actions`], and a state's equation is
    /// handed to the visitor only after all of its newly reached successors have been, i.e. in
    /// depth-first post-order. The traversal keeps its own stack, so the depth of the state graph
    /// is not limited by the call stack.
    pub fn expand<V>(&mut self, state: M::State, visitor: &mut V) -> io::Result<()>
    where
        V: EquationVisitor + ?Sized,
    {
        // Marking a state before exploring it absorbs cycles back to the state.
        if !self.visited.insert(self.model.state_key(&state)) {
            log::trace!(
                "Already expanded {}.",
                self.model.format_state(&state)
            );
            return Ok(());
        }

        let started = Instant::now();
        let mut pending = vec![self.frame(state)];
        self.max_depth = self.max_depth.max(pending.len());
        while let Some(frame) = pending.last_mut() {
            if frame.cursor == frame.transitions.len() {
                if let Some(done) = pending.pop() {
                    let equation = self.equation(&done);
                    log::trace!("Emitting {}.", equation.name);
                    self.equation_count += 1;
                    if let Err(err) = visitor.visit(&equation) {
                        self.record_elapsed(started);
                        return Err(err);
                    }
                }
                continue;
            }

            let next_state = &frame.transitions[frame.cursor].1;
            frame.cursor += 1;
            if self.visited.insert(self.model.state_key(next_state)) {
                let next_frame = self.frame(next_state.clone());
                pending.push(next_frame);
                self.max_depth = self.max_depth.max(pending.len());
            }
        }
        self.record_elapsed(started);
        Ok(())
    }

    fn frame(&mut self, state: M::State) -> Frame<M> {
        let transitions = self.model.transitions(&state);
        log::trace!(
            "Expanding {}. transitions={}",
            self.model.format_state(&state),
            transitions.len()
        );
        self.transition_count += transitions.len();
        Frame {
            state,
            transitions,
            cursor: 0,
        }
    }

    fn equation(&self, frame: &Frame<M>) -> Equation {
        Equation {
            name: self.model.format_state(&frame.state),
            terms: frame
                .transitions
                .iter()
                .map(|(action, next_state)| Term {
                    channel: self.model.format_action(action),
                    target: self.model.format_state(next_state),
                })
                .collect(),
        }
    }
}
