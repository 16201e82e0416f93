//! Private module for selective re-export.

mod bfs;
mod dfs;
mod equation;
mod visitor;

use crate::{Model, ReportData};
use std::collections::HashSet;
use std::io::Write;
use std::time::{Duration, Instant};

pub use bfs::*;
pub use equation::*;
pub use visitor::*;

/// Generates the equations of every state reachable from the states it is asked to expand.
///
/// The emitter remembers which states it has already expanded, so asking it to expand a state
/// twice (directly or through a cycle) produces that state's equation only once. Independent
/// emitters share nothing, so separate runs do not interfere.
///
/// # Example
///
/// ```
/// use ccsgen::Model;
/// use ccsgen::scheduler::Scheduler;
///
/// let mut output = Vec::new();
/// Scheduler::with_ring_size(1)
///     .unwrap()
///     .emitter()
///     .emit_spec(&mut output)
///     .unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "\
/// Scheduler = Sched0x
/// Sched0x000 = b000(x).Sched0x
/// Sched0x = a000(x).Sched0x000
/// Scheduler
/// ");
/// ```
pub struct Emitter<M: Model> {
    model: M,
    visited: HashSet<M::Key, ahash::RandomState>,
    equation_count: usize,
    transition_count: usize,
    max_depth: usize,
    elapsed: Duration,
}

impl<M: Model> Emitter<M> {
    pub fn new(model: M) -> Self {
        Emitter {
            model,
            visited: HashSet::default(),
            equation_count: 0,
            transition_count: 0,
            max_depth: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}

impl<M> Emitter<M>
where
    M: Model,
    M::Action: Clone,
{
    /// Writes the full specification: a header binding [`Model::root_name`] to the initial state,
    /// one line per reachable state, then a line naming the root process.
    pub fn emit_spec<W: Write>(&mut self, writer: &mut W) -> std::io::Result<()> {
        let root = self.model.root_name();
        let init_state = self.model.init_state();
        log::debug!(
            "Emitting {} from {}.",
            root,
            self.model.format_state(&init_state)
        );
        writeln!(writer, "{} = {}", root, self.model.format_state(&init_state))?;
        self.expand(init_state, &mut EquationWriter::new(&mut *writer))?;
        writeln!(writer, "{}", root)?;
        log::debug!(
            "Done emitting {}. equations={}, depth={}",
            root,
            self.equation_count,
            self.max_depth
        );
        Ok(())
    }

    /// Expands the initial state and collects the resulting equations in emission order.
    pub fn equations(&mut self) -> Vec<Equation> {
        let mut equations = Vec::new();
        let init_state = self.model.init_state();
        let result = self.expand(init_state, &mut |equation: &Equation| {
            equations.push(equation.clone())
        });
        debug_assert!(result.is_ok(), "collecting into a Vec cannot fail");
        equations
    }

    /// Indicates whether a state has already been expanded by this emitter.
    pub fn is_visited(&self, state: &M::State) -> bool {
        self.visited.contains(&self.model.state_key(state))
    }

    /// Indicates how many distinct states have been expanded.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Summarizes the work done by every expansion so far.
    pub fn stats(&self) -> ReportData {
        let average_out_degree = if self.equation_count == 0 {
            0.0
        } else {
            self.transition_count as f64 / self.equation_count as f64
        };
        ReportData {
            equations: self.equation_count,
            unique_states: self.visited.len(),
            max_depth: self.max_depth,
            average_out_degree,
            duration: self.elapsed,
        }
    }

    fn record_elapsed(&mut self, started: Instant) {
        self.elapsed += started.elapsed();
    }
}
