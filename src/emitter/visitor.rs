//! Private module for selective re-export.

use crate::Equation;
use std::io::{self, Write};

/// A visitor to apply to every [`Equation`] as soon as the [`Emitter`](crate::Emitter) finishes
/// it.
///
/// Implementations include [`EquationWriter`] and `impl `[`FnMut`]`(&Equation)`.
///
/// # Example
///
/// ```
/// # use ccsgen::*;
/// # use ccsgen::scheduler::Scheduler;
/// let model = Scheduler::with_ring_size(2).unwrap();
/// let init_state = model.init_state();
/// let mut names = Vec::new();
/// model
///     .emitter()
///     .expand(init_state, &mut |e: &Equation| names.push(e.name.clone()))
///     .unwrap();
/// assert_eq!(names.last().unwrap(), "Sched0x");
/// ```
pub trait EquationVisitor {
    /// The method to apply to every [`Equation`].
    fn visit(&mut self, equation: &Equation) -> io::Result<()>;
}

impl<F> EquationVisitor for F
where
    F: FnMut(&Equation),
{
    fn visit(&mut self, equation: &Equation) -> io::Result<()> {
        self(equation);
        Ok(())
    }
}

/// An [`EquationVisitor`] that writes each equation on its own line.
pub struct EquationWriter<W> {
    writer: W,
}

impl<W: Write> EquationWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EquationVisitor for EquationWriter<W> {
    fn visit(&mut self, equation: &Equation) -> io::Result<()> {
        writeln!(self.writer, "{}", equation)
    }
}
