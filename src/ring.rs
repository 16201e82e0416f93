//! A token ring of `N` cells.
//!
//! Every cell runs the same five-equation template (`A` through `E`) over four channels. Cell `i`
//! owns `a{i}`, `b{i}` and `c{i}`, and uses its predecessor's `c` channel as its fourth argument, so
//! the cells are wired into a cycle. Cell 0 starts in `A` (holding the token) and the others start
//! in `D`. All `c` channels are restricted in the composed system `S`.

use crate::RingSize;
use std::io::{self, Write};

/// The process templates shared by every cell.
pub const TEMPLATES: [&str; 5] = [
    "A(a,b,c,d) = a(x).C(a,b,c,d)",
    "B(a,b,c,d) = b(x).A(a,b,c,d)",
    "C(a,b,c,d) = c(x).E(a,b,c,d)",
    "D(a,b,c,d) = d'<d>.A(a,b,c,d)",
    "E(a,b,c,d) = b(x).D(a,b,c,d) + d'<d>.B(a,b,c,d)",
];

/// Generates the token ring specification.
#[derive(Clone, Debug)]
pub struct Cycler {
    ring_size: RingSize,
}

impl Cycler {
    pub fn new(ring_size: RingSize) -> Self {
        Cycler { ring_size }
    }

    /// The channel arguments of cell `i`.
    pub fn args(&self, i: usize) -> String {
        let n = self.ring_size.get();
        let previous = (i + n - 1) % n;
        format!("a{:03},b{:03},c{:03},c{:03}", i, i, i, previous)
    }

    /// The composed system: every `c` channel restricted around the parallel cells.
    pub fn system(&self) -> String {
        let mut system = String::from("S = ");
        for i in 0..self.ring_size.get() {
            system.push_str(&format!("$c{:03}.", i));
        }
        system.push_str(&format!("(A({})", self.args(0)));
        for i in 1..self.ring_size.get() {
            system.push_str(&format!("| D({})", self.args(i)));
        }
        system.push(')');
        system
    }

    /// Writes the templates, the composed system and the closing reference to `S`.
    pub fn emit_spec<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        log::debug!("Emitting a ring of {} cells.", self.ring_size);
        for template in TEMPLATES {
            writeln!(writer, "{}", template)?;
        }
        writeln!(writer, "{}", self.system())?;
        writeln!(writer, "S")
    }
}
