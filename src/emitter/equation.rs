//! Private module for selective re-export.

use std::fmt::{self, Display, Formatter};

/// A guarded continuation: receive on `channel`, then behave as the process named `target`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Term {
    pub channel: String,
    pub target: String,
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}(x).{}", self.channel, self.target)
    }
}

/// Binds a process name to the sum of its guarded continuations, e.g.
/// `Sched0x000 = b000(x).Sched0x`.
///
/// A name without continuations is bound to the inert process `0`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Equation {
    pub name: String,
    pub terms: Vec<Term>,
}

impl Equation {
    /// Renders only the right-hand side.
    pub fn sum(&self) -> String {
        if self.terms.is_empty() {
            return "0".to_string();
        }
        self.terms
            .iter()
            .map(Term::to_string)
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

impl Display for Equation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.sum())
    }
}
