//! Execution tracing.
//!
//! A [`Configuration`] is a point-in-time snapshot of a running machine. The
//! machine hands snapshots to a [`TraceSink`] as it runs; what the sink does
//! with them (print, collect, count) is up to the caller.

use crate::types::{State, Symbol, BLANK_SYMBOL};
use std::fmt;

/// A snapshot of the machine between steps: step counter, current state,
/// head position, and the tape contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration<'a> {
    /// Steps executed so far.
    pub step: usize,
    /// The state the machine is in.
    pub state: State,
    /// The head position, counted from the left end of the tape.
    pub head: usize,
    /// The allocated tape cells.
    pub cells: &'a [Symbol],
}

impl fmt::Display for Configuration<'_> {
    /// Renders one trace line: the step counter right-aligned to five
    /// columns, a separator, then one three-column field per tape cell. The
    /// cell under the head shows the current state in brackets in place of
    /// its symbol; blank cells are left empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>5} | ", self.step)?;
        for (index, &cell) in self.cells.iter().enumerate() {
            if index == self.head {
                write!(f, "[{}]", self.state)?;
            } else if cell == BLANK_SYMBOL {
                f.write_str("   ")?;
            } else {
                write!(f, " {} ", char::from(cell))?;
            }
        }
        Ok(())
    }
}

/// Receives configuration snapshots during a traced run.
pub trait TraceSink {
    /// Called once before the first step and once after every step.
    fn record(&mut self, configuration: &Configuration<'_>);
}

impl<F: FnMut(&Configuration<'_>)> TraceSink for F {
    fn record(&mut self, configuration: &Configuration<'_>) {
        self(configuration)
    }
}
