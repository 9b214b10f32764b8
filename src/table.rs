//! Dense transition table indexed by (state, symbol).
//!
//! Each ordinary state owns one row of [`ALPHABET_SIZE`] entries, one per
//! possible tape symbol. Rows start out filled with the default rejecting
//! transition, so a machine only needs explicit entries for the pairs it
//! actually uses.

use crate::types::{Transition, ALPHABET_SIZE};

/// The transition function of a machine, stored as a dense lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    states: Vec<[Transition; ALPHABET_SIZE]>,
}

impl TransitionTable {
    /// Creates a table for `state_count` ordinary states, every entry set to
    /// the default rejecting transition.
    pub fn new(state_count: usize) -> Self {
        Self {
            states: vec![[Transition::default(); ALPHABET_SIZE]; state_count],
        }
    }

    /// Number of ordinary states the table was created with.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Installs a transition for the given (state, symbol) pair. A state
    /// index outside the table is ignored.
    pub fn set(&mut self, state: usize, symbol: u8, transition: Transition) {
        if let Some(row) = self.states.get_mut(state) {
            row[symbol as usize] = transition;
        }
    }

    /// Looks up the transition for the given (state, symbol) pair. A state
    /// index outside the table yields the default rejecting transition, so
    /// lookup never fails.
    pub fn get(&self, state: usize, symbol: u8) -> Transition {
        self.states
            .get(state)
            .map(|row| row[symbol as usize])
            .unwrap_or_default()
    }
}
