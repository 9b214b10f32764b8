//! This module defines the core data types used throughout the Turing machine
//! interpreter: tape symbols, machine states, transitions, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A tape symbol. The alphabet is the full byte range; `BLANK_SYMBOL` marks
/// cells that were never written.
pub type Symbol = u8;

/// The blank symbol stored in unwritten tape cells.
pub const BLANK_SYMBOL: Symbol = 0;

/// The byte used in table files to denote the blank symbol.
pub const INPUT_BLANK_SYMBOL: u8 = b'_';

/// Number of distinct tape symbols, and the width of one transition table row.
pub const ALPHABET_SIZE: usize = 256;

/// A machine state: either an index into the transition table or one of the
/// two terminal sentinels.
///
/// The sentinels never have transition table entries; they are only ever
/// written into the current-state field as the target of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    /// An ordinary state, indexing into the transition table.
    Ordinary(usize),
    /// Terminal: the machine accepted its input.
    Accept,
    /// Terminal: the machine rejected its input.
    Reject,
}

impl State {
    /// Every machine starts in ordinary state 0.
    pub const START: State = State::Ordinary(0);

    /// Numeric encoding of the accept sentinel in table files.
    pub const ACCEPT_ENCODING: i64 = -2;
    /// Numeric encoding of the reject sentinel in table files.
    pub const REJECT_ENCODING: i64 = -1;

    /// Decodes a state number as written in a table file: non-negative values
    /// are ordinary states, `-2` is accept, `-1` is reject.
    pub fn from_encoding(value: i64) -> Option<State> {
        match value {
            Self::ACCEPT_ENCODING => Some(State::Accept),
            Self::REJECT_ENCODING => Some(State::Reject),
            _ => usize::try_from(value).ok().map(State::Ordinary),
        }
    }

    /// Whether this state ends the computation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Accept | State::Reject)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Ordinary(index) => write!(f, "{index}"),
            State::Accept => f.write_str("A"),
            State::Reject => f.write_str("R"),
        }
    }
}

/// The two directions a head move can take. The tape never grows leftward,
/// so a left move at cell 0 stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one cell to the left.
    Left,
    /// Move the head one cell to the right.
    Right,
}

/// One transition: the state to enter, the symbol to write, and the direction
/// to move the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The state the machine transitions to.
    pub next_state: State,
    /// The symbol written at the head position.
    pub write: Symbol,
    /// The direction the head moves afterwards.
    pub direction: Direction,
}

impl Default for Transition {
    /// The default transition rejects: any (state, symbol) pair that is never
    /// configured writes a blank, moves left, and enters `State::Reject`.
    fn default() -> Self {
        Self {
            next_state: State::Reject,
            write: BLANK_SYMBOL,
            direction: Direction::Left,
        }
    }
}

/// Structural defects in a transition table source, with the offending line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The source was empty.
    #[error("Missing state count line")]
    MissingStateCount,
    /// The first line did not parse as a non-negative state count.
    #[error("Line 1: failed to parse state count")]
    InvalidStateCount,
    /// A transition line did not have exactly five fields.
    #[error("Line {0}: wrong number of fields")]
    WrongFieldCount(usize),
    /// A symbol field was wider than one byte.
    #[error("Line {0}: symbol field too long")]
    FieldTooLong(usize),
    /// A state field did not parse as a state number.
    #[error("Line {0}: failed to parse state number")]
    InvalidStateNumber(usize),
    /// A direction field was not `L` or `R`.
    #[error("Line {0}: failed to parse direction")]
    InvalidDirection(usize),
}

/// Errors that can occur while loading a machine description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtmError {
    /// The table source was structurally malformed.
    #[error("{0}")]
    ParseError(#[from] TableError),
    /// The table source could not be read.
    #[error("File error: {0}")]
    FileError(String),
}
