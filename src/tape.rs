//! The machine's working tape.
//!
//! The tape is a byte vector that grows rightward on demand. The left end is
//! fixed: a left move at cell 0 leaves the head where it is. Cells beyond the
//! written input hold [`BLANK_SYMBOL`].

use crate::types::{Direction, Symbol, BLANK_SYMBOL};

/// A one-sided, rightward-growing tape with a read/write head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<Symbol>,
    head: usize,
}

impl Tape {
    /// Creates a tape holding `input` at its left end, head on cell 0.
    ///
    /// The tape is allocated with room to spare: twice the input length plus
    /// one cell, and never fewer than one cell, so the head always rests on
    /// an allocated cell.
    pub fn new(input: &[u8]) -> Self {
        let capacity = (input.len() * 2 + 1).max(1);
        let mut cells = vec![BLANK_SYMBOL; capacity];
        cells[..input.len()].copy_from_slice(input);

        Self { cells, head: 0 }
    }

    /// The symbol under the head.
    pub fn read(&self) -> Symbol {
        self.cells.get(self.head).copied().unwrap_or(BLANK_SYMBOL)
    }

    /// Overwrites the symbol under the head.
    pub fn write(&mut self, symbol: Symbol) {
        if let Some(cell) = self.cells.get_mut(self.head) {
            *cell = symbol;
        }
    }

    /// Moves the head one cell. A right move past the last allocated cell
    /// doubles the tape; a left move at cell 0 stays put.
    pub fn move_head(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {
                self.head = self.head.saturating_sub(1);
            }
            Direction::Right => {
                self.head += 1;
                if self.head == self.cells.len() {
                    self.cells.resize(self.cells.len() * 2, BLANK_SYMBOL);
                }
            }
        }
    }

    /// The head position, counted from the left end.
    pub fn head(&self) -> usize {
        self.head
    }

    /// All currently allocated cells, left to right.
    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }
}
