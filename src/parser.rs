//! Parser for the transition table source format.
//!
//! A table source is line oriented: the first line holds the number of
//! ordinary states, every following line is blank, a comment, or one
//! transition of the form
//!
//! ```text
//! <currentState> <inputSymbol> <nextState> <outputSymbol> <L|R>
//! ```
//!
//! Symbol fields are single bytes with `_` standing for the blank. State
//! fields are integers; the next-state field may also name the terminal
//! sentinels as `-2` (accept) and `-1` (reject). A line whose first token
//! starts with `---` is a comment.

use crate::machine::TuringMachine;
use crate::types::{
    Direction, State, Symbol, TableError, Transition, BLANK_SYMBOL, INPUT_BLANK_SYMBOL,
};

/// Lines whose first token starts with this prefix are comments.
const COMMENT_PREFIX: &str = "---";

/// Number of whitespace-separated fields in a transition line.
const TRANSITION_FIELD_COUNT: usize = 5;

/// Parses a complete table source into a ready-to-run machine.
///
/// The first structural defect aborts the parse with the offending line
/// number; no partial machine is ever returned. Within one line, defects are
/// reported in a fixed order: field count, then symbol fields, then state
/// fields, then the direction.
pub fn parse(input: &str) -> Result<TuringMachine, TableError> {
    let mut lines = input.lines();
    let first = lines.next().ok_or(TableError::MissingStateCount)?;
    let state_count: usize = first
        .trim()
        .parse()
        .map_err(|_| TableError::InvalidStateCount)?;

    let mut machine = TuringMachine::new(state_count);
    for (index, line) in lines.enumerate() {
        let line_number = index + 2;
        let fields: Vec<&str> = line.split_whitespace().collect();

        let Some(first_field) = fields.first() else {
            continue;
        };
        if first_field.starts_with(COMMENT_PREFIX) {
            continue;
        }
        if fields.len() != TRANSITION_FIELD_COUNT {
            return Err(TableError::WrongFieldCount(line_number));
        }

        let input_symbol = parse_symbol(fields[1], line_number)?;
        let output_symbol = parse_symbol(fields[3], line_number)?;
        let current_state = parse_state_number(fields[0], line_number)?;
        let next_state = parse_target_state(fields[2], line_number)?;
        let direction = parse_direction(fields[4], line_number)?;

        machine.set_transition(
            current_state,
            input_symbol,
            Transition {
                next_state,
                write: output_symbol,
                direction,
            },
        );
    }

    Ok(machine)
}

/// A symbol field is exactly one byte; `_` denotes the blank.
fn parse_symbol(field: &str, line_number: usize) -> Result<Symbol, TableError> {
    if field.len() != 1 {
        return Err(TableError::FieldTooLong(line_number));
    }
    let byte = field.as_bytes()[0];
    Ok(if byte == INPUT_BLANK_SYMBOL {
        BLANK_SYMBOL
    } else {
        byte
    })
}

fn parse_state_number(field: &str, line_number: usize) -> Result<usize, TableError> {
    field
        .parse()
        .map_err(|_| TableError::InvalidStateNumber(line_number))
}

fn parse_target_state(field: &str, line_number: usize) -> Result<State, TableError> {
    field
        .parse::<i64>()
        .ok()
        .and_then(State::from_encoding)
        .ok_or(TableError::InvalidStateNumber(line_number))
}

fn parse_direction(field: &str, line_number: usize) -> Result<Direction, TableError> {
    match field {
        "L" => Ok(Direction::Left),
        "R" => Ok(Direction::Right),
        _ => Err(TableError::InvalidDirection(line_number)),
    }
}
