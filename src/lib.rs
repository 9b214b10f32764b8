//! This crate provides the core logic for a universal Turing machine
//! interpreter. It includes modules for parsing transition table files,
//! simulating machine execution against an input with a step limit, tracing
//! configurations, and managing a collection of embedded sample machines.

pub mod loader;
pub mod machine;
pub mod parser;
pub mod programs;
pub mod table;
pub mod tape;
pub mod trace;
pub mod types;

/// Re-exports the `ProgramLoader` struct from the loader module.
pub use loader::ProgramLoader;
/// Re-exports the `TuringMachine` struct from the machine module.
pub use machine::TuringMachine;
/// Re-exports the `parse` function from the parser module.
pub use parser::parse;
/// Re-exports `SampleProgram` and the sample lookups from the programs module.
pub use programs::{sample, sample_names, SampleProgram, SAMPLE_PROGRAMS};
/// Re-exports the `TransitionTable` struct from the table module.
pub use table::TransitionTable;
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the configuration snapshot and trace sink from the trace module.
pub use trace::{Configuration, TraceSink};
/// Re-exports various types related to machine definition and execution from the types module.
pub use types::{
    Direction, State, Symbol, TableError, Transition, UtmError, ALPHABET_SIZE, BLANK_SYMBOL,
    INPUT_BLANK_SYMBOL,
};
