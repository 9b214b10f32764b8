//! This module provides the `ProgramLoader` struct, responsible for loading
//! Turing machine descriptions from files and strings.

use crate::machine::TuringMachine;
use crate::parser::parse;
use crate::types::UtmError;
use std::fs;
use std::path::Path;

/// `ProgramLoader` is a utility struct for loading Turing machine
/// descriptions. It provides methods to load machines from table files and
/// from in-memory string content.
pub struct ProgramLoader;

impl ProgramLoader {
    /// Loads a Turing machine from the table file at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - A reference to the `Path` of the table file to load.
    ///
    /// # Returns
    ///
    /// * `Ok(TuringMachine)` if the file is successfully read and parsed.
    /// * `Err(UtmError::FileError)` if the file cannot be read.
    /// * `Err(UtmError::ParseError)` if the file content is not a valid
    ///   transition table.
    pub fn load_machine(path: &Path) -> Result<TuringMachine, UtmError> {
        let content = fs::read_to_string(path).map_err(|e| {
            UtmError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Ok(parse(&content)?)
    }

    /// Loads a Turing machine from the provided string content.
    ///
    /// This is useful for parsing tables that are not stored in files, e.g.
    /// the embedded sample programs.
    ///
    /// # Arguments
    ///
    /// * `content` - A string slice containing the transition table.
    ///
    /// # Returns
    ///
    /// * `Ok(TuringMachine)` if the content is successfully parsed.
    /// * `Err(UtmError::ParseError)` if the content is not a valid
    ///   transition table.
    pub fn load_machine_from_string(content: &str) -> Result<TuringMachine, UtmError> {
        Ok(parse(content)?)
    }
}
