use crate::machine::TuringMachine;
use crate::parser::parse;

// Default embedded sample tables
const PROGRAM_TEXTS: [(&str, &str); 3] = [
    (
        "unary-increment",
        include_str!("../machines/unary-increment.tm"),
    ),
    (
        "binary-palindrome",
        include_str!("../machines/binary-palindrome.tm"),
    ),
    ("even-ones", include_str!("../machines/even-ones.tm")),
];

/// An embedded sample program: its name, its table source, and a pristine
/// parsed machine to clone runs from.
pub struct SampleProgram {
    pub name: &'static str,
    pub source: &'static str,
    machine: TuringMachine,
}

impl SampleProgram {
    /// A fresh machine for this program, ready for
    /// `initialize_tape`/`run`.
    pub fn machine(&self) -> TuringMachine {
        self.machine.clone()
    }
}

lazy_static::lazy_static! {
    /// All embedded sample programs, parsed once on first access. A sample
    /// whose source fails to parse is skipped with a message on stderr.
    pub static ref SAMPLE_PROGRAMS: Vec<SampleProgram> = PROGRAM_TEXTS
        .iter()
        .filter_map(|&(name, source)| match parse(source) {
            Ok(machine) => Some(SampleProgram { name, source, machine }),
            Err(error) => {
                eprintln!("Failed to parse sample program {}: {}", name, error);
                None
            }
        })
        .collect();
}

/// Looks up a sample program by name.
pub fn sample(name: &str) -> Option<&'static SampleProgram> {
    SAMPLE_PROGRAMS.iter().find(|program| program.name == name)
}

/// The names of all embedded sample programs.
pub fn sample_names() -> Vec<&'static str> {
    SAMPLE_PROGRAMS.iter().map(|program| program.name).collect()
}
