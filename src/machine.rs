//! The machine engine: a transition table, a tape, and the step/run loop
//! that ties them together.

use crate::table::TransitionTable;
use crate::tape::Tape;
use crate::trace::{Configuration, TraceSink};
use crate::types::{State, Symbol, Transition};

/// A deterministic single-tape Turing machine.
///
/// A machine is built in two phases: construct it with a state count, then
/// install transitions with [`set_transition`](Self::set_transition) (the
/// loader does both from a table file). Before running, put the input on the
/// tape with [`initialize_tape`](Self::initialize_tape).
///
/// A finished run is not restartable. To run the same machine again, clone
/// it while it is still pristine and initialize the clone's tape.
#[derive(Debug, Clone)]
pub struct TuringMachine {
    table: TransitionTable,
    tape: Tape,
    state: State,
    steps: usize,
}

impl TuringMachine {
    /// Creates a machine with `state_count` ordinary states, all transitions
    /// defaulted to reject, an empty tape, and the state set to
    /// [`State::START`].
    pub fn new(state_count: usize) -> Self {
        Self {
            table: TransitionTable::new(state_count),
            tape: Tape::new(b""),
            state: State::START,
            steps: 0,
        }
    }

    /// Installs one transition in the machine's table.
    pub fn set_transition(&mut self, state: usize, symbol: Symbol, transition: Transition) {
        self.table.set(state, symbol, transition);
    }

    /// Replaces the tape with a fresh one holding `input`, head on the
    /// leftmost cell. The current state and step counter are untouched.
    pub fn initialize_tape(&mut self, input: &[u8]) {
        self.tape = Tape::new(input);
    }

    /// Executes one step: read the symbol under the head, look up the
    /// transition for it, write, switch state, move.
    ///
    /// Calling this on a machine in a terminal state does nothing. A state
    /// index with no table row resolves to the default rejecting transition,
    /// so a step never fails.
    pub fn step(&mut self) {
        let State::Ordinary(index) = self.state else {
            return;
        };

        self.steps += 1;
        let symbol = self.tape.read();
        let transition = self.table.get(index, symbol);

        self.tape.write(transition.write);
        self.state = transition.next_state;
        self.tape.move_head(transition.direction);
    }

    /// Runs until the machine reaches a terminal state or `step_limit` steps
    /// have been taken, whichever comes first, and returns the final state.
    ///
    /// An ordinary return state means the limit was exhausted; the step
    /// counter then equals `step_limit`.
    pub fn run(&mut self, step_limit: usize) -> State {
        while !self.state.is_terminal() && self.steps < step_limit {
            self.step();
        }
        self.state
    }

    /// Like [`run`](Self::run), but records a [`Configuration`] snapshot to
    /// `sink` before the first step and after every step, the final one
    /// included.
    pub fn run_traced(&mut self, step_limit: usize, sink: &mut dyn TraceSink) -> State {
        sink.record(&self.configuration());
        while !self.state.is_terminal() && self.steps < step_limit {
            self.step();
            sink.record(&self.configuration());
        }
        self.state
    }

    /// The current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Steps executed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The head position on the tape.
    pub fn head(&self) -> usize {
        self.tape.head()
    }

    /// The machine's tape.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Number of ordinary states the machine was created with.
    pub fn state_count(&self) -> usize {
        self.table.state_count()
    }

    /// Whether the machine has reached a terminal state.
    pub fn is_halted(&self) -> bool {
        self.state.is_terminal()
    }

    /// A snapshot of the machine's current configuration.
    pub fn configuration(&self) -> Configuration<'_> {
        Configuration {
            step: self.steps,
            state: self.state,
            head: self.tape.head(),
            cells: self.tape.cells(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, BLANK_SYMBOL};

    /// One state: loop right over marks, accept on the first blank.
    fn unary_increment_machine() -> TuringMachine {
        let mut machine = TuringMachine::new(1);
        machine.set_transition(
            0,
            b'1',
            Transition {
                next_state: State::Ordinary(0),
                write: b'1',
                direction: Direction::Right,
            },
        );
        machine.set_transition(
            0,
            BLANK_SYMBOL,
            Transition {
                next_state: State::Accept,
                write: BLANK_SYMBOL,
                direction: Direction::Left,
            },
        );
        machine
    }

    /// One state that moves right forever, whatever it reads.
    fn endless_machine() -> TuringMachine {
        let mut machine = TuringMachine::new(1);
        for symbol in 0..=255u8 {
            machine.set_transition(
                0,
                symbol,
                Transition {
                    next_state: State::Ordinary(0),
                    write: symbol,
                    direction: Direction::Right,
                },
            );
        }
        machine
    }

    #[test]
    fn test_unary_increment_accepts() {
        let mut machine = unary_increment_machine();
        machine.initialize_tape(b"11");

        let outcome = machine.run(10);

        assert_eq!(outcome, State::Accept);
        assert_eq!(machine.steps(), 3);
        assert_eq!(&machine.tape().cells()[..2], b"11");
        assert!(machine.is_halted());
    }

    #[test]
    fn test_step_limit_exhaustion() {
        let mut machine = endless_machine();
        machine.initialize_tape(b"");

        let outcome = machine.run(5);

        assert_eq!(outcome, State::Ordinary(0));
        assert_eq!(machine.steps(), 5);
        assert!(!machine.is_halted());
    }

    #[test]
    fn test_zero_state_machine_rejects() {
        let mut machine = TuringMachine::new(0);
        machine.initialize_tape(b"x");

        machine.step();

        assert_eq!(machine.state(), State::Reject);
        assert_eq!(machine.steps(), 1);
        assert_eq!(machine.head(), 0);
        assert_eq!(machine.tape().cells(), &[BLANK_SYMBOL; 3]);
    }

    #[test]
    fn test_unconfigured_pair_rejects() {
        let mut machine = TuringMachine::new(1);
        machine.set_transition(
            0,
            b'a',
            Transition {
                next_state: State::Accept,
                write: b'a',
                direction: Direction::Right,
            },
        );
        machine.initialize_tape(b"b");

        let outcome = machine.run(10);

        assert_eq!(outcome, State::Reject);
        assert_eq!(machine.steps(), 1);
    }

    #[test]
    fn test_out_of_range_target_rejects_on_next_step() {
        let mut machine = TuringMachine::new(1);
        machine.set_transition(
            0,
            b'x',
            Transition {
                next_state: State::Ordinary(7),
                write: b'x',
                direction: Direction::Right,
            },
        );
        machine.initialize_tape(b"xx");

        machine.step();
        assert_eq!(machine.state(), State::Ordinary(7));

        let outcome = machine.run(10);

        assert_eq!(outcome, State::Reject);
        assert_eq!(machine.steps(), 2);
    }

    #[test]
    fn test_stepping_terminal_machine_is_noop() {
        let mut machine = unary_increment_machine();
        machine.initialize_tape(b"1");
        machine.run(10);
        assert_eq!(machine.state(), State::Accept);

        let steps_before = machine.steps();
        let cells_before = machine.tape().cells().to_vec();
        machine.step();

        assert_eq!(machine.state(), State::Accept);
        assert_eq!(machine.steps(), steps_before);
        assert_eq!(machine.tape().cells(), cells_before.as_slice());
        assert_eq!(machine.run(100), State::Accept);
    }

    #[test]
    fn test_initialize_tape_replaces_tape_only() {
        let mut machine = endless_machine();
        machine.initialize_tape(b"ab");
        machine.run(2);
        assert_eq!(machine.steps(), 2);

        machine.initialize_tape(b"zz");

        assert_eq!(machine.head(), 0);
        assert_eq!(&machine.tape().cells()[..2], b"zz");
        assert_eq!(machine.steps(), 2);
    }

    #[test]
    fn test_clone_for_rerun() {
        let pristine = unary_increment_machine();

        let mut first = pristine.clone();
        first.initialize_tape(b"111");
        assert_eq!(first.run(10), State::Accept);
        assert_eq!(first.steps(), 4);

        let mut second = pristine.clone();
        second.initialize_tape(b"1");
        assert_eq!(second.run(10), State::Accept);
        assert_eq!(second.steps(), 2);
    }

    #[test]
    fn test_traced_run_records_each_configuration() {
        let mut machine = unary_increment_machine();
        machine.initialize_tape(b"1");

        let mut lines = Vec::new();
        let mut sink = |configuration: &Configuration<'_>| {
            lines.push(configuration.to_string());
        };
        let outcome = machine.run_traced(10, &mut sink);

        assert_eq!(outcome, State::Accept);
        assert_eq!(
            lines,
            vec![
                "    0 | [0]      ",
                "    1 |  1 [0]   ",
                "    2 | [A]      ",
            ]
        );
    }

    #[test]
    fn test_accessors() {
        let machine = TuringMachine::new(4);

        assert_eq!(machine.state(), State::START);
        assert_eq!(machine.steps(), 0);
        assert_eq!(machine.head(), 0);
        assert_eq!(machine.state_count(), 4);
        assert!(!machine.is_halted());

        let configuration = machine.configuration();
        assert_eq!(configuration.step, 0);
        assert_eq!(configuration.state, State::START);
        assert_eq!(configuration.cells, &[BLANK_SYMBOL]);
    }
}
