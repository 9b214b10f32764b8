use clap::Parser;
use std::path::Path;
use std::process;
use utm::loader::ProgramLoader;
use utm::trace::Configuration;
use utm::types::State;

/// Width of the banner lines, padding dashes included.
const LINE_WIDTH: usize = 60;

#[derive(Parser)]
#[clap(
    author,
    version,
    about,
    long_about = None,
    arg_required_else_help = true,
    after_help = "Table files use '_' for the blank symbol; see the machines/ directory for samples."
)]
struct Cli {
    /// The transition table file to execute
    filename: String,

    /// The input word written on the tape
    input: String,

    /// Maximum number of steps before the run is aborted
    max_steps: usize,

    /// Suppress the per-step configuration trace
    #[clap(long)]
    silent: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // Help and version requests land here too; only real argument
            // errors exit nonzero.
            let code = if error.use_stderr() { 1 } else { 0 };
            let _ = error.print();
            process::exit(code);
        }
    };

    let mut machine = match ProgramLoader::load_machine(Path::new(&cli.filename)) {
        Ok(machine) => machine,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };
    machine.initialize_tape(cli.input.as_bytes());

    print_banner(&format!("Started on input \"{}\"", cli.input));

    let outcome = if cli.silent {
        machine.run(cli.max_steps)
    } else {
        println!();
        println!("{:>5} | {}", "Step", "Configuration");
        println!("------+-----------------------------------------------------");
        let mut sink = |configuration: &Configuration<'_>| println!("{}", configuration);
        let outcome = machine.run_traced(cli.max_steps, &mut sink);
        println!();
        outcome
    };

    match outcome {
        State::Accept => print_banner(&format!(
            "Accepted input \"{}\" in {} step{}",
            cli.input,
            machine.steps(),
            plural(machine.steps())
        )),
        State::Reject => print_banner(&format!(
            "Rejected input \"{}\" in {} step{}",
            cli.input,
            machine.steps(),
            plural(machine.steps())
        )),
        State::Ordinary(_) => print_banner(&format!(
            "Did not finish within {} steps. Computation aborted",
            cli.max_steps
        )),
    }
}

fn print_banner(message: &str) {
    println!("{:-<width$}", format!("--- {} ", message), width = LINE_WIDTH);
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
