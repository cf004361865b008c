use bfi_interp::MachineBuilder;
use bfi_types::Program;
use clap::Parser;
use std::process::ExitCode;

mod cli;

use cli::Cli;

/// Entry point for the Brainfuck interpreter.
///
/// Loads the script named on the command line and runs it to completion.
/// Input for the `,` operator comes from stdin a line at a time; output from
/// `.` goes to stdout. Any error is reported on stderr and the process exits
/// with a failure status; argument problems are reported by clap along with
/// the usage banner.
fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bfi: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::from_file(&cli.script)?;
    log::info!(
        "loaded {} with {} instructions",
        cli.script.display(),
        program.len()
    );

    let mut machine = MachineBuilder::new()
        .program(program)
        .tape_length(cli.tape_length)
        .build()?;
    machine.run()?;

    Ok(())
}
