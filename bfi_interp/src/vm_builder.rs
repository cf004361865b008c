use crate::{tape::Tape, vm::Machine, vm_error::MachineError};
use bfi_types::Program;
use std::{
    io::{self, BufRead, Write},
    num::NonZeroUsize,
};

/// Initial tape length used when the builder is not told otherwise.
pub const DEFAULT_TAPE_LENGTH: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(length) => length,
    None => unreachable!(),
};

/// Assembles a [`Machine`] from its parts.
///
/// Only the program is required; the tape defaults to
/// [`DEFAULT_TAPE_LENGTH`] cells and I/O defaults to the standard streams.
///
/// # Examples
///
/// ```rust
/// use bfi_interp::MachineBuilder;
/// use bfi_types::Program;
/// use std::io::Cursor;
///
/// let program = Program::new(Cursor::new("++>+.")).expect("program parses");
///
/// let mut machine = MachineBuilder::new()
///     .program(program)
///     .output(Vec::new())
///     .build()
///     .expect("machine builds");
/// machine.run().expect("program runs");
/// ```
#[derive(Default)]
pub struct MachineBuilder {
    program: Option<Program>,
    tape_length: Option<NonZeroUsize>,
    input: Option<Box<dyn BufRead>>,
    output: Option<Box<dyn Write>>,
}

impl MachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the program to execute. Required.
    pub fn program(mut self, program: Program) -> Self {
        self.program = Some(program);
        self
    }

    /// Sets the initial number of tape cells. The tape still grows on
    /// demand in both directions.
    pub fn tape_length(mut self, tape_length: NonZeroUsize) -> Self {
        self.tape_length = Some(tape_length);
        self
    }

    /// Supplies a custom input stream for the input operator.
    pub fn input<R: BufRead + 'static>(mut self, input: R) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    /// Supplies a custom output stream for the output operator.
    pub fn output<W: Write + 'static>(mut self, output: W) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    /// Builds the machine, logging whichever defaults get applied.
    pub fn build(self) -> Result<Machine, MachineError> {
        let program = self.program.ok_or_else(|| MachineError::Build {
            reason: "a program must be set before building".to_string(),
        })?;

        let tape_length = self.tape_length.unwrap_or_else(|| {
            log::info!("using default tape length {}", DEFAULT_TAPE_LENGTH);
            DEFAULT_TAPE_LENGTH
        });

        let input = self.input.unwrap_or_else(|| {
            log::info!("using stdin for input");
            Box::new(io::stdin().lock())
        });

        let output = self.output.unwrap_or_else(|| {
            log::info!("using stdout for output");
            Box::new(io::stdout().lock())
        });

        Ok(Machine::new(program, Tape::new(tape_length), input, output))
    }
}
