use crate::tape::Tape;
use crate::vm_error::MachineError;
use bfi_types::{LocatedOp, Op, Program};
use std::io::{BufRead, Write};

// Line-buffered input for the input operator. A line is pulled from the
// reader only once the previous one is fully consumed; the terminating
// newline is part of the line. End of input reads as None.
struct LineInput {
    reader: Box<dyn BufRead>,
    line: Vec<u8>,
    cursor: usize,
}

impl std::fmt::Debug for LineInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineInput")
            .field("line", &self.line)
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl LineInput {
    fn new(reader: Box<dyn BufRead>) -> Self {
        LineInput {
            reader,
            line: Vec::new(),
            cursor: 0,
        }
    }

    fn next_byte(&mut self) -> std::io::Result<Option<u8>> {
        if self.cursor >= self.line.len() {
            self.line.clear();
            self.cursor = 0;
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
        }
        let byte = self.line[self.cursor];
        self.cursor += 1;
        Ok(Some(byte))
    }
}

/// Whether the machine has more instructions to execute.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Status {
    Running,
    Halted,
}

/// Interprets a Brainfuck program against a growable [`Tape`].
///
/// The machine owns the tape, the instruction pointer, and the input line
/// buffer for the duration of a run. Input is taken a line at a time and
/// handed out byte by byte; once input is exhausted, the input operator
/// stores 0 and execution continues. Output bytes appear in exact execution
/// order and the stream is flushed when the run ends, successfully or not.
pub struct Machine {
    program: Program,
    tape: Tape,
    instruction_pointer: usize,
    input: LineInput,
    output: Box<dyn Write>,
    instructions_run: usize,
}

impl std::fmt::Debug for Machine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Machine")
            .field("program", &self.program)
            .field("tape", &self.tape)
            .field("instruction_pointer", &self.instruction_pointer)
            .field("input", &self.input)
            .field("instructions_run", &self.instructions_run)
            .finish()
    }
}

impl Machine {
    /// Assembles a machine from its parts. [`MachineBuilder`] fills in
    /// defaults for everything but the program.
    ///
    /// [`MachineBuilder`]: crate::MachineBuilder
    pub fn new(
        program: Program,
        tape: Tape,
        input: Box<dyn BufRead>,
        output: Box<dyn Write>,
    ) -> Self {
        Machine {
            program,
            tape,
            instruction_pointer: 0,
            input: LineInput::new(input),
            output,
            instructions_run: 0,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// How many instructions have been executed so far.
    pub fn instructions_run(&self) -> usize {
        self.instructions_run
    }

    fn matching_bracket(&self, instruction: LocatedOp) -> Result<usize, MachineError> {
        self.program
            .matching_bracket(self.instruction_pointer)
            .ok_or(MachineError::MissingJumpTarget { instruction })
    }

    /// Executes the instruction under the instruction pointer.
    pub fn step(&mut self) -> Result<Status, MachineError> {
        let Some(&instruction) = self.program.instructions().get(self.instruction_pointer) else {
            return Ok(Status::Halted);
        };
        log::debug!("executing {}", instruction);

        let mut next = self.instruction_pointer + 1;
        match instruction.op() {
            Op::MoveRight => self.tape.move_right(),
            Op::MoveLeft => self.tape.move_left(),
            Op::Increment => self.tape.increment(),
            Op::Decrement => self.tape.decrement(),
            Op::Output => {
                self.output
                    .write_all(&[self.tape.read()])
                    .map_err(|source| MachineError::Io {
                        instruction,
                        source,
                    })?;
            }
            Op::Input => {
                let byte = self
                    .input
                    .next_byte()
                    .map_err(|source| MachineError::Io {
                        instruction,
                        source,
                    })?
                    .unwrap_or(0);
                self.tape.write(byte);
            }
            Op::LoopStart => {
                if self.tape.read() == 0 {
                    next = self.matching_bracket(instruction)? + 1;
                }
            }
            Op::LoopEnd => {
                if self.tape.read() != 0 {
                    next = self.matching_bracket(instruction)? + 1;
                }
            }
        }

        self.instructions_run += 1;
        self.instruction_pointer = next;
        Ok(Status::Running)
    }

    /// Runs the program to completion.
    ///
    /// Output already written stays written even when a later step fails;
    /// the output stream is flushed either way before this returns.
    pub fn run(&mut self) -> Result<(), MachineError> {
        let result = loop {
            match self.step() {
                Ok(Status::Running) => {}
                Ok(Status::Halted) => break Ok(()),
                Err(err) => break Err(err),
            }
        };

        let flushed = self.output.flush();
        if result.is_ok() {
            log::debug!("halted after {} instructions", self.instructions_run);
        }
        match flushed {
            Ok(()) => result,
            Err(source) => result.and(Err(MachineError::Flush(source))),
        }
    }
}
