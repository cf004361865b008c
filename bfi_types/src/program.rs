use crate::instructions::{LocatedOp, Op};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors produced while loading a Brainfuck program.
#[derive(Debug, Error)]
pub enum ProgramError {
    /// The script file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A reader failed without an associated path.
    #[error("failed to read program: {0}")]
    Read(#[from] std::io::Error),

    /// A `]` with no `[` before it.
    #[error("unmatched ']' at line {}, column {}", .position.line(), .position.column())]
    UnmatchedClose { position: LocatedOp },

    /// A `[` that never closes.
    #[error("unmatched '[' at line {}, column {}", .position.line(), .position.column())]
    UnmatchedOpen { position: LocatedOp },
}

/// A parsed Brainfuck program.
///
/// Holds the retained instructions in source order, plus a jump table
/// mapping every bracket to its partner so the interpreter can jump in
/// constant time. A program with unmatched brackets never constructs.
#[derive(Debug)]
pub struct Program {
    instructions: Vec<LocatedOp>,
    jumps: Vec<Option<usize>>,
}

impl Program {
    /// Parses a program from any reader.
    ///
    /// Characters outside the eight operators are comments and are dropped.
    ///
    /// ```
    /// use bfi_types::Program;
    /// use std::io::Cursor;
    ///
    /// let program = Program::new(Cursor::new("+[-]. a comment")).expect("balanced program");
    /// assert_eq!(program.instructions().len(), 5);
    /// ```
    pub fn new<R: Read>(reader: R) -> Result<Self, ProgramError> {
        let instructions = Self::read_data(reader)?;
        let jumps = Self::match_brackets(&instructions)?;
        Ok(Program {
            instructions,
            jumps,
        })
    }

    /// Loads a program from a file, tagging any I/O failure with the path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProgramError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ProgramError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(BufReader::new(file)).map_err(|err| match err {
            ProgramError::Read(source) => ProgramError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    fn read_data<R: Read>(reader: R) -> Result<Vec<LocatedOp>, ProgramError> {
        let buffread = BufReader::new(reader);
        let mut instructions = Vec::new();

        for (line_idx, line_result) in buffread.lines().enumerate() {
            let line = line_result?;
            for (col_idx, c) in line.chars().enumerate() {
                if let Some(op) = Op::from_char(c) {
                    instructions.push(LocatedOp::new(op, line_idx, col_idx));
                }
            }
        }

        Ok(instructions)
    }

    // One pass over the instructions pairing brackets with a stack. Every
    // bracket ends up knowing its partner's index, and any leftover or
    // premature bracket is rejected here, before execution.
    fn match_brackets(instructions: &[LocatedOp]) -> Result<Vec<Option<usize>>, ProgramError> {
        let mut jumps = vec![None; instructions.len()];
        let mut open_brackets: Vec<usize> = Vec::new();

        for (index, instruction) in instructions.iter().enumerate() {
            match instruction.op() {
                Op::LoopStart => open_brackets.push(index),
                Op::LoopEnd => match open_brackets.pop() {
                    Some(open) => {
                        jumps[open] = Some(index);
                        jumps[index] = Some(open);
                    }
                    None => {
                        log::error!("unmatched ']' at {}", instruction);
                        return Err(ProgramError::UnmatchedClose {
                            position: *instruction,
                        });
                    }
                },
                _ => {}
            }
        }

        if let Some(&open) = open_brackets.first() {
            let instruction = instructions[open];
            log::error!("unmatched '[' at {}", instruction);
            return Err(ProgramError::UnmatchedOpen {
                position: instruction,
            });
        }

        Ok(jumps)
    }

    /// The retained instructions in source order.
    pub fn instructions(&self) -> &[LocatedOp] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Index of the bracket matching the one at `index`, if `index` is a
    /// bracket.
    pub fn matching_bracket(&self, index: usize) -> Option<usize> {
        self.jumps.get(index).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfi_test_utils::{ScriptFile, SCRIPT_FILE_NUM_INSTRUCTIONS};
    use std::io::Cursor;

    #[test]
    fn parses_a_script_file() -> Result<(), Box<dyn std::error::Error>> {
        let program = Program::new(ScriptFile::new()?)?;
        assert_eq!(program.len(), SCRIPT_FILE_NUM_INSTRUCTIONS);

        // "++[>++<-]>."
        let ops = [
            Op::Increment,
            Op::Increment,
            Op::LoopStart,
            Op::MoveRight,
            Op::Increment,
            Op::Increment,
            Op::MoveLeft,
            Op::Decrement,
            Op::LoopEnd,
            Op::MoveRight,
            Op::Output,
        ];
        for (i, instruction) in program.instructions().iter().enumerate() {
            assert_eq!(instruction.op(), ops[i]);
            assert_eq!(instruction.line(), 1);
            assert_eq!(instruction.column(), i + 1);
        }

        Ok(())
    }

    #[test]
    fn loads_from_a_path() -> Result<(), Box<dyn std::error::Error>> {
        let script = ScriptFile::new()?;
        let program = Program::from_file(script.path())?;
        assert_eq!(program.len(), SCRIPT_FILE_NUM_INSTRUCTIONS);
        Ok(())
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = Program::from_file("no/such/script.bf").unwrap_err();
        assert!(matches!(err, ProgramError::Io { .. }));
        assert!(err.to_string().contains("no/such/script.bf"));
    }

    #[test]
    fn drops_comment_characters() -> Result<(), ProgramError> {
        let program = Program::new(Cursor::new("+ hello\nworld -\n"))?;
        assert_eq!(program.len(), 2);

        let plus = program.instructions()[0];
        assert_eq!((plus.op(), plus.line(), plus.column()), (Op::Increment, 1, 1));

        let minus = program.instructions()[1];
        assert_eq!(
            (minus.op(), minus.line(), minus.column()),
            (Op::Decrement, 2, 7)
        );

        Ok(())
    }

    #[test]
    fn pairs_brackets() -> Result<(), ProgramError> {
        let program = Program::new(Cursor::new("+[->+<]"))?;
        assert_eq!(program.matching_bracket(1), Some(6));
        assert_eq!(program.matching_bracket(6), Some(1));
        assert_eq!(program.matching_bracket(0), None);
        assert_eq!(program.matching_bracket(99), None);
        Ok(())
    }

    #[test]
    fn pairs_nested_brackets() -> Result<(), ProgramError> {
        let program = Program::new(Cursor::new("[[]]"))?;
        assert_eq!(program.matching_bracket(0), Some(3));
        assert_eq!(program.matching_bracket(1), Some(2));
        assert_eq!(program.matching_bracket(2), Some(1));
        assert_eq!(program.matching_bracket(3), Some(0));
        Ok(())
    }

    #[test]
    fn rejects_unmatched_close() {
        let err = Program::new(Cursor::new("+]")).unwrap_err();
        match err {
            ProgramError::UnmatchedClose { position } => {
                assert_eq!(position.line(), 1);
                assert_eq!(position.column(), 2);
            }
            other => panic!("expected UnmatchedClose, got {}", other),
        }
    }

    #[test]
    fn rejects_unmatched_open() {
        let err = Program::new(Cursor::new("[+")).unwrap_err();
        match err {
            ProgramError::UnmatchedOpen { position } => {
                assert_eq!(position.line(), 1);
                assert_eq!(position.column(), 1);
            }
            other => panic!("expected UnmatchedOpen, got {}", other),
        }
    }

    #[test]
    fn reports_the_outermost_unclosed_bracket() {
        let err = Program::new(Cursor::new("+[[-]")).unwrap_err();
        match err {
            ProgramError::UnmatchedOpen { position } => {
                assert_eq!(position.column(), 2);
            }
            other => panic!("expected UnmatchedOpen, got {}", other),
        }
    }

    #[test]
    fn empty_program_is_fine() -> Result<(), ProgramError> {
        let program = Program::new(Cursor::new("just a comment"))?;
        assert!(program.is_empty());
        Ok(())
    }
}
