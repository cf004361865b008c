//! Representation of Brainfuck programs.
//!
//! Parses script text into the eight operators, keeping the source position
//! of every retained instruction, and pairs brackets up front so the
//! interpreter can jump in constant time. Anything that is not one of
//! `> < + - . , [ ]` is a comment and disappears at parse time.

// The operators and their source positions.
pub mod instructions;

// Parsing, bracket pairing, and malformed-program rejection.
pub mod program;

pub use instructions::{LocatedOp, Op};
pub use program::{Program, ProgramError};
