//! The Brainfuck execution engine.
//!
//! [`Tape`] stores the byte cells and grows on demand in both directions;
//! [`Machine`] drives a parsed [`bfi_types::Program`] over the tape,
//! exchanging bytes with its input and output streams. Machines are
//! normally put together with [`MachineBuilder`], which fills in the
//! default tape length and the standard streams.

// The growable byte tape.
pub mod tape;

// The dispatch loop and its line-buffered input state.
pub mod vm;

// Builder for machines.
pub mod vm_builder;

// Errors raised while building or running a machine.
pub mod vm_error;

pub use tape::Tape;
pub use vm::{Machine, Status};
pub use vm_builder::{MachineBuilder, DEFAULT_TAPE_LENGTH};
pub use vm_error::MachineError;
