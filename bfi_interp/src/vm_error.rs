use bfi_types::LocatedOp;
use thiserror::Error;

/// Errors raised while building or running a [`Machine`](crate::Machine).
#[derive(Debug, Error)]
pub enum MachineError {
    /// The builder was asked to build without everything it needs.
    #[error("cannot build machine: {reason}")]
    Build { reason: String },

    /// Reading input or writing output failed mid-run.
    #[error("I/O error at {instruction}: {source}")]
    Io {
        instruction: LocatedOp,
        #[source]
        source: std::io::Error,
    },

    /// Flushing the output stream at the end of a run failed.
    #[error("failed to flush output: {0}")]
    Flush(#[from] std::io::Error),

    /// A bracket had no recorded partner. Programs that pass loading never
    /// trigger this.
    #[error("no matching bracket for {instruction}")]
    MissingJumpTarget { instruction: LocatedOp },
}
