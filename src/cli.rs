use std::{num::NonZeroUsize, path::PathBuf};

use clap::Parser;

/// Handle CLI arguments for bfi
#[derive(Parser, Debug)]
#[command(version, about = "A Brainfuck interpreter whose tape grows in both directions", long_about = None)]
pub struct Cli {
    /// The Brainfuck script to run
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Initial number of cells on the tape.
    ///
    /// The tape grows on demand in either direction; this only sets its
    /// starting size.
    #[arg(value_name = "TAPE_LENGTH", default_value_t = bfi_interp::DEFAULT_TAPE_LENGTH)]
    pub tape_length: NonZeroUsize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn tape_length_defaults_to_1024() {
        let cli = Cli::parse_from(["bfi", "script.bf"]);
        assert_eq!(cli.tape_length.get(), 1024);
    }

    #[test]
    fn tape_length_can_be_given_positionally() {
        let cli = Cli::parse_from(["bfi", "script.bf", "4096"]);
        assert_eq!(cli.tape_length.get(), 4096);
    }

    #[test]
    fn zero_tape_length_is_rejected() {
        assert!(Cli::try_parse_from(["bfi", "script.bf", "0"]).is_err());
    }

    #[test]
    fn negative_tape_length_is_rejected() {
        assert!(Cli::try_parse_from(["bfi", "script.bf", "-3"]).is_err());
    }
}
