use std::{ffi::OsString, path::PathBuf};

use clap::{Parser, error::ErrorKind};

use crate::core::error::GraphError;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "symgraph",
    version,
    about = "Chart symbol unigram and bigram frequencies of a text file"
)]
pub struct Cli {
    /// Text file to analyse
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse the process arguments.
    pub fn from_env() -> Result<Self, GraphError> {
        Self::try_from_args(std::env::args_os())
    }

    /// Parse `args` (first item is the program name).  `--help` and
    /// `--version` print and exit as usual; every other fault becomes
    /// [`GraphError::Usage`].
    pub fn try_from_args<I, T>(args: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => Err(GraphError::Usage(e.render().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_file_argument() {
        let cli = Cli::try_from_args(["symgraph", "corpus/book.txt"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("corpus/book.txt"));
        assert!(!cli.debug);
    }

    #[test]
    fn debug_switch() {
        let cli = Cli::try_from_args(["symgraph", "--debug", "book.txt"]).unwrap();
        assert!(cli.debug);
    }

    #[test]
    fn missing_file_is_usage_error() {
        match Cli::try_from_args(["symgraph"]) {
            Err(GraphError::Usage(msg)) => assert!(msg.contains("Usage:"), "{msg}"),
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn extra_positional_is_usage_error() {
        assert!(matches!(
            Cli::try_from_args(["symgraph", "a.txt", "b.txt"]),
            Err(GraphError::Usage(_))
        ));
    }
}
