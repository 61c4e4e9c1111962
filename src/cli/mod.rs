mod handlers;
pub mod parse;

use std::path::Path;

pub use handlers::analyze;
pub use parse::Cli;

use crate::core::error::GraphError;

/// Parse the process arguments and write both charts to the working directory.
pub fn run() -> Result<(), GraphError> {
    let cli = Cli::from_env()?;
    let mut out = std::io::stdout().lock();
    // empty base keeps the printed paths relative: `book_unigrams.png`
    analyze(&cli.file, Path::new(""), cli.debug, &mut out)?;
    Ok(())
}
