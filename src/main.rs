use std::process::ExitCode;

fn main() -> ExitCode {
    match symgraph::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
