//! Binary entrypoint for the `generator` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match generator::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
