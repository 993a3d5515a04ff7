//! Core library entry for the `generator` CLI.
//!
//! Generates checksum-valid Brazilian taxpayer numbers (CPF and CNPJ) and
//! UUID-shaped identifiers in the version 4 and version 6 layouts. The
//! generators in [`generate`] are pure functions of the ports they are
//! handed; [`commands`] wires them to the clipboard and the terminal.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod generate;
pub mod logging;
pub mod ports;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and count as success.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            err.print().map_err(|e| e.to_string())?;
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    logging::init(cli.verbose);
    commands::dispatch(&cli.command).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_prints_generated_value() {
        let result = run(["generator", "generate-random-id", "--print-only"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["generator", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_treats_help_as_success() {
        assert!(run(["generator", "--help"]).is_ok());
    }
}
