//! Command dispatch and handlers.

pub mod generate;
pub mod uninstall;

use std::io::{self, Write};

use crate::cli::Command;
use crate::context::ServiceContext;
use crate::error::GeneratorError;
use crate::generate::GenerationRequest;

use self::generate::IdKind;

/// Dispatch a parsed command to its handler using live adapters and stdout.
///
/// # Errors
///
/// Returns an error if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), GeneratorError> {
    let ctx = ServiceContext::live();
    let mut stdout = io::stdout().lock();
    dispatch_with_context(command, &ctx, &mut stdout)
}

/// Dispatch a command with the given service context and output sink.
///
/// # Errors
///
/// Returns an error if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    out: &mut dyn Write,
) -> Result<(), GeneratorError> {
    match command {
        Command::GenerateIndividualId { output, no_format } => {
            let kind = IdKind::Individual(request(*no_format));
            generate::run(ctx, kind, output.print_only, out)
        }
        Command::GenerateEntityId { output, no_format } => {
            let kind = IdKind::Entity(request(*no_format));
            generate::run(ctx, kind, output.print_only, out)
        }
        Command::GenerateRandomId { output } => {
            generate::run(ctx, IdKind::Random, output.print_only, out)
        }
        Command::GenerateTimeOrderedId { output } => {
            generate::run(ctx, IdKind::TimeOrdered, output.print_only, out)
        }
        Command::Uninstall { install_dir } => uninstall::run(ctx, install_dir, out),
    }
}

fn request(no_format: bool) -> GenerationRequest {
    GenerationRequest { formatted: !no_format }
}
