//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Where the installer places the tool unless told otherwise.
pub const DEFAULT_INSTALL_DIR: &str = "/usr/local/bin/generator";

/// Top-level CLI parser for `generator`.
#[derive(Debug, Parser)]
#[command(
    name = "generator",
    version,
    about = "CLI tool to generate valid CPF, CNPJ, UUID v4, and UUID v6."
)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generates a valid CPF.
    #[command(visible_alias = "cpf")]
    GenerateIndividualId {
        #[command(flatten)]
        output: OutputArgs,
        /// Generates the CPF without punctuation.
        #[arg(short = 'n', long)]
        no_format: bool,
    },
    /// Generates a valid CNPJ.
    #[command(visible_alias = "cnpj")]
    GenerateEntityId {
        #[command(flatten)]
        output: OutputArgs,
        /// Generates the CNPJ without punctuation.
        #[arg(short = 'n', long)]
        no_format: bool,
    },
    /// Generates a UUID version 4.
    #[command(visible_alias = "uuid4")]
    GenerateRandomId {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generates a UUID version 6.
    #[command(visible_alias = "uuid6")]
    GenerateTimeOrderedId {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Uninstalls the generator CLI.
    Uninstall {
        /// Installed location to remove.
        #[arg(long, env = "GENERATOR_INSTALL_DIR", default_value = DEFAULT_INSTALL_DIR)]
        install_dir: PathBuf,
    },
}

/// Flags shared by every generation command.
#[derive(Debug, Clone, Copy, Args)]
pub struct OutputArgs {
    /// Prints the value to the terminal instead of copying it.
    #[arg(short, long)]
    pub print_only: bool,
}
