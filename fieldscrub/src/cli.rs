// fieldscrub/src/cli.rs
//! This file defines the command-line interface (CLI) for the fieldscrub
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "fieldscrub",
    author = "Fieldscrub Maintainers",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sanitize untrusted field data against a declarative policy",
    long_about = "Fieldscrub is a command-line utility for cleaning untrusted key-value field data. Given a JSON object of raw fields and a YAML policy declaring which fields are allowed and what each one is (plain string, boolean, integer, URL, HTML, upload, not-blank), it emits a cleaned JSON object with type-specific normalisation applied.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the fieldscrub crates)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `fieldscrub` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cleans a JSON object of raw fields against a policy.
    #[command(about = "Cleans a JSON object of raw fields against a policy.")]
    Clean(CleanCommand),

    /// Validates a policy file and prints a membership summary.
    #[command(about = "Validates a policy file and prints a membership summary.")]
    Check(CheckCommand),
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanCommand {
    /// Path to the YAML policy file.
    #[arg(long = "policy", short = 'p', value_name = "FILE", help = "Path to the YAML policy file.")]
    pub policy: PathBuf,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write cleaned output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Process only these allowed fields (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Process only these allowed fields (comma-separated).")]
    pub only: Vec<String>,

    /// Drop these fields from the allowed list (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Drop these fields from the allowed list (comma-separated).")]
    pub drop: Vec<String>,

    /// Pretty-print the cleaned JSON output.
    #[arg(long, help = "Pretty-print the cleaned JSON output.")]
    pub pretty: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Path to the YAML policy file.
    #[arg(long = "policy", short = 'p', value_name = "FILE", help = "Path to the YAML policy file.")]
    pub policy: PathBuf,
}
