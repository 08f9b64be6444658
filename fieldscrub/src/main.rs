// fieldscrub/src/main.rs
//! Fieldscrub entry point.
//!
//! Parses the CLI, initialises logging, and dispatches to the command
//! runners.

use anyhow::Result;
use clap::Parser;

use fieldscrub::cli::{Cli, Commands};
use fieldscrub::commands::{check, clean};
use fieldscrub::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match args.command {
        Commands::Clean(cmd) => clean::run_clean(clean::CleanOptions {
            policy: cmd.policy,
            input_file: cmd.input_file,
            output: cmd.output,
            only: cmd.only,
            drop: cmd.drop,
            pretty: cmd.pretty,
        }),
        Commands::Check(cmd) => check::run_check(check::CheckOptions { policy: cmd.policy }),
    }
}
