//! # DocxKit Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per tool. Each defines its Clap argument struct, a handler that
//! validates the inputs and performs the operation, and a report type that renders
//! the summary printed on success.
//!
//! - `pack`: `docx-pack <input_directory> <output_docx>`
//! - `unpack`: `docx-unpack <docx_file> <output_directory>`
//!
//! ## Entry point flow
//!
//! Both binaries go through `run`:
//! 1. Parse arguments (`parse_args`), printing usage and exiting 1 on a bad count
//! 2. Initialize logging from `-v` / `RUST_LOG`
//! 3. Load configuration
//! 4. Call the handler; on error print `Error: ...` and exit 1
//!
use crate::core::{config, error::Result, logging};
use clap::{error::ErrorKind, Parser};
use std::process;

pub mod pack;
pub mod unpack;

/// Implemented by each tool's argument struct.
pub trait ToolArgs: Parser + std::fmt::Debug {
    /// Usage line printed when the positional arguments are wrong.
    const USAGE: &'static str;
    /// Example line printed after the usage line.
    const EXAMPLE: &'static str;

    fn verbosity(&self) -> u8;
}

/// Parses command-line arguments for `T`.
///
/// `--help` and `--version` print and exit 0. Any other parse failure (wrong
/// argument count, unknown flag) prints the usage and example lines to stdout and
/// exits with status 1.
pub fn parse_args<T: ToolArgs>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            tracing::debug!("Argument parsing failed: {e}");
            println!("{}", T::USAGE);
            println!("{}", T::EXAMPLE);
            process::exit(1);
        }
    }
}

/// Shared `main` body for both binaries.
pub fn run<T, F>(handler: F)
where
    T: ToolArgs,
    F: FnOnce(T, &config::Config) -> Result<()>,
{
    let args = parse_args::<T>();
    logging::init_logging(args.verbosity());
    tracing::debug!("Parsed CLI arguments: {:?}", args);

    let result = config::load_config().and_then(|cfg| handler(args, &cfg));

    if let Err(e) = result {
        tracing::error!("Command execution failed: {:?}", e);
        println!("Error: {e:#}");
        process::exit(1);
    }
}
