//! # Crypti Kit CLI
//!
//! This is the binary entry point for the `crypti-kit` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Executing the appropriate command and translating errors into a
//!   non-zero exit status.
//!
//! The resolution logic lives in the library crate; the binary is a thin
//! wrapper that prints what the library derives.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
