//! # Completions Command Implementation
//!
//! Writes a shell completion script for `crypti-kit` to stdout, generated by
//! `clap_complete` from the same definition the argument parser uses.
//!
//! ```bash
//! crypti-kit completions bash > ~/.local/share/bash-completion/completions/crypti-kit
//! crypti-kit completions zsh > ~/.zfunc/_crypti-kit
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
