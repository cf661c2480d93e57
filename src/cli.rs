//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Crypti Kit - Resolve deployment configuration for Crypti nodes
#[derive(Parser, Debug)]
#[command(name = "crypti-kit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = clap::value_parser!(log::LevelFilter)
    )]
    log_level: log::LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the resolved configuration and derived values
    Show(commands::show::ShowArgs),

    /// Print the deploy plan for every configured server
    Plan(commands::plan::PlanArgs),

    /// Check a configuration file for missing required fields
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(self.log_level);

        match self.command {
            Commands::Show(args) => commands::show::execute(args),
            Commands::Plan(args) => commands::plan::execute(args),
            Commands::Validate(args) => commands::validate::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Install the global logger. `RUST_LOG`, when set, overrides `level`.
fn init_logging(level: log::LevelFilter) {
    // A logger may already be installed when running under a test harness
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
