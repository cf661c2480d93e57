//! # CLI Command Implementations
//!
//! One module per subcommand of the `crypti-kit` tool. Each module holds:
//! - An `Args` struct derived with `clap` for the command-specific options.
//! - An `execute` function that loads the configuration through the
//!   `crypti_kit` library and prints the result.
//!
//! Every command is read-only: none of them contacts a remote host.

pub mod completions;
pub mod plan;
pub mod show;
pub mod validate;
