//! # Show Command Implementation
//!
//! Prints the configuration after normalization, followed by the values the
//! resolver derives from it. Sections missing from the file appear as empty
//! mappings, which makes this the quickest way to see what a deploy run will
//! actually use.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crypti_kit::{DeploymentConfig, Resolver};

/// Print the resolved configuration and derived values
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path to the deployment configuration file.
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "CRYPTI_KIT_CONFIG",
        default_value = crypti_kit::defaults::DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Print JSON instead of YAML.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ResolvedView<'a> {
    #[serde(flatten)]
    config: &'a DeploymentConfig,
    install_path: String,
    archive: String,
    deploy_key: &'static str,
}

/// Execute the `show` command.
pub fn execute(args: ShowArgs) -> Result<()> {
    let resolver = Resolver::new(&args.config)?;

    let view = ResolvedView {
        config: resolver.config(),
        install_path: resolver.install_path(),
        archive: resolver.archive_file_name(),
        deploy_key: resolver.deploy_key_path(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", serde_yaml::to_string(&view)?);
    }
    Ok(())
}
