//! # Plan Command Implementation
//!
//! Prints the `DeployPlan` for a configuration: the login string for every
//! declared server plus the install path, archive, execution policy and
//! package lists shared by all of them. Nothing is executed.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crypti_kit::{DeployPlan, Resolver};

/// Print the deploy plan for every configured server
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Path to the deployment configuration file.
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "CRYPTI_KIT_CONFIG",
        default_value = crypti_kit::defaults::DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the `plan` command.
pub fn execute(args: PlanArgs) -> Result<()> {
    let resolver = Resolver::new(&args.config)?;
    let plan = DeployPlan::from_resolver(&resolver);

    if args.json {
        println!("{}", plan.to_json()?);
    } else {
        println!("{}", plan);
    }
    Ok(())
}
