//! # Validate Command Implementation
//!
//! The resolver accepts incomplete configurations and lets the
//! gaps surface as empty derived values. This command is the opt-in strict
//! check a caller runs before starting a deploy.
//!
//! ## Functionality
//!
//! - **Parsing**: the file must load and have a mapping at the top level.
//! - **Required fields**: `deploy_user`, `deploy_path` and `app_version` must
//!   be present and non-empty.
//! - **Warnings**: no servers declared, or a `deploy_path` with a trailing
//!   separator. These fail the command only with `--strict`.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crypti_kit::output::{OutputConfig, Status};
use crypti_kit::Resolver;

/// Check a configuration file for missing required fields
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the deployment configuration file to validate.
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "CRYPTI_KIT_CONFIG",
        default_value = crypti_kit::defaults::DEFAULT_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Use strict validation (fail on warnings).
    #[arg(long)]
    pub strict: bool,
}

/// Execute the `validate` command.
///
/// `color_flag` is the value of the global `--color` flag.
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config_path = &args.config;
    println!(
        "{} Validating configuration: {}",
        Status::Scan.marker(&out),
        config_path.display()
    );

    let resolver = match Resolver::new(config_path) {
        Ok(resolver) => {
            println!(
                "{} Configuration file parsed successfully",
                Status::Ok.marker(&out)
            );
            resolver
        }
        Err(e) => {
            println!(
                "{} Configuration parsing failed: {}",
                Status::Err.marker(&out),
                e
            );
            return Err(anyhow::anyhow!("Configuration parsing failed: {}", e));
        }
    };
    let config = resolver.config();

    println!("\n{} Configuration Summary:", Status::Info.marker(&out));
    println!("   Servers: {}", config.servers().len());
    println!("   Accounts: {}", config.accounts().len());
    println!("   Install path: {}", resolver.install_path());
    println!("   Archive: {}", resolver.archive_file_name());

    let missing = config.missing_fields();
    for field in &missing {
        println!(
            "{} Missing required field: {}",
            Status::Err.marker(&out),
            field
        );
    }

    let warnings = config.warnings();
    for warning in &warnings {
        println!("{} {}", Status::Warn.marker(&out), warning);
    }

    println!("\n{} Validation Result:", Status::Info.marker(&out));

    if !missing.is_empty() {
        println!(
            "{} Configuration has errors that must be fixed",
            Status::Err.marker(&out)
        );
        return Err(anyhow::anyhow!(
            "Configuration validation failed: missing {}",
            missing.join(", ")
        ));
    }

    if !warnings.is_empty() && args.strict {
        println!(
            "{} Configuration has warnings (strict mode enabled)",
            Status::Err.marker(&out)
        );
        return Err(anyhow::anyhow!(
            "Configuration validation failed in strict mode"
        ));
    }

    if warnings.is_empty() {
        println!("{} Configuration is valid", Status::Ok.marker(&out));
    } else {
        println!(
            "{} Configuration is valid but has warnings",
            Status::Warn.marker(&out)
        );
    }

    Ok(())
}
