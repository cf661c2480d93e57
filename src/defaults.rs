//! Default values for crypti-kit configuration.
//!
//! This module provides centralized default values used across the resolver
//! and the commands, ensuring consistency and avoiding duplication.

/// Configuration file read when no `--config` flag or `CRYPTI_KIT_CONFIG`
/// environment variable is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

/// Public key distributed to hosts for the deploy user.
///
/// This is a fixed path and is never read from the configuration document.
/// The `~` is expanded by the remote shell, not by crypti-kit.
pub const DEPLOY_KEY_PATH: &str = "~/.ssh/id_rsa.pub";

/// Prefix of the release archive name.
pub const ARCHIVE_PREFIX: &str = "crypti-linux-";

/// Extension of the release archive name, including the dot.
pub const ARCHIVE_EXTENSION: &str = ".zip";

/// Separator placed between the deploy path and the application version.
pub const INSTALL_PATH_SEPARATOR: &str = "/";
