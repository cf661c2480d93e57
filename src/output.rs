//! # Output Configuration
//!
//! Controls whether command output uses emoji status markers or plain ASCII
//! tags, based on terminal capabilities and user preferences.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables markers when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables markers
//! - `CLICOLOR_FORCE=1` - Forces markers even in non-TTY
//! - `TERM=dumb` - Disables markers for dumb terminals
//!
//! ## Usage
//!
//! ```
//! use crypti_kit::output::{OutputConfig, Status};
//!
//! let out = OutputConfig::from_env_and_flag("never");
//! assert_eq!(Status::Ok.marker(&out), "[OK]");
//! ```

use std::env;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `color_flag` is the value of `--color`: `always` and `never` force the
    /// choice, anything else detects it from the environment.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // Presence alone disables, even when empty
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns `emoji_str` when colors are enabled, `plain` otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// Line prefixes used by the commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warn,
    Err,
    Info,
    Scan,
}

impl Status {
    pub fn marker(self, config: &OutputConfig) -> &'static str {
        match self {
            Status::Ok => emoji(config, "✅", "[OK]"),
            Status::Warn => emoji(config, "⚠️", "[WARN]"),
            Status::Err => emoji(config, "❌", "[ERR]"),
            Status::Info => emoji(config, "📋", "[INFO]"),
            Status::Scan => emoji(config, "🔍", "[SCAN]"),
        }
    }
}
