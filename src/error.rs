//! # Error Handling
//!
//! This module defines the centralized error type for the `crypti-kit`
//! library. It uses the `thiserror` library to create an `Error` enum that
//! covers the failure modes of loading a deployment configuration and talking
//! to the SSH collaborator.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum for all library errors. Each variant carries
//!   enough context (file path, login string, command) to explain the failure
//!   without a backtrace.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Only `ConfigLoad` is fatal for a deploy run: it is raised when the
//! configuration document is missing or cannot be parsed. Missing fields
//! inside a well-formed document are not errors at this layer; they surface
//! as empty derived values (see `DeploymentConfig::missing_fields`).

use thiserror::Error;

/// Main error type for crypti-kit operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration document could not be read or parsed.
    ///
    /// Includes the path that was requested and optionally a hint about how
    /// to fix the problem.
    #[error("Failed to load configuration from {path}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigLoad {
        path: String,
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The SSH client could not be started for a remote command.
    #[error("SSH command failed for {login}: {command} - {stderr}")]
    Ssh {
        login: String,
        command: String,
        stderr: String,
    },

    /// An error occurred during serialization of a resolved value.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Builds a `ConfigLoad` error without a hint.
    pub fn config_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ConfigLoad {
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
