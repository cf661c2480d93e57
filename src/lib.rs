//! # Crypti Kit Library
//!
//! This library resolves the deployment configuration for a fleet of Crypti
//! nodes. It is the planning layer beneath an orchestration tool: it answers
//! "which user, which host, which path, which packages" and leaves running
//! the remote commands to the caller.
//!
//! ## Quick Example
//!
//! ```
//! use crypti_kit::loader::MemoryLoader;
//! use crypti_kit::Resolver;
//!
//! let loader = MemoryLoader::new().with_source(
//!     "config.yml",
//!     r#"
//! deploy_user: deploy
//! deploy_path: /srv/crypti
//! app_version: 0.2.1
//! servers:
//!   node1: 10.0.0.1
//! "#,
//! );
//!
//! let resolver = Resolver::with_loader("config.yml", &loader).unwrap();
//! assert_eq!(resolver.deploy_user_at_host("10.0.0.1"), "deploy@10.0.0.1");
//! assert_eq!(resolver.install_path(), "/srv/crypti/0.2.1");
//! assert_eq!(resolver.archive_file_name(), "crypti-linux-0.2.1.zip");
//! assert!(resolver.configured_accounts().is_empty());
//! ```
//!
//! ## Core Concepts
//!
//! - **Loading (`loader`)**: a `DocumentLoader` turns a path into a generic
//!   YAML document. The resolver never reads files directly.
//! - **Configuration (`config`)**: `DeploymentConfig` is the normalized,
//!   immutable view of the document, with optional sections defaulted.
//! - **Resolver (`resolver`)**: derives login strings, install paths and
//!   archive names, and exposes the package catalogs and execution policy.
//! - **SSH (`ssh`)**: an `SshHelper` bound to the deploy user, backed by a
//!   replaceable `RemoteExecutor`.
//! - **Plan (`plan`)**: a printable snapshot of every derived value for a run.
//! - **Failures (`failures`)**: the append-only log an orchestrator fills
//!   while a run progresses.

pub mod catalog;
pub mod config;
pub mod defaults;
pub mod error;
pub mod failures;
pub mod loader;
pub mod output;
pub mod plan;
pub mod policy;
pub mod resolver;
pub mod ssh;

#[cfg(test)]
mod resolver_proptest;

pub use config::DeploymentConfig;
pub use error::{Error, Result};
pub use failures::{Failure, FailureLog};
pub use plan::DeployPlan;
pub use policy::{ExecutionMode, ExecutionPolicy};
pub use resolver::Resolver;
