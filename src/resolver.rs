//! # Configuration Resolver
//!
//! The `Resolver` is the object an orchestrator builds once per deploy run
//! and then queries for every host and every remote command. It owns the
//! resolved `DeploymentConfig`, an `SshHelper` bound to the deploy user, and
//! the run's `FailureLog`.
//!
//! Construction is the only fallible step: it fails when the configuration
//! document cannot be loaded or parsed. Every query afterwards is a pure
//! function of the resolved fields. A required field missing from the
//! document shows up as an empty component in the derived value (for example
//! an install path of `"/1.2.0"`), not as an error.
//!
//! ```
//! use crypti_kit::loader::MemoryLoader;
//! use crypti_kit::Resolver;
//!
//! let loader = MemoryLoader::new().with_source(
//!     "config.yml",
//!     "deploy_user: deploy\ndeploy_path: /srv/app\napp_version: 1.2.0\n",
//! );
//! let resolver = Resolver::with_loader("config.yml", &loader).unwrap();
//!
//! assert_eq!(resolver.deploy_user_at_host("h1"), "deploy@h1");
//! assert_eq!(resolver.install_path(), "/srv/app/1.2.0");
//! assert_eq!(resolver.archive_file_name(), "crypti-linux-1.2.0.zip");
//! assert!(resolver.configured_servers().is_empty());
//! ```

use crate::catalog;
use crate::config::{AccountSpec, DeploymentConfig, ServerSpec};
use crate::defaults;
use crate::error::Result;
use crate::failures::{Failure, FailureLog};
use crate::loader::{Document, DocumentLoader, YamlFileLoader};
use crate::policy::ExecutionPolicy;
use crate::ssh::{self, RemoteExecutor, SshHelper};
use log::debug;
use std::collections::BTreeMap;
use std::path::Path;

/// Resolved deployment configuration plus derived values for one deploy run.
#[derive(Debug)]
pub struct Resolver {
    config: DeploymentConfig,
    ssh: SshHelper,
    failures: FailureLog,
}

impl Resolver {
    /// Load the YAML document at `config_source` and resolve it.
    pub fn new<P: AsRef<Path>>(config_source: P) -> Result<Self> {
        Self::with_loader(config_source, &YamlFileLoader)
    }

    /// Load `config_source` through a custom loader and resolve it.
    pub fn with_loader<P: AsRef<Path>>(
        config_source: P,
        loader: &dyn DocumentLoader,
    ) -> Result<Self> {
        let path = config_source.as_ref();
        let document = loader.load(path)?;
        let config = DeploymentConfig::from_document(document, &path.display().to_string())?;
        Ok(Self::from_config(config))
    }

    /// Resolve an already loaded document.
    pub fn from_document(document: Document) -> Result<Self> {
        let config = DeploymentConfig::from_document(document, "<document>")?;
        Ok(Self::from_config(config))
    }

    /// Wrap a resolved configuration, binding the SSH helper to its deploy
    /// user with the system ssh client.
    pub fn from_config(config: DeploymentConfig) -> Self {
        debug!("binding ssh helper to user '{}'", config.deploy_user());
        let ssh = SshHelper::new(config.deploy_user());
        Self {
            config,
            ssh,
            failures: FailureLog::new(),
        }
    }

    /// Rebind the SSH helper to the same deploy user with a different
    /// executor.
    pub fn with_executor(mut self, executor: Box<dyn RemoteExecutor>) -> Self {
        self.ssh = SshHelper::with_executor(self.config.deploy_user(), executor);
        self
    }

    pub fn config(&self) -> &DeploymentConfig {
        &self.config
    }

    pub fn ssh(&self) -> &SshHelper {
        &self.ssh
    }

    pub fn deploy_user(&self) -> &str {
        self.config.deploy_user()
    }

    /// `<deploy_user>@<host>`.
    pub fn deploy_user_at_host(&self, host: &str) -> String {
        ssh::login_string(self.deploy_user(), host)
    }

    pub fn deploy_key_path(&self) -> &'static str {
        defaults::DEPLOY_KEY_PATH
    }

    pub fn deploy_path(&self) -> &str {
        self.config.deploy_path()
    }

    pub fn app_version(&self) -> &str {
        self.config.app_version()
    }

    pub fn app_url(&self) -> &str {
        self.config.app_url()
    }

    pub fn blockchain_url(&self) -> &str {
        self.config.blockchain_url()
    }

    /// Versioned install directory on the remote host.
    ///
    /// Literal concatenation: a `deploy_path` ending in `/` yields `//`.
    pub fn install_path(&self) -> String {
        [
            self.deploy_path(),
            defaults::INSTALL_PATH_SEPARATOR,
            self.app_version(),
        ]
        .concat()
    }

    /// Release archive for the configured version.
    pub fn archive_file_name(&self) -> String {
        [
            defaults::ARCHIVE_PREFIX,
            self.app_version(),
            defaults::ARCHIVE_EXTENSION,
        ]
        .concat()
    }

    pub fn execution_policy(&self) -> ExecutionPolicy {
        ExecutionPolicy::SEQUENTIAL
    }

    pub fn configured_servers(&self) -> &BTreeMap<String, ServerSpec> {
        self.config.servers()
    }

    pub fn configured_accounts(&self) -> &BTreeMap<String, AccountSpec> {
        self.config.accounts()
    }

    pub fn os_package_conflicts(&self) -> &'static [&'static str] {
        catalog::OS_PACKAGE_CONFLICTS
    }

    pub fn os_package_dependencies(&self) -> &'static [&'static str] {
        catalog::OS_PACKAGE_DEPENDENCIES
    }

    pub fn side_tool_dependencies(&self) -> &'static [&'static str] {
        catalog::SIDE_TOOL_DEPENDENCIES
    }

    /// Append an entry to this run's failure log.
    pub fn record_failure(&mut self, item: impl Into<Failure>) {
        self.failures.record(item);
    }

    /// Failures recorded so far, oldest first.
    pub fn failures(&self) -> &[Failure] {
        self.failures.entries()
    }

    /// Move the failure log out, leaving an empty one behind.
    pub fn take_failures(&mut self) -> FailureLog {
        std::mem::take(&mut self.failures)
    }
}
