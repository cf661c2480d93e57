//! # Deploy Plan
//!
//! A `DeployPlan` is a flat snapshot of everything a provisioning run needs
//! from the resolver: the login string for every declared server, the
//! install location, the release archive, the execution policy and the
//! package catalogs. It is what the `plan` command prints.
//!
//! Building a plan performs no I/O. Hosts appear in server-name order.

use crate::config::ServerSpec;
use crate::error::{Error, Result};
use crate::policy::ExecutionPolicy;
use crate::Resolver;
use serde::Serialize;
use std::fmt;

/// Keys checked, in order, for the address of a server given as a mapping.
const HOST_KEYS: [&str; 2] = ["host", "ip"];

/// One declared server and how to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostPlan {
    pub name: String,
    pub host: String,
    pub login: String,
}

/// Derived values for a whole deploy run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployPlan {
    pub deploy_user: String,
    pub deploy_key: String,
    pub app_version: String,
    pub app_url: String,
    pub blockchain_url: String,
    pub install_path: String,
    pub archive: String,
    pub policy: ExecutionPolicy,
    pub os_package_conflicts: Vec<String>,
    pub os_package_dependencies: Vec<String>,
    pub side_tool_dependencies: Vec<String>,
    pub hosts: Vec<HostPlan>,
}

impl DeployPlan {
    pub fn from_resolver(resolver: &Resolver) -> Self {
        let hosts = resolver
            .configured_servers()
            .iter()
            .map(|(name, spec)| {
                let host = server_host(name, spec).to_string();
                HostPlan {
                    name: name.clone(),
                    login: resolver.deploy_user_at_host(&host),
                    host,
                }
            })
            .collect();

        Self {
            deploy_user: resolver.deploy_user().to_string(),
            deploy_key: resolver.deploy_key_path().to_string(),
            app_version: resolver.app_version().to_string(),
            app_url: resolver.app_url().to_string(),
            blockchain_url: resolver.blockchain_url().to_string(),
            install_path: resolver.install_path(),
            archive: resolver.archive_file_name(),
            policy: resolver.execution_policy(),
            os_package_conflicts: to_owned(resolver.os_package_conflicts()),
            os_package_dependencies: to_owned(resolver.os_package_dependencies()),
            side_tool_dependencies: to_owned(resolver.side_tool_dependencies()),
            hosts,
        }
    }

    /// Pretty-printed JSON form of the plan.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization {
            message: e.to_string(),
        })
    }
}

/// Address used to reach a declared server.
///
/// A string entry is the address itself. A mapping entry uses its `host` or
/// `ip` key. Anything else falls back to the server name.
pub fn server_host<'a>(name: &'a str, spec: &'a ServerSpec) -> &'a str {
    if let Some(host) = spec.as_str() {
        return host;
    }
    HOST_KEYS
        .iter()
        .find_map(|key| spec.get(*key).and_then(|value| value.as_str()))
        .unwrap_or(name)
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl fmt::Display for DeployPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<18}{}", "deploy user:", self.deploy_user)?;
        writeln!(f, "{:<18}{}", "deploy key:", self.deploy_key)?;
        writeln!(f, "{:<18}{}", "app version:", self.app_version)?;
        writeln!(f, "{:<18}{}", "install path:", self.install_path)?;
        writeln!(f, "{:<18}{}", "archive:", self.archive)?;
        writeln!(f, "{:<18}{}", "app url:", self.app_url)?;
        writeln!(f, "{:<18}{}", "blockchain url:", self.blockchain_url)?;
        writeln!(f, "{:<18}{}", "execution:", self.policy)?;
        writeln!(
            f,
            "{:<18}{}",
            "remove packages:",
            self.os_package_conflicts.join(" ")
        )?;
        writeln!(
            f,
            "{:<18}{}",
            "install packages:",
            self.os_package_dependencies.join(" ")
        )?;
        writeln!(
            f,
            "{:<18}{}",
            "side tools:",
            self.side_tool_dependencies.join(" ")
        )?;

        if self.hosts.is_empty() {
            write!(f, "hosts: none")
        } else {
            write!(f, "hosts ({}):", self.hosts.len())?;
            for host in &self.hosts {
                write!(f, "\n  {} -> {}", host.name, host.login)?;
            }
            Ok(())
        }
    }
}
