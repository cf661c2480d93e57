//! # Deployment Configuration
//!
//! This module turns a generic `Document` into a `DeploymentConfig`, the
//! resolved and defaulted view of a deploy target. Normalization happens
//! exactly once, in `DeploymentConfig::from_document`; after that the value
//! is never mutated.
//!
//! ## Document Shape
//!
//! ```yaml
//! deploy_user: deploy
//! deploy_path: /srv/crypti
//! app_version: 0.2.1
//! app_url: https://downloads.crypti.me/
//! blockchain_url: https://downloads.crypti.me/blockchain.db.zip
//! servers:
//!   node1: 10.0.0.1
//! accounts:
//!   genesis:
//!     secret: "..."
//! ```
//!
//! ## Normalization Rules
//!
//! - Scalar fields that are missing or null resolve to an empty string. The
//!   resolver does not invent values for them.
//! - Numbers and booleans are rendered to text, so `app_version: 2` becomes
//!   `"2"`.
//! - `servers` and `accounts` that are missing or null become empty
//!   mappings. Entries are kept as-is, without validating their shape.

use crate::error::{Error, Result};
use crate::loader::Document;
use log::{debug, warn};
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// A declared target host. Its shape is left to provisioning code.
pub type ServerSpec = Value;

/// A declared application account. Its shape is left to provisioning code.
pub type AccountSpec = Value;

/// Keys that must be present for derived values to be meaningful.
pub const REQUIRED_FIELDS: [&str; 3] = ["deploy_user", "deploy_path", "app_version"];

/// The resolved, defaulted view of a deployment configuration document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentConfig {
    deploy_user: String,
    deploy_path: String,
    app_version: String,
    app_url: String,
    blockchain_url: String,
    servers: BTreeMap<String, ServerSpec>,
    accounts: BTreeMap<String, AccountSpec>,
}

impl DeploymentConfig {
    /// Normalize a loaded document.
    ///
    /// `origin` names where the document came from and is only used in error
    /// messages. Fails only when the top level of the document is something
    /// other than a mapping; an empty document is treated as a mapping with
    /// no keys.
    pub fn from_document(document: Document, origin: &str) -> Result<Self> {
        let root = match document {
            Value::Mapping(map) => map,
            Value::Null => {
                warn!("configuration document {} is empty", origin);
                serde_yaml::Mapping::new()
            }
            other => {
                return Err(Error::ConfigLoad {
                    path: origin.to_string(),
                    message: format!(
                        "expected a mapping at the top level, found {}",
                        kind_of(&other)
                    ),
                    hint: Some("Start the file with `deploy_user: <name>`".to_string()),
                })
            }
        };

        let config = Self {
            deploy_user: scalar_field(&root, "deploy_user"),
            deploy_path: scalar_field(&root, "deploy_path"),
            app_version: scalar_field(&root, "app_version"),
            app_url: scalar_field(&root, "app_url"),
            blockchain_url: scalar_field(&root, "blockchain_url"),
            servers: section(&root, "servers"),
            accounts: section(&root, "accounts"),
        };

        debug!(
            "resolved configuration from {}: {} server(s), {} account(s)",
            origin,
            config.servers.len(),
            config.accounts.len()
        );
        Ok(config)
    }

    pub fn deploy_user(&self) -> &str {
        &self.deploy_user
    }

    pub fn deploy_path(&self) -> &str {
        &self.deploy_path
    }

    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    pub fn app_url(&self) -> &str {
        &self.app_url
    }

    pub fn blockchain_url(&self) -> &str {
        &self.blockchain_url
    }

    /// Declared servers, keyed by name. Empty if none were declared.
    pub fn servers(&self) -> &BTreeMap<String, ServerSpec> {
        &self.servers
    }

    /// Declared accounts, keyed by name. Empty if none were declared.
    pub fn accounts(&self) -> &BTreeMap<String, AccountSpec> {
        &self.accounts
    }

    /// Required keys whose resolved value is empty, in declaration order.
    ///
    /// The resolver itself never fails on these; callers that want strict
    /// validation check this list before starting a run.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [&self.deploy_user, &self.deploy_path, &self.app_version];
        REQUIRED_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Soft problems that do not stop a run but usually indicate a mistake.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.servers.is_empty() {
            warnings.push("no servers configured".to_string());
        }
        if self.deploy_path.ends_with('/') {
            warnings.push(format!(
                "deploy_path '{}' ends with '/'; the install path will contain '//'",
                self.deploy_path
            ));
        }
        warnings
    }
}

/// Read a scalar key as text. Missing, null and non-scalar values give "".
fn scalar_field(root: &serde_yaml::Mapping, key: &str) -> String {
    match root.get(key) {
        None => String::new(),
        Some(value) => scalar_text(value).unwrap_or_else(|| {
            if !value.is_null() {
                warn!("ignoring {} value for '{}': expected a scalar", kind_of(value), key);
            }
            String::new()
        }),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Read a map-valued section, defaulting to an empty mapping.
fn section(root: &serde_yaml::Mapping, key: &str) -> BTreeMap<String, Value> {
    let entries = match root.get(key) {
        None | Some(Value::Null) => {
            debug!("'{}' not declared, defaulting to an empty mapping", key);
            return BTreeMap::new();
        }
        Some(Value::Mapping(entries)) => entries,
        Some(other) => {
            warn!(
                "ignoring '{}': expected a mapping, found {}",
                key,
                kind_of(other)
            );
            return BTreeMap::new();
        }
    };

    let mut resolved = BTreeMap::new();
    for (name, spec) in entries {
        match scalar_text(name) {
            Some(name) => {
                resolved.insert(name, spec.clone());
            }
            None => warn!("ignoring entry in '{}' with a non-scalar key", key),
        }
    }
    resolved
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
