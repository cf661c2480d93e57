//! # Provisioning Package Catalogs
//!
//! Fixed package lists a host needs before a Crypti release can run on it.
//! These are declared lists, not a dependency graph: the order is the order
//! in which provisioning scripts hand them to the package manager.

/// OS packages that must be removed before provisioning so they do not
/// conflict with the Node.js runtime installed for the application.
pub const OS_PACKAGE_CONFLICTS: &[&str] = &["nodejs", "nodejs-legacy", "npm"];

/// OS packages the provisioning script must ensure are installed.
pub const OS_PACKAGE_DEPENDENCIES: &[&str] = &["build-essential", "wget", "unzip", "nodejs"];

/// Application-level tools installed through the Node.js package manager.
///
/// `forever` supervises the application process.
pub const SIDE_TOOL_DEPENDENCIES: &[&str] = &["forever"];
