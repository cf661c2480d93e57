//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_config(configs::MINIMAL);
//!     fixture.command().arg("plan").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common deployment configurations for testing.
#[allow(dead_code)]
pub mod configs {
    /// The three required fields and nothing else.
    pub const MINIMAL: &str = r#"
deploy_user: deploy
deploy_path: /srv/app
app_version: 1.2.0
"#;

    /// Every field, two servers and one account.
    pub const FULL: &str = r#"
deploy_user: deploy
deploy_path: /srv/crypti
app_version: 0.2.1
app_url: https://downloads.crypti.me/
blockchain_url: https://downloads.crypti.me/blockchain.db.zip
servers:
  node1: 10.0.0.1
  node2:
    host: 10.0.0.2
accounts:
  genesis:
    secret: correct horse battery staple
"#;

    /// Missing `deploy_user` and `app_version`.
    pub const INCOMPLETE: &str = r#"
deploy_path: /srv/app
servers:
  node1: 10.0.0.1
"#;

    /// `deploy_path` with a trailing separator.
    pub const TRAILING_SLASH: &str = r#"
deploy_user: deploy
deploy_path: /srv/app/
app_version: 1.2.0
servers:
  node1: 10.0.0.1
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "deploy_user: [unclosed";
}

/// A temporary directory holding a `config.yml`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `config.yml` with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("config.yml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Write an arbitrary file with the given content.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    #[allow(dead_code)]
    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("config.yml")
    }

    /// Create a command running in this fixture's directory.
    ///
    /// `CRYPTI_KIT_CONFIG` is cleared so the default `config.yml` is used
    /// unless a test passes `--config`.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("crypti-kit");
        cmd.current_dir(self.path())
            .env_remove("CRYPTI_KIT_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
