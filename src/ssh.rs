//! # SSH Helper
//!
//! The resolver binds an `SshHelper` to the deploy user when it is built, so
//! callers only ever hand it a host and a command. Actual execution goes
//! through the `RemoteExecutor` trait:
//!
//! - **`SystemSsh`**: spawns the system `ssh` client, which picks up keys from
//!   `~/.ssh/`, the SSH agent and `~/.ssh/config`.
//! - Tests substitute their own executor to record invocations instead of
//!   opening connections.

use crate::error::{Error, Result};
use log::debug;
use std::fmt;
use std::process::Command;

/// Build the `user@host` login string used for every remote action.
///
/// No validation is performed on either part.
pub fn login_string(user: &str, host: &str) -> String {
    format!("{}@{}", user, host)
}

/// Result of one remote command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Whether the remote command exited with status 0.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Trait for remote command execution - allows mocking in tests
pub trait RemoteExecutor: Send + Sync {
    /// Run `command` as `login` (`user@host`).
    ///
    /// A command that runs and exits non-zero is reported through
    /// `CommandOutput::success`; `Err` means the command could not be run at
    /// all.
    fn execute(&self, login: &str, command: &str) -> Result<CommandOutput>;
}

/// Runs commands through the system `ssh` binary.
#[derive(Debug, Clone)]
pub struct SystemSsh {
    program: String,
}

impl SystemSsh {
    pub fn new() -> Self {
        Self {
            program: "ssh".to_string(),
        }
    }

    /// Use a different client binary (e.g. a wrapper script).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the client for one invocation.
    ///
    /// Batch mode disables password prompts.
    pub fn args(&self, login: &str, command: &str) -> Vec<String> {
        vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            login.to_string(),
            command.to_string(),
        ]
    }
}

impl Default for SystemSsh {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteExecutor for SystemSsh {
    fn execute(&self, login: &str, command: &str) -> Result<CommandOutput> {
        let output = Command::new(&self.program)
            .args(self.args(login, command))
            .output()
            .map_err(|e| Error::Ssh {
                login: login.to_string(),
                command: command.to_string(),
                stderr: e.to_string(),
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// SSH access bound to a single deploy user.
pub struct SshHelper {
    user: String,
    executor: Box<dyn RemoteExecutor>,
}

impl SshHelper {
    /// Bind to `user` using the system ssh client.
    pub fn new(user: impl Into<String>) -> Self {
        Self::with_executor(user, Box::new(SystemSsh::new()))
    }

    /// Bind to `user` with a custom executor.
    pub fn with_executor(user: impl Into<String>, executor: Box<dyn RemoteExecutor>) -> Self {
        Self {
            user: user.into(),
            executor,
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn login(&self, host: &str) -> String {
        login_string(&self.user, host)
    }

    /// Run `command` on `host` as the bound user.
    pub fn run(&self, host: &str, command: &str) -> Result<CommandOutput> {
        let login = self.login(host);
        debug!("ssh {}: {}", login, command);
        self.executor.execute(&login, command)
    }
}

impl fmt::Debug for SshHelper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SshHelper")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records every invocation and answers with a fixed output.
    struct RecordingExecutor {
        calls: Arc<Mutex<Vec<(String, String)>>>,
        success: bool,
    }

    impl RemoteExecutor for RecordingExecutor {
        fn execute(&self, login: &str, command: &str) -> Result<CommandOutput> {
            self.calls
                .lock()
                .unwrap()
                .push((login.to_string(), command.to_string()));
            Ok(CommandOutput {
                success: self.success,
                stdout: "ok".to_string(),
                stderr: String::new(),
            })
        }
    }

    #[test]
    fn test_login_string() {
        assert_eq!(login_string("deploy", "10.0.0.1"), "deploy@10.0.0.1");
        assert_eq!(login_string("", "h1"), "@h1");
    }

    #[test]
    fn test_helper_runs_as_bound_user() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let helper = SshHelper::with_executor(
            "deploy",
            Box::new(RecordingExecutor {
                calls: Arc::clone(&calls),
                success: true,
            }),
        );

        let output = helper.run("h1", "uptime").unwrap();
        assert!(output.success);
        assert_eq!(output.stdout, "ok");

        helper.run("h2", "df -h").unwrap();
        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                ("deploy@h1".to_string(), "uptime".to_string()),
                ("deploy@h2".to_string(), "df -h".to_string()),
            ]
        );
    }

    #[test]
    fn test_helper_reports_remote_failure_as_output() {
        let helper = SshHelper::with_executor(
            "deploy",
            Box::new(RecordingExecutor {
                calls: Arc::new(Mutex::new(Vec::new())),
                success: false,
            }),
        );
        let output = helper.run("h1", "false").unwrap();
        assert!(!output.success);
    }

    #[test]
    fn test_system_ssh_args() {
        let ssh = SystemSsh::new();
        assert_eq!(ssh.program(), "ssh");
        assert_eq!(
            ssh.args("deploy@h1", "uname -a"),
            vec!["-o", "BatchMode=yes", "deploy@h1", "uname -a"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_system_ssh_executes_program() {
        // `echo` stands in for ssh and prints the arguments it was given.
        let ssh = SystemSsh::with_program("echo");
        let output = ssh.execute("deploy@h1", "uptime").unwrap();
        assert!(output.success);
        assert_eq!(output.stdout.trim(), "-o BatchMode=yes deploy@h1 uptime");
    }

    #[test]
    fn test_system_ssh_missing_program() {
        let ssh = SystemSsh::with_program("crypti-kit-no-such-ssh-binary");
        let err = ssh.execute("deploy@h1", "uptime").unwrap_err();
        match err {
            Error::Ssh { login, command, .. } => {
                assert_eq!(login, "deploy@h1");
                assert_eq!(command, "uptime");
            }
            other => panic!("expected Ssh error, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_hides_executor() {
        let helper = SshHelper::new("deploy");
        let debug = format!("{:?}", helper);
        assert!(debug.contains("deploy"));
    }
}
