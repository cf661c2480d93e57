//! Scheduling contract handed to the remote executor for command batches.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// How the steps of a command batch are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One step at a time, in declaration order.
    Sequential,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Sequential => write!(f, "sequential"),
        }
    }
}

/// Ordering and pacing for a batch of remote commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExecutionPolicy {
    pub mode: ExecutionMode,
    pub delay_millis: u64,
}

impl ExecutionPolicy {
    /// Strictly sequential with no pause between steps.
    pub const SEQUENTIAL: ExecutionPolicy = ExecutionPolicy {
        mode: ExecutionMode::Sequential,
        delay_millis: 0,
    };

    /// Pause between two consecutive steps.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_millis)
    }
}

impl fmt::Display for ExecutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}ms delay", self.mode, self.delay_millis)
    }
}
