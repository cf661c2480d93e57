//! # Failure Log
//!
//! An append-only record of things that went wrong during one deploy run.
//! The orchestrator appends entries as remote steps fail; nothing in this
//! crate ever reads them back to make a decision.

use serde::Serialize;
use std::fmt;

/// A single recorded failure.
///
/// The contents are opaque to the resolver. `subject` is usually a server
/// name or login string, `reason` a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub subject: String,
    pub reason: String,
}

impl Failure {
    pub fn new(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reason.is_empty() {
            write!(f, "{}", self.subject)
        } else {
            write!(f, "{}: {}", self.subject, self.reason)
        }
    }
}

/// A bare subject with no reason, e.g. `log.record("web-1")`.
impl From<&str> for Failure {
    fn from(subject: &str) -> Self {
        Failure::new(subject, "")
    }
}

impl From<String> for Failure {
    fn from(subject: String) -> Self {
        Failure::new(subject, "")
    }
}

/// Ordered, append-only failure accumulator.
///
/// Entries keep their insertion order and are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FailureLog {
    entries: Vec<Failure>,
}

impl FailureLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure to the end of the log.
    pub fn record(&mut self, failure: impl Into<Failure>) {
        self.entries.push(failure.into());
    }

    /// All recorded failures, oldest first.
    pub fn entries(&self) -> &[Failure] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append every entry of `other`, keeping its order.
    pub fn extend(&mut self, other: FailureLog) {
        self.entries.extend(other.entries);
    }
}

impl IntoIterator for FailureLog {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
