//! # Document Loading
//!
//! The resolver never reads files itself. It asks a `DocumentLoader` for a
//! generic key-value `Document` and normalizes that. Two loaders ship with
//! the crate:
//!
//! - **`YamlFileLoader`**: reads a YAML (or JSON, which is valid YAML) file
//!   from disk. This is what the CLI uses.
//! - **`MemoryLoader`**: serves documents from in-memory sources keyed by
//!   path, so resolver behavior can be exercised without touching the
//!   filesystem.

use crate::error::{Error, Result};
use log::debug;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A parsed but not yet interpreted configuration document.
pub type Document = serde_yaml::Value;

/// Trait for document loading - allows in-memory fixtures in tests
pub trait DocumentLoader: Send + Sync {
    /// Load and parse the document at `path`.
    ///
    /// Fails with `Error::ConfigLoad` if the document does not exist or is
    /// not syntactically valid.
    fn load(&self, path: &Path) -> Result<Document>;
}

/// Parses document text into a generic `Document`.
///
/// A source containing only blank lines and comments yields `Null`, the
/// same as an empty file. Merge keys (`<<: *anchor`) are applied at every
/// level, so fields shared through an anchor resolve like fields written
/// out in full.
///
/// Duplicate keys within one mapping are rejected as a parse error rather
/// than letting the last occurrence win.
pub fn parse_document(source: &str, origin: &str) -> Result<Document> {
    let is_blank = source
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'));
    if is_blank {
        return Ok(Document::Null);
    }

    let mut document: Document = serde_yaml::from_str(source).map_err(|e| {
        let message = e.to_string();
        let hint = if message.contains("duplicate entry") {
            "Remove the duplicate key; each key may appear only once per mapping"
        } else {
            "Check the YAML syntax near the reported line"
        };
        Error::ConfigLoad {
            path: origin.to_string(),
            message,
            hint: Some(hint.to_string()),
        }
    })?;

    document.apply_merge().map_err(|e| Error::ConfigLoad {
        path: origin.to_string(),
        message: e.to_string(),
        hint: Some("A `<<` merge key must refer to a mapping or a list of mappings".to_string()),
    })?;

    Ok(document)
}

/// Loads documents from YAML files on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFileLoader;

impl DocumentLoader for YamlFileLoader {
    fn load(&self, path: &Path) -> Result<Document> {
        let origin = path.display().to_string();
        debug!("reading configuration document {}", origin);

        let content = std::fs::read_to_string(path).map_err(|e| {
            let hint = if e.kind() == std::io::ErrorKind::NotFound {
                Some("Pass --config <FILE> or set CRYPTI_KIT_CONFIG".to_string())
            } else {
                None
            };
            Error::ConfigLoad {
                path: origin.clone(),
                message: e.to_string(),
                hint,
            }
        })?;

        parse_document(&content, &origin)
    }
}

/// Serves documents from in-memory sources.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    sources: HashMap<PathBuf, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `source` as the content of `path`.
    pub fn with_source(mut self, path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        self.sources.insert(path.into(), source.into());
        self
    }
}

impl DocumentLoader for MemoryLoader {
    fn load(&self, path: &Path) -> Result<Document> {
        let origin = path.display().to_string();
        let source = self
            .sources
            .get(path)
            .ok_or_else(|| Error::config_load(origin.clone(), "document not found"))?;
        parse_document(source, &origin)
    }
}
