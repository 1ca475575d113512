//! Collection input sources and JSON parsing

use std::path::PathBuf;

use serde_json::Value;

use crate::error::{RewriteError, RewriteResult};

/// Where a collection document comes from
#[derive(Debug, Clone)]
pub enum CollectionSource {
    /// A collection file on the local system
    File(PathBuf),
    /// An in-memory JSON document, for library callers and tests
    String(String),
}

impl CollectionSource {
    /// Human-readable name used in diagnostics
    pub fn description(&self) -> String {
        match self {
            CollectionSource::File(path) => path.display().to_string(),
            CollectionSource::String(_) => "string input".to_string(),
        }
    }

    /// Read and parse the collection document
    pub fn load(&self) -> RewriteResult<Value> {
        let content = match self {
            CollectionSource::File(path) => {
                std::fs::read_to_string(path).map_err(|e| match e.kind() {
                    std::io::ErrorKind::NotFound => RewriteError::FileNotFound {
                        path: path.clone(),
                    },
                    _ => RewriteError::io(
                        format!("Failed to read {}: {}", path.display(), e),
                        Some(path.clone()),
                    ),
                })?
            }
            CollectionSource::String(content) => content.clone(),
        };

        parse_collection(&self.description(), &content)
    }
}

/// Parse a collection document, rejecting anything that is not a non-empty
/// JSON object. The traversal assumes at least the top-level shape, so a
/// null, scalar, array, or empty-object document is an input error rather
/// than a silent no-op.
pub fn parse_collection(source_name: &str, content: &str) -> RewriteResult<Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(RewriteError::parse(source_name, "empty document"));
    }

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| RewriteError::parse(source_name, e.to_string()))?;

    match value.as_object() {
        Some(object) if !object.is_empty() => Ok(value),
        _ => Err(RewriteError::parse(
            source_name,
            "document is not a non-empty JSON object",
        )),
    }
}
