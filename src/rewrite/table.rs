//! Replacement table mapping test-case names to upload file paths

use crate::error::{RewriteError, RewriteResult};
use serde_json::Value;

/// Mapping from test-case name to the relative file path its upload
/// parameter should reference. Entries are consumed as they are matched;
/// whatever remains after a pass is the residual reported on mismatch.
///
/// Backed by a plain vector: tables hold a handful of entries and the
/// residual must come out in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    entries: Vec<(String, String)>,
}

impl ReplacementTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the tool, covering the multipart upload tests
    /// in the standard staging collection.
    pub fn builtin() -> Self {
        [
            ("apps setup::Stage wc App", "data/wc"),
            ("apps setup::Stage wc App Wrapper", "data/wrapper.sh"),
            (
                "apps::Register New Multipart Upload Application",
                "tmp/data/apps/app.json",
            ),
            (
                "jobs setup::Stage wrapper.sh for Jobs Tests",
                "data/wrapper.sh",
            ),
            (
                "jobs setup::Stage wrapper-short.sh for Jobs Tests",
                "data/wrapper-short.sh",
            ),
            ("jobs setup::Stage wc for Jobs Tests", "data/wc"),
            (
                "jobs:Submit a New Multipart Upload Short Job Request",
                "tmp/data/jobs/job.json",
            ),
            (
                "monitors::Register Multipart Upload Test Compute System",
                "tmp/data/systems/compute.json",
            ),
            (
                "monitors::Add New Multipart Upload Monitor",
                "tmp/data/monitors/monitor.json",
            ),
            (
                "meta::Add New Multipart Upload Metadata",
                "tmp/data/metadata/meta.json",
            ),
            (
                "meta::Add New Multipart Upload Metadata Schema",
                "tmp/data/metadata/schema.json",
            ),
            (
                "systems::Create a Storage System Multipart Form Upload Test",
                "tmp/data/systems/storage.json",
            ),
            ("uuids setup::Stage File", "data/wrapper.sh"),
        ]
        .into_iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect()
    }

    /// Add or replace an entry
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) {
        let name = name.into();
        self.entries.retain(|(existing, _)| *existing != name);
        self.entries.push((name, path.into()));
    }

    /// Remove and return the path for a test-case name. Each entry can be
    /// taken at most once.
    pub fn take(&mut self, name: &str) -> Option<String> {
        let index = self
            .entries
            .iter()
            .position(|(existing, _)| existing == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remaining test-case names, in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Consume the table into its remaining names
    pub fn into_names(self) -> Vec<String> {
        self.entries.into_iter().map(|(name, _)| name).collect()
    }

    /// Build a table from a parsed JSON document: a flat object mapping
    /// test-case names to relative file paths.
    pub fn from_value(source_name: &str, value: &Value) -> RewriteResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            RewriteError::configuration(format!(
                "Replacement table in {} must be a JSON object of test name to file path",
                source_name
            ))
        })?;

        let mut table = Self::new();
        for (name, path) in object {
            let path = path.as_str().ok_or_else(|| {
                RewriteError::configuration(format!(
                    "Replacement entry \"{}\" in {} must map to a string path",
                    name, source_name
                ))
            })?;
            table.insert(name.clone(), path);
        }

        Ok(table)
    }

    /// Build a table from raw JSON text
    pub fn from_json_str(source_name: &str, json: &str) -> RewriteResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| RewriteError::parse(source_name, e.to_string()))?;
        Self::from_value(source_name, &value)
    }
}

impl FromIterator<(String, String)> for ReplacementTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, path) in iter {
            table.insert(name, path);
        }
        table
    }
}
