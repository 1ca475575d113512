//! Core rewrite engine: a single pass over the collection tree that assigns
//! a resolved file path to every multipart upload parameter.

use serde_json::Value;

use crate::error::{RewriteError, RewriteResult};
use crate::formatter::to_pretty_json;
use crate::rewrite::config::{RewriteConfig, FILTERED_SUFFIX, UPLOAD_PARAMETER_KEY};
use crate::rewrite::report::RewriteReport;
use crate::rewrite::table::ReplacementTable;

/// Main rewrite engine
pub struct RewriteEngine {
    config: RewriteConfig,
}

impl RewriteEngine {
    /// Create a new rewrite engine
    pub fn new(config: RewriteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RewriteConfig {
        &self.config
    }

    /// Rewrite the collection in place, consuming the replacement table.
    ///
    /// Walks sub-collections and test cases in document order. Every form
    /// parameter keyed `fileToUpload` under a POST request with a formdata
    /// body gets its `src` field set: from the table entry for the enclosing
    /// test case's name if one remains (first match consumes the entry),
    /// otherwise from the configured default. Fails with
    /// [`RewriteError::ConfigMismatch`] when the table is not fully consumed
    /// by the end of the pass.
    pub fn rewrite(
        &self,
        document: &mut Value,
        mut table: ReplacementTable,
    ) -> RewriteResult<RewriteReport> {
        let mut report = RewriteReport::new();

        mark_as_filtered(document);

        if let Some(Value::Array(subcollections)) = document.get_mut("item") {
            for subcollection in subcollections.iter_mut() {
                if let Some(Value::Array(testcases)) = subcollection.get_mut("item") {
                    for testcase in testcases.iter_mut() {
                        self.rewrite_testcase(testcase, &mut table, &mut report);
                    }
                }
            }
        }

        if !table.is_empty() {
            return Err(RewriteError::ConfigMismatch {
                updates: report.updates,
                unmatched: table.into_names(),
            });
        }

        Ok(report)
    }

    fn rewrite_testcase(
        &self,
        testcase: &mut Value,
        table: &mut ReplacementTable,
        report: &mut RewriteReport,
    ) {
        if testcase.pointer("/request/method").and_then(Value::as_str) != Some("POST") {
            return;
        }

        let name = testcase
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        // Multipart uploads are identified by a formdata section in the body
        if let Some(Value::Array(parameters)) = testcase.pointer_mut("/request/body/formdata") {
            for parameter in parameters.iter_mut() {
                if parameter.get("key").and_then(Value::as_str) != Some(UPLOAD_PARAMETER_KEY) {
                    continue;
                }

                let resolved = match table.take(&name) {
                    Some(path) => {
                        report.record_match();
                        self.config.resolve_path(&path)
                    }
                    None => {
                        report.record_default();
                        self.config.default_path()
                    }
                };

                if self.config.debug {
                    eprintln!("{}. Updating \"{}\"", report.updates, name);
                    dump_parameter("<===== ", parameter);
                }

                if let Some(object) = parameter.as_object_mut() {
                    object.insert("src".to_string(), Value::String(resolved));
                }

                if self.config.debug {
                    dump_parameter("=====> ", parameter);
                }
            }
        }
    }
}

/// Rewrite a collection with an owned table and the given configuration
pub fn rewrite_collection(
    document: &mut Value,
    table: ReplacementTable,
    config: &RewriteConfig,
) -> RewriteResult<RewriteReport> {
    RewriteEngine::new(config.clone()).rewrite(document, table)
}

/// Append the processed marker to the collection's declared name.
/// A document without one is left untouched.
fn mark_as_filtered(document: &mut Value) {
    if let Some(Value::String(name)) = document.pointer_mut("/info/name") {
        name.push_str(FILTERED_SUFFIX);
    }
}

fn dump_parameter(prefix: &str, parameter: &Value) {
    if let Ok(rendered) = to_pretty_json(parameter) {
        eprintln!("{}{}", prefix, rendered);
    }
}
