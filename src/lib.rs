//! Upload path injection for Postman collection documents
//!
//! A Rust CLI tool that rewrites a saved Postman collection so that every
//! multipart file-upload test references a real, locally available file path
//! instead of a placeholder.

pub mod cli;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod rewrite;

// Re-export commonly used types
pub use error::{RewriteError, RewriteResult};
pub use formatter::to_pretty_json;
pub use parser::CollectionSource;
pub use rewrite::{
    rewrite_collection, ReplacementTable, RewriteConfig, RewriteEngine, RewriteReport,
};

/// Rewrite a parsed collection document with default options
pub fn rewrite_with_defaults(
    document: &mut serde_json::Value,
    table: ReplacementTable,
) -> RewriteResult<RewriteReport> {
    rewrite_collection(document, table, &RewriteConfig::default())
}
