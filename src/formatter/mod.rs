//! Pretty-printing for rewritten collection documents

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::error::{RewriteError, RewriteResult};

/// Render a JSON value with 4-space indentation, the layout Postman exports
/// use. serde_json leaves forward slashes unescaped, so paths like
/// `data/wc` come out readable.
pub fn to_pretty_json(value: &Value) -> RewriteResult<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);

    value
        .serialize(&mut serializer)
        .map_err(|e| RewriteError::io(format!("Failed to render document: {}", e), None))?;

    String::from_utf8(buffer)
        .map_err(|e| RewriteError::io(format!("Rendered document is not UTF-8: {}", e), None))
}
