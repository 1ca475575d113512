//! Error types and handling infrastructure for collection rewriting

use std::path::PathBuf;

/// Main error type for rewrite operations
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error(
        "No Postman collection provided. Please specify a file containing your \
         Postman collection by appending \"-- <path to file>\" to this command."
    )]
    MissingInput,

    #[error("{}: No such file or directory", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Invalid json found in {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// Raised after a full traversal when replacement entries were never
    /// matched to an upload parameter. Carries the update count reached so
    /// the verbose summary can still be printed.
    #[error("Failed to process one or more named tests: \n{}", .unmatched.join("\n"))]
    ConfigMismatch {
        updates: usize,
        unmatched: Vec<String>,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
}

impl RewriteError {
    pub fn parse(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Names from the replacement table that were never consumed, if this
    /// error is a mismatch.
    pub fn unmatched_names(&self) -> Option<&[String]> {
        match self {
            Self::ConfigMismatch { unmatched, .. } => Some(unmatched),
            _ => None,
        }
    }
}

/// Result type for rewrite operations
pub type RewriteResult<T> = Result<T, RewriteError>;
