//! Configuration options for the rewrite pass

/// Suffix appended to the collection name to mark it as processed
pub const FILTERED_SUFFIX: &str = "-Filtered";

/// Form parameter key identifying a file upload slot
pub const UPLOAD_PARAMETER_KEY: &str = "fileToUpload";

/// Rewrite configuration options
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// File name injected when a test case has no replacement entry
    pub default_filename: String,
    /// Directory prefix prepended to every resolved path. Normalized to end
    /// in exactly one separator when non-empty.
    pub data_directory: String,
    /// Print the post-run summary
    pub verbose: bool,
    /// Print each upload parameter before and after rewriting
    pub debug: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            default_filename: "compress.data".to_string(),
            data_directory: String::new(),
            verbose: false,
            debug: false,
        }
    }
}

impl RewriteConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback file name for unmatched tests
    pub fn with_default_filename(mut self, filename: impl Into<String>) -> Self {
        self.default_filename = filename.into();
        self
    }

    /// Set the directory prefix, normalizing the trailing separator
    pub fn with_data_directory(mut self, directory: impl Into<String>) -> Self {
        self.data_directory = ensure_trailing_slash(&directory.into());
        self
    }

    /// Enable the post-run summary
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enable per-parameter debug output
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Resolve a relative file name against the data directory
    pub fn resolve_path(&self, filename: &str) -> String {
        format!("{}{}", self.data_directory, filename)
    }

    /// Path injected when no replacement entry matches
    pub fn default_path(&self) -> String {
        self.resolve_path(&self.default_filename)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.default_filename.is_empty() {
            return Err("Default filename must not be empty".to_string());
        }

        Ok(())
    }
}

/// Normalize a directory prefix to end in exactly one separator.
/// An empty prefix stays empty.
pub fn ensure_trailing_slash(value: &str) -> String {
    if value.is_empty() || value.ends_with('/') {
        value.to_string()
    } else {
        format!("{}/", value)
    }
}
