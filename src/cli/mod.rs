//! Command-line interface module

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::error::{RewriteError, RewriteResult};
use crate::rewrite::{format_summary, ReplacementTable, RewriteConfig};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "uploadinject")]
#[command(about = "Inject upload file paths into a Postman collection document")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Path to the Postman collection document (append "-- <path>" to the command)
    #[arg()]
    pub collection: Option<PathBuf>,

    /// Default upload file name injected when a test has no replacement entry
    #[arg(long = "default-file", value_name = "NAME", default_value = "compress.data")]
    pub default_file: String,

    /// Parent directory of all the replacement files
    #[arg(long = "data-directory", value_name = "DIR", default_value = "")]
    pub data_directory: String,

    /// Output file for the filtered collection document (default: stdout)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON file mapping test-case names to upload file paths
    /// (default: the built-in table)
    #[arg(long, value_name = "PATH")]
    pub replacements: Option<PathBuf>,

    /// Print a post-run summary
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print each upload parameter before and after rewriting
    #[arg(short = 'd', long)]
    pub debug: bool,
}

/// CLI configuration resolved from arguments
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub rewrite_config: RewriteConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> RewriteResult<Self> {
        let rewrite_config = RewriteConfig::new()
            .with_default_filename(args.default_file.clone())
            .with_data_directory(args.data_directory.clone())
            .with_verbose(args.verbose)
            .with_debug(args.debug);

        rewrite_config
            .validate()
            .map_err(RewriteError::configuration)?;

        Ok(Self {
            args,
            rewrite_config,
        })
    }

    /// Resolve the collection path, failing when it is missing from the
    /// command line or does not exist on disk
    pub fn collection_path(&self) -> RewriteResult<&Path> {
        let path = self
            .args
            .collection
            .as_deref()
            .ok_or(RewriteError::MissingInput)?;

        if !path.exists() {
            return Err(RewriteError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        Ok(path)
    }

    /// Load the replacement table: the `--replacements` file when given,
    /// otherwise the built-in defaults
    pub fn load_replacements(&self) -> RewriteResult<ReplacementTable> {
        let Some(path) = &self.args.replacements else {
            return Ok(ReplacementTable::builtin());
        };

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RewriteError::FileNotFound { path: path.clone() },
            _ => RewriteError::io(
                format!("Failed to read {}: {}", path.display(), e),
                Some(path.clone()),
            ),
        })?;

        ReplacementTable::from_json_str(&path.display().to_string(), &content)
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if debug mode is enabled
    pub fn is_debug(&self) -> bool {
        self.args.debug
    }
}

/// Print the post-run summary. It goes to stdout, ahead of any document
/// output, matching the reference tool.
pub fn print_summary(updates: usize, unmatched: &[String]) {
    print!("{}", format_summary(updates, unmatched));
    println!();
}

/// Print a fatal error to stderr in the tool's `ERROR:` format
pub fn handle_error(error: &RewriteError) {
    let tag = console::style("ERROR:").for_stderr().red().bold();
    eprintln!("{} {}\n", tag, error);

    if matches!(error, RewriteError::MissingInput) {
        eprintln!("Try 'uploadinject --help' for usage information.");
    }
}
