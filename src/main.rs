use clap::Parser;
use serde_json::Value;
use std::fs;

use uploadinject::cli::{self, Args, CliConfig};
use uploadinject::error::{RewriteError, RewriteResult};
use uploadinject::formatter::to_pretty_json;
use uploadinject::parser::CollectionSource;
use uploadinject::rewrite::RewriteEngine;

fn main() {
    let args = Args::parse();

    if let Err(error) = run(args) {
        cli::handle_error(&error);
        std::process::exit(1);
    }
}

fn run(args: Args) -> RewriteResult<()> {
    let config = CliConfig::from_args(args)?;

    let path = config.collection_path()?.to_path_buf();
    if config.is_verbose() {
        eprintln!("Reading postman collection from: {}", path.display());
    }

    let mut document = CollectionSource::File(path).load()?;
    let table = config.load_replacements()?;

    let engine = RewriteEngine::new(config.rewrite_config.clone());
    match engine.rewrite(&mut document, table) {
        Ok(report) => {
            if config.is_verbose() {
                cli::print_summary(report.updates, &[]);
            }
            write_output(&config, &document)
        }
        Err(RewriteError::ConfigMismatch { updates, unmatched }) => {
            // The summary reflects the completed traversal; no partial
            // document is written on a mismatch
            if config.is_verbose() {
                cli::print_summary(updates, &unmatched);
            }
            Err(RewriteError::ConfigMismatch { updates, unmatched })
        }
        Err(other) => Err(other),
    }
}

fn write_output(config: &CliConfig, document: &Value) -> RewriteResult<()> {
    let rendered = to_pretty_json(document)?;

    match &config.args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| {
                        RewriteError::io(
                            format!("Failed to create {}: {}", parent.display(), e),
                            Some(parent.to_path_buf()),
                        )
                    })?;
                }
            }
            fs::write(path, &rendered).map_err(|e| {
                RewriteError::io(
                    format!("Failed to write {}: {}", path.display(), e),
                    Some(path.clone()),
                )
            })
        }
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}
