//! treeanalyzer CLI - structural metrics for a tree described in a text file.
//!
//! Prints the root, vertex and edge counts, minimal and maximal branch
//! lengths, the diameter, and the shortest path between two vertices.
//!
//! Exit codes:
//! - 0: report printed
//! - 1: invalid input (unreadable file or rejected description)
//! - 2: usage error or internal error

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use treeanalyzer_core::{
    init_structured_logging, load_config, load_config_file, print_json, print_plain, IoResultExt,
    TreeAnalyzer, TreeAnalyzerConfig, TreeAnalyzerError, TreeReport,
};

/// Message for any rejected input; the reason only goes to the log.
const INVALID_INPUT_MSG: &str = "Invalid input";

#[derive(Parser, Debug)]
#[command(author, version, about = "Root, branch lengths, diameter and shortest path of a tree")]
pub struct Cli {
    /// Path to the tree description file
    graph_file: PathBuf,

    /// First query vertex (path start)
    first_vertex: String,

    /// Second query vertex (path end)
    second_vertex: String,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Configuration file (defaults to ./treeanalyzer.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Loads the explicit config file, or the one in the working directory.
fn resolve_config(explicit: Option<&Path>) -> Result<TreeAnalyzerConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => Ok(load_config(Path::new("."))?.unwrap_or_default()),
    }
}

/// Opens and analyzes the description file.
fn analyze_file(
    analyzer: &TreeAnalyzer,
    path: &Path,
    first: &str,
    second: &str,
) -> Result<TreeReport, TreeAnalyzerError> {
    let file = File::open(path).with_path(path)?;
    analyzer.analyze_reader(BufReader::new(file), first, second)
}

fn main() -> Result<ExitCode> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] treeanalyzer internal error: {}", info);
        eprintln!("[PANIC] The process will exit with code 101.");
    }));

    // JSON to stderr, respects RUST_LOG
    init_structured_logging();

    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let analyzer = TreeAnalyzer::new().with_limits(config.limits());

    match analyze_file(&analyzer, &cli.graph_file, &cli.first_vertex, &cli.second_vertex) {
        Ok(report) => {
            if cli.json || config.wants_json() {
                print_json(&report);
            } else {
                print_plain(&report);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_input_error() => {
            eprintln!("{}", INVALID_INPUT_MSG);
            Ok(ExitCode::from(1))
        }
        Err(err) => {
            eprintln!("[ERROR] {}", err);
            Ok(ExitCode::from(2))
        }
    }
}
