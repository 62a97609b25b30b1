//! Configuration loading from treeanalyzer.toml.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::TreeAnalyzerError;

/// Name of the configuration file looked up in a directory.
pub const CONFIG_FILE_NAME: &str = "treeanalyzer.toml";

/// Default bound on the declared vertex count.
pub const DEFAULT_MAX_VERTICES: usize = 100_000;

/// Default bound on a single input line.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024;

/// Main configuration structure for treeanalyzer.toml.
#[derive(Debug, Deserialize, Default)]
pub struct TreeAnalyzerConfig {
    /// Input bounds.
    pub limits: Option<LimitsConfig>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// `[limits]` section; unset keys fall back to defaults.
#[derive(Debug, Deserialize, Default)]
pub struct LimitsConfig {
    pub max_vertices: Option<usize>,
    pub max_line_length: Option<usize>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Resolved input bounds enforced by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_vertices: usize,
    pub max_line_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl TreeAnalyzerConfig {
    /// Limits with defaults filled in.
    pub fn limits(&self) -> Limits {
        let defaults = Limits::default();
        match &self.limits {
            Some(l) => Limits {
                max_vertices: l.max_vertices.unwrap_or(defaults.max_vertices),
                max_line_length: l.max_line_length.unwrap_or(defaults.max_line_length),
            },
            None => defaults,
        }
    }

    /// True when `[output] format = "json"`.
    pub fn wants_json(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}

/// Loads configuration from treeanalyzer.toml in `dir` if it exists.
pub fn load_config(dir: &Path) -> Result<Option<TreeAnalyzerConfig>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }
    load_config_file(&path).map(Some)
}

/// Loads configuration from an explicit file.
///
/// Read and parse failures surface as [`TreeAnalyzerError::Config`].
pub fn load_config_file(path: &Path) -> Result<TreeAnalyzerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| TreeAnalyzerError::config(path, format!("cannot read: {}", e)))?;
    let cfg = toml::from_str(&content)
        .map_err(|e| TreeAnalyzerError::config(path, format!("invalid TOML: {}", e)))?;
    Ok(cfg)
}
