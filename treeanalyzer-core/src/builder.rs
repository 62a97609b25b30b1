//! Builder pattern API for tree analysis.
//!
//! Provides a fluent interface over the whole pipeline
//! (validate, build, compute metrics, assemble report):
//!
//! ```rust,ignore
//! use treeanalyzer_core::prelude::*;
//!
//! let report = TreeAnalyzer::new()
//!     .with_max_vertices(10_000)
//!     .analyze_reader(reader, "1", "2")?;
//!
//! println!("Diameter: {}", report.metrics.diameter);
//! ```

use std::io::BufRead;

use tracing::info;

use crate::config::Limits;
use crate::error::{IoResultExt, TreeResult};
use crate::lexer::read_lines;
use crate::metrics::MetricsComputer;
use crate::report::TreeReport;
use crate::tree::build_tree;
use crate::validate::DescriptionValidator;

/// Builder for configuring and running a tree analysis.
#[derive(Debug, Clone, Default)]
pub struct TreeAnalyzer {
    limits: Limits,
}

impl TreeAnalyzer {
    /// Create an analyzer with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all limits at once (e.g. from a config file).
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Bound on the declared vertex count.
    pub fn with_max_vertices(mut self, max: usize) -> Self {
        self.limits.max_vertices = max;
        self
    }

    /// Bound on the length of a single input line.
    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.limits.max_line_length = max;
        self
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Analyze an in-memory description (count line first).
    pub fn analyze_lines(
        &self,
        lines: &[String],
        first: &str,
        second: &str,
    ) -> TreeResult<TreeReport> {
        let desc = DescriptionValidator::new(self.limits).validate(lines, first, second)?;
        let (first, second) = (desc.first(), desc.second());

        let tree = build_tree(&desc)?;
        let metrics = MetricsComputer::new(tree).compute(first, second)?;

        info!(
            vertices = metrics.vertex_count,
            root = metrics.root,
            diameter = metrics.diameter,
            "analysis complete"
        );
        Ok(TreeReport::new(first, second, metrics))
    }

    /// Read an already-open stream to the end, then analyze it.
    pub fn analyze_reader<R: BufRead>(
        &self,
        reader: R,
        first: &str,
        second: &str,
    ) -> TreeResult<TreeReport> {
        let lines = read_lines(reader).into_tree_result()?;
        self.analyze_lines(&lines, first, second)
    }
}
