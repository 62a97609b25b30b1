//! treeanalyzer-core: validation and structural metrics for line-described trees
//!
//! A tree is described as text: the vertex count `n` on the first line,
//! then one line per vertex listing its children (or `-` for a leaf).
//! This library validates such a description, rebuilds it as a rooted,
//! parent-linked tree and computes:
//!
//! - **Root**: the single vertex no other vertex claims as a child
//! - **Branch lengths**: minimal and maximal root-to-leaf distance
//! - **Diameter**: longest path between any two vertices
//! - **Shortest path**: the vertex sequence between two query vertices
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use treeanalyzer_core::prelude::*;
//!
//! let report = TreeAnalyzer::new().analyze_reader(reader, "1", "2")?;
//! treeanalyzer_core::print_plain(&report);
//! ```
//!
//! # Module Organization
//!
//! - [`lexer`]: Line tokenizing and input acquisition
//! - [`validate`]: Two-pass description validation
//! - [`tree`]: Arena tree model and construction
//! - [`common`]: Breadth-first traversal abstraction
//! - [`metrics`]: Root, branch, diameter and path computation
//! - [`report`]: Plain and JSON report rendering
//! - [`builder`]: Fluent API over the whole pipeline
//! - [`error`]: Typed error handling

pub mod builder;
pub mod common;
pub mod config;
pub mod error;
pub mod lexer;
pub mod logging;
pub mod metrics;
pub mod prelude;
pub mod report;
pub mod tree;
pub mod validate;

pub use common::{GraphTraversal, Traversal};

// Error types
pub use error::{IoResultExt, TreeAnalyzerError, TreeResult, ValidationError};

// Builder API
pub use builder::TreeAnalyzer;

// Configuration
pub use config::{load_config, load_config_file, Limits, TreeAnalyzerConfig};

// Input
pub use lexer::{read_lines, tokenize};

// Logging
pub use logging::init_structured_logging;

// Pipeline stages
pub use metrics::{MetricsComputer, TreeMetrics};
pub use tree::{build_tree, Tree, Vertex, VertexKey};
pub use validate::{DescriptionValidator, ValidatedDescription};

// Reporting
pub use report::{print_json, print_plain, render_json, render_plain, TreeReport};

#[cfg(test)]
mod tests;
