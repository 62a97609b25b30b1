//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use treeanalyzer_core::prelude::*;
//! ```

// Errors
pub use crate::error::{TreeAnalyzerError, TreeResult, ValidationError};

// Pipeline stages
pub use crate::metrics::{MetricsComputer, TreeMetrics};
pub use crate::tree::{build_tree, Tree, VertexKey};
pub use crate::validate::{DescriptionValidator, ValidatedDescription};

// Traversal
pub use crate::common::{GraphTraversal, Traversal};

// Configuration
pub use crate::config::{load_config, Limits, TreeAnalyzerConfig};

// Builder API and output
pub use crate::builder::TreeAnalyzer;
pub use crate::report::TreeReport;
