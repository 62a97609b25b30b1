//! Typed error handling for the tree analyzer.
//!
//! Two layers:
//! - [`ValidationError`]: one variant per description check, carrying the
//!   line/token context needed to say which check failed and where.
//! - [`TreeAnalyzerError`]: everything the pipeline can return, separating
//!   user input failures from internal invariant violations.

use std::path::PathBuf;
use thiserror::Error;

use crate::tree::VertexKey;

/// A rejected tree description.
///
/// Line numbers are 1-indexed file lines (the count line is line 1,
/// vertex `i` is described on line `i + 2`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// First line absent, not purely decimal digits, or zero
    #[error("malformed vertex count: {found:?}")]
    MalformedCount { found: Option<String> },

    /// Declared count exceeds the configured bound
    #[error("declared {declared} vertices, limit is {limit}")]
    TooManyVertices { declared: usize, limit: usize },

    /// A line longer than the configured bound
    #[error("line {line} has {length} bytes, limit is {limit}")]
    LineTooLong {
        line: usize,
        length: usize,
        limit: usize,
    },

    /// Declared count does not match the number of vertex lines
    #[error("declared {declared} vertices but found {found} vertex lines")]
    VertexCountMismatch { declared: usize, found: usize },

    /// Child token that is not a plain decimal integer in `[0, n)`
    #[error("line {line}: malformed child {token:?}")]
    MalformedChild { line: usize, token: String },

    /// Vertex listing itself as a child
    #[error("line {line}: vertex {vertex} lists itself as a child")]
    SelfReferencingVertex { line: usize, vertex: VertexKey },

    /// Same child listed twice on one line
    #[error("line {line}: child {child} listed more than once")]
    DuplicateChildInLine { line: usize, child: VertexKey },

    /// Child already claimed by an earlier vertex
    #[error("line {line}: child {child} already belongs to vertex {first_parent}")]
    ChildClaimedByMultipleParents {
        line: usize,
        child: VertexKey,
        first_parent: VertexKey,
    },

    /// Number of parentless vertices is not exactly one
    #[error("expected exactly one root, found {found}")]
    RootCount { found: usize },

    /// Parent links from this vertex never reach the root
    #[error("vertex {vertex} lies on a cycle")]
    CycleDetected { vertex: VertexKey },

    /// Query vertex that is not a plain decimal integer
    #[error("malformed query vertex {token:?}")]
    QueryVertexMalformed { token: String },

    /// Query vertex outside `[0, n)`
    #[error("query vertex {vertex} out of range for {count} vertices")]
    QueryVertexOutOfRange { vertex: usize, count: usize },
}

impl ValidationError {
    /// Stable short name of the violated check, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedCount { .. } => "malformed_count",
            Self::TooManyVertices { .. } => "too_many_vertices",
            Self::LineTooLong { .. } => "line_too_long",
            Self::VertexCountMismatch { .. } => "vertex_count_mismatch",
            Self::MalformedChild { .. } => "malformed_child",
            Self::SelfReferencingVertex { .. } => "self_referencing_vertex",
            Self::DuplicateChildInLine { .. } => "duplicate_child_in_line",
            Self::ChildClaimedByMultipleParents { .. } => "child_claimed_by_multiple_parents",
            Self::RootCount { .. } => "root_count",
            Self::CycleDetected { .. } => "cycle_detected",
            Self::QueryVertexMalformed { .. } => "query_vertex_malformed",
            Self::QueryVertexOutOfRange { .. } => "query_vertex_out_of_range",
        }
    }

    /// File line the failure refers to, if it is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::LineTooLong { line, .. }
            | Self::MalformedChild { line, .. }
            | Self::SelfReferencingVertex { line, .. }
            | Self::DuplicateChildInLine { line, .. }
            | Self::ChildClaimedByMultipleParents { line, .. } => Some(*line),
            Self::MalformedCount { .. } | Self::TooManyVertices { .. } => Some(1),
            _ => None,
        }
    }
}

/// Main error type for tree analysis.
#[derive(Error, Debug)]
pub enum TreeAnalyzerError {
    /// I/O error while reading the description
    #[error("I/O error: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// The description was rejected
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// A structural invariant that validation should have guaranteed does not hold
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl TreeAnalyzerError {
    /// Create an I/O error without path context.
    pub fn io(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create an I/O error with path context.
    pub fn io_at(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        Self::Io {
            message: format!("{}: {}", path.display(), err),
            path: Some(path),
            source: Some(err),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invariant violation.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for failures caused by what the user supplied
    /// (unreadable input or a rejected description).
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Validation(_))
    }

    /// The validation failure, if this is one.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Convenience type alias for analyzer results.
pub type TreeResult<T> = Result<T, TreeAnalyzerError>;

/// Extension trait for converting std::io::Error into [`TreeAnalyzerError`].
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> TreeResult<T>;

    /// Convert without path context.
    fn into_tree_result(self) -> TreeResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> TreeResult<T> {
        self.map_err(|e| TreeAnalyzerError::io_at(path, e))
    }

    fn into_tree_result(self) -> TreeResult<T> {
        self.map_err(TreeAnalyzerError::io)
    }
}
