//! Shared traversal abstraction.

mod graph_trait;

pub use graph_trait::{GraphTraversal, Traversal};
