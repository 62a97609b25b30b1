//! Structural metrics over a built tree.
//!
//! Every metric is derived from breadth-first traversals:
//! - Branch lengths: one traversal from the root, read at the leaves
//! - Diameter: two traversals (root, then the farthest vertex found)
//! - Shortest path: one traversal from the second query vertex
//!
//! Each traversal is read off completely before the next one starts.

use serde::Serialize;
use tracing::debug;

use crate::common::{GraphTraversal, Traversal};
use crate::error::{TreeAnalyzerError, TreeResult};
use crate::tree::{Tree, VertexKey};

/// All computed values for one tree and query pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeMetrics {
    pub root: VertexKey,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub min_branch_length: usize,
    pub max_branch_length: usize,
    pub diameter: usize,
    /// Vertices from the first query vertex to the second, inclusive.
    pub shortest_path: Vec<VertexKey>,
}

/// Computes metrics over an owned tree.
#[derive(Debug, Clone)]
pub struct MetricsComputer {
    tree: Tree,
}

impl MetricsComputer {
    pub fn new(tree: Tree) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root(&self) -> VertexKey {
        self.tree.root()
    }

    fn is_single_vertex(&self) -> bool {
        self.tree.len() == 1
    }

    /// Traversal that must reach every vertex of the tree.
    fn full_traversal(&self, source: VertexKey) -> TreeResult<Traversal> {
        let traversal = self.tree.breadth_first(source);
        if traversal.reached_count() != self.tree.len() {
            return Err(TreeAnalyzerError::internal(format!(
                "traversal from {} reached {} of {} vertices",
                source,
                traversal.reached_count(),
                self.tree.len()
            )));
        }
        Ok(traversal)
    }

    /// `(min, max)` root-to-leaf distance.
    pub fn branch_lengths(&self) -> TreeResult<(usize, usize)> {
        if self.is_single_vertex() {
            return Ok((0, 0));
        }

        let from_root = self.full_traversal(self.tree.root())?;
        let depths: Vec<usize> = self
            .tree
            .leaves()
            .filter_map(|leaf| from_root.distance(leaf))
            .collect();

        match (depths.iter().min(), depths.iter().max()) {
            (Some(&min), Some(&max)) => Ok((min, max)),
            _ => Err(TreeAnalyzerError::internal("tree has no leaves")),
        }
    }

    /// Longest path between any two vertices, via the two-pass technique.
    pub fn diameter(&self) -> TreeResult<usize> {
        if self.is_single_vertex() {
            return Ok(0);
        }

        let (far_end, _) = self.full_traversal(self.tree.root())?.farthest();
        let (_, diameter) = self.full_traversal(far_end)?.farthest();
        debug!(far_end, diameter, "diameter computed");
        Ok(diameter)
    }

    /// Vertices on the unique path from `first` to `second`, inclusive.
    pub fn shortest_path(&self, first: VertexKey, second: VertexKey) -> TreeResult<Vec<VertexKey>> {
        if first == second {
            return self
                .tree
                .vertex(first)
                .map(|v| vec![v.key()])
                .ok_or_else(|| TreeAnalyzerError::internal(format!("unknown vertex {}", first)));
        }

        let from_second = self.full_traversal(second)?;
        from_second.path_from(first).ok_or_else(|| {
            TreeAnalyzerError::internal(format!("no path from {} to {}", first, second))
        })
    }

    /// Every metric at once.
    pub fn compute(&self, first: VertexKey, second: VertexKey) -> TreeResult<TreeMetrics> {
        let (min_branch_length, max_branch_length) = self.branch_lengths()?;
        let metrics = TreeMetrics {
            root: self.root(),
            vertex_count: self.tree.len(),
            edge_count: self.tree.edge_count(),
            min_branch_length,
            max_branch_length,
            diameter: self.diameter()?,
            shortest_path: self.shortest_path(first, second)?,
        };
        debug!(
            root = metrics.root,
            min = metrics.min_branch_length,
            max = metrics.max_branch_length,
            diameter = metrics.diameter,
            "metrics computed"
        );
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_tree;
    use crate::validate::DescriptionValidator;

    fn computer(text: &[&str]) -> MetricsComputer {
        let lines: Vec<String> = text.iter().map(|s| s.to_string()).collect();
        let desc = DescriptionValidator::default()
            .validate(&lines, "0", "0")
            .unwrap();
        MetricsComputer::new(build_tree(&desc).unwrap())
    }

    #[test]
    fn test_single_vertex_degenerates() {
        let c = computer(&["1", "-"]);
        let m = c.compute(0, 0).unwrap();
        assert_eq!(m.root, 0);
        assert_eq!((m.vertex_count, m.edge_count), (1, 0));
        assert_eq!((m.min_branch_length, m.max_branch_length, m.diameter), (0, 0, 0));
        assert_eq!(m.shortest_path, vec![0]);
    }

    #[test]
    fn test_cherry() {
        let c = computer(&["3", "1 2", "-", "-"]);
        let m = c.compute(1, 2).unwrap();
        assert_eq!(m.root, 0);
        assert_eq!((m.vertex_count, m.edge_count), (3, 2));
        assert_eq!((m.min_branch_length, m.max_branch_length), (1, 1));
        assert_eq!(m.diameter, 2);
        assert_eq!(m.shortest_path, vec![1, 0, 2]);
    }

    #[test]
    fn test_unbalanced_branches() {
        // 0 -> {1, 2}, 2 -> 3, 3 -> 4
        let c = computer(&["5", "1 2", "-", "3", "4", "-"]);
        assert_eq!(c.branch_lengths().unwrap(), (1, 3));
        assert_eq!(c.diameter().unwrap(), 4);
        assert_eq!(c.shortest_path(4, 1).unwrap(), vec![4, 3, 2, 0, 1]);
    }

    #[test]
    fn test_diameter_not_through_root() {
        // root 0 has a single child 1; the long path lives below it.
        let c = computer(&["7", "1", "2 3", "4", "5", "-", "6", "-"]);
        assert_eq!(c.root(), 0);
        assert_eq!(c.diameter().unwrap(), 5);
        assert_eq!(c.branch_lengths().unwrap(), (3, 4));
    }

    #[test]
    fn test_root_with_single_child_counts_root_as_non_leaf() {
        let c = computer(&["2", "1", "-"]);
        assert_eq!(c.branch_lengths().unwrap(), (1, 1));
        assert_eq!(c.diameter().unwrap(), 1);
        assert_eq!(c.shortest_path(0, 1).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_path_to_self() {
        let c = computer(&["3", "1 2", "-", "-"]);
        assert_eq!(c.shortest_path(2, 2).unwrap(), vec![2]);
    }
}
