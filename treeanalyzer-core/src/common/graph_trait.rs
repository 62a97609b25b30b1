//! Breadth-first traversal over dense-keyed undirected graphs.
//!
//! Each traversal returns its own [`Traversal`] value. Nothing is stored on
//! the graph, so results of one call can never be observed half-overwritten
//! by the next.

use std::collections::VecDeque;

use crate::tree::VertexKey;

/// Result of one breadth-first traversal from a single source.
///
/// `None` distance means the vertex was never reached; `None` predecessor
/// marks the source (or an unreached vertex).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    source: VertexKey,
    distances: Vec<Option<usize>>,
    predecessors: Vec<Option<VertexKey>>,
}

impl Traversal {
    pub fn source(&self) -> VertexKey {
        self.source
    }

    pub fn distance(&self, key: VertexKey) -> Option<usize> {
        self.distances.get(key).copied().flatten()
    }

    pub fn predecessor(&self, key: VertexKey) -> Option<VertexKey> {
        self.predecessors.get(key).copied().flatten()
    }

    /// Number of vertices that received a distance.
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Reached vertex at maximum distance; lowest key wins ties.
    pub fn farthest(&self) -> (VertexKey, usize) {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(key, d)| d.map(|d| (key, d)))
            .fold((self.source, 0), |best, cur| if cur.1 > best.1 { cur } else { best })
    }

    /// Path from `from` back to the source by predecessor links,
    /// both ends included. `None` if `from` was not reached.
    pub fn path_from(&self, from: VertexKey) -> Option<Vec<VertexKey>> {
        let length = self.distance(from)?;
        let mut path = Vec::with_capacity(length + 1);
        let mut current = from;
        path.push(current);
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
        }
        Some(path)
    }
}

/// Trait for graphs with dense vertex keys `0..vertex_count()`.
///
/// Implementors only provide adjacency; breadth-first search comes for free.
pub trait GraphTraversal {
    /// Number of vertices; keys are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// All neighbors of a vertex, in a fixed order.
    ///
    /// For trees both the children and the parent are neighbors.
    fn neighbors(&self, key: VertexKey) -> Vec<VertexKey>;

    /// Single-source BFS: distance and predecessor for every vertex.
    ///
    /// Complexity: O(|V| + |E|) time, O(|V|) queue space.
    fn breadth_first(&self, source: VertexKey) -> Traversal {
        let n = self.vertex_count();
        let mut distances = vec![None; n];
        let mut predecessors = vec![None; n];
        let mut queue = VecDeque::new();

        if source < n {
            distances[source] = Some(0);
            queue.push_back(source);
        }

        while let Some(u) = queue.pop_front() {
            let next = distances[u].map_or(0, |d: usize| d + 1);
            for w in self.neighbors(u) {
                if w < n && distances[w].is_none() {
                    distances[w] = Some(next);
                    predecessors[w] = Some(u);
                    queue.push_back(w);
                }
            }
        }

        Traversal {
            source,
            distances,
            predecessors,
        }
    }
}
