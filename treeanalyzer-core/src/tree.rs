//! Rooted tree model and construction from a validated description.
//!
//! Vertices live in a single arena indexed by their key; parent and child
//! links are keys into that arena.

use tracing::debug;

use crate::common::GraphTraversal;
use crate::error::{TreeAnalyzerError, TreeResult};
use crate::lexer::{parse_decimal, tokenize, LEAF_TOKEN};
use crate::validate::ValidatedDescription;

/// Dense vertex identifier in `[0, n)`; also the arena index.
pub type VertexKey = usize;

/// A tree vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    key: VertexKey,
    children: Vec<VertexKey>,
    parent: Option<VertexKey>,
}

impl Vertex {
    fn new(key: VertexKey) -> Self {
        Self {
            key,
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn key(&self) -> VertexKey {
        self.key
    }

    /// Children in description order.
    pub fn children(&self) -> &[VertexKey] {
        &self.children
    }

    /// `None` only for the root.
    pub fn parent(&self) -> Option<VertexKey> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// A rooted tree over keys `0..n`.
#[derive(Debug, Clone)]
pub struct Tree {
    vertices: Vec<Vertex>,
    root: VertexKey,
}

impl Tree {
    pub fn root(&self) -> VertexKey {
        self.root
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if the tree has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges, `n - 1`.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.children.len()).sum()
    }

    pub fn vertex(&self, key: VertexKey) -> Option<&Vertex> {
        self.vertices.get(key)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    pub fn leaves(&self) -> impl Iterator<Item = VertexKey> + '_ {
        self.vertices.iter().filter(|v| v.is_leaf()).map(|v| v.key)
    }

    /// True if `a` and `b` are joined by a parent/child edge.
    pub fn are_adjacent(&self, a: VertexKey, b: VertexKey) -> bool {
        let parent_of = |x: VertexKey, y: VertexKey| {
            self.vertices.get(y).and_then(|v| v.parent) == Some(x)
        };
        parent_of(a, b) || parent_of(b, a)
    }
}

impl GraphTraversal for Tree {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Children first, then the parent.
    fn neighbors(&self, key: VertexKey) -> Vec<VertexKey> {
        match self.vertices.get(key) {
            Some(v) => v.children.iter().copied().chain(v.parent).collect(),
            None => Vec::new(),
        }
    }
}

/// Builds the parent-linked tree for a validated description.
///
/// The root is found afterwards by a single scan for the vertex whose
/// parent was never set. Validation guarantees this succeeds; an error
/// here is an invariant violation, never an input error.
pub fn build_tree(desc: &ValidatedDescription<'_>) -> TreeResult<Tree> {
    let n = desc.vertex_count();
    let mut vertices: Vec<Vertex> = (0..n).map(Vertex::new).collect();

    for (key, line) in desc.vertex_lines().iter().enumerate() {
        let tokens = tokenize(line);
        if tokens.as_slice() == [LEAF_TOKEN] {
            continue;
        }
        for token in tokens {
            let child = parse_decimal(token)
                .filter(|&c| c < n)
                .ok_or_else(|| {
                    TreeAnalyzerError::internal(format!(
                        "unparsable child {:?} of vertex {} after validation",
                        token, key
                    ))
                })?;
            vertices[child].parent = Some(key);
            vertices[key].children.push(child);
        }
    }

    let root = vertices
        .iter()
        .position(Vertex::is_root)
        .ok_or_else(|| TreeAnalyzerError::internal("validated tree has no root"))?;

    debug!(vertex_count = n, root, "tree built");
    Ok(Tree { vertices, root })
}
