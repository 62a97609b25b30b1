//! Tree description validation.
//!
//! Works on the raw lines in two passes and builds no tree:
//! 1. Shape: the count line, configured bounds, and that exactly `n`
//!    vertex lines follow.
//! 2. Tokens: syntax and range of every child token in the file, then
//!    the edge rules per line, then the query vertices, then the parent
//!    structure as a whole.
//!
//! Every check fails fast with the first violation found.

use tracing::{debug, warn};

use crate::config::Limits;
use crate::error::ValidationError;
use crate::lexer::{parse_decimal, tokenize, LEAF_TOKEN};
use crate::tree::VertexKey;

/// A description that passed every check, together with its query pair.
///
/// Only [`DescriptionValidator::validate`] constructs this, so holding one
/// means the vertex lines describe exactly one tree.
#[derive(Debug, Clone)]
pub struct ValidatedDescription<'a> {
    vertex_count: usize,
    vertex_lines: &'a [String],
    first: VertexKey,
    second: VertexKey,
}

impl<'a> ValidatedDescription<'a> {
    /// Declared (and verified) number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Line `i` describes the children of vertex `i`.
    pub fn vertex_lines(&self) -> &'a [String] {
        self.vertex_lines
    }

    /// First query vertex (path start).
    pub fn first(&self) -> VertexKey {
        self.first
    }

    /// Second query vertex (path end).
    pub fn second(&self) -> VertexKey {
        self.second
    }
}

/// Validates tree descriptions against a set of [`Limits`].
#[derive(Debug, Clone, Default)]
pub struct DescriptionValidator {
    limits: Limits,
}

impl DescriptionValidator {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Validates `lines` (count line first) and the two query tokens.
    pub fn validate<'a>(
        &self,
        lines: &'a [String],
        first: &str,
        second: &str,
    ) -> Result<ValidatedDescription<'a>, ValidationError> {
        self.run(lines, first, second).inspect_err(|err| {
            warn!(kind = err.kind(), line = ?err.line(), detail = %err, "description rejected");
        })
    }

    fn run<'a>(
        &self,
        lines: &'a [String],
        first: &str,
        second: &str,
    ) -> Result<ValidatedDescription<'a>, ValidationError> {
        let (vertex_count, vertex_lines) = self.check_shape(lines)?;
        debug!(vertex_count, "shape pass complete");

        let children = check_child_syntax(vertex_count, vertex_lines)?;
        let parents = check_edges(vertex_count, &children)?;
        debug!(vertex_count, "token pass complete");

        let first = check_query(first, vertex_count)?;
        let second = check_query(second, vertex_count)?;

        check_single_tree(&parents)?;

        Ok(ValidatedDescription {
            vertex_count,
            vertex_lines,
            first,
            second,
        })
    }

    /// Pass 1: count line, bounds, and line count.
    fn check_shape<'a>(
        &self,
        lines: &'a [String],
    ) -> Result<(usize, &'a [String]), ValidationError> {
        let (count_line, vertex_lines) = lines
            .split_first()
            .ok_or(ValidationError::MalformedCount { found: None })?;

        let declared = match tokenize(count_line).as_slice() {
            [token] => parse_decimal(token),
            _ => None,
        }
        .filter(|&n| n > 0)
        .ok_or_else(|| ValidationError::MalformedCount {
            found: Some(count_line.clone()),
        })?;

        if declared > self.limits.max_vertices {
            return Err(ValidationError::TooManyVertices {
                declared,
                limit: self.limits.max_vertices,
            });
        }

        for (idx, line) in lines.iter().enumerate() {
            let length = line.trim_end_matches(['\r', '\n']).len();
            if length > self.limits.max_line_length {
                return Err(ValidationError::LineTooLong {
                    line: idx + 1,
                    length,
                    limit: self.limits.max_line_length,
                });
            }
        }

        if vertex_lines.len() != declared {
            return Err(ValidationError::VertexCountMismatch {
                declared,
                found: vertex_lines.len(),
            });
        }

        Ok((declared, vertex_lines))
    }
}

/// Pass 2a: every child token on every line is a decimal key in `[0, n)`.
///
/// Returns the parsed children of each vertex; leaves get an empty list.
fn check_child_syntax(
    vertex_count: usize,
    vertex_lines: &[String],
) -> Result<Vec<Vec<VertexKey>>, ValidationError> {
    let mut children = Vec::with_capacity(vertex_lines.len());

    for (vertex, line) in vertex_lines.iter().enumerate() {
        let line_no = vertex + 2;
        let tokens = tokenize(line);

        if tokens.as_slice() == [LEAF_TOKEN] {
            children.push(Vec::new());
            continue;
        }
        if tokens.is_empty() {
            return Err(ValidationError::MalformedChild {
                line: line_no,
                token: String::new(),
            });
        }

        let parsed = tokens
            .iter()
            .map(|token| {
                parse_decimal(token)
                    .filter(|&c| c < vertex_count)
                    .ok_or_else(|| ValidationError::MalformedChild {
                        line: line_no,
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        children.push(parsed);
    }

    Ok(children)
}

/// Pass 2b: edges. Returns the parent claimed for every key.
///
/// Per child the checks run in order: self-reference, duplicate on the
/// same line, already claimed by an earlier line.
fn check_edges(
    vertex_count: usize,
    children: &[Vec<VertexKey>],
) -> Result<Vec<Option<VertexKey>>, ValidationError> {
    let mut parents: Vec<Option<VertexKey>> = vec![None; vertex_count];

    for (vertex, line_children) in children.iter().enumerate() {
        let line_no = vertex + 2;
        for &child in line_children {
            if child == vertex {
                return Err(ValidationError::SelfReferencingVertex {
                    line: line_no,
                    vertex,
                });
            }

            match parents[child] {
                Some(parent) if parent == vertex => {
                    return Err(ValidationError::DuplicateChildInLine {
                        line: line_no,
                        child,
                    });
                }
                Some(first_parent) => {
                    return Err(ValidationError::ChildClaimedByMultipleParents {
                        line: line_no,
                        child,
                        first_parent,
                    });
                }
                None => parents[child] = Some(vertex),
            }
        }
    }

    Ok(parents)
}

fn check_query(token: &str, vertex_count: usize) -> Result<VertexKey, ValidationError> {
    let vertex = parse_decimal(token.trim()).ok_or_else(|| ValidationError::QueryVertexMalformed {
        token: token.to_string(),
    })?;
    if vertex >= vertex_count {
        return Err(ValidationError::QueryVertexOutOfRange {
            vertex,
            count: vertex_count,
        });
    }
    Ok(vertex)
}

/// Exactly one parentless key, and every parent chain ends there.
///
/// Single-parent claims alone still admit cycles such as `1` / `0`.
fn check_single_tree(parents: &[Option<VertexKey>]) -> Result<(), ValidationError> {
    let roots: Vec<VertexKey> = parents
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_none())
        .map(|(v, _)| v)
        .collect();

    let root = match roots.as_slice() {
        [root] => *root,
        _ => return Err(ValidationError::RootCount { found: roots.len() }),
    };

    let mut reaches_root = vec![false; parents.len()];
    let mut visited = vec![false; parents.len()];
    reaches_root[root] = true;

    for start in 0..parents.len() {
        let mut walk = Vec::new();
        let mut current = start;
        while !reaches_root[current] {
            if visited[current] {
                return Err(ValidationError::CycleDetected { vertex: current });
            }
            visited[current] = true;
            walk.push(current);
            current = match parents[current] {
                Some(parent) => parent,
                None => return Err(ValidationError::RootCount { found: roots.len() }),
            };
        }
        for v in walk {
            reaches_root[v] = true;
        }
    }

    Ok(())
}
