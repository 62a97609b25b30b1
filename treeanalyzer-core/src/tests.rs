//! End-to-end test suite for treeanalyzer-core.

use crate::*;
use petgraph::algo::dijkstra;
use petgraph::graphmap::UnGraphMap;

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}

fn analyze(text: &[&str], first: &str, second: &str) -> TreeResult<TreeReport> {
    TreeAnalyzer::new().analyze_lines(&lines(text), first, second)
}

fn validation_error(text: &[&str], first: &str, second: &str) -> ValidationError {
    match analyze(text, first, second) {
        Err(TreeAnalyzerError::Validation(err)) => err,
        other => panic!("expected validation error, got {:?}", other),
    }
}

/// Deterministic pseudo-random tree description with `n` vertices.
///
/// Vertex `i > 0` hangs below an earlier vertex; keys are then permuted so
/// the root is not always 0.
fn generated_description(n: usize, seed: u64) -> Vec<String> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = |bound: usize| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) as usize) % bound
    };

    let mut label: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        let j = next(i + 1);
        label.swap(i, j);
    }

    let mut children = vec![Vec::new(); n];
    for i in 1..n {
        let parent = next(i);
        children[label[parent]].push(label[i]);
    }

    let mut out = vec![n.to_string()];
    for c in children {
        if c.is_empty() {
            out.push("-".to_string());
        } else {
            out.push(c.iter().map(|k| k.to_string()).collect::<Vec<_>>().join(" "));
        }
    }
    out
}

fn oracle_graph(tree: &Tree) -> UnGraphMap<VertexKey, ()> {
    let mut g = UnGraphMap::new();
    for v in tree.vertices() {
        g.add_node(v.key());
        for &c in v.children() {
            g.add_edge(v.key(), c, ());
        }
    }
    g
}

fn build(lines: &[String]) -> Tree {
    let desc = DescriptionValidator::default()
        .validate(lines, "0", "0")
        .unwrap();
    build_tree(&desc).unwrap()
}

#[test]
fn test_single_vertex_report() {
    let report = analyze(&["1", "-"], "0", "0").unwrap();
    let m = &report.metrics;
    assert_eq!(m.root, 0);
    assert_eq!((m.vertex_count, m.edge_count), (1, 0));
    assert_eq!((m.min_branch_length, m.max_branch_length, m.diameter), (0, 0, 0));
    assert_eq!(m.shortest_path, vec![0]);
}

#[test]
fn test_cherry_report() {
    let report = analyze(&["3", "1 2", "-", "-"], "1", "2").unwrap();
    let m = &report.metrics;
    assert_eq!(m.root, 0);
    assert_eq!((m.vertex_count, m.edge_count), (3, 2));
    assert_eq!((m.min_branch_length, m.max_branch_length), (1, 1));
    assert_eq!(m.diameter, 2);
    assert_eq!(m.shortest_path, vec![1, 0, 2]);
    assert!(render_plain(&report).ends_with("Shortest Path Between 1 and 2: 1 0 2\n"));
}

#[test]
fn test_missing_vertex_line() {
    assert_eq!(
        validation_error(&["2", "1"], "0", "1"),
        ValidationError::VertexCountMismatch { declared: 2, found: 1 }
    );
}

#[test]
fn test_duplicate_child() {
    assert!(matches!(
        validation_error(&["2", "1 1", "-"], "0", "1"),
        ValidationError::DuplicateChildInLine { child: 1, .. }
    ));
}

#[test]
fn test_child_with_two_parents() {
    assert!(matches!(
        validation_error(&["3", "2", "2", "-"], "0", "1"),
        ValidationError::ChildClaimedByMultipleParents { child: 2, .. }
    ));
}

#[test]
fn test_query_equal_to_count_is_out_of_range() {
    assert_eq!(
        validation_error(&["3", "1 2", "-", "-"], "0", "3"),
        ValidationError::QueryVertexOutOfRange { vertex: 3, count: 3 }
    );
}

#[test]
fn test_crlf_input() {
    let report = TreeAnalyzer::new()
        .analyze_reader("3\r\n1 2\r\n-\r\n-\r\n".as_bytes(), "2", "1")
        .unwrap();
    assert_eq!(report.metrics.shortest_path, vec![2, 0, 1]);
}

#[test]
fn test_edge_count_is_vertex_count_minus_one() {
    for seed in 0..20 {
        let n = 1 + (seed as usize * 7) % 40;
        let tree = build(&generated_description(n, seed));
        assert_eq!(tree.edge_count(), tree.len() - 1, "seed {seed}");
    }
}

#[test]
fn test_every_vertex_root_xor_single_parent() {
    let tree = build(&generated_description(30, 3));
    let mut parent_claims = vec![0usize; tree.len()];
    for v in tree.vertices() {
        for &c in v.children() {
            parent_claims[c] += 1;
        }
    }
    for v in tree.vertices() {
        let is_root = v.key() == tree.root();
        assert!(is_root ^ (parent_claims[v.key()] == 1), "vertex {}", v.key());
        assert_eq!(v.parent().is_none(), is_root);
    }
}

#[test]
fn test_breadth_first_reaches_every_vertex() {
    let tree = build(&generated_description(25, 11));
    for source in 0..tree.len() {
        let t = tree.breadth_first(source);
        assert_eq!(t.reached_count(), tree.len());
        assert!((0..tree.len()).all(|v| t.distance(v).is_some()));
    }
}

#[test]
fn test_diameter_matches_all_pairs_oracle() {
    for seed in 0..15 {
        let n = 2 + (seed as usize * 5) % 30;
        let tree = build(&generated_description(n, seed));
        let g = oracle_graph(&tree);

        let brute = (0..n)
            .map(|s| dijkstra(&g, s, None, |_| 1usize).into_values().max().unwrap_or(0))
            .max()
            .unwrap_or(0);

        let computer = MetricsComputer::new(tree);
        assert_eq!(computer.diameter().unwrap(), brute, "seed {seed}, n {n}");
    }
}

#[test]
fn test_shortest_paths_match_oracle() {
    let tree = build(&generated_description(18, 42));
    let g = oracle_graph(&tree);
    let computer = MetricsComputer::new(tree);

    for a in 0..18 {
        let distances = dijkstra(&g, a, None, |_| 1usize);
        for b in 0..18 {
            let path = computer.shortest_path(a, b).unwrap();
            assert_eq!(path.len(), distances[&b] + 1, "{a} -> {b}");
            assert_eq!(path.first(), Some(&a));
            assert_eq!(path.last(), Some(&b));
            for pair in path.windows(2) {
                assert!(computer.tree().are_adjacent(pair[0], pair[1]));
            }
        }
    }
}

#[test]
fn test_branch_lengths_match_leaf_depths() {
    let tree = build(&generated_description(40, 7));
    let g = oracle_graph(&tree);
    let depth = dijkstra(&g, tree.root(), None, |_| 1usize);
    let leaf_depths: Vec<usize> = tree.leaves().map(|l| depth[&l]).collect();
    let expected = (
        *leaf_depths.iter().min().unwrap(),
        *leaf_depths.iter().max().unwrap(),
    );

    assert_eq!(MetricsComputer::new(tree).branch_lengths().unwrap(), expected);
}

#[test]
fn test_generated_descriptions_validate() {
    for seed in 0..10 {
        let desc = generated_description(12, seed);
        assert!(TreeAnalyzer::new().analyze_lines(&desc, "0", "11").is_ok(), "seed {seed}");
    }
}
