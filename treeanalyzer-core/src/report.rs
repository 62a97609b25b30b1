//! Output formatting - plaintext and JSON.

use serde::Serialize;
use serde_json::json;

use crate::metrics::TreeMetrics;
use crate::tree::VertexKey;

/// Metrics plus the query pair they were computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeReport {
    pub first: VertexKey,
    pub second: VertexKey,
    #[serde(flatten)]
    pub metrics: TreeMetrics,
}

impl TreeReport {
    pub fn new(first: VertexKey, second: VertexKey, metrics: TreeMetrics) -> Self {
        Self {
            first,
            second,
            metrics,
        }
    }

    /// Number of edges on the query path.
    pub fn path_length(&self) -> usize {
        self.metrics.shortest_path.len().saturating_sub(1)
    }
}

/// Renders the report as the classic text block, one value per line.
pub fn render_plain(report: &TreeReport) -> String {
    let m = &report.metrics;
    let path = m
        .shortest_path
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "Root Vertex: {}\n\
         Vertices Count: {}\n\
         Edges Count: {}\n\
         Length of Minimal Branch: {}\n\
         Length of Maximal Branch: {}\n\
         Diameter Length: {}\n\
         Shortest Path Between {} and {}: {}\n",
        m.root,
        m.vertex_count,
        m.edge_count,
        m.min_branch_length,
        m.max_branch_length,
        m.diameter,
        report.first,
        report.second,
        path
    )
}

/// Renders the report as pretty-printed JSON.
pub fn render_json(report: &TreeReport) -> serde_json::Result<String> {
    let m = &report.metrics;
    serde_json::to_string_pretty(&json!({
        "root": m.root,
        "vertices": m.vertex_count,
        "edges": m.edge_count,
        "min_branch_length": m.min_branch_length,
        "max_branch_length": m.max_branch_length,
        "diameter": m.diameter,
        "path": {
            "from": report.first,
            "to": report.second,
            "length": report.path_length(),
            "vertices": m.shortest_path,
        },
    }))
}

/// Prints the report in plain text format.
pub fn print_plain(report: &TreeReport) {
    print!("{}", render_plain(report));
}

/// Prints the report in JSON format.
///
/// Falls back to the plain derive-based serialization if building the
/// document fails.
pub fn print_json(report: &TreeReport) {
    match render_json(report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{:?}", report);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cherry() -> TreeReport {
        TreeReport::new(
            1,
            2,
            TreeMetrics {
                root: 0,
                vertex_count: 3,
                edge_count: 2,
                min_branch_length: 1,
                max_branch_length: 1,
                diameter: 2,
                shortest_path: vec![1, 0, 2],
            },
        )
    }

    #[test]
    fn test_render_plain() {
        let expected = "Root Vertex: 0\n\
                        Vertices Count: 3\n\
                        Edges Count: 2\n\
                        Length of Minimal Branch: 1\n\
                        Length of Maximal Branch: 1\n\
                        Diameter Length: 2\n\
                        Shortest Path Between 1 and 2: 1 0 2\n";
        assert_eq!(render_plain(&cherry()), expected);
    }

    #[test]
    fn test_render_json() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&cherry()).unwrap()).unwrap();
        assert_eq!(json["root"].as_u64(), Some(0));
        assert_eq!(json["edges"].as_u64(), Some(2));
        assert_eq!(json["path"]["length"].as_u64(), Some(2));
        assert_eq!(json["path"]["vertices"], serde_json::json!([1, 0, 2]));
    }

    #[test]
    fn test_serialize_flattens_metrics() {
        let value = serde_json::to_value(cherry()).unwrap();
        assert_eq!(value["first"].as_u64(), Some(1));
        assert_eq!(value["diameter"].as_u64(), Some(2));
    }
}
