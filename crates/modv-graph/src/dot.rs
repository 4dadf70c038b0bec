//! Graphviz dot rendering.
//!
//! Pure text assembly: the ingested module set supplies stable integer ids
//! (1-based, first-seen order) and the edge list supplies the arcs. Larger
//! graphs switch to a horizontal layout so long chains stay legible.

use std::fmt::Write as _;

use crate::edges::EdgeList;

/// Edge count above which the graph is laid out left-to-right.
const HORIZONTAL_THRESHOLD: usize = 15;

/// Render the full dependency set as a dot digraph.
///
/// Every module becomes a numbered box node labeled `name` or
/// `name:version`; every edge becomes an arc between the endpoint ids.
/// Edges whose endpoints are somehow absent from the module set are
/// skipped; `EdgeList` registers both endpoints of every edge, so this does
/// not happen for ingested input.
#[must_use]
pub fn render(edges: &EdgeList) -> String {
    let mut out = String::from("digraph {\n");
    if edges.edges().len() > HORIZONTAL_THRESHOLD {
        out.push_str("rankdir=LR;\n");
    }
    out.push_str("node [shape=box];\n");
    for (idx, module) in edges.modules().iter().enumerate() {
        let _ = writeln!(out, "{} [label=\"{module}\"];", idx + 1);
    }
    for edge in edges.edges() {
        let (Some(from), Some(to)) = (
            edges.modules().get_index_of(&edge.parent),
            edges.modules().get_index_of(&edge.dependant),
        ) else {
            continue;
        };
        let _ = writeln!(out, "{} -> {};", from + 1, to + 1);
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_list(input: &str) -> EdgeList {
        EdgeList::from_reader(input.as_bytes()).unwrap()
    }

    #[test]
    fn renders_numbered_nodes_and_arcs() {
        let dot = render(&edge_list("modA modB@v1\nmodB@v1 modC@v2\n"));
        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.contains("node [shape=box];\n"));
        assert!(dot.contains("1 [label=\"modA\"];\n"));
        assert!(dot.contains("2 [label=\"modB:v1\"];\n"));
        assert!(dot.contains("3 [label=\"modC:v2\"];\n"));
        assert!(dot.contains("1 -> 2;\n"));
        assert!(dot.contains("2 -> 3;\n"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn small_graphs_stay_vertical() {
        let dot = render(&edge_list("modA modB@v1\n"));
        assert!(!dot.contains("rankdir=LR;"));
    }

    #[test]
    fn large_graphs_switch_to_horizontal() {
        let mut input = String::new();
        for i in 0..16 {
            input.push_str(&format!("modA mod{i}@v1\n"));
        }
        let dot = render(&edge_list(&input));
        assert!(dot.contains("rankdir=LR;\n"));
    }

    #[test]
    fn repeated_edges_render_repeated_arcs() {
        let dot = render(&edge_list("modA modB@v1\nmodA modB@v1\n"));
        assert_eq!(dot.matches("1 -> 2;\n").count(), 2);
    }
}
