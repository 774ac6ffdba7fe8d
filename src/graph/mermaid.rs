// src/graph/mermaid.rs
//! Mermaid flowchart output for the `all` graph.

use std::collections::BTreeSet;

use super::builder::{rank, DependencyCount};
use super::{CyclePair, DirectedGraph};

const HEADER: &str = "graph TD";
const FLAG: &str = "⚠️";
const CYCLE_STYLE: &str = "stroke:#ff0000,stroke-width:3px";

/// One emitted edge line and whether it belongs to a flagged pair.
struct EmittedEdge {
    line: String,
    flagged: bool,
}

/// Renders `graph` as a Mermaid `graph TD` block.
///
/// Sources are ordered by descending count (ties in the order of `counts`),
/// targets lexicographically. Edges of a pair in `flagged` use the warning
/// arrow and get a `linkStyle` directive addressed by zero-based edge index.
#[must_use]
pub fn render_mermaid(
    graph: &DirectedGraph,
    counts: &[DependencyCount],
    flagged: &BTreeSet<CyclePair>,
) -> String {
    let edges: Vec<EmittedEdge> = rank(counts)
        .iter()
        .flat_map(|c| graph.targets(&c.unit).map(move |to| (c.unit.as_str(), to)))
        .map(|(from, to)| emit_edge(from, to, flagged))
        .collect();

    let mut lines = vec![HEADER.to_string(), String::new()];
    lines.extend(edges.iter().map(|e| e.line.clone()));

    let styles: Vec<String> = edges
        .iter()
        .enumerate()
        .filter(|(_, e)| e.flagged)
        .map(|(idx, _)| format!("    linkStyle {idx} {CYCLE_STYLE}"))
        .collect();
    if !styles.is_empty() {
        lines.push(String::new());
        lines.push("    %% Style circular dependencies".to_string());
        lines.extend(styles);
    }

    lines.join("\n")
}

fn emit_edge(from: &str, to: &str, flagged: &BTreeSet<CyclePair>) -> EmittedEdge {
    if flagged.iter().any(|pair| pair.contains_edge(from, to)) {
        EmittedEdge {
            line: format!("    {from} -->|{FLAG}| {to}"),
            flagged: true,
        }
    } else {
        EmittedEdge {
            line: format!("    {from} --> {to}"),
            flagged: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::dependency_counts;
    use crate::graph::detect_mutual_pairs;

    fn graph(edges: &[(&str, &str)]) -> DirectedGraph {
        let mut g = DirectedGraph::new();
        for (a, b) in edges {
            g.add_edge(a, b);
        }
        g
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_plain_edges_sorted_by_count() {
        let g = graph(&[("a", "c"), ("b", "c"), ("b", "a")]);
        let counts = dependency_counts(&g, &names(&["a", "b", "c"]));
        let out = render_mermaid(&g, &counts, &BTreeSet::new());
        assert_eq!(out, "graph TD\n\n    b --> a\n    b --> c\n    a --> c");
    }

    #[test]
    fn test_flagged_edges_get_link_styles() {
        let g = graph(&[("a", "b"), ("b", "a"), ("b", "c")]);
        let counts = dependency_counts(&g, &names(&["a", "b", "c"]));
        let out = render_mermaid(&g, &counts, &detect_mutual_pairs(&g));
        let expected = "graph TD\n\
            \n    b -->|⚠️| a\
            \n    b --> c\
            \n    a -->|⚠️| b\
            \n\
            \n    %% Style circular dependencies\
            \n    linkStyle 0 stroke:#ff0000,stroke-width:3px\
            \n    linkStyle 2 stroke:#ff0000,stroke-width:3px";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_only_given_pairs_are_flagged() {
        let g = graph(&[("a", "b"), ("b", "a")]);
        let counts = dependency_counts(&g, &names(&["a", "b"]));
        let out = render_mermaid(&g, &counts, &BTreeSet::new());
        assert!(!out.contains(FLAG));
        assert!(!out.contains("linkStyle"));
    }

    #[test]
    fn test_empty_graph_renders_header_only() {
        let g = DirectedGraph::new();
        let counts = dependency_counts(&g, &names(&["solo"]));
        assert_eq!(render_mermaid(&g, &counts, &BTreeSet::new()), "graph TD\n");
    }

    #[test]
    fn test_render_is_deterministic() {
        let g = graph(&[("x", "y"), ("y", "z"), ("z", "x"), ("y", "x")]);
        let counts = dependency_counts(&g, &names(&["x", "y", "z"]));
        let pairs = detect_mutual_pairs(&g);
        assert_eq!(render_mermaid(&g, &counts, &pairs), render_mermaid(&g, &counts, &pairs));
    }
}
