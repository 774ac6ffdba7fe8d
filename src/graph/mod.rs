// src/graph/mod.rs
//! Skill dependency graphs, mutual-reference detection and diagram output.

pub mod builder;
pub mod cycles;
pub mod mermaid;

pub use builder::{dependency_counts, rank, DependencyCount, DependencyGraphs};
pub use cycles::{detect_mutual_pairs, CyclePair, CycleReport};
pub use mermaid::render_mermaid;

use std::collections::{BTreeMap, BTreeSet};

/// Adjacency sets keyed by skill name. No weights, no multi-edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl DirectedGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `node` has an entry, even with no outgoing edges.
    pub fn add_node(&mut self, node: &str) {
        self.edges.entry(node.to_string()).or_default();
    }

    /// Adds `from -> to`. Returns false for self-edges and duplicates.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        if from == to {
            return false;
        }
        self.edges.entry(from.to_string()).or_default().insert(to.to_string())
    }

    #[must_use]
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.get(from).is_some_and(|t| t.contains(to))
    }

    /// Outgoing targets of `node`, in lexicographic order.
    pub fn targets(&self, node: &str) -> impl Iterator<Item = &str> {
        self.edges
            .get(node)
            .into_iter()
            .flat_map(|t| t.iter().map(String::as_str))
    }

    #[must_use]
    pub fn out_degree(&self, node: &str) -> usize {
        self.edges.get(node).map_or(0, BTreeSet::len)
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// All edges as `(from, to)`, ordered by source then target.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |to| (from.as_str(), to.as_str())))
    }
}
