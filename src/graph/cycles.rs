// src/graph/cycles.rs
//! Mutual-reference (2-cycle) detection.
//!
//! Only direct pairs A→B, B→A are reported. Longer loops such as A→B→C→A are
//! out of scope for this detector: the harmless/problematic split in the
//! report is defined over mutual pairs only.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::DirectedGraph;

/// Unordered pair stored with `first <= second`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CyclePair {
    pub first: String,
    pub second: String,
}

impl CyclePair {
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    /// True for either direction of this pair.
    #[must_use]
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        (self.first == from && self.second == to) || (self.first == to && self.second == from)
    }
}

impl fmt::Display for CyclePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ↔ {}", self.first, self.second)
    }
}

/// Every pair of nodes linked in both directions, once each.
#[must_use]
pub fn detect_mutual_pairs(graph: &DirectedGraph) -> BTreeSet<CyclePair> {
    graph
        .edges()
        .filter(|(from, to)| graph.has_edge(to, from))
        .map(|(from, to)| CyclePair::new(from, to))
        .collect()
}

/// Mutual pairs per graph. Never merged: a prerequisite pair is a harmless
/// workflow sequence, an invocation pair is a problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub all: BTreeSet<CyclePair>,
    pub prerequisites: BTreeSet<CyclePair>,
    pub invocations: BTreeSet<CyclePair>,
}

impl CycleReport {
    #[must_use]
    pub fn detect(graphs: &super::DependencyGraphs) -> Self {
        Self {
            all: detect_mutual_pairs(&graphs.all),
            prerequisites: detect_mutual_pairs(&graphs.prerequisites),
            invocations: detect_mutual_pairs(&graphs.invocations),
        }
    }

    #[must_use]
    pub fn has_problems(&self) -> bool {
        !self.invocations.is_empty()
    }
}
