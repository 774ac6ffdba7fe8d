// src/graph/builder.rs
//! Folds per-skill extraction results into the three dependency graphs.

use std::collections::HashSet;

use serde::Serialize;

use super::DirectedGraph;
use crate::types::UnitReferences;

/// The three graphs of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraphs {
    /// Every reference regardless of classification.
    pub all: DirectedGraph,
    pub prerequisites: DirectedGraph,
    /// References not classified as prerequisites.
    pub invocations: DirectedGraph,
}

impl DependencyGraphs {
    /// Reduces `results` into graphs over `units`.
    ///
    /// Self-edges and targets outside `units` are dropped here even though
    /// extraction already filters them.
    #[must_use]
    pub fn build(units: &[String], results: &[UnitReferences]) -> Self {
        let known: HashSet<&str> = units.iter().map(String::as_str).collect();
        let mut graphs = Self::default();
        for unit in units {
            graphs.all.add_node(unit);
            graphs.prerequisites.add_node(unit);
            graphs.invocations.add_node(unit);
        }

        for refs in results.iter().filter(|r| known.contains(r.unit.as_str())) {
            add_edges(&mut graphs.all, &refs.unit, &refs.all, &known);
            add_edges(&mut graphs.prerequisites, &refs.unit, &refs.prerequisites, &known);
            add_edges(&mut graphs.invocations, &refs.unit, &refs.invocations, &known);
        }
        graphs
    }
}

fn add_edges<'a>(
    graph: &mut DirectedGraph,
    from: &str,
    targets: impl IntoIterator<Item = &'a String>,
    known: &HashSet<&str>,
) {
    for to in targets {
        if known.contains(to.as_str()) {
            graph.add_edge(from, to);
        }
    }
}

/// Out-degree of one skill in the `all` graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyCount {
    pub unit: String,
    pub count: usize,
}

/// Dependency counts in discovery order.
#[must_use]
pub fn dependency_counts(graph: &DirectedGraph, units: &[String]) -> Vec<DependencyCount> {
    units
        .iter()
        .map(|u| DependencyCount {
            unit: u.clone(),
            count: graph.out_degree(u),
        })
        .collect()
}

/// Highest count first; ties keep discovery order.
#[must_use]
pub fn rank(counts: &[DependencyCount]) -> Vec<DependencyCount> {
    let mut ranked = counts.to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}
