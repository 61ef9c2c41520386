//! Descriptive statistics over the assembled graph.
//!
//! Each query is an independent read; none depends on another having run
//! first, and none mutates the graph.

use super::bfs_distances;
use crate::{Error, NodeKind, Result, SocioTechGraph};
use petgraph::algo::tarjan_scc;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

// Union-Find helpers for weak components.
fn uf_find(parent: &mut [usize], i: usize) -> usize {
    if parent[i] != i {
        parent[i] = uf_find(parent, parent[i]); // Path compression
    }
    parent[i]
}

fn uf_union(parent: &mut [usize], rank: &mut [usize], x: usize, y: usize) {
    let px = uf_find(parent, x);
    let py = uf_find(parent, y);
    if px == py {
        return;
    }
    match rank[px].cmp(&rank[py]) {
        Ordering::Less => parent[px] = py,
        Ordering::Greater => parent[py] = px,
        Ordering::Equal => {
            parent[py] = px;
            rank[px] += 1;
        }
    }
}

/// Number of strongly connected components (mutual reachability).
#[must_use]
pub fn strongly_connected_component_count(graph: &SocioTechGraph) -> usize {
    tarjan_scc(graph.as_petgraph()).len()
}

/// Number of weakly connected components (reachability ignoring direction).
///
/// Uses Union-Find for O(V + E * alpha(V)) computation.
#[must_use]
pub fn weakly_connected_component_count(graph: &SocioTechGraph) -> usize {
    let graph = graph.as_petgraph();
    let n = graph.node_count();
    if n == 0 {
        return 0;
    }

    let mut parent: Vec<usize> = (0..n).collect();
    let mut rank: Vec<usize> = vec![0; n];

    for edge in graph.edge_references() {
        uf_union(
            &mut parent,
            &mut rank,
            edge.source().index(),
            edge.target().index(),
        );
    }

    let mut roots: Vec<usize> = (0..n).map(|i| uf_find(&mut parent, i)).collect();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}

/// Average shortest-path length over all ordered pairs of distinct nodes.
///
/// Defined only on strongly connected graphs; fails with
/// [`Error::Disconnected`] otherwise.
pub fn average_path_length(graph: &SocioTechGraph) -> Result<f64> {
    let pg = graph.as_petgraph();
    let n = pg.node_count();
    if n < 2 {
        return Err(Error::Disconnected);
    }
    if strongly_connected_component_count(graph) != 1 {
        return Err(Error::Disconnected);
    }

    let mut total: u64 = 0;
    for start in pg.node_indices() {
        for distance in bfs_distances(pg, start).into_iter().flatten() {
            total += u64::from(distance);
        }
    }

    Ok(total as f64 / (n * (n - 1)) as f64)
}

/// Degree extrema and mean, using total degree (in + out) per node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreeSummary {
    /// Maximum total degree.
    pub max: usize,
    /// Minimum total degree.
    pub min: usize,
    /// Mean total degree.
    pub mean: f64,
}

/// Compute the degree summary. Returns zeros on an empty graph.
#[must_use]
pub fn degree_summary(graph: &SocioTechGraph) -> DegreeSummary {
    let degrees: Vec<usize> = graph.nodes().map(|node| graph.degree(&node.id)).collect();
    if degrees.is_empty() {
        return DegreeSummary {
            max: 0,
            min: 0,
            mean: 0.0,
        };
    }

    let total: usize = degrees.iter().sum();
    DegreeSummary {
        max: degrees.iter().copied().max().unwrap_or(0),
        min: degrees.iter().copied().min().unwrap_or(0),
        mean: total as f64 / degrees.len() as f64,
    }
}

/// Density of a directed simple graph: edges / (nodes * (nodes - 1)).
///
/// Zero for graphs with fewer than two nodes.
#[must_use]
pub fn density(graph: &SocioTechGraph) -> f64 {
    let n = graph.node_count();
    if n < 2 {
        return 0.0;
    }
    graph.edge_count() as f64 / (n * (n - 1)) as f64
}

/// A normalized degree-frequency distribution.
///
/// Maps total degree k to the relative frequency p(k); frequencies sum to 1
/// unless the node subset is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DegreeDistribution {
    /// degree -> relative frequency.
    pub frequencies: BTreeMap<usize, f64>,
}

impl DegreeDistribution {
    /// Sum of all relative frequencies (1.0 up to floating error, or 0 when
    /// the subset was empty).
    #[must_use]
    pub fn total(&self) -> f64 {
        self.frequencies.values().sum()
    }
}

/// Degree-frequency distribution over nodes of one kind, or over every node
/// when `kind` is `None`. Degrees count all incident edges in the full
/// graph, matching how the combined distribution sees the same node.
#[must_use]
pub fn degree_distribution(graph: &SocioTechGraph, kind: Option<NodeKind>) -> DegreeDistribution {
    let degrees: Vec<usize> = graph
        .nodes()
        .filter(|node| kind.map_or(true, |k| node.kind == k))
        .map(|node| graph.degree(&node.id))
        .collect();

    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for degree in &degrees {
        *counts.entry(*degree).or_default() += 1;
    }

    let total = degrees.len() as f64;
    DegreeDistribution {
        frequencies: counts
            .into_iter()
            .map(|(degree, count)| (degree, count as f64 / total))
            .collect(),
    }
}
