//! Degree centrality: connection counts normalized by (n - 1).

use crate::SocioTechGraph;
use petgraph::Direction;
use std::collections::HashMap;

/// Degree centrality result for a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegreeCentrality {
    /// Number of incoming edges.
    pub in_degree: usize,
    /// Number of outgoing edges.
    pub out_degree: usize,
    /// In-degree / (n - 1).
    pub in_normalized: f64,
    /// Out-degree / (n - 1).
    pub out_normalized: f64,
}

impl DegreeCentrality {
    /// Total degree (in + out).
    #[must_use]
    pub fn total(&self) -> usize {
        self.in_degree + self.out_degree
    }

    /// Normalized total degree: (in + out) / (n - 1).
    #[must_use]
    pub fn total_normalized(&self) -> f64 {
        self.in_normalized + self.out_normalized
    }
}

/// Compute raw and normalized degree values for every node.
#[must_use]
pub fn degree_centrality(graph: &SocioTechGraph) -> HashMap<String, DegreeCentrality> {
    let pg = graph.as_petgraph();
    let n = pg.node_count();
    if n == 0 {
        return HashMap::new();
    }

    let norm_factor = if n > 1 { (n - 1) as f64 } else { 1.0 };
    let mut result = HashMap::with_capacity(n);

    for idx in pg.node_indices() {
        let in_degree = pg.neighbors_directed(idx, Direction::Incoming).count();
        let out_degree = pg.neighbors_directed(idx, Direction::Outgoing).count();

        result.insert(
            pg[idx].id.0.clone(),
            DegreeCentrality {
                in_degree,
                out_degree,
                in_normalized: in_degree as f64 / norm_factor,
                out_normalized: out_degree as f64 / norm_factor,
            },
        );
    }

    result
}

/// Normalized total degree per node: (in + out) / (n - 1).
#[must_use]
pub fn total_degree_centrality(graph: &SocioTechGraph) -> HashMap<String, f64> {
    degree_centrality(graph)
        .into_iter()
        .map(|(node, value)| (node, value.total_normalized()))
        .collect()
}

/// Normalized in-degree per node.
#[must_use]
pub fn in_degree_centrality(graph: &SocioTechGraph) -> HashMap<String, f64> {
    degree_centrality(graph)
        .into_iter()
        .map(|(node, value)| (node, value.in_normalized))
        .collect()
}

/// Normalized out-degree per node.
#[must_use]
pub fn out_degree_centrality(graph: &SocioTechGraph) -> HashMap<String, f64> {
    degree_centrality(graph)
        .into_iter()
        .map(|(node, value)| (node, value.out_normalized))
        .collect()
}
