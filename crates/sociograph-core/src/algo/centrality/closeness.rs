//! Closeness centrality, Wasserman-Faust variant.
//!
//! For a node u that reaches r other nodes with total distance d:
//!
//! ```text
//! C(u) = (r / d) * (r / (n - 1))
//! ```
//!
//! The first factor is the inverse average distance to the reachable set;
//! the second scales by the fraction of the graph u can reach, so the
//! measure stays defined (and comparable) on disconnected graphs. Nodes
//! that reach nothing score 0.

use crate::algo::bfs_distances;
use crate::SocioTechGraph;
use std::collections::HashMap;

/// Compute closeness centrality for every node.
///
/// Distances follow edge direction, from the node outward.
#[must_use]
pub fn closeness_centrality(graph: &SocioTechGraph) -> HashMap<String, f64> {
    let pg = graph.as_petgraph();
    let n = pg.node_count();
    if n == 0 {
        return HashMap::new();
    }

    let mut result = HashMap::with_capacity(n);
    for start in pg.node_indices() {
        let distances = bfs_distances(pg, start);

        let mut reachable = 0usize;
        let mut total = 0u64;
        for (idx, distance) in distances.iter().enumerate() {
            if idx == start.index() {
                continue;
            }
            if let Some(d) = distance {
                reachable += 1;
                total += u64::from(*d);
            }
        }

        let score = if reachable == 0 || total == 0 {
            0.0
        } else {
            let r = reachable as f64;
            (r / total as f64) * (r / (n - 1) as f64)
        };
        result.insert(pg[start].id.0.clone(), score);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EdgeClass, EdgeGroups, NodeId, NodeKind, NodeRegistry};

    fn graph_from(edges: &[(&str, &str)], nodes: &[&str]) -> SocioTechGraph {
        let mut registry = NodeRegistry::new();
        for name in nodes {
            registry.register(*name, NodeKind::Social).unwrap();
        }
        let mut groups = EdgeGroups::new();
        for (s, d) in edges {
            groups.insert(EdgeClass::SocialSocial, NodeId::new(*s), NodeId::new(*d));
        }
        SocioTechGraph::assemble(&registry, &groups).unwrap()
    }

    #[test]
    fn cycle_closeness_is_uniform() {
        let graph = graph_from(&[("A", "B"), ("B", "C"), ("C", "A")], &["A", "B", "C"]);
        let scores = closeness_centrality(&graph);

        // Every node reaches both others with distances 1 and 2:
        // (2/3) * (2/2) = 2/3.
        for (node, score) in &scores {
            assert!(
                (score - 2.0 / 3.0).abs() < 1e-9,
                "{node} should be 2/3: {score}"
            );
        }
    }

    #[test]
    fn chain_head_reaches_furthest() {
        let graph = graph_from(&[("A", "B"), ("B", "C")], &["A", "B", "C"]);
        let scores = closeness_centrality(&graph);

        // A reaches B (1) and C (2): (2/3) * (2/2) = 2/3.
        assert!((scores["A"] - 2.0 / 3.0).abs() < 1e-9);
        // B reaches C only: (1/1) * (1/2) = 1/2.
        assert!((scores["B"] - 0.5).abs() < 1e-9);
        // C reaches nothing.
        assert_eq!(scores["C"], 0.0);
    }

    #[test]
    fn disconnected_graph_still_scores_every_node() {
        let graph = graph_from(&[("A", "B"), ("X", "Y")], &["A", "B", "X", "Y"]);
        let scores = closeness_centrality(&graph);

        assert_eq!(scores.len(), 4);
        // A reaches only B: (1/1) * (1/3) = 1/3.
        assert!((scores["A"] - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(scores["B"], 0.0);
    }
}
