//! Analysis algorithms over the assembled graph.
//!
//! All functions here are pure reads: none mutates the graph it is given.
//!
//! - **Statistics**: counts, components, path length, degree summary,
//!   density, degree distributions ([`stats`])
//! - **Centrality**: seven node-importance measures ([`centrality`])

/// Centrality algorithms for measuring node importance.
pub mod centrality;

/// Descriptive statistics and degree distributions.
pub mod stats;

use crate::{EdgeClass, Node};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::VecDeque;

/// Unweighted single-source shortest-path distances along edge direction.
///
/// `None` for unreachable nodes; the start node has distance 0.
pub(crate) fn bfs_distances(graph: &DiGraph<Node, EdgeClass>, start: NodeIndex) -> Vec<Option<u32>> {
    let mut distances = vec![None; graph.node_count()];
    distances[start.index()] = Some(0);

    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let next_distance = distances[current.index()].unwrap_or(0) + 1;
        for neighbor in graph.neighbors_directed(current, Direction::Outgoing) {
            if distances[neighbor.index()].is_none() {
                distances[neighbor.index()] = Some(next_distance);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}
