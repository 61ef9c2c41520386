//! Eigenvector centrality: importance via the dominant eigenvector.
//!
//! A node is important when important nodes point at it. Scores satisfy
//! lambda * x = A^T x: each node's score is proportional to the sum of its
//! in-neighbors' scores.
//!
//! Computed by power iteration from a uniform start vector, renormalizing to
//! unit (L2) norm each round. On graphs whose adjacency structure has no
//! well-defined dominant eigenvector — a DAG's nilpotent adjacency is the
//! usual case — the iteration cannot settle and the measure fails with
//! [`crate::Error::NotConvergent`]. A disconnected graph with tied leading
//! eigenvalues across components is tolerated: the iteration returns the
//! largest-magnitude solution it reaches.

use crate::{Error, Result, SocioTechGraph};
use petgraph::Direction;
use std::collections::HashMap;

/// Configuration for eigenvector centrality.
#[derive(Debug, Clone, Copy)]
pub struct EigenvectorConfig {
    /// Maximum power iterations before giving up.
    pub max_iterations: usize,
    /// Per-node convergence tolerance.
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-6,
        }
    }
}

/// Compute eigenvector centrality via power iteration.
///
/// Scores are normalized to unit L2 norm. Fails with
/// [`Error::NotConvergent`] when the iteration bound is exhausted or the
/// iterate collapses to zero.
pub fn eigenvector_centrality(
    graph: &SocioTechGraph,
    config: EigenvectorConfig,
) -> Result<HashMap<String, f64>> {
    let pg = graph.as_petgraph();
    let n = pg.node_count();
    if n == 0 {
        return Ok(HashMap::new());
    }

    let mut scores = vec![1.0 / n as f64; n];
    let mut new_scores = vec![0.0; n];

    for _iter in 0..config.max_iterations {
        // x' = A^T x: scores flow along edges to their targets.
        for idx in pg.node_indices() {
            let incoming: f64 = pg
                .neighbors_directed(idx, Direction::Incoming)
                .map(|pred| scores[pred.index()])
                .sum();
            new_scores[idx.index()] = incoming;
        }

        let norm = new_scores.iter().map(|s| s * s).sum::<f64>().sqrt();
        if norm < f64::EPSILON {
            // Nilpotent adjacency (e.g. a DAG): all mass vanished.
            return Err(Error::NotConvergent {
                measure: "eigenvector",
                iterations: config.max_iterations,
            });
        }
        for score in &mut new_scores {
            *score /= norm;
        }

        let diff: f64 = scores
            .iter()
            .zip(new_scores.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut scores, &mut new_scores);

        if diff < n as f64 * config.tolerance {
            return Ok(pg
                .node_indices()
                .map(|idx| (pg[idx].id.0.clone(), scores[idx.index()]))
                .collect());
        }
    }

    Err(Error::NotConvergent {
        measure: "eigenvector",
        iterations: config.max_iterations,
    })
}
