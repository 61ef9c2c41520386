//! Katz centrality: influence via damped path counting.
//!
//! Counts all paths arriving at a node, with longer paths weighted less:
//!
//! ```text
//! x_v = alpha * sum_{u -> v} x_u + beta
//! ```
//!
//! The beta baseline means even nodes with no incoming paths get a nonzero
//! score, unlike eigenvector centrality. Convergence requires alpha below
//! the reciprocal of the adjacency matrix's largest eigenvalue; the default
//! alpha = 0.1 is conservative for the sparse graphs this crate targets.

use crate::{Error, Result, SocioTechGraph};
use petgraph::Direction;
use std::collections::HashMap;

/// Configuration for Katz centrality.
#[derive(Debug, Clone, Copy)]
pub struct KatzConfig {
    /// Attenuation factor per hop. Must be < 1/lambda_max for convergence.
    pub alpha: f64,
    /// Baseline centrality for each node.
    pub beta: f64,
    /// Maximum iterations before failing.
    pub max_iterations: usize,
    /// Convergence tolerance (L1 norm of score changes).
    pub tolerance: f64,
    /// L2-normalize the final scores.
    pub normalized: bool,
}

impl Default for KatzConfig {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            beta: 1.0,
            max_iterations: 1000,
            tolerance: 1e-6,
            normalized: true,
        }
    }
}

/// Compute Katz centrality via fixed-point iteration.
///
/// Fails with [`Error::NotConvergent`] if the tolerance is not reached
/// within the iteration bound (an alpha at or above 1/lambda_max will do
/// that).
pub fn katz_centrality(graph: &SocioTechGraph, config: KatzConfig) -> Result<HashMap<String, f64>> {
    let pg = graph.as_petgraph();
    let n = pg.node_count();
    if n == 0 {
        return Ok(HashMap::new());
    }

    let mut scores = vec![config.beta; n];
    let mut new_scores = vec![0.0; n];
    let mut converged = false;

    for _iter in 0..config.max_iterations {
        // x' = alpha * A^T x + beta
        for idx in pg.node_indices() {
            let incoming: f64 = pg
                .neighbors_directed(idx, Direction::Incoming)
                .map(|pred| scores[pred.index()])
                .sum();
            new_scores[idx.index()] = config.alpha * incoming + config.beta;
        }

        let diff: f64 = scores
            .iter()
            .zip(new_scores.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut scores, &mut new_scores);

        if diff < config.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        return Err(Error::NotConvergent {
            measure: "katz",
            iterations: config.max_iterations,
        });
    }

    if config.normalized {
        let norm = scores.iter().map(|s| s * s).sum::<f64>().sqrt();
        if norm > 0.0 {
            for score in &mut scores {
                *score /= norm;
            }
        }
    }

    Ok(pg
        .node_indices()
        .map(|idx| (pg[idx].id.0.clone(), scores[idx.index()]))
        .collect())
}
