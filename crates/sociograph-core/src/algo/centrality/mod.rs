//! Centrality algorithms for measuring node importance.
//!
//! Seven measures are supported, each computed as a full node -> score
//! mapping first, then reduced to an argmax report entry by the caller:
//!
//! | Measure | Question answered | Complexity |
//! |-------------|-----------------------------------|------------|
//! | Degree | How many connections? | O(V + E) |
//! | In-degree | How many incoming links? | O(V + E) |
//! | Out-degree | How many outgoing links? | O(V + E) |
//! | Eigenvector | Connected to important nodes? | O(E x iter) |
//! | Katz | Reachable via damped paths? | O(E x iter) |
//! | Closeness | How close to reachable nodes? | O(VE) |
//! | Betweenness | How often on shortest paths? | O(VE) |
//!
//! The iterative measures (eigenvector, Katz) fail with
//! [`crate::Error::NotConvergent`] when the iteration bound is exhausted;
//! callers building reports record the failure and continue with the other
//! measures.

mod betweenness;
mod closeness;
mod degree;
mod eigenvector;
mod katz;

pub use betweenness::{betweenness_centrality, BetweennessConfig};
pub use closeness::closeness_centrality;
pub use degree::{
    degree_centrality, in_degree_centrality, out_degree_centrality, total_degree_centrality,
    DegreeCentrality,
};
pub use eigenvector::{eigenvector_centrality, EigenvectorConfig};
pub use katz::{katz_centrality, KatzConfig};

use std::collections::HashMap;

/// Reduce a score mapping to its maximal (node, score) pair.
///
/// Ties break on the first node reaching the maximum in the mapping's
/// iteration order. That order carries no meaning, so which of several tied
/// nodes wins is implementation-defined.
///
/// Returns `None` on an empty mapping.
#[must_use]
pub fn argmax(scores: &HashMap<String, f64>) -> Option<(String, f64)> {
    let mut best: Option<(&String, f64)> = None;
    for (node, &score) in scores {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((node, score)),
        }
    }
    best.map(|(node, score)| (node.clone(), score))
}
