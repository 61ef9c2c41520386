//! Supply-chain risk views: filtered subgraphs with targeted centrality
//! queries.
//!
//! Each view takes the shared assembled graph, derives its own private
//! filtered copy, and answers one risk question over it. The shared graph
//! is never mutated, so the three views can run in any order (or
//! concurrently).

use crate::algo::centrality::{
    in_degree_centrality, out_degree_centrality, total_degree_centrality,
};
use crate::{EdgeClass, Error, NodeKind, Result, SocioTechGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Degree centrality needs at least two nodes; smaller filtered copies are
/// treated as empty.
fn ensure_rankable(graph: &SocioTechGraph, view: &'static str) -> Result<()> {
    if graph.node_count() < 2 {
        return Err(Error::EmptySubgraph(view));
    }
    Ok(())
}

/// Repository-to-repository influence after all social actors are removed.
///
/// Out-degree reads as "how many downstream technical dependents", in-degree
/// as "how many dependencies feed this repository".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalInfluenceView {
    /// Normalized out-degree per surviving repository.
    pub out_degree: HashMap<String, f64>,
    /// Normalized in-degree per surviving repository.
    pub in_degree: HashMap<String, f64>,
    /// Normalized total degree per surviving repository.
    pub degree: HashMap<String, f64>,
}

/// Build the technical-influence view.
///
/// Removes every social node (and its incident edges) from a private copy,
/// then ranks what remains. Fails with [`Error::EmptySubgraph`] when no
/// rankable technical subgraph is left.
pub fn technical_influence(graph: &SocioTechGraph) -> Result<TechnicalInfluenceView> {
    let technical = graph.only_kind(NodeKind::Technical);
    ensure_rankable(&technical, "technical-influence")?;
    debug!(
        nodes = technical.node_count(),
        edges = technical.edge_count(),
        "technical-influence subgraph"
    );

    Ok(TechnicalInfluenceView {
        out_degree: out_degree_centrality(&technical),
        in_degree: in_degree_centrality(&technical),
        degree: total_degree_centrality(&technical),
    })
}

/// Concentrated social risk: repositories with many contributors.
///
/// Only contribution (social -> technical) edges are kept; a repository
/// with high in-degree is a single point whose compromise touches many
/// contributors' work at once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetedSocialInfluenceView {
    /// Normalized in-degree per node over contribution edges only.
    pub in_degree: HashMap<String, f64>,
}

/// Build the targeted social-influence view.
pub fn social_influence_targeted(graph: &SocioTechGraph) -> Result<TargetedSocialInfluenceView> {
    let contributions = graph.filter_edge_classes(&[EdgeClass::SocialTechnical]);
    ensure_rankable(&contributions, "targeted social-influence")?;
    debug!(
        edges = contributions.edge_count(),
        "targeted social-influence subgraph"
    );

    Ok(TargetedSocialInfluenceView {
        in_degree: in_degree_centrality(&contributions),
    })
}

/// Dispersed social risk: contributors spread across many repositories.
///
/// Same edge filter as the targeted view, read from the other end: a
/// contributor with high out-degree is a dispersed attack surface whose
/// compromise touches many repositories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispersedSocialInfluenceView {
    /// Normalized out-degree per node over contribution edges only.
    pub out_degree_centrality: HashMap<String, f64>,
    /// Raw out-degree per node over contribution edges only.
    pub out_degree: HashMap<String, usize>,
}

/// Build the dispersed social-influence view.
pub fn social_influence_dispersed(graph: &SocioTechGraph) -> Result<DispersedSocialInfluenceView> {
    let contributions = graph.filter_edge_classes(&[EdgeClass::SocialTechnical]);
    ensure_rankable(&contributions, "dispersed social-influence")?;
    debug!(
        edges = contributions.edge_count(),
        "dispersed social-influence subgraph"
    );

    let out_degree = contributions
        .nodes()
        .map(|node| (node.id.0.clone(), contributions.out_degree(&node.id)))
        .collect();

    Ok(DispersedSocialInfluenceView {
        out_degree_centrality: out_degree_centrality(&contributions),
        out_degree,
    })
}
