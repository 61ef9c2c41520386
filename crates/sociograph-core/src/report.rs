//! Report builders: full analysis output for the reporting collaborator.
//!
//! Structural errors abort long before these run; the failures that can
//! still happen here (`NotConvergent`, `Disconnected`, `EmptySubgraph`) are
//! local to one entry, so each report records the failure in place and the
//! rest of the report is still produced.

use crate::algo::centrality::{
    argmax, betweenness_centrality, closeness_centrality, eigenvector_centrality,
    in_degree_centrality, katz_centrality, out_degree_centrality, total_degree_centrality,
    BetweennessConfig, EigenvectorConfig, KatzConfig,
};
use crate::algo::stats::{
    average_path_length, degree_distribution, degree_summary, density,
    strongly_connected_component_count, weakly_connected_component_count, DegreeDistribution,
};
use crate::views::{
    social_influence_dispersed, social_influence_targeted, technical_influence,
    DispersedSocialInfluenceView, TargetedSocialInfluenceView, TechnicalInfluenceView,
};
use crate::{NodeKind, SocioTechGraph};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

/// The highest-scoring node for one measure, with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgmaxEntry {
    /// The winning node.
    pub node: String,
    /// Its score.
    pub score: f64,
}

/// Outcome of one centrality measure.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MeasureOutcome {
    /// The measure ran; argmax entry attached.
    Computed {
        /// The maximal node and score.
        #[serde(flatten)]
        entry: ArgmaxEntry,
    },
    /// The measure failed locally and was skipped.
    Failed {
        /// Why it was skipped.
        reason: String,
    },
}

/// Outcome of one supply-chain view.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ViewOutcome<T> {
    /// The view ran.
    Computed {
        /// The view's node -> score mappings.
        view: T,
    },
    /// The view was skipped.
    Skipped {
        /// Why it was skipped.
        reason: String,
    },
}

/// Descriptive statistics plus the three degree distributions.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// Metric name -> numeric value.
    pub metrics: BTreeMap<String, f64>,
    /// Metrics that could not be computed, with reasons.
    pub failed: BTreeMap<String, String>,
    /// Degree distribution over social nodes.
    pub social_degree_distribution: DegreeDistribution,
    /// Degree distribution over technical nodes.
    pub technical_degree_distribution: DegreeDistribution,
    /// Degree distribution over all nodes.
    pub combined_degree_distribution: DegreeDistribution,
}

/// Argmax entries for the seven centrality measures.
#[derive(Debug, Clone, Serialize)]
pub struct CentralityReport {
    /// Measure name -> outcome.
    pub measures: BTreeMap<String, MeasureOutcome>,
}

/// The three supply-chain view reports.
#[derive(Debug, Clone, Serialize)]
pub struct SupplyChainReport {
    /// Repository influence over the technical-only subgraph.
    pub technical_influence: ViewOutcome<TechnicalInfluenceView>,
    /// Concentrated contribution risk.
    pub targeted_social_influence: ViewOutcome<TargetedSocialInfluenceView>,
    /// Dispersed contribution risk.
    pub dispersed_social_influence: ViewOutcome<DispersedSocialInfluenceView>,
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Descriptive statistics.
    pub stats: StatsReport,
    /// Centrality argmax entries.
    pub centrality: CentralityReport,
    /// Supply-chain views.
    pub supply_chain: SupplyChainReport,
}

/// Build the statistics report.
#[must_use]
pub fn stats_report(graph: &SocioTechGraph) -> StatsReport {
    let mut metrics = BTreeMap::new();
    let mut failed = BTreeMap::new();

    metrics.insert("node_count".to_string(), graph.node_count() as f64);
    metrics.insert("edge_count".to_string(), graph.edge_count() as f64);
    metrics.insert(
        "strongly_connected_components".to_string(),
        strongly_connected_component_count(graph) as f64,
    );
    metrics.insert(
        "weakly_connected_components".to_string(),
        weakly_connected_component_count(graph) as f64,
    );

    match average_path_length(graph) {
        Ok(length) => {
            metrics.insert("average_path_length".to_string(), length);
        }
        Err(err) => {
            warn!(error = %err, "average path length unavailable");
            failed.insert("average_path_length".to_string(), err.to_string());
        }
    }

    let degrees = degree_summary(graph);
    metrics.insert("max_degree".to_string(), degrees.max as f64);
    metrics.insert("min_degree".to_string(), degrees.min as f64);
    metrics.insert("average_degree".to_string(), degrees.mean);
    metrics.insert("density".to_string(), density(graph));

    StatsReport {
        metrics,
        failed,
        social_degree_distribution: degree_distribution(graph, Some(NodeKind::Social)),
        technical_degree_distribution: degree_distribution(graph, Some(NodeKind::Technical)),
        combined_degree_distribution: degree_distribution(graph, None),
    }
}

fn reduce(measure: &str, scores: HashMap<String, f64>) -> MeasureOutcome {
    match argmax(&scores) {
        Some((node, score)) => MeasureOutcome::Computed {
            entry: ArgmaxEntry { node, score },
        },
        None => MeasureOutcome::Failed {
            reason: format!("{measure} has no scores on an empty graph"),
        },
    }
}

/// Build the centrality report: compute each full mapping, reduce to its
/// argmax, and record per-measure failures instead of aborting.
#[must_use]
pub fn centrality_report(graph: &SocioTechGraph) -> CentralityReport {
    let mut measures = BTreeMap::new();

    measures.insert(
        "degree".to_string(),
        reduce("degree", total_degree_centrality(graph)),
    );
    measures.insert(
        "in_degree".to_string(),
        reduce("in_degree", in_degree_centrality(graph)),
    );
    measures.insert(
        "out_degree".to_string(),
        reduce("out_degree", out_degree_centrality(graph)),
    );

    let eigenvector = eigenvector_centrality(graph, EigenvectorConfig::default());
    measures.insert(
        "eigenvector".to_string(),
        match eigenvector {
            Ok(scores) => reduce("eigenvector", scores),
            Err(err) => {
                warn!(error = %err, "eigenvector centrality skipped");
                MeasureOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        },
    );

    let katz = katz_centrality(graph, KatzConfig::default());
    measures.insert(
        "katz".to_string(),
        match katz {
            Ok(scores) => reduce("katz", scores),
            Err(err) => {
                warn!(error = %err, "katz centrality skipped");
                MeasureOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        },
    );

    measures.insert(
        "closeness".to_string(),
        reduce("closeness", closeness_centrality(graph)),
    );
    measures.insert(
        "betweenness".to_string(),
        reduce(
            "betweenness",
            betweenness_centrality(graph, BetweennessConfig::default()),
        ),
    );

    CentralityReport { measures }
}

fn view_outcome<T>(name: &str, result: crate::Result<T>) -> ViewOutcome<T> {
    match result {
        Ok(view) => ViewOutcome::Computed { view },
        Err(err) => {
            warn!(view = name, error = %err, "supply-chain view skipped");
            ViewOutcome::Skipped {
                reason: err.to_string(),
            }
        }
    }
}

/// Build the three supply-chain view reports.
#[must_use]
pub fn supply_chain_report(graph: &SocioTechGraph) -> SupplyChainReport {
    SupplyChainReport {
        technical_influence: view_outcome("technical-influence", technical_influence(graph)),
        targeted_social_influence: view_outcome(
            "targeted social-influence",
            social_influence_targeted(graph),
        ),
        dispersed_social_influence: view_outcome(
            "dispersed social-influence",
            social_influence_dispersed(graph),
        ),
    }
}

/// Run the full analysis against one assembled graph.
#[must_use]
pub fn analyze(graph: &SocioTechGraph) -> AnalysisReport {
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "running full analysis"
    );
    AnalysisReport {
        stats: stats_report(graph),
        centrality: centrality_report(graph),
        supply_chain: supply_chain_report(graph),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EdgeClass, EdgeGroups, NodeId, NodeRegistry};

    fn mixed_graph() -> SocioTechGraph {
        let mut registry = NodeRegistry::new();
        registry.register("alice", NodeKind::Social).unwrap();
        registry.register("bob", NodeKind::Social).unwrap();
        registry.register("repo_a", NodeKind::Technical).unwrap();
        registry.register("repo_b", NodeKind::Technical).unwrap();

        let mut edges = EdgeGroups::new();
        edges.insert(
            EdgeClass::SocialSocial,
            NodeId::new("alice"),
            NodeId::new("bob"),
        );
        edges.insert(
            EdgeClass::TechnicalTechnical,
            NodeId::new("repo_a"),
            NodeId::new("repo_b"),
        );
        edges.insert(
            EdgeClass::SocialTechnical,
            NodeId::new("alice"),
            NodeId::new("repo_a"),
        );
        edges.insert(
            EdgeClass::SocialTechnical,
            NodeId::new("bob"),
            NodeId::new("repo_a"),
        );
        SocioTechGraph::assemble(&registry, &edges).unwrap()
    }

    #[test]
    fn stats_report_records_disconnection_locally() {
        let report = stats_report(&mixed_graph());

        assert_eq!(report.metrics["node_count"], 4.0);
        assert_eq!(report.metrics["edge_count"], 4.0);
        // The mixed graph is not strongly connected; the metric is marked
        // failed and everything else is still present.
        assert!(!report.metrics.contains_key("average_path_length"));
        assert!(report.failed.contains_key("average_path_length"));
        assert!(report.metrics.contains_key("density"));
        assert!((report.combined_degree_distribution.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn centrality_report_covers_all_seven_measures() {
        let report = centrality_report(&mixed_graph());

        let names: Vec<&str> = report.measures.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec![
                "betweenness",
                "closeness",
                "degree",
                "eigenvector",
                "in_degree",
                "katz",
                "out_degree"
            ]
        );

        // repo_a has two contributors plus a dependent: total degree 3 of
        // a possible 3.
        match &report.measures["degree"] {
            MeasureOutcome::Computed { entry } => {
                assert_eq!(entry.node, "repo_a");
                assert!((entry.score - 1.0).abs() < 1e-9);
            }
            MeasureOutcome::Failed { reason } => panic!("degree failed: {reason}"),
        }

        // The mixed graph is a DAG, so eigenvector fails locally while the
        // rest of the report remains.
        assert!(matches!(
            report.measures["eigenvector"],
            MeasureOutcome::Failed { .. }
        ));
        assert!(matches!(
            report.measures["katz"],
            MeasureOutcome::Computed { .. }
        ));
    }

    #[test]
    fn full_report_serializes() {
        let report = analyze(&mixed_graph());
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"node_count\""));
        assert!(json.contains("\"measures\""));
        assert!(json.contains("\"technical_influence\""));
    }

    #[test]
    fn empty_graph_report_marks_everything_failed() {
        let graph = SocioTechGraph::assemble(&NodeRegistry::new(), &EdgeGroups::new()).unwrap();
        let report = analyze(&graph);

        assert_eq!(report.stats.metrics["node_count"], 0.0);
        for outcome in report.centrality.measures.values() {
            assert!(matches!(outcome, MeasureOutcome::Failed { .. }));
        }
        assert!(matches!(
            report.supply_chain.technical_influence,
            ViewOutcome::Skipped { .. }
        ));
    }
}
