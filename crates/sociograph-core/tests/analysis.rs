//! End-to-end scenarios: records in, reports out.

use sociograph_core::algo::centrality::{betweenness_centrality, BetweennessConfig};
use sociograph_core::algo::stats::{
    average_path_length, density, strongly_connected_component_count,
};
use sociograph_core::report::{analyze, MeasureOutcome, ViewOutcome};
use sociograph_core::views::{social_influence_dispersed, technical_influence};
use sociograph_core::{ingest, Error, NodeKind, SocioTechGraph};

fn build(nodes: &[(&str, NodeKind)], edges: &[(&str, &str)]) -> SocioTechGraph {
    let nodes: Vec<(String, NodeKind)> = nodes
        .iter()
        .map(|(id, kind)| (id.to_string(), *kind))
        .collect();
    let edges: Vec<(String, String)> = edges
        .iter()
        .map(|(s, d)| (s.to_string(), d.to_string()))
        .collect();
    let staged = ingest(&nodes, &edges, false).unwrap();
    SocioTechGraph::assemble(&staged.registry, &staged.edges).unwrap()
}

#[test]
fn contribution_edge_and_isolated_repository() {
    // One contributor, one repository, one contribution.
    let graph = build(
        &[("A", NodeKind::Social), ("R", NodeKind::Technical)],
        &[("A", "R")],
    );

    let (_, _, class) = graph.edges().next().unwrap();
    assert_eq!(class.as_str(), "social_technical");

    // Stripping the social side leaves R alone with no technical
    // neighbors: nothing to rank.
    let err = technical_influence(&graph).unwrap_err();
    assert!(matches!(err, Error::EmptySubgraph(_)));
}

#[test]
fn social_cycle_statistics() {
    let graph = build(
        &[
            ("A", NodeKind::Social),
            ("B", NodeKind::Social),
            ("C", NodeKind::Social),
        ],
        &[("A", "B"), ("B", "C"), ("C", "A")],
    );

    assert_eq!(strongly_connected_component_count(&graph), 1);
    let length = average_path_length(&graph).unwrap();
    assert!((length - 1.5).abs() < 1e-9);
    assert!((density(&graph) - 0.5).abs() < 1e-9);
}

#[test]
fn kind_conflict_aborts_ingestion() {
    let nodes = vec![
        ("A".to_string(), NodeKind::Social),
        ("A".to_string(), NodeKind::Technical),
    ];
    let err = ingest(&nodes, &[], false).unwrap_err();
    assert!(matches!(err, Error::TypeConflict(id) if id == "A"));
}

#[test]
fn dispersed_view_drops_technical_dependencies() {
    let graph = build(
        &[
            ("T1", NodeKind::Technical),
            ("T2", NodeKind::Technical),
            ("A", NodeKind::Social),
        ],
        &[("T1", "T2"), ("A", "T1")],
    );

    let view = social_influence_dispersed(&graph).unwrap();
    // The T1 -> T2 dependency is gone; only the contribution remains.
    assert_eq!(view.out_degree["T1"], 0);
    assert_eq!(view.out_degree["A"], 1);
}

#[test]
fn path_betweenness_concentrates_in_the_interior() {
    let graph = build(
        &[
            ("A", NodeKind::Social),
            ("B", NodeKind::Social),
            ("C", NodeKind::Social),
            ("D", NodeKind::Social),
        ],
        &[("A", "B"), ("B", "C"), ("C", "D")],
    );

    let scores = betweenness_centrality(&graph, BetweennessConfig::default());
    assert_eq!(scores["A"], 0.0);
    assert_eq!(scores["D"], 0.0);
    assert!(scores["B"] > scores["A"]);
    assert!(scores["C"] > scores["D"]);
    assert!(scores["B"] > 0.0 && scores["C"] > 0.0);
}

#[test]
fn full_report_on_a_realistic_fixture() {
    // Two maintainers, one drive-by contributor, three repositories with a
    // dependency chain, and a follow edge.
    let graph = build(
        &[
            ("maya", NodeKind::Social),
            ("ona", NodeKind::Social),
            ("pat", NodeKind::Social),
            ("parser", NodeKind::Technical),
            ("runtime", NodeKind::Technical),
            ("cli", NodeKind::Technical),
        ],
        &[
            ("maya", "ona"),
            ("pat", "maya"),
            ("maya", "parser"),
            ("maya", "runtime"),
            ("ona", "parser"),
            ("pat", "cli"),
            ("runtime", "parser"),
            ("cli", "runtime"),
        ],
    );

    let report = analyze(&graph);

    assert_eq!(report.stats.metrics["node_count"], 6.0);
    assert_eq!(report.stats.metrics["edge_count"], 8.0);
    // Not strongly connected: the path-length metric fails locally.
    assert!(report.stats.failed.contains_key("average_path_length"));

    assert_eq!(report.centrality.measures.len(), 7);
    match &report.centrality.measures["in_degree"] {
        MeasureOutcome::Computed { entry } => {
            // parser has three incoming edges, the most of any node.
            assert_eq!(entry.node, "parser");
            assert!((entry.score - 3.0 / 5.0).abs() < 1e-9);
        }
        MeasureOutcome::Failed { reason } => panic!("in_degree failed: {reason}"),
    }

    match &report.supply_chain.technical_influence {
        ViewOutcome::Computed { view } => {
            assert!(view.out_degree["runtime"] > view.out_degree["parser"]);
        }
        ViewOutcome::Skipped { reason } => panic!("technical view skipped: {reason}"),
    }
}
