use proptest::prelude::*;
use sociograph_core::algo::centrality::{in_degree_centrality, out_degree_centrality};
use sociograph_core::algo::stats::degree_distribution;
use sociograph_core::{
    dedup_records, ingest, EdgeClassifier, NodeId, NodeKind, NodeRegistry, SocioTechGraph,
};

fn arb_node_pool() -> impl Strategy<Value = Vec<(String, NodeKind)>> {
    // A small fixed universe: s* social, t* technical. Identifier overlap
    // between kinds is impossible by construction, so ingestion never hits
    // a kind conflict.
    (1usize..5, 1usize..5).prop_map(|(social, technical)| {
        let mut nodes = Vec::new();
        for i in 0..social {
            nodes.push((format!("s{i}"), NodeKind::Social));
        }
        for i in 0..technical {
            nodes.push((format!("t{i}"), NodeKind::Technical));
        }
        nodes
    })
}

fn arb_records() -> impl Strategy<Value = (Vec<(String, NodeKind)>, Vec<(String, String)>)> {
    arb_node_pool().prop_flat_map(|nodes| {
        let n = nodes.len();
        let pool = nodes.clone();
        prop::collection::vec((0..n, 0..n), 0..32)
            .prop_map(move |pairs| {
                let edges = pairs
                    .into_iter()
                    .map(|(a, b)| {
                        let (source, destination) = (&pool[a], &pool[b]);
                        // The scraper never emits technical -> social; flip
                        // such pairs into the modeled direction.
                        if source.1 == NodeKind::Technical && destination.1 == NodeKind::Social {
                            (destination.0.clone(), source.0.clone())
                        } else {
                            (source.0.clone(), destination.0.clone())
                        }
                    })
                    .collect();
                (pool.clone(), edges)
            })
    })
}

proptest! {
    #[test]
    fn prop_dedup_is_idempotent_and_order_preserving(
        records in prop::collection::vec("[a-c]{1,2}", 0..24)
    ) {
        let once = dedup_records(&records);
        let twice = dedup_records(&once);
        prop_assert_eq!(&once, &twice);

        // Every survivor appears in the original, in the same relative order.
        let mut cursor = records.iter();
        for kept in &once {
            prop_assert!(cursor.any(|r| r == kept));
        }
    }

    #[test]
    fn prop_classification_is_deterministic((nodes, edges) in arb_records()) {
        let mut registry = NodeRegistry::new();
        for (id, kind) in &nodes {
            registry.register(id.as_str(), *kind).unwrap();
        }
        let classifier = EdgeClassifier::new(&registry);

        for (source, destination) in &edges {
            let source = NodeId::new(source.as_str());
            let destination = NodeId::new(destination.as_str());
            let first = classifier.classify(&source, &destination).unwrap();
            let second = classifier.classify(&source, &destination).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn prop_edge_classes_partition_the_edge_set((nodes, edges) in arb_records()) {
        let staged = ingest(&nodes, &edges, false).unwrap();
        let graph = SocioTechGraph::assemble(&staged.registry, &staged.edges).unwrap();

        for (_, _, class) in graph.edges() {
            let (soc, tech, soctech) = class.one_hot();
            prop_assert_eq!(soc + tech + soctech, 1);
        }

        // Per-class uniqueness: assembled edge count matches the grouped
        // count, which already collapsed duplicates.
        prop_assert_eq!(graph.edge_count(), staged.edges.len());
    }

    #[test]
    fn prop_directional_degree_centrality_is_bounded((nodes, edges) in arb_records()) {
        let staged = ingest(&nodes, &edges, false).unwrap();
        let graph = SocioTechGraph::assemble(&staged.registry, &staged.edges).unwrap();

        for score in in_degree_centrality(&graph).values() {
            prop_assert!((0.0..=1.0).contains(score));
        }
        for score in out_degree_centrality(&graph).values() {
            prop_assert!((0.0..=1.0).contains(score));
        }
    }

    #[test]
    fn prop_degree_distributions_sum_to_one((nodes, edges) in arb_records()) {
        let staged = ingest(&nodes, &edges, false).unwrap();
        let graph = SocioTechGraph::assemble(&staged.registry, &staged.edges).unwrap();

        for kind in [Some(NodeKind::Social), Some(NodeKind::Technical), None] {
            let distribution = degree_distribution(&graph, kind);
            if !distribution.frequencies.is_empty() {
                prop_assert!((distribution.total() - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn prop_anonymization_preserves_structure((nodes, edges) in arb_records()) {
        let plain = ingest(&nodes, &edges, false).unwrap();
        let anonymized = ingest(&nodes, &edges, true).unwrap();

        let before = SocioTechGraph::assemble(&plain.registry, &plain.edges).unwrap();
        let after = SocioTechGraph::assemble(&anonymized.registry, &anonymized.edges).unwrap();

        // A structural rename changes labels only.
        prop_assert_eq!(before.node_count(), after.node_count());
        prop_assert_eq!(before.edge_count(), after.edge_count());
        prop_assert_eq!(
            before.nodes().filter(|n| n.kind == NodeKind::Social).count(),
            after.nodes().filter(|n| n.kind == NodeKind::Social).count()
        );
    }
}
