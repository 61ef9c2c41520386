//! Staged ingestion: raw records in, registry and classified edges out.
//!
//! Each analysis run constructs its own registry and edge groups from
//! scratch; there is no shared state between runs.

use crate::{
    dedup_records, Anonymizer, EdgeClassifier, EdgeGroups, NodeId, NodeKind, NodeRegistry, Result,
};
use tracing::debug;

/// Everything the ingestion pass produces for the assembler.
#[derive(Debug)]
pub struct IngestOutput {
    /// The typed node universe.
    pub registry: NodeRegistry,
    /// Classified, per-class unique edges.
    pub edges: EdgeGroups,
    /// The anonymization map, when anonymization was requested.
    pub anonymizer: Option<Anonymizer>,
}

/// Run the staged ingestion pipeline.
///
/// Stages: exact dedup of both record streams, registry construction,
/// optional anonymization (structural rename applied to the registry and to
/// edge endpoints by identity), then classification into per-class groups.
///
/// Structural failures (`TypeConflict`, `UnknownEndpoint`,
/// `UnsupportedDirection`) abort the run.
pub fn ingest(
    node_records: &[(String, NodeKind)],
    edge_records: &[(String, String)],
    anonymize: bool,
) -> Result<IngestOutput> {
    let node_records = dedup_records(node_records);
    let edge_records = dedup_records(edge_records);
    debug!(
        nodes = node_records.len(),
        edges = edge_records.len(),
        "deduplicated staged records"
    );

    let mut registry = NodeRegistry::new();
    for (id, kind) in &node_records {
        registry.register(id.as_str(), *kind)?;
    }

    let edge_records: Vec<(NodeId, NodeId)> = edge_records
        .into_iter()
        .map(|(source, destination)| (NodeId::new(source), NodeId::new(destination)))
        .collect();

    let (registry, edge_records, anonymizer) = if anonymize {
        let anonymizer = Anonymizer::from_registry(&registry);
        debug!(social = anonymizer.len(), "built anonymization map");

        let mut renamed = NodeRegistry::new();
        for node in registry.nodes() {
            renamed.register(anonymizer.rewrite(&node.id), node.kind)?;
        }
        let edges = edge_records
            .iter()
            .map(|pair| anonymizer.rewrite_edge(pair))
            .collect();
        (renamed, edges, Some(anonymizer))
    } else {
        (registry, edge_records, None)
    };

    let classifier = EdgeClassifier::new(&registry);
    let edges = classifier.partition(edge_records)?;
    debug!(
        social_social = edges.social_social.len(),
        technical_technical = edges.technical_technical.len(),
        social_technical = edges.social_technical.len(),
        "classified edges"
    );

    Ok(IngestOutput {
        registry,
        edges,
        anonymizer,
    })
}
