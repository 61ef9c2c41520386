//! Graph interchange / export types.
//!
//! A serde-friendly representation intended for handoff to persistence and
//! plotting collaborators rather than for algorithms. Nodes keep their kind
//! tag (the `repo` 0/1 flag), edges keep the one-hot class flags
//! (`soc`/`tech`/`soctech`), so nothing is lost across a round trip.

use crate::{EdgeClass, EdgeGroups, Error, NodeKind, NodeRegistry, Result, SocioTechGraph};
use serde::{Deserialize, Serialize};

/// A node in an interchange document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportNode {
    /// Node identifier.
    pub id: String,
    /// Social or technical.
    pub kind: NodeKind,
}

/// An edge in an interchange document, class encoded one-hot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportEdge {
    /// Source node ID.
    pub source: String,
    /// Destination node ID.
    pub target: String,
    /// 1 for a social -> social edge.
    pub soc: u8,
    /// 1 for a technical -> technical edge.
    pub tech: u8,
    /// 1 for a social -> technical edge.
    pub soctech: u8,
}

/// A complete graph document ready for export or re-import.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Always true; kept explicit for node-link consumers.
    pub directed: bool,
    /// Nodes with kind tags.
    pub nodes: Vec<ExportNode>,
    /// Edges with one-hot class tags.
    pub edges: Vec<ExportEdge>,
}

impl GraphDocument {
    /// Snapshot an assembled graph into an interchange document.
    #[must_use]
    pub fn from_graph(graph: &SocioTechGraph) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| ExportNode {
                id: node.id.0.clone(),
                kind: node.kind,
            })
            .collect();

        let edges = graph
            .edges()
            .map(|(source, target, class)| {
                let (soc, tech, soctech) = class.one_hot();
                ExportEdge {
                    source: source.0.clone(),
                    target: target.0.clone(),
                    soc,
                    tech,
                    soctech,
                }
            })
            .collect();

        Self {
            directed: true,
            nodes,
            edges,
        }
    }

    /// Rebuild an assembled graph from an interchange document.
    ///
    /// Runs the document back through registration and assembly, so the
    /// structural invariants (kind consistency, dangling edges, malformed
    /// one-hot tags) are re-checked rather than trusted.
    pub fn to_graph(&self) -> Result<SocioTechGraph> {
        let mut registry = NodeRegistry::new();
        for node in &self.nodes {
            registry.register(node.id.as_str(), node.kind)?;
        }

        let mut groups = EdgeGroups::new();
        for edge in &self.edges {
            let class = EdgeClass::from_one_hot(edge.soc, edge.tech, edge.soctech)
                .ok_or_else(|| {
                    Error::InvalidRecord(format!(
                        "edge {} -> {} has malformed class flags",
                        edge.source, edge.target
                    ))
                })?;
            groups.insert(class, edge.source.as_str().into(), edge.target.as_str().into());
        }

        SocioTechGraph::assemble(&registry, &groups)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Serialize as pretty-printed node-link JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a node-link JSON document.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Export as GML, the format graph tools exchange typed graphs in.
    ///
    /// Node `repo` and edge `soc`/`tech`/`soctech` attributes mirror the
    /// JSON form; nodes get integer ids with the identifier as `label`.
    #[must_use]
    pub fn to_gml(&self) -> String {
        let mut gml = String::from("graph [\n  directed 1\n");

        for (i, node) in self.nodes.iter().enumerate() {
            gml.push_str(&format!(
                "  node [\n    id {}\n    label \"{}\"\n    repo {}\n  ]\n",
                i,
                escape_gml_string(&node.id),
                node.kind.repo_flag()
            ));
        }

        for edge in &self.edges {
            let source = self.nodes.iter().position(|n| n.id == edge.source);
            let target = self.nodes.iter().position(|n| n.id == edge.target);
            if let (Some(source), Some(target)) = (source, target) {
                gml.push_str(&format!(
                    "  edge [\n    source {}\n    target {}\n    soc {}\n    tech {}\n    soctech {}\n  ]\n",
                    source, target, edge.soc, edge.tech, edge.soctech
                ));
            }
        }

        gml.push_str("]\n");
        gml
    }
}

/// Escape quotes and backslashes in GML string values.
fn escape_gml_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
