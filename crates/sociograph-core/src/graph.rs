//! The assembled socio-technical graph.

use crate::{EdgeClass, EdgeGroups, Error, Node, NodeId, NodeKind, NodeRegistry, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;
use tracing::debug;

/// A directed graph whose nodes carry kind tags and whose edges carry
/// relation-class tags.
///
/// Uses petgraph's directed graph internally, with an id -> index map for
/// O(1) lookup. Assembled once per analysis run; analysis consumers treat it
/// as immutable and obtain private filtered copies via [`Self::filter_nodes`]
/// and [`Self::filter_edge_classes`]. Interchange goes through
/// [`crate::export::GraphDocument`], which re-checks the structural
/// invariants on the way back in.
#[derive(Debug, Clone)]
pub struct SocioTechGraph {
    graph: DiGraph<Node, EdgeClass>,
    node_index: HashMap<NodeId, NodeIndex>,
}

impl SocioTechGraph {
    /// Assemble a graph from the registered node universe and the
    /// classified per-class edge groups.
    ///
    /// Every node is added with its kind tag, then every edge with its class
    /// tag. Fails with [`Error::DanglingEdge`] if an edge references an
    /// identifier missing from the node set.
    pub fn assemble(registry: &NodeRegistry, edges: &EdgeGroups) -> Result<Self> {
        let mut graph = DiGraph::with_capacity(registry.len(), edges.len());
        let mut node_index = HashMap::with_capacity(registry.len());

        for node in registry.nodes() {
            let id = node.id.clone();
            let idx = graph.add_node(node);
            node_index.insert(id, idx);
        }

        for (source, destination, class) in edges.iter() {
            let source_idx = *node_index
                .get(source)
                .ok_or_else(|| Error::DanglingEdge(source.0.clone()))?;
            let destination_idx = *node_index
                .get(destination)
                .ok_or_else(|| Error::DanglingEdge(destination.0.clone()))?;
            graph.add_edge(source_idx, destination_idx, class);
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "assembled socio-technical graph"
        );
        Ok(Self { graph, node_index })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Look up a node's kind tag.
    pub fn kind_of(&self, id: &NodeId) -> Option<NodeKind> {
        self.node_index.get(id).map(|&idx| self.graph[idx].kind)
    }

    /// Check whether an identifier is present.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.node_index.contains_key(id)
    }

    /// Check whether a directed edge exists. O(d).
    pub fn has_edge(&self, source: &NodeId, destination: &NodeId) -> bool {
        let Some(&source_idx) = self.node_index.get(source) else {
            return false;
        };
        let Some(&destination_idx) = self.node_index.get(destination) else {
            return false;
        };
        self.graph.find_edge(source_idx, destination_idx).is_some()
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// Iterate over all edges as (source id, destination id, class).
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId, EdgeClass)> {
        self.graph.edge_references().map(|edge| {
            (
                &self.graph[edge.source()].id,
                &self.graph[edge.target()].id,
                *edge.weight(),
            )
        })
    }

    /// In-degree of a node. O(d).
    pub fn in_degree(&self, id: &NodeId) -> usize {
        match self.node_index.get(id) {
            Some(&idx) => self
                .graph
                .neighbors_directed(idx, Direction::Incoming)
                .count(),
            None => 0,
        }
    }

    /// Out-degree of a node. O(d).
    pub fn out_degree(&self, id: &NodeId) -> usize {
        match self.node_index.get(id) {
            Some(&idx) => self
                .graph
                .neighbors_directed(idx, Direction::Outgoing)
                .count(),
            None => 0,
        }
    }

    /// Total degree (in + out) of a node.
    pub fn degree(&self, id: &NodeId) -> usize {
        self.in_degree(id) + self.out_degree(id)
    }

    /// Get the underlying petgraph for algorithm implementations.
    pub fn as_petgraph(&self) -> &DiGraph<Node, EdgeClass> {
        &self.graph
    }

    /// A new independent graph keeping only nodes the predicate accepts,
    /// together with the edges whose endpoints both survive.
    ///
    /// The receiver is left untouched; the result shares no mutable state
    /// with it.
    pub fn filter_nodes(&self, keep: impl Fn(&Node) -> bool) -> Self {
        let mut graph = DiGraph::new();
        let mut node_index = HashMap::new();

        for node in self.graph.node_weights() {
            if keep(node) {
                let idx = graph.add_node(node.clone());
                node_index.insert(node.id.clone(), idx);
            }
        }
        for edge in self.graph.edge_references() {
            let source = &self.graph[edge.source()].id;
            let destination = &self.graph[edge.target()].id;
            if let (Some(&s), Some(&d)) = (node_index.get(source), node_index.get(destination)) {
                graph.add_edge(s, d, *edge.weight());
            }
        }

        Self { graph, node_index }
    }

    /// A new independent graph keeping every node but only edges whose class
    /// is in `classes`.
    pub fn filter_edge_classes(&self, classes: &[EdgeClass]) -> Self {
        let mut graph = DiGraph::new();
        let mut node_index = HashMap::new();

        for node in self.graph.node_weights() {
            let idx = graph.add_node(node.clone());
            node_index.insert(node.id.clone(), idx);
        }
        for edge in self.graph.edge_references() {
            if classes.contains(edge.weight()) {
                let s = node_index[&self.graph[edge.source()].id];
                let d = node_index[&self.graph[edge.target()].id];
                graph.add_edge(s, d, *edge.weight());
            }
        }

        Self { graph, node_index }
    }

    /// Convenience: a new independent graph keeping only nodes of one kind.
    pub fn only_kind(&self, kind: NodeKind) -> Self {
        self.filter_nodes(|node| node.kind == kind)
    }
}
