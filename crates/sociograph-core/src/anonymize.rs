//! Structural anonymization of social identifiers.
//!
//! The map is a bijection from raw social identifiers to opaque `S1`, `S2`,
//! ... tokens, built once from the registry and then applied to records by
//! identifier identity. Substring replacement is never used, so one
//! identifier being a prefix of another cannot corrupt unrelated records.

use crate::{NodeId, NodeKind, NodeRegistry};
use std::collections::HashMap;

/// A bijection from raw social identifiers to opaque tokens.
#[derive(Debug, Clone)]
pub struct Anonymizer {
    tokens: HashMap<NodeId, NodeId>,
}

impl Anonymizer {
    /// Build the map from the registry's social set, in registration order.
    pub fn from_registry(registry: &NodeRegistry) -> Self {
        let tokens = registry
            .all(NodeKind::Social)
            .into_iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), NodeId::new(format!("S{}", i + 1))))
            .collect();
        Self { tokens }
    }

    /// Token for a raw social identifier, if one was assigned.
    pub fn token_for(&self, id: &NodeId) -> Option<&NodeId> {
        self.tokens.get(id)
    }

    /// Rewrite an identifier: social identifiers become their token,
    /// everything else passes through unchanged.
    pub fn rewrite(&self, id: &NodeId) -> NodeId {
        self.tokens.get(id).cloned().unwrap_or_else(|| id.clone())
    }

    /// Rewrite both endpoints of an edge record.
    pub fn rewrite_edge(&self, (source, destination): &(NodeId, NodeId)) -> (NodeId, NodeId) {
        (self.rewrite(source), self.rewrite(destination))
    }

    /// Number of anonymized identifiers.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if no social identifiers were registered.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
