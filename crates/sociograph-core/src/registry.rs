//! Node registry: the typed node universe for one analysis run.

use crate::{Error, Node, NodeId, NodeKind, Result};
use std::collections::HashMap;

/// Holds the two disjoint identifier sets and the kind tag of each node.
///
/// An identifier appears in exactly one kind set. Registration order is
/// preserved so downstream passes (anonymization, assembly) are
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    kinds: HashMap<NodeId, NodeKind>,
    order: Vec<NodeId>,
}

impl NodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an identifier under a kind.
    ///
    /// Registering the same identifier twice under the same kind is a no-op.
    /// Registering it under the other kind fails with
    /// [`Error::TypeConflict`] and leaves the registry unchanged.
    pub fn register(&mut self, id: impl Into<NodeId>, kind: NodeKind) -> Result<()> {
        let id = id.into();
        match self.kinds.get(&id) {
            Some(existing) if *existing == kind => Ok(()),
            Some(_) => Err(Error::TypeConflict(id.0)),
            None => {
                self.kinds.insert(id.clone(), kind);
                self.order.push(id);
                Ok(())
            }
        }
    }

    /// Look up the kind of an identifier, if registered.
    pub fn kind_of(&self, id: &NodeId) -> Option<NodeKind> {
        self.kinds.get(id).copied()
    }

    /// Check whether an identifier is registered under any kind.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.kinds.contains_key(id)
    }

    /// All identifiers of one kind, in registration order.
    pub fn all(&self, kind: NodeKind) -> Vec<&NodeId> {
        self.order
            .iter()
            .filter(|id| self.kinds.get(id) == Some(&kind))
            .collect()
    }

    /// Iterate over all nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.order
            .iter()
            .map(|id| Node::new(id.clone(), self.kinds[id]))
    }

    /// Number of registered identifiers across both kinds.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
