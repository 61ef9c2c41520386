//! Edge classification against the node registry.

use crate::{EdgeClass, Error, NodeId, NodeRegistry, Result};
use std::collections::HashSet;

/// Classifies directed pairs into relation classes by endpoint kind.
///
/// Borrows the registry built during the ingestion pass; classification is
/// a pure lookup and the same pair always yields the same class.
#[derive(Debug)]
pub struct EdgeClassifier<'a> {
    registry: &'a NodeRegistry,
}

impl<'a> EdgeClassifier<'a> {
    /// Create a classifier over a registry.
    pub fn new(registry: &'a NodeRegistry) -> Self {
        Self { registry }
    }

    /// Classify a directed pair.
    ///
    /// Fails with [`Error::UnknownEndpoint`] if either endpoint was never
    /// registered, or [`Error::UnsupportedDirection`] for a
    /// (technical, social) pair.
    pub fn classify(&self, source: &NodeId, destination: &NodeId) -> Result<EdgeClass> {
        let source_kind = self
            .registry
            .kind_of(source)
            .ok_or_else(|| Error::UnknownEndpoint(source.0.clone()))?;
        let destination_kind = self
            .registry
            .kind_of(destination)
            .ok_or_else(|| Error::UnknownEndpoint(destination.0.clone()))?;

        EdgeClass::for_endpoints(source_kind, destination_kind).ok_or_else(|| {
            Error::UnsupportedDirection {
                from: source.0.clone(),
                to: destination.0.clone(),
            }
        })
    }

    /// Classify a whole record sequence into per-class groups.
    ///
    /// Duplicate (source, destination) pairs within a class collapse to one
    /// edge; the graph is not a multigraph per class.
    pub fn partition<I>(&self, records: I) -> Result<EdgeGroups>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut groups = EdgeGroups::default();
        for (source, destination) in records {
            let class = self.classify(&source, &destination)?;
            groups.insert(class, source, destination);
        }
        Ok(groups)
    }
}

/// The three per-class edge collections produced by classification.
#[derive(Debug, Clone, Default)]
pub struct EdgeGroups {
    /// Social -> social follow links.
    pub social_social: Vec<(NodeId, NodeId)>,
    /// Technical -> technical dependency links.
    pub technical_technical: Vec<(NodeId, NodeId)>,
    /// Social -> technical contribution links.
    pub social_technical: Vec<(NodeId, NodeId)>,
    seen: HashSet<(EdgeClass, NodeId, NodeId)>,
}

impl EdgeGroups {
    /// Create empty groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a classified pair, collapsing duplicates within the class.
    pub fn insert(&mut self, class: EdgeClass, source: NodeId, destination: NodeId) {
        if !self
            .seen
            .insert((class, source.clone(), destination.clone()))
        {
            return;
        }
        match class {
            EdgeClass::SocialSocial => self.social_social.push((source, destination)),
            EdgeClass::TechnicalTechnical => self.technical_technical.push((source, destination)),
            EdgeClass::SocialTechnical => self.social_technical.push((source, destination)),
        }
    }

    /// Iterate over every edge with its class tag.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &NodeId, EdgeClass)> {
        let soc = self
            .social_social
            .iter()
            .map(|(s, d)| (s, d, EdgeClass::SocialSocial));
        let tech = self
            .technical_technical
            .iter()
            .map(|(s, d)| (s, d, EdgeClass::TechnicalTechnical));
        let soctech = self
            .social_technical
            .iter()
            .map(|(s, d)| (s, d, EdgeClass::SocialTechnical));
        soc.chain(tech).chain(soctech)
    }

    /// Total edge count across the three classes.
    pub fn len(&self) -> usize {
        self.social_social.len() + self.technical_technical.len() + self.social_technical.len()
    }

    /// True if no edges were classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
