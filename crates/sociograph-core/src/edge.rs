//! Edge classes for socio-technical graphs.

use crate::NodeKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The relation class of a directed edge.
///
/// The class is fully determined by the kinds of its endpoints; a
/// (technical, social) pair has no class and is rejected at classification
/// time. Within a class, (source, destination) pairs are unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeClass {
    /// Follow/follower link between two social actors.
    SocialSocial,
    /// Dependency link between two technical artifacts.
    TechnicalTechnical,
    /// Contribution link from a social actor to a technical artifact.
    SocialTechnical,
}

impl EdgeClass {
    /// Determine the class from endpoint kinds.
    ///
    /// Returns `None` for the unmodeled (technical, social) direction.
    pub fn for_endpoints(source: NodeKind, destination: NodeKind) -> Option<Self> {
        match (source, destination) {
            (NodeKind::Social, NodeKind::Social) => Some(EdgeClass::SocialSocial),
            (NodeKind::Technical, NodeKind::Technical) => Some(EdgeClass::TechnicalTechnical),
            (NodeKind::Social, NodeKind::Technical) => Some(EdgeClass::SocialTechnical),
            (NodeKind::Technical, NodeKind::Social) => None,
        }
    }

    /// One-hot encoding `(soc, tech, soctech)`: exactly one flag is 1.
    pub fn one_hot(&self) -> (u8, u8, u8) {
        match self {
            EdgeClass::SocialSocial => (1, 0, 0),
            EdgeClass::TechnicalTechnical => (0, 1, 0),
            EdgeClass::SocialTechnical => (0, 0, 1),
        }
    }

    /// Decode a one-hot `(soc, tech, soctech)` triple.
    ///
    /// Returns `None` unless exactly one flag is set.
    pub fn from_one_hot(soc: u8, tech: u8, soctech: u8) -> Option<Self> {
        match (soc, tech, soctech) {
            (1, 0, 0) => Some(EdgeClass::SocialSocial),
            (0, 1, 0) => Some(EdgeClass::TechnicalTechnical),
            (0, 0, 1) => Some(EdgeClass::SocialTechnical),
            _ => None,
        }
    }

    /// Get the class as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            EdgeClass::SocialSocial => "social_social",
            EdgeClass::TechnicalTechnical => "technical_technical",
            EdgeClass::SocialTechnical => "social_technical",
        }
    }

    /// All three classes, in declaration order.
    pub fn all() -> [EdgeClass; 3] {
        [
            EdgeClass::SocialSocial,
            EdgeClass::TechnicalTechnical,
            EdgeClass::SocialTechnical,
        ]
    }
}

impl fmt::Display for EdgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
