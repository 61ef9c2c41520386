#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

//! Core types and algorithms for socio-technical graph analysis.
//!
//! This crate turns scraped contributor/follow records into a typed
//! directed graph and computes structural and influence metrics over it:
//!
//! - [`dedup_records`] / [`NodeRegistry`] / [`EdgeClassifier`] - the staged
//!   ingestion pipeline ([`ingest`] runs all stages)
//! - [`SocioTechGraph`] - the assembled graph: kind-tagged nodes,
//!   class-tagged edges
//! - [`algo::stats`] - descriptive statistics and degree distributions
//! - [`algo::centrality`] - seven centrality measures
//! - [`views`] - supply-chain risk views over filtered copies
//! - [`report`] - full-analysis report builders
//! - [`export`] - interchange documents (node-link JSON, GML)
//!
//! # Example
//!
//! ```rust
//! use sociograph_core::{ingest, NodeKind, SocioTechGraph};
//!
//! let nodes = vec![
//!     ("alice".to_string(), NodeKind::Social),
//!     ("widget-lib".to_string(), NodeKind::Technical),
//! ];
//! let edges = vec![("alice".to_string(), "widget-lib".to_string())];
//!
//! let staged = ingest(&nodes, &edges, false).unwrap();
//! let graph = SocioTechGraph::assemble(&staged.registry, &staged.edges).unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

pub mod algo;
mod anonymize;
mod classify;
mod dedup;
mod edge;
mod error;
pub mod export;
pub mod formats;
mod graph;
mod node;
mod pipeline;
mod registry;
pub mod report;
pub mod views;

pub use anonymize::Anonymizer;
pub use classify::{EdgeClassifier, EdgeGroups};
pub use dedup::dedup_records;
pub use edge::EdgeClass;
pub use error::{Error, Result};
pub use graph::SocioTechGraph;
pub use node::{Node, NodeId, NodeKind};
pub use pipeline::{ingest, IngestOutput};
pub use registry::NodeRegistry;

// Re-export petgraph for advanced graph operations
pub use petgraph;
