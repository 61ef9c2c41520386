//! Error types for sociograph-core.

use thiserror::Error;

/// Errors that can occur while ingesting records or analyzing a graph.
///
/// The first four variants are structural: the graph cannot be trusted and
/// the run should abort. `NotConvergent`, `Disconnected`, and `EmptySubgraph`
/// are local to a single measure or view; report builders record them and
/// keep going.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV record error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Identifier registered under both node kinds.
    #[error("Node kind conflict: {0} is already registered under the other kind")]
    TypeConflict(String),

    /// Edge references an identifier that was never registered.
    #[error("Unknown edge endpoint: {0}")]
    UnknownEndpoint(String),

    /// A (technical, social) edge was submitted; that direction is not modeled.
    #[error("Unsupported edge direction: {from} -> {to} (technical -> social)")]
    UnsupportedDirection {
        /// Source identifier.
        from: String,
        /// Destination identifier.
        to: String,
    },

    /// Edge references a node missing from the assembled node set.
    #[error("Dangling edge endpoint: {0}")]
    DanglingEdge(String),

    /// An iterative centrality measure failed to converge.
    #[error("{measure} centrality did not converge within {iterations} iterations")]
    NotConvergent {
        /// The measure that failed.
        measure: &'static str,
        /// The iteration bound that was exhausted.
        iterations: usize,
    },

    /// Average path length is undefined on a graph that is not strongly connected.
    #[error("Graph is not strongly connected; average path length is undefined")]
    Disconnected,

    /// A filtered view produced a subgraph too small for centrality.
    #[error("Filtered subgraph for the {0} view has no nodes to rank")]
    EmptySubgraph(&'static str),

    /// A staged record could not be parsed.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

/// Result type alias for sociograph-core.
pub type Result<T> = std::result::Result<T, Error>;
