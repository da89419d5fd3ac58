//! Error types for the topology crate.

use thiserror::Error;

/// Errors that can occur in topology queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TopologyError {
    /// Node identifier does not exist in the topology.
    #[error("Unknown node Q{node}")]
    UnknownNode {
        /// The node that was not found.
        node: u32,
    },

    /// No path connects the two nodes.
    #[error("No path found between Q{from} and Q{to}")]
    NoPath {
        /// Start node.
        from: u32,
        /// End node.
        to: u32,
    },

    /// Edge references a node outside the node table.
    #[error("Edge Q{from}-Q{to} references a node that does not exist")]
    InvalidEdge {
        /// First endpoint.
        from: u32,
        /// Second endpoint.
        to: u32,
    },

    /// Node identifier appears twice in the node table.
    #[error("Duplicate node Q{0}")]
    DuplicateNode(u32),
}

/// Result type for topology operations.
pub type TopologyResult<T> = Result<T, TopologyError>;
