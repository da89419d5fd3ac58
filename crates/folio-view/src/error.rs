//! View error types.

use folio_topology::TopologyError;
use thiserror::Error;

/// Result type for view operations.
pub type ViewResult<T> = Result<T, ViewError>;

/// Errors raised by interactive views.
///
/// Pointer events only target elements that were rendered, so these only
/// surface when a caller feeds identifiers from outside the diagram.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ViewError {
    #[error("Unknown qubit Q{0}")]
    UnknownNode(u32),

    #[error("No coupling between Q{from} and Q{to}")]
    UnknownEdge { from: u32, to: u32 },

    #[error("Topology error: {0}")]
    Topology(#[from] TopologyError),
}
