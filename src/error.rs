//! Error types for region geometry operations.

use thiserror::Error;

/// Errors that can occur while building or processing region shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    /// A polygon was built with fewer than three vertices.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// Two consecutive triangulation vertices coincide.
    #[error("zero-length edge at vertex {index}")]
    DegenerateEdge {
        /// Index of the vertex whose outgoing edge has zero length.
        index: usize,
    },

    /// Ear clipping could not find an ear in a polygon with more than
    /// three vertices left; the input was not a simple polygon.
    #[error("no ear found with {remaining} vertices remaining")]
    NoEarFound {
        /// Number of vertices still unclipped.
        remaining: usize,
    },

    /// The merge boundary walk could not make progress; the inputs
    /// violate the merge contract (overlap or T-junction).
    #[error("merge boundary walk stalled")]
    MergeWalkStalled,
}
