//! Error types for the edgewise library.

use thiserror::Error;

use super::Weight;

/// All errors that can occur in the edgewise library.
///
/// Vertices are carried in their `Display` form so the error type stays
/// independent of the graph's vertex type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An operation referenced a vertex that was never added.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// A checked topological sort found a back edge.
    #[error("Graph contains a cycle through vertex {0}")]
    CyclicGraph(String),

    /// Dijkstra was asked to run over a negative edge weight.
    #[error("Negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: Weight,
    },

    /// An edge given on the command line could not be parsed.
    #[error("Invalid edge specification: {0}")]
    InvalidEdgeSpec(String),
}

impl GraphError {
    /// Shorthand for [`GraphError::VertexNotFound`].
    pub fn missing(vertex: &impl std::fmt::Display) -> Self {
        Self::VertexNotFound(vertex.to_string())
    }
}

/// Convenience result type for edgewise operations.
pub type GraphResult<T> = Result<T, GraphError>;
