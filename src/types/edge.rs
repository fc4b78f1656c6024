//! The edge view handed out by graph stores and consumed by the builder.

use serde::Serialize;

use super::{Weight, DEFAULT_WEIGHT};

/// A weighted relationship between two vertices.
///
/// Stores do not keep `Edge` values; they are materialized on demand by
/// [`Graph::edges`](crate::graph::Graph::edges) and collected by the
/// [`GraphBuilder`](crate::graph::GraphBuilder).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<V> {
    /// Origin vertex.
    pub source: V,
    /// Destination vertex.
    pub target: V,
    /// Edge weight.
    pub weight: Weight,
}

impl<V> Edge<V> {
    /// Create a new weighted edge.
    pub fn new(source: V, target: V, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Create an edge carrying [`DEFAULT_WEIGHT`].
    pub fn unweighted(source: V, target: V) -> Self {
        Self::new(source, target, DEFAULT_WEIGHT)
    }
}
