//! In-memory graph stores and the traversals that walk them.

pub mod builder;
pub mod directed;
pub mod traversal;
pub mod undirected;

use indexmap::IndexMap;

use crate::types::{Edge, GraphError, GraphResult, Vertex, Weight, DEFAULT_WEIGHT};

pub use builder::GraphBuilder;
pub use directed::DirectedGraph;
pub use traversal::{bfs, bfs_levels, dfs, dfs_recursive};
pub use undirected::UndirectedGraph;

/// Outgoing edges of one vertex: neighbor -> weight, in insertion order.
pub type Neighbors<V> = IndexMap<V, Weight>;

/// The whole adjacency relation: vertex -> neighbors, in insertion order.
pub type Adjacency<V> = IndexMap<V, Neighbors<V>>;

/// The capability shared by both graph stores.
///
/// Mutation goes through the four required operations; everything the
/// algorithms need is derived from [`Graph::adjacency`].
pub trait Graph<V: Vertex> {
    /// Insert `vertex` with an empty adjacency entry.
    ///
    /// Re-adding an existing vertex is not an error: its adjacency is reset to
    /// empty and `true` is returned. The vertex keeps its position in
    /// [`Graph::vertices`].
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Add (or overwrite) an edge between two existing vertices.
    fn add_edge(&mut self, source: &V, target: &V, weight: Weight) -> GraphResult<()>;

    /// Remove the edge between two existing vertices. A missing edge is a no-op.
    fn remove_edge(&mut self, source: &V, target: &V) -> GraphResult<()>;

    /// Remove a vertex and every edge that points at it.
    fn remove_vertex(&mut self, vertex: &V) -> GraphResult<()>;

    /// Read-only view of the adjacency relation.
    fn adjacency(&self) -> &Adjacency<V>;

    /// Whether edges are one-way.
    fn is_directed(&self) -> bool;

    /// Add an edge carrying [`DEFAULT_WEIGHT`].
    fn add_unweighted_edge(&mut self, source: &V, target: &V) -> GraphResult<()> {
        self.add_edge(source, target, DEFAULT_WEIGHT)
    }

    /// Whether `vertex` has been added.
    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency().contains_key(vertex)
    }

    /// All vertices, in insertion order.
    fn vertices(&self) -> indexmap::map::Keys<'_, V, Neighbors<V>> {
        self.adjacency().keys()
    }

    /// Outgoing edges of `vertex`.
    fn neighbors(&self, vertex: &V) -> GraphResult<&Neighbors<V>> {
        self.adjacency()
            .get(vertex)
            .ok_or_else(|| GraphError::missing(vertex))
    }

    /// Weight of the edge `source -> target`, if present.
    fn weight(&self, source: &V, target: &V) -> Option<Weight> {
        self.adjacency()
            .get(source)
            .and_then(|neighbors| neighbors.get(target))
            .copied()
    }

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        self.adjacency().len()
    }

    /// Number of adjacency entries.
    fn edge_count(&self) -> usize {
        self.adjacency().values().map(|n| n.len()).sum()
    }

    /// Materialize every adjacency entry as an [`Edge`].
    fn edges(&self) -> Vec<Edge<V>> {
        self.adjacency()
            .iter()
            .flat_map(|(source, neighbors)| {
                neighbors
                    .iter()
                    .map(move |(target, &w)| Edge::new(source.clone(), target.clone(), w))
            })
            .collect()
    }
}

/// Mutable adjacency entry of an existing vertex.
pub(crate) fn entry_mut<'a, V: Vertex>(
    adjacency: &'a mut Adjacency<V>,
    vertex: &V,
) -> GraphResult<&'a mut Neighbors<V>> {
    adjacency
        .get_mut(vertex)
        .ok_or_else(|| GraphError::missing(vertex))
}

/// Fail with `VertexNotFound` unless `vertex` is present.
pub(crate) fn require<V: Vertex>(adjacency: &Adjacency<V>, vertex: &V) -> GraphResult<()> {
    if adjacency.contains_key(vertex) {
        Ok(())
    } else {
        Err(GraphError::missing(vertex))
    }
}
