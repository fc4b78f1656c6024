//! Fluent API for building graph stores.

use indexmap::IndexSet;

use crate::types::{Edge, GraphError, GraphResult, Vertex, Weight};

use super::{DirectedGraph, Graph, UndirectedGraph};

/// Fluent builder for constructing a [`DirectedGraph`] or [`UndirectedGraph`].
///
/// Vertices are always issued to the store before any edge, so the store's
/// vertex order is the order in which vertices were declared.
#[derive(Debug, Clone)]
pub struct GraphBuilder<V> {
    vertices: IndexSet<V>,
    edges: Vec<Edge<V>>,
    auto_vertices: bool,
}

impl<V: Vertex> GraphBuilder<V> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: Vec::new(),
            auto_vertices: false,
        }
    }

    /// Register edge endpoints that were never declared, in order of appearance.
    pub fn auto_vertices(&mut self, enabled: bool) -> &mut Self {
        self.auto_vertices = enabled;
        self
    }

    /// Declare a vertex. Declaring it twice is harmless.
    pub fn vertex(&mut self, vertex: V) -> &mut Self {
        self.vertices.insert(vertex);
        self
    }

    /// Declare several vertices.
    pub fn vertices<I: IntoIterator<Item = V>>(&mut self, vertices: I) -> &mut Self {
        self.vertices.extend(vertices);
        self
    }

    /// Add a weighted edge.
    pub fn edge(&mut self, source: V, target: V, weight: Weight) -> &mut Self {
        self.edges.push(Edge::new(source, target, weight));
        self
    }

    /// Add an edge with the default weight.
    pub fn unweighted_edge(&mut self, source: V, target: V) -> &mut Self {
        self.edges.push(Edge::unweighted(source, target));
        self
    }

    /// Number of edges queued so far.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Build a directed graph.
    pub fn build_directed(&self) -> GraphResult<DirectedGraph<V>> {
        let mut graph = DirectedGraph::new();
        self.populate(&mut graph)?;
        Ok(graph)
    }

    /// Build an undirected graph.
    pub fn build_undirected(&self) -> GraphResult<UndirectedGraph<V>> {
        let mut graph = UndirectedGraph::new();
        self.populate(&mut graph)?;
        Ok(graph)
    }

    fn populate<G: Graph<V>>(&self, graph: &mut G) -> GraphResult<()> {
        let mut vertices = self.vertices.clone();
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if vertices.contains(endpoint) {
                    continue;
                }
                if !self.auto_vertices {
                    return Err(GraphError::missing(endpoint));
                }
                vertices.insert(endpoint.clone());
            }
        }

        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for edge in &self.edges {
            graph.add_edge(&edge.source, &edge.target, edge.weight)?;
        }

        log::debug!(
            "built {} graph: {} vertices, {} edges",
            if graph.is_directed() { "directed" } else { "undirected" },
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(())
    }
}

impl<V: Vertex> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
