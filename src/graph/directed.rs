//! Directed weighted graph: one adjacency entry per edge, origin to destination.

use indexmap::IndexMap;

use crate::types::{GraphError, GraphResult, Vertex, Weight};

use super::{entry_mut, require, Adjacency, Graph};

/// Directed graph store.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    adjacency: Adjacency<V>,
}

impl<V: Vertex> DirectedGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }

    /// Vertices with an edge pointing at `vertex`, in vertex order.
    pub fn predecessors(&self, vertex: &V) -> GraphResult<Vec<&V>> {
        require(&self.adjacency, vertex)?;
        Ok(self
            .adjacency
            .iter()
            .filter(|(_, neighbors)| neighbors.contains_key(vertex))
            .map(|(source, _)| source)
            .collect())
    }
}

impl<V: Vertex> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> for DirectedGraph<V> {
    /// Resetting a vertex clears its outgoing edges only; edges other vertices
    /// hold towards it are theirs and stay.
    fn add_vertex(&mut self, vertex: V) -> bool {
        match self.adjacency.insert(vertex.clone(), IndexMap::new()) {
            Some(previous) => {
                log::warn!(
                    "vertex {} re-added, {} outgoing edge(s) dropped",
                    vertex,
                    previous.len()
                );
                true
            }
            None => false,
        }
    }

    fn add_edge(&mut self, source: &V, target: &V, weight: Weight) -> GraphResult<()> {
        require(&self.adjacency, source)?;
        require(&self.adjacency, target)?;
        entry_mut(&mut self.adjacency, source)?.insert(target.clone(), weight);
        Ok(())
    }

    fn remove_edge(&mut self, source: &V, target: &V) -> GraphResult<()> {
        require(&self.adjacency, source)?;
        require(&self.adjacency, target)?;
        entry_mut(&mut self.adjacency, source)?.shift_remove(target);
        Ok(())
    }

    /// Removes the vertex with its outgoing edges, then sweeps every other
    /// vertex for edges into it, whether or not `vertex` pointed back.
    fn remove_vertex(&mut self, vertex: &V) -> GraphResult<()> {
        let outgoing = self
            .adjacency
            .shift_remove(vertex)
            .ok_or_else(|| GraphError::missing(vertex))?;

        let mut incoming = 0;
        for neighbors in self.adjacency.values_mut() {
            if neighbors.shift_remove(vertex).is_some() {
                incoming += 1;
            }
        }
        log::trace!(
            "removed vertex {} ({} outgoing, {} incoming edge(s))",
            vertex,
            outgoing.len(),
            incoming
        );
        Ok(())
    }

    fn adjacency(&self) -> &Adjacency<V> {
        &self.adjacency
    }

    fn is_directed(&self) -> bool {
        true
    }
}
