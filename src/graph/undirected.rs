//! Undirected weighted graph: every edge is stored in both directions.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::types::{Edge, GraphResult, Vertex, Weight};

use super::{entry_mut, require, Adjacency, Graph};

/// Undirected graph store.
///
/// Invariant: `adjacency[u][v] == adjacency[v][u]` for every stored pair.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V> {
    adjacency: Adjacency<V>,
}

impl<V: Vertex> UndirectedGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<V: Vertex> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> for UndirectedGraph<V> {
    fn add_vertex(&mut self, vertex: V) -> bool {
        let Some(previous) = self.adjacency.insert(vertex.clone(), IndexMap::new()) else {
            return false;
        };

        // Drop the mirrored entries so the reset keeps the graph symmetric.
        for neighbor in previous.keys().filter(|&n| n != &vertex) {
            if let Some(entries) = self.adjacency.get_mut(neighbor) {
                entries.shift_remove(&vertex);
            }
        }
        log::warn!(
            "vertex {} re-added, {} incident edge(s) dropped",
            vertex,
            previous.len()
        );
        true
    }

    fn add_edge(&mut self, source: &V, target: &V, weight: Weight) -> GraphResult<()> {
        require(&self.adjacency, source)?;
        require(&self.adjacency, target)?;

        entry_mut(&mut self.adjacency, source)?.insert(target.clone(), weight);
        entry_mut(&mut self.adjacency, target)?.insert(source.clone(), weight);
        Ok(())
    }

    fn remove_edge(&mut self, source: &V, target: &V) -> GraphResult<()> {
        require(&self.adjacency, source)?;
        require(&self.adjacency, target)?;

        entry_mut(&mut self.adjacency, source)?.shift_remove(target);
        entry_mut(&mut self.adjacency, target)?.shift_remove(source);
        Ok(())
    }

    fn remove_vertex(&mut self, vertex: &V) -> GraphResult<()> {
        let neighbors: Vec<V> = self.neighbors(vertex)?.keys().cloned().collect();
        for neighbor in &neighbors {
            self.remove_edge(neighbor, vertex)?;
        }
        self.adjacency.shift_remove(vertex);
        log::trace!("removed vertex {} and {} edge(s)", vertex, neighbors.len());
        Ok(())
    }

    fn adjacency(&self) -> &Adjacency<V> {
        &self.adjacency
    }

    fn is_directed(&self) -> bool {
        false
    }

    /// Each undirected edge counts once; a self-loop counts once.
    fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(|n| n.len()).sum();
        let loops = self
            .adjacency
            .iter()
            .filter(|(v, n)| n.contains_key(*v))
            .count();
        (entries + loops) / 2
    }

    /// Each undirected edge once, oriented from the vertex added first.
    fn edges(&self) -> Vec<Edge<V>> {
        let mut seen: HashSet<&V> = HashSet::new();
        let mut edges = Vec::with_capacity(self.edge_count());
        for (source, neighbors) in &self.adjacency {
            for (target, &weight) in neighbors {
                if !seen.contains(target) {
                    edges.push(Edge::new(source.clone(), target.clone(), weight));
                }
            }
            seen.insert(source);
        }
        edges
    }
}
