//! Connectivity: connected components and cycle detection.

use std::collections::{HashSet, VecDeque};

use crate::graph::traversal::successors;
use crate::graph::{DirectedGraph, Graph, UndirectedGraph};
use crate::types::{GraphError, Vertex};

use super::topological::topological_sort_checked;

/// Connected components, ordered by their earliest vertex. Each component
/// lists its vertices in breadth-first discovery order.
pub fn connected_components<V: Vertex>(graph: &UndirectedGraph<V>) -> Vec<Vec<V>> {
    let adjacency = graph.adjacency();
    let mut seen: HashSet<&V> = HashSet::with_capacity(adjacency.len());
    let mut components = Vec::new();

    for root in adjacency.keys() {
        if !seen.insert(root) {
            continue;
        }
        let mut component = Vec::new();
        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            component.push(current.clone());
            for neighbor in successors(adjacency, current) {
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        components.push(component);
    }

    log::debug!("{} connected component(s)", components.len());
    components
}

/// Whether a directed graph contains a cycle (self-loops included).
pub fn has_cycle<V: Vertex>(graph: &DirectedGraph<V>) -> bool {
    matches!(
        topological_sort_checked(graph),
        Err(GraphError::CyclicGraph(_))
    )
}
