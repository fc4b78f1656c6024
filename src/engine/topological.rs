//! Topological ordering of directed graphs (DFS reverse-postorder).

use std::collections::{HashMap, HashSet};

use crate::graph::traversal::successors;
use crate::graph::{DirectedGraph, Graph};
use crate::types::{GraphError, GraphResult, Vertex};

/// Reverse-postorder of every vertex.
///
/// Roots are taken in vertex order and neighbors in insertion order; a vertex
/// is placed in front of everything its own visit reached. Cycles are not
/// detected: a vertex already on the current path is simply skipped, so on a
/// cyclic graph the result is a permutation of the vertices but not a valid
/// topological order. Use [`topological_sort_checked`] to reject cycles.
pub fn topological_sort<V: Vertex>(graph: &DirectedGraph<V>) -> Vec<V> {
    let adjacency = graph.adjacency();
    let mut visited: HashSet<&V> = HashSet::with_capacity(adjacency.len());
    let mut finished: Vec<&V> = Vec::with_capacity(adjacency.len());

    for root in adjacency.keys() {
        if !visited.insert(root) {
            continue;
        }
        let mut stack = vec![(root, successors(adjacency, root))];
        while let Some((vertex, cursor)) = stack.last_mut() {
            match cursor.find(|neighbor| !visited.contains(neighbor)) {
                Some(next) => {
                    visited.insert(next);
                    stack.push((next, successors(adjacency, next)));
                }
                None => {
                    finished.push(*vertex);
                    stack.pop();
                }
            }
        }
    }

    log::debug!("topological sort: {} vertices ordered", finished.len());
    finished.into_iter().rev().cloned().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    OnPath,
    Done,
}

/// Same order as [`topological_sort`] on an acyclic graph; fails with
/// [`GraphError::CyclicGraph`] naming the vertex a back edge returns to.
pub fn topological_sort_checked<V: Vertex>(graph: &DirectedGraph<V>) -> GraphResult<Vec<V>> {
    let adjacency = graph.adjacency();
    let mut marks: HashMap<&V, Mark> = HashMap::with_capacity(adjacency.len());
    let mut finished: Vec<&V> = Vec::with_capacity(adjacency.len());

    for root in adjacency.keys() {
        if marks.contains_key(root) {
            continue;
        }
        marks.insert(root, Mark::OnPath);
        let mut stack = vec![(root, successors(adjacency, root))];

        while let Some((vertex, cursor)) = stack.last_mut() {
            let mut next = None;
            for neighbor in cursor.by_ref() {
                match marks.get(neighbor) {
                    None => {
                        next = Some(neighbor);
                        break;
                    }
                    Some(Mark::OnPath) => {
                        log::debug!("back edge {} -> {}", vertex, neighbor);
                        return Err(GraphError::CyclicGraph(neighbor.to_string()));
                    }
                    Some(Mark::Done) => {}
                }
            }

            match next {
                Some(next) => {
                    marks.insert(next, Mark::OnPath);
                    stack.push((next, successors(adjacency, next)));
                }
                None => {
                    marks.insert(*vertex, Mark::Done);
                    finished.push(*vertex);
                    stack.pop();
                }
            }
        }
    }

    Ok(finished.into_iter().rev().cloned().collect())
}
