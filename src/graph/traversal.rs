//! Graph traversal algorithms (BFS, DFS).

use std::collections::{HashSet, VecDeque};

use indexmap::IndexMap;

use crate::types::{GraphError, GraphResult, Vertex};

use super::{Adjacency, Graph};

/// Outgoing neighbors of `vertex` in insertion order; empty if it has no entry.
pub(crate) fn successors<'a, V: Vertex>(
    adjacency: &'a Adjacency<V>,
    vertex: &V,
) -> impl Iterator<Item = &'a V> + 'a {
    adjacency
        .get(vertex)
        .into_iter()
        .flat_map(|neighbors| neighbors.keys())
}

/// The graph's own copy of `vertex`, so traversal state can borrow from the graph.
pub(crate) fn stored<'a, V: Vertex>(
    adjacency: &'a Adjacency<V>,
    vertex: &V,
) -> GraphResult<&'a V> {
    adjacency
        .get_key_value(vertex)
        .map(|(key, _)| key)
        .ok_or_else(|| GraphError::missing(vertex))
}

/// Breadth-first visitation order from `start`.
///
/// Neighbors are enqueued without a visited check; a vertex is only skipped
/// when it is popped a second time. This leaves the order unchanged but lets
/// the queue hold duplicates.
pub fn bfs<V, G>(graph: &G, start: &V) -> GraphResult<Vec<V>>
where
    V: Vertex,
    G: Graph<V> + ?Sized,
{
    let adjacency = graph.adjacency();
    let start = stored(adjacency, start)?;

    let mut visited: HashSet<&V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut queue: VecDeque<&V> = VecDeque::new();
    let mut enqueued = 1usize;

    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.clone());

        for neighbor in successors(adjacency, current) {
            queue.push_back(neighbor);
            enqueued += 1;
        }
    }

    log::debug!(
        "bfs from {}: {} visited, {} enqueued",
        start,
        order.len(),
        enqueued
    );
    Ok(order)
}

/// Depth-first pre-order from `start`, neighbors in insertion order.
///
/// Uses an explicit stack of neighbor cursors, so the result matches
/// [`dfs_recursive`] without growing the call stack.
pub fn dfs<V, G>(graph: &G, start: &V) -> GraphResult<Vec<V>>
where
    V: Vertex,
    G: Graph<V> + ?Sized,
{
    let adjacency = graph.adjacency();
    let start = stored(adjacency, start)?;

    let mut visited: HashSet<&V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();

    visited.insert(start);
    order.push(start.clone());
    let mut stack = vec![successors(adjacency, start)];

    while let Some(cursor) = stack.last_mut() {
        match cursor.find(|neighbor| !visited.contains(neighbor)) {
            Some(next) => {
                visited.insert(next);
                order.push(next.clone());
                stack.push(successors(adjacency, next));
            }
            None => {
                stack.pop();
            }
        }
    }

    log::debug!("dfs from {}: {} visited", start, order.len());
    Ok(order)
}

/// Recursive depth-first pre-order. Same output as [`dfs`]; recursion depth
/// grows with the longest simple path explored.
pub fn dfs_recursive<V, G>(graph: &G, start: &V) -> GraphResult<Vec<V>>
where
    V: Vertex,
    G: Graph<V> + ?Sized,
{
    fn visit<'a, V: Vertex>(
        adjacency: &'a Adjacency<V>,
        vertex: &'a V,
        visited: &mut HashSet<&'a V>,
        order: &mut Vec<V>,
    ) {
        visited.insert(vertex);
        order.push(vertex.clone());
        for neighbor in successors(adjacency, vertex) {
            if !visited.contains(neighbor) {
                visit(adjacency, neighbor, visited, order);
            }
        }
    }

    let adjacency = graph.adjacency();
    let start = stored(adjacency, start)?;

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    visit(adjacency, start, &mut visited, &mut order);
    Ok(order)
}

/// Hop count from `start` to every reachable vertex, in discovery order.
pub fn bfs_levels<V, G>(graph: &G, start: &V) -> GraphResult<IndexMap<V, usize>>
where
    V: Vertex,
    G: Graph<V> + ?Sized,
{
    let adjacency = graph.adjacency();
    let start = stored(adjacency, start)?;

    let mut levels: IndexMap<V, usize> = IndexMap::new();
    let mut queue: VecDeque<(&V, usize)> = VecDeque::new();

    levels.insert(start.clone(), 0);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for neighbor in successors(adjacency, current) {
            if levels.contains_key(neighbor) {
                continue;
            }
            levels.insert(neighbor.clone(), depth + 1);
            queue.push_back((neighbor, depth + 1));
        }
    }

    Ok(levels)
}
