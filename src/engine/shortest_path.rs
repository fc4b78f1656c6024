//! Single-source shortest paths (Dijkstra).

use indexmap::{IndexMap, IndexSet};

use crate::graph::traversal::stored;
use crate::graph::{Adjacency, Graph};
use crate::types::{GraphError, GraphResult, Vertex, Weight};

/// Distance from the source to every vertex, in vertex order.
/// Unreachable vertices map to `f64::INFINITY`.
pub type Distances<V> = IndexMap<V, Weight>;

/// Tuning knobs for [`dijkstra_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DijkstraOptions {
    /// Stop as soon as every vertex still open is unreachable. When `false`
    /// the remaining vertices are still selected one by one (in open-set
    /// order) before the loop ends. The distances are identical either way.
    pub stop_when_unreachable: bool,
}

impl Default for DijkstraOptions {
    fn default() -> Self {
        Self {
            stop_when_unreachable: true,
        }
    }
}

/// Dijkstra with default options.
pub fn dijkstra<V, G>(graph: &G, source: &V) -> GraphResult<Distances<V>>
where
    V: Vertex,
    G: Graph<V> + ?Sized,
{
    dijkstra_with(graph, source, DijkstraOptions::default())
}

/// Distances from `source` over non-negative edge weights.
///
/// The open set is scanned in vertex order and the first strictly smaller
/// distance wins, so ties go to the vertex added earliest.
pub fn dijkstra_with<V, G>(
    graph: &G,
    source: &V,
    options: DijkstraOptions,
) -> GraphResult<Distances<V>>
where
    V: Vertex,
    G: Graph<V> + ?Sized,
{
    let adjacency = graph.adjacency();
    let source = stored(adjacency, source)?;
    reject_negative_weights(adjacency)?;

    let mut dist: IndexMap<&V, Weight> = adjacency
        .keys()
        .map(|vertex| (vertex, Weight::INFINITY))
        .collect();
    dist.insert(source, 0.0);
    let mut open: IndexSet<&V> = adjacency.keys().collect();
    let mut settled = 0usize;

    while let Some((current, base)) = closest(&open, &dist) {
        if base == Weight::INFINITY && options.stop_when_unreachable {
            break;
        }
        open.shift_remove(current);
        settled += 1;

        let Some(neighbors) = adjacency.get(current) else {
            continue;
        };
        for (neighbor, &weight) in neighbors {
            if let Some(best) = dist.get_mut(neighbor) {
                let candidate = base + weight;
                if candidate < *best {
                    *best = candidate;
                }
            }
        }
    }

    log::debug!(
        "dijkstra from {}: {} of {} vertices selected, {} left open",
        source,
        settled,
        adjacency.len(),
        open.len()
    );

    Ok(dist
        .into_iter()
        .map(|(vertex, distance)| (vertex.clone(), distance))
        .collect())
}

/// First open vertex with the smallest tentative distance.
fn closest<'a, V: Vertex>(
    open: &IndexSet<&'a V>,
    dist: &IndexMap<&'a V, Weight>,
) -> Option<(&'a V, Weight)> {
    let mut best: Option<(&'a V, Weight)> = None;
    for &vertex in open {
        let distance = dist.get(vertex).copied().unwrap_or(Weight::INFINITY);
        match best {
            Some((_, smallest)) if distance >= smallest => {}
            _ => best = Some((vertex, distance)),
        }
    }
    best
}

fn reject_negative_weights<V: Vertex>(adjacency: &Adjacency<V>) -> GraphResult<()> {
    for (from, neighbors) in adjacency {
        for (to, &weight) in neighbors {
            if weight < 0.0 {
                return Err(GraphError::NegativeWeight {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight,
                });
            }
        }
    }
    Ok(())
}
