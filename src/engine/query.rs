//! Query engine: one entry point for every algorithm, driven by an `EngineConfig`.

use indexmap::IndexMap;

use crate::graph::traversal::{bfs, bfs_levels, dfs, dfs_recursive};
use crate::graph::{DirectedGraph, Graph, UndirectedGraph};
use crate::types::{GraphResult, Vertex};

use super::components::connected_components;
use super::shortest_path::{dijkstra_with, DijkstraOptions, Distances};
use super::topological::{topological_sort, topological_sort_checked};

/// Which walk a traversal query performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalStrategy {
    /// FIFO queue, level by level.
    BreadthFirst,
    /// Pre-order, deepest first.
    DepthFirst,
}

/// How depth-first walks are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthFirstMode {
    /// Explicit stack, bounded only by heap memory.
    #[default]
    Iterative,
    /// Native recursion, bounded by the thread's call stack.
    Recursive,
}

/// Engine-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Execution mode for depth-first traversals.
    pub depth_first: DepthFirstMode,
    /// Options forwarded to Dijkstra.
    pub dijkstra: DijkstraOptions,
    /// Return an order for cyclic graphs instead of failing with `CyclicGraph`.
    pub allow_cycles: bool,
}

/// Parameters for a traversal query.
#[derive(Debug, Clone)]
pub struct TraversalParams<V> {
    /// Starting vertex.
    pub start: V,
    /// Breadth-first or depth-first.
    pub strategy: TraversalStrategy,
}

/// Result of a traversal query.
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalResult<V> {
    /// The walk that produced `order`.
    pub strategy: TraversalStrategy,
    /// Vertices in visitation order.
    pub order: Vec<V>,
}

/// The query engine supports all algorithm operations.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    config: EngineConfig,
}

impl QueryEngine {
    /// Create a query engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a query engine with a specific configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Walk the graph from `params.start`.
    pub fn traverse<V, G>(
        &self,
        graph: &G,
        params: &TraversalParams<V>,
    ) -> GraphResult<TraversalResult<V>>
    where
        V: Vertex,
        G: Graph<V> + ?Sized,
    {
        let order = match (params.strategy, self.config.depth_first) {
            (TraversalStrategy::BreadthFirst, _) => bfs(graph, &params.start)?,
            (TraversalStrategy::DepthFirst, DepthFirstMode::Iterative) => {
                dfs(graph, &params.start)?
            }
            (TraversalStrategy::DepthFirst, DepthFirstMode::Recursive) => {
                dfs_recursive(graph, &params.start)?
            }
        };

        Ok(TraversalResult {
            strategy: params.strategy,
            order,
        })
    }

    /// Hop count from `start` to every reachable vertex.
    pub fn levels<V, G>(&self, graph: &G, start: &V) -> GraphResult<IndexMap<V, usize>>
    where
        V: Vertex,
        G: Graph<V> + ?Sized,
    {
        bfs_levels(graph, start)
    }

    /// Weighted distances from `source`.
    pub fn shortest_paths<V, G>(&self, graph: &G, source: &V) -> GraphResult<Distances<V>>
    where
        V: Vertex,
        G: Graph<V> + ?Sized,
    {
        dijkstra_with(graph, source, self.config.dijkstra)
    }

    /// Topological order; cyclic graphs fail unless `allow_cycles` is set.
    pub fn topological_order<V: Vertex>(&self, graph: &DirectedGraph<V>) -> GraphResult<Vec<V>> {
        if self.config.allow_cycles {
            Ok(topological_sort(graph))
        } else {
            topological_sort_checked(graph)
        }
    }

    /// Connected components of an undirected graph.
    pub fn components<V: Vertex>(&self, graph: &UndirectedGraph<V>) -> Vec<Vec<V>> {
        connected_components(graph)
    }
}
