//! edgewise — in-memory weighted graphs and the classic algorithms over them.
//!
//! Two graph stores ([`UndirectedGraph`], [`DirectedGraph`]) share the
//! [`Graph`] capability trait. Algorithms borrow a store, never mutate it,
//! and return their result: a visitation order, a distance map, or a
//! topological order.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    connected_components, dijkstra, dijkstra_with, has_cycle, topological_sort,
    topological_sort_checked, DepthFirstMode, DijkstraOptions, Distances, EngineConfig,
    QueryEngine, TraversalParams, TraversalResult, TraversalStrategy,
};
pub use graph::{
    bfs, bfs_levels, dfs, dfs_recursive, Adjacency, DirectedGraph, Graph, GraphBuilder, Neighbors,
    UndirectedGraph,
};
pub use types::{Edge, GraphError, GraphResult, Vertex, Weight, DEFAULT_WEIGHT};
