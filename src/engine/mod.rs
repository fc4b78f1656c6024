//! Algorithms over graph stores: shortest paths, topological order,
//! connectivity, and the query engine that fronts them.

pub mod components;
pub mod query;
pub mod shortest_path;
pub mod topological;

pub use components::{connected_components, has_cycle};
pub use query::{
    DepthFirstMode, EngineConfig, QueryEngine, TraversalParams, TraversalResult, TraversalStrategy,
};
pub use shortest_path::{dijkstra, dijkstra_with, DijkstraOptions, Distances};
pub use topological::{topological_sort, topological_sort_checked};
