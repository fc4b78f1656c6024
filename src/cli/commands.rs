//! CLI command implementations.
//!
//! Every command builds its graph from the command line, runs one query and
//! returns the rendered output; printing is left to the binary.

use std::fmt::Write as _;

use indexmap::IndexMap;

use crate::engine::{
    DepthFirstMode, DijkstraOptions, EngineConfig, QueryEngine, TraversalParams,
    TraversalStrategy,
};
use crate::graph::{DirectedGraph, Graph, GraphBuilder, UndirectedGraph};
use crate::types::{Edge, GraphError, GraphResult, Weight, DEFAULT_WEIGHT};

/// Vertices and edges as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct GraphSpec {
    /// Vertices declared with `--vertex`, in order.
    pub vertices: Vec<String>,
    /// Edges given as `U,V` or `U,V,W`.
    pub edges: Vec<String>,
}

/// A graph of either kind, keyed by string vertices.
pub enum AnyGraph {
    /// Built with `--directed`.
    Directed(DirectedGraph<String>),
    /// The default.
    Undirected(UndirectedGraph<String>),
}

/// Parse `U,V` or `U,V,W`; the weight defaults to 0.
pub fn parse_edge(spec: &str) -> GraphResult<Edge<String>> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    let invalid = || GraphError::InvalidEdgeSpec(spec.to_string());

    let (source, target, weight) = match parts.as_slice() {
        [source, target] => (*source, *target, DEFAULT_WEIGHT),
        [source, target, weight] => {
            let weight: Weight = weight.parse().map_err(|_| invalid())?;
            if !weight.is_finite() {
                return Err(invalid());
            }
            (*source, *target, weight)
        }
        _ => return Err(invalid()),
    };
    if source.is_empty() || target.is_empty() {
        return Err(invalid());
    }
    Ok(Edge::new(source.to_string(), target.to_string(), weight))
}

impl GraphSpec {
    fn builder(&self) -> GraphResult<GraphBuilder<String>> {
        let mut builder = GraphBuilder::new();
        builder.auto_vertices(true);
        builder.vertices(self.vertices.iter().cloned());
        for spec in &self.edges {
            let edge = parse_edge(spec)?;
            builder.edge(edge.source, edge.target, edge.weight);
        }
        Ok(builder)
    }

    /// Build a directed graph.
    pub fn directed(&self) -> GraphResult<DirectedGraph<String>> {
        self.builder()?.build_directed()
    }

    /// Build an undirected graph.
    pub fn undirected(&self) -> GraphResult<UndirectedGraph<String>> {
        self.builder()?.build_undirected()
    }

    /// Build the kind selected by `directed`.
    pub fn build(&self, directed: bool) -> GraphResult<AnyGraph> {
        if directed {
            Ok(AnyGraph::Directed(self.directed()?))
        } else {
            Ok(AnyGraph::Undirected(self.undirected()?))
        }
    }
}

impl AnyGraph {
    fn as_graph(&self) -> &dyn Graph<String> {
        match self {
            Self::Directed(graph) => graph,
            Self::Undirected(graph) => graph,
        }
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

fn format_weight(weight: Weight) -> String {
    if weight.is_infinite() {
        "inf".to_string()
    } else {
        weight.to_string()
    }
}

fn render_order(order: &[String], json: bool) -> String {
    if json {
        pretty(&serde_json::json!({ "order": order }))
    } else {
        order.join(" ")
    }
}

/// Breadth-first order from `start`.
pub fn cmd_bfs(spec: &GraphSpec, directed: bool, start: &str, json: bool) -> GraphResult<String> {
    let graph = spec.build(directed)?;
    let params = TraversalParams {
        start: start.to_string(),
        strategy: TraversalStrategy::BreadthFirst,
    };
    let result = QueryEngine::new().traverse(graph.as_graph(), &params)?;
    Ok(render_order(&result.order, json))
}

/// Depth-first order from `start`.
pub fn cmd_dfs(
    spec: &GraphSpec,
    directed: bool,
    start: &str,
    recursive: bool,
    json: bool,
) -> GraphResult<String> {
    let graph = spec.build(directed)?;
    let config = EngineConfig {
        depth_first: if recursive {
            DepthFirstMode::Recursive
        } else {
            DepthFirstMode::Iterative
        },
        ..EngineConfig::default()
    };
    let params = TraversalParams {
        start: start.to_string(),
        strategy: TraversalStrategy::DepthFirst,
    };
    let result = QueryEngine::with_config(config).traverse(graph.as_graph(), &params)?;
    Ok(render_order(&result.order, json))
}

/// Hop counts from `start`.
pub fn cmd_levels(
    spec: &GraphSpec,
    directed: bool,
    start: &str,
    json: bool,
) -> GraphResult<String> {
    let graph = spec.build(directed)?;
    let levels = QueryEngine::new().levels(graph.as_graph(), &start.to_string())?;

    if json {
        return Ok(pretty(&serde_json::json!({ "levels": levels })));
    }
    let mut out = String::new();
    for (vertex, hops) in &levels {
        let _ = writeln!(out, "{}: {}", vertex, hops);
    }
    Ok(out.trim_end().to_string())
}

/// Weighted distances from `source`.
pub fn cmd_dijkstra(
    spec: &GraphSpec,
    directed: bool,
    source: &str,
    exhaustive: bool,
    json: bool,
) -> GraphResult<String> {
    let graph = spec.build(directed)?;
    let config = EngineConfig {
        dijkstra: DijkstraOptions {
            stop_when_unreachable: !exhaustive,
        },
        ..EngineConfig::default()
    };
    let distances = QueryEngine::with_config(config)
        .shortest_paths(graph.as_graph(), &source.to_string())?;

    if json {
        // JSON has no infinity; unreachable vertices become null.
        let finite: IndexMap<&String, Option<Weight>> = distances
            .iter()
            .map(|(vertex, &d)| (vertex, d.is_finite().then_some(d)))
            .collect();
        return Ok(pretty(&serde_json::json!({
            "source": source,
            "distances": finite,
        })));
    }
    let mut out = String::new();
    for (vertex, &distance) in &distances {
        let _ = writeln!(out, "{}: {}", vertex, format_weight(distance));
    }
    Ok(out.trim_end().to_string())
}

/// Topological order of the directed graph.
pub fn cmd_topo(spec: &GraphSpec, allow_cycles: bool, json: bool) -> GraphResult<String> {
    let graph = spec.directed()?;
    let config = EngineConfig {
        allow_cycles,
        ..EngineConfig::default()
    };
    let order = QueryEngine::with_config(config).topological_order(&graph)?;
    Ok(render_order(&order, json))
}

/// Connected components of the undirected graph, one per line.
pub fn cmd_components(spec: &GraphSpec, json: bool) -> GraphResult<String> {
    let graph = spec.undirected()?;
    let components = QueryEngine::new().components(&graph);

    if json {
        return Ok(pretty(&serde_json::json!({
            "count": components.len(),
            "components": components,
        })));
    }
    Ok(components
        .iter()
        .map(|component| component.join(" "))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Summary of the graph built from the arguments.
pub fn cmd_info(spec: &GraphSpec, directed: bool, json: bool) -> GraphResult<String> {
    let graph = spec.build(directed)?;
    let graph = graph.as_graph();

    if json {
        return Ok(pretty(&serde_json::json!({
            "directed": graph.is_directed(),
            "vertices": graph.vertices().collect::<Vec<_>>(),
            "edges": graph.edges(),
        })));
    }

    let mut out = String::new();
    let kind = if graph.is_directed() {
        "directed"
    } else {
        "undirected"
    };
    let _ = writeln!(out, "Kind: {}", kind);
    let _ = writeln!(out, "Vertices: {}", graph.vertex_count());
    let _ = writeln!(out, "Edges: {}", graph.edge_count());
    let arrow = if graph.is_directed() { "->" } else { "--" };
    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "  {} {} {} ({})",
            edge.source,
            arrow,
            edge.target,
            format_weight(edge.weight)
        );
    }
    Ok(out.trim_end().to_string())
}
