//! Criterion benchmarks for edgewise.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use edgewise::engine::{dijkstra, topological_sort_checked};
use edgewise::graph::{bfs, dfs, DirectedGraph, Graph, UndirectedGraph};

/// Random directed graph through the public add_vertex/add_edge API.
fn make_digraph(vertex_count: u32, edges_per_vertex: u32) -> DirectedGraph<u32> {
    let mut rng = rand::thread_rng();
    let mut graph = DirectedGraph::new();
    for v in 0..vertex_count {
        graph.add_vertex(v);
    }
    for v in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let target = rng.gen_range(0..vertex_count);
            if target != v {
                let _ = graph.add_edge(&v, &target, rng.gen_range(0.1..10.0));
            }
        }
    }
    graph
}

/// Random DAG: edges only point to higher-numbered vertices.
fn make_dag(vertex_count: u32, edges_per_vertex: u32) -> DirectedGraph<u32> {
    let mut rng = rand::thread_rng();
    let mut graph = DirectedGraph::new();
    for v in 0..vertex_count {
        graph.add_vertex(v);
    }
    for v in 0..vertex_count.saturating_sub(1) {
        for _ in 0..edges_per_vertex {
            let target = rng.gen_range(v + 1..vertex_count);
            let _ = graph.add_unweighted_edge(&v, &target);
        }
    }
    graph
}

fn bench_add_edge(c: &mut Criterion) {
    let mut graph: UndirectedGraph<u32> = UndirectedGraph::new();
    for v in 0..10_000 {
        graph.add_vertex(v);
    }

    c.bench_function("add_edge_undirected_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let u = rng.gen_range(0..10_000u32);
            let v = rng.gen_range(0..10_000u32);
            let _ = graph.add_edge(&u, &v, 1.0);
        })
    });
}

fn bench_bfs(c: &mut Criterion) {
    let graph = make_digraph(100_000, 3);
    c.bench_function("bfs_100k", |b| b.iter(|| bfs(&graph, &0).unwrap().len()));
}

fn bench_dfs(c: &mut Criterion) {
    let graph = make_digraph(100_000, 3);
    c.bench_function("dfs_100k", |b| b.iter(|| dfs(&graph, &0).unwrap().len()));
}

fn bench_dijkstra(c: &mut Criterion) {
    // The open set is scanned linearly, so keep this one small.
    let graph = make_digraph(2_000, 4);
    c.bench_function("dijkstra_2k", |b| {
        b.iter(|| dijkstra(&graph, &0).unwrap().len())
    });
}

fn bench_topological_sort(c: &mut Criterion) {
    let graph = make_dag(100_000, 3);
    c.bench_function("topological_sort_100k", |b| {
        b.iter(|| topological_sort_checked(&graph).unwrap().len())
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_bfs,
    bench_dfs,
    bench_dijkstra,
    bench_topological_sort,
);
criterion_main!(benches);
