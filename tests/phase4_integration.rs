//! Phase 4 tests: CLI integration and end-to-end flows.

use std::process::{Command, Output};

use edgewise::cli::commands::{self, parse_edge, GraphSpec};
use edgewise::types::{Edge, GraphError};

// ==================== CLI Helpers ====================

/// Run the `edgewise` CLI with the given arguments and return the output.
fn run_edgewise(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_edgewise"))
        .args(args)
        .output()
        .expect("Failed to run edgewise")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "edgewise failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

/// The A/B/C/D digraph as CLI flags.
const LETTER_EDGES: [&str; 8] = [
    "--edge", "A,B,1", "--edge", "B,C,2", "--edge", "C,A,3", "--edge", "B,D,2",
];

fn spec(edges: &[&str]) -> GraphSpec {
    GraphSpec {
        vertices: Vec::new(),
        edges: edges.iter().map(|e| e.to_string()).collect(),
    }
}

// ==================== Edge Parsing ====================

#[test]
fn test_parse_edge() {
    assert_eq!(
        parse_edge("A,B").unwrap(),
        Edge::new("A".to_string(), "B".to_string(), 0.0)
    );
    assert_eq!(
        parse_edge(" x , y , 2.5 ").unwrap(),
        Edge::new("x".to_string(), "y".to_string(), 2.5)
    );
    for bad in ["A", "A,B,C,D", "A,B,heavy", ",B", "A,B,inf"] {
        assert_eq!(
            parse_edge(bad),
            Err(GraphError::InvalidEdgeSpec(bad.to_string())),
            "{} should be rejected",
            bad
        );
    }
}

// ==================== Command Functions ====================

#[test]
fn test_cmd_bfs_and_dfs() {
    let letters = spec(&["A,B,1", "B,C,2", "C,A,3", "B,D,2"]);
    assert_eq!(
        commands::cmd_bfs(&letters, true, "B", false).unwrap(),
        "B C D A"
    );
    assert_eq!(
        commands::cmd_dfs(&letters, true, "B", false, false).unwrap(),
        "B C A D"
    );
    assert_eq!(
        commands::cmd_dfs(&letters, true, "B", true, false).unwrap(),
        "B C A D"
    );
    // Undirected, D reaches B directly.
    assert_eq!(
        commands::cmd_bfs(&letters, false, "D", false).unwrap(),
        "D B A C"
    );
}

#[test]
fn test_cmd_dijkstra_text() {
    let mut graph = spec(&["A,B,1", "B,C,8", "C,D,10", "D,E,100", "A,E,88"]);
    graph.vertices.push("F".to_string());
    let out = commands::cmd_dijkstra(&graph, true, "A", false, false).unwrap();
    // Declared vertices come before the ones introduced by edges.
    assert_eq!(out, "F: inf\nA: 0\nB: 1\nC: 9\nD: 19\nE: 88");
}

#[test]
fn test_cmd_levels_and_components() {
    let graph = spec(&["1,2", "2,3", "4,5"]);
    assert_eq!(
        commands::cmd_levels(&graph, false, "3", false).unwrap(),
        "3: 0\n2: 1\n1: 2"
    );
    assert_eq!(commands::cmd_components(&graph, false).unwrap(), "1 2 3\n4 5");
}

#[test]
fn test_cmd_info() {
    let graph = spec(&["A,B,1.5", "B,A,2"]);
    let out = commands::cmd_info(&graph, true, false).unwrap();
    assert!(out.contains("Kind: directed"));
    assert!(out.contains("Vertices: 2"));
    assert!(out.contains("Edges: 2"));
    assert!(out.contains("A -> B (1.5)"));

    // Undirected: the second edge overwrites the first.
    let out = commands::cmd_info(&graph, false, false).unwrap();
    assert!(out.contains("Edges: 1"));
    assert!(out.contains("A -- B (2)"));
}

#[test]
fn test_cmd_topo_cycle() {
    let graph = spec(&["A,B", "B,C", "C,A"]);
    assert_eq!(
        commands::cmd_topo(&graph, false, false),
        Err(GraphError::CyclicGraph("A".to_string()))
    );
    assert_eq!(commands::cmd_topo(&graph, true, false).unwrap(), "A B C");
}

// ==================== CLI End-to-End ====================

#[test]
fn test_cli_bfs_directed() {
    let mut args = vec!["bfs", "--directed"];
    args.extend(LETTER_EDGES);
    args.push("B");
    let output = run_edgewise(&args);
    assert_success(&output);
    assert_eq!(stdout(&output), "B C D A");
}

#[test]
fn test_cli_dijkstra_json() {
    let output = run_edgewise(&[
        "--format", "json", "dijkstra", "--directed", "--vertex", "F", "--edge", "A,B,1",
        "--edge", "B,C,8", "--edge", "C,D,10", "--edge", "D,E,100", "--edge", "A,E,88", "A",
    ]);
    assert_success(&output);

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["source"], "A");
    assert_eq!(value["distances"]["E"], 88.0);
    assert_eq!(value["distances"]["A"], 0.0);
    assert!(value["distances"]["F"].is_null());
}

#[test]
fn test_cli_topo_json() {
    let output = run_edgewise(&[
        "--format", "json", "topo", "--edge", "B,A", "--edge", "D,C", "--edge", "D,B",
        "--edge", "A,F", "--edge", "E,C",
    ]);
    assert_success(&output);

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let order: Vec<&str> = value["order"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    let pos = |v: &str| order.iter().position(|o| *o == v).unwrap();
    assert!(pos("D") < pos("B"));
    assert!(pos("D") < pos("C"));
    assert!(pos("B") < pos("A"));
    assert!(pos("A") < pos("F"));
    assert!(pos("E") < pos("C"));
}

#[test]
fn test_cli_exit_codes() {
    // Unknown start vertex.
    let output = run_edgewise(&["bfs", "--edge", "A,B", "Z"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Vertex Z not found"));

    // Malformed edge.
    let output = run_edgewise(&["dfs", "--edge", "A", "A"]);
    assert_eq!(output.status.code(), Some(3));

    // Cycle.
    let output = run_edgewise(&["topo", "--edge", "A,B", "--edge", "B,A"]);
    assert_eq!(output.status.code(), Some(5));

    // Negative weight.
    let output = run_edgewise(&["dijkstra", "--directed", "--edge", "A,B,-2", "A"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_cli_components() {
    let output = run_edgewise(&[
        "components", "--vertex", "solo", "--edge", "a,b", "--edge", "c,b",
    ]);
    assert_success(&output);
    assert_eq!(stdout(&output), "solo\na b c");
}
