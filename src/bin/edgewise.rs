//! CLI entry point for the `edgewise` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand};

use edgewise::cli::commands::{self, GraphSpec};
use edgewise::GraphError;

#[derive(Parser)]
#[command(
    name = "edgewise",
    about = "edgewise CLI — run graph algorithms over edges given on the command line"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging (otherwise RUST_LOG applies)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Graph description shared by every subcommand.
#[derive(Args)]
struct GraphArgs {
    /// Declare a vertex (repeatable); edge endpoints are declared implicitly
    #[arg(long = "vertex")]
    vertices: Vec<String>,

    /// Edge as U,V or U,V,WEIGHT (repeatable)
    #[arg(long = "edge")]
    edges: Vec<String>,
}

impl GraphArgs {
    fn spec(self) -> GraphSpec {
        GraphSpec {
            vertices: self.vertices,
            edges: self.edges,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Breadth-first visitation order
    Bfs {
        /// Starting vertex
        start: String,
        /// Treat edges as one-way
        #[arg(long)]
        directed: bool,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Depth-first visitation order
    Dfs {
        /// Starting vertex
        start: String,
        /// Treat edges as one-way
        #[arg(long)]
        directed: bool,
        /// Use native recursion instead of an explicit stack
        #[arg(long)]
        recursive: bool,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Hop count to every reachable vertex
    Levels {
        /// Starting vertex
        start: String,
        /// Treat edges as one-way
        #[arg(long)]
        directed: bool,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Weighted shortest distances (Dijkstra)
    Dijkstra {
        /// Source vertex
        source: String,
        /// Treat edges as one-way
        #[arg(long)]
        directed: bool,
        /// Keep selecting unreachable vertices until the open set is empty
        #[arg(long)]
        exhaustive: bool,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Topological order (edges are always directed)
    Topo {
        /// Return an order even if the graph has a cycle
        #[arg(long)]
        allow_cycles: bool,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Connected components (edges are always undirected)
    Components {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Summarize the graph
    Info {
        /// Treat edges as one-way
        #[arg(long)]
        directed: bool,
        #[command(flatten)]
        graph: GraphArgs,
    },
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Bfs {
            start,
            directed,
            graph,
        } => commands::cmd_bfs(&graph.spec(), directed, &start, json),
        Commands::Dfs {
            start,
            directed,
            recursive,
            graph,
        } => commands::cmd_dfs(&graph.spec(), directed, &start, recursive, json),
        Commands::Levels {
            start,
            directed,
            graph,
        } => commands::cmd_levels(&graph.spec(), directed, &start, json),
        Commands::Dijkstra {
            source,
            directed,
            exhaustive,
            graph,
        } => commands::cmd_dijkstra(&graph.spec(), directed, &source, exhaustive, json),
        Commands::Topo {
            allow_cycles,
            graph,
        } => commands::cmd_topo(&graph.spec(), allow_cycles, json),
        Commands::Components { graph } => commands::cmd_components(&graph.spec(), json),
        Commands::Info { directed, graph } => commands::cmd_info(&graph.spec(), directed, json),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                GraphError::InvalidEdgeSpec(_) => 3,
                GraphError::VertexNotFound(_) => 4,
                GraphError::CyclicGraph(_) | GraphError::NegativeWeight { .. } => 5,
            };
            process::exit(code);
        }
    }
}
