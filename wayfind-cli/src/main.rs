//! wayfind CLI - cheapest routes through weighted directed graphs
//!
//! Reads a vertex file and an edge file, then answers shortest-path and
//! inspection queries against the loaded graph.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::*;
use config::WayfindConfig;
use output::OutputFormat;

/// Cheapest routes through weighted directed graphs.
#[derive(Parser)]
#[command(name = "wayfind")]
#[command(author, version)]
#[command(about = "Cheapest routes through weighted directed graphs")]
#[command(
    long_about = "wayfind loads a graph from a vertex file (one label per line) and an\nedge file (`source destination weight` per line) and finds the cheapest\npath between vertices using Dijkstra's algorithm."
)]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  wayfind path A C          Cheapest path from A to C
  wayfind path A            Cheapest path from A to every reachable vertex
  wayfind cost A B          Weight of the direct edge A -> B (-1 if none)
  wayfind export -o g.dot   Write the graph as Graphviz DOT")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Vertex file, one label per line [default: vertex.txt]
    #[arg(long, global = true, env = "WAYFIND_VERTICES")]
    vertices: Option<PathBuf>,

    /// Edge file, `source destination weight` per line [default: edge.txt]
    #[arg(long, global = true, env = "WAYFIND_EDGES")]
    edges: Option<PathBuf>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Cheapest path between two vertices
    ///
    /// Without a target, lists the cheapest path to every reachable vertex.
    Path {
        /// Start vertex
        from: String,

        /// Target vertex
        to: Option<String>,
    },

    /// List all vertices with their out-degree
    Vertices,

    /// List all edges
    Edges,

    /// Vertices reachable over one outgoing edge
    Adjacent {
        /// Vertex to inspect
        vertex: String,
    },

    /// Weight of the direct edge between two vertices (-1 if none)
    Cost {
        /// Source vertex
        from: String,

        /// Destination vertex
        to: String,
    },

    /// Export the graph for visualization
    Export {
        /// Export format
        #[arg(short = 't', long = "type", value_enum, default_value_t)]
        export_format: export::ExportFormat,

        /// Output file (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Output format named in the config file, if it is a known one.
fn config_format(settings: &WayfindConfig) -> Option<OutputFormat> {
    let name = settings.default_format()?;
    match name.parse() {
        Ok(format) => Some(format),
        Err(e) => {
            tracing::warn!("Ignoring [output] format in {}: {}", config::CONFIG_FILE, e);
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .wayfindrc.toml
    let config = WayfindConfig::load(std::path::Path::new("."));

    // Resolve output format: CLI flag > config default > Table
    let format = cli
        .format
        .unwrap_or_else(|| config_format(&config).unwrap_or_default());

    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        println!();
        return Ok(());
    };

    let vertex_file = config.vertex_file(cli.vertices.as_deref());
    let edge_file = config.edge_file(cli.edges.as_deref());
    let graph = load(&vertex_file, &edge_file)?;

    match command {
        Commands::Path { from, to } => path::run(&graph, &from, to.as_deref(), format),
        Commands::Vertices => inspect::run_vertices(&graph, format),
        Commands::Edges => inspect::run_edges(&graph, format),
        Commands::Adjacent { vertex } => inspect::run_adjacent(&graph, &vertex, format),
        Commands::Cost { from, to } => inspect::run_cost(&graph, &from, &to, format),
        Commands::Export {
            export_format,
            output,
        } => export::run(&graph, export_format, output.as_deref(), format),
    }
}
