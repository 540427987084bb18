//! Command implementations for wayfind CLI
//!
//! Each command module provides `run` functions that load the graph, execute
//! the query and hand a result to [`crate::output::Output`].

pub mod export;
pub mod inspect;
pub mod path;

use anyhow::{Context, Result};
use std::path::Path;
use wayfind_core::{Graph, Vertex};

/// Load the graph from the vertex and edge files.
pub fn load(vertex_file: &Path, edge_file: &Path) -> Result<Graph> {
    let graph = wayfind_core::load_graph(vertex_file, edge_file).with_context(|| {
        format!(
            "Failed to load graph from {} and {}",
            vertex_file.display(),
            edge_file.display()
        )
    })?;
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "Graph loaded"
    );
    Ok(graph)
}

/// Look up a vertex by label, failing with a readable message if absent.
pub fn resolve<'g>(graph: &'g Graph, label: &str) -> Result<&'g Vertex> {
    graph
        .vertex(label)
        .ok_or_else(|| anyhow::anyhow!("Vertex not found: {}", label))
}
