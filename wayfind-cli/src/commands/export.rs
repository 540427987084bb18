//! Export command - render the graph for external tools
//!
//! Supported formats:
//! - dot: Graphviz DOT
//! - mermaid: Mermaid flowchart syntax

use crate::output::{Output, OutputConfig, OutputFormat, TableDisplay};
use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use wayfind_core::Graph;

/// Export format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Dot,
    Mermaid,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Mermaid => "mermaid",
        }
    }
}

/// Export result
#[derive(Debug, Serialize)]
pub struct ExportResult {
    pub format: String,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub output_path: Option<String>,
    pub content: String,
}

impl TableDisplay for ExportResult {
    fn to_table(&self, _config: &OutputConfig) -> String {
        match &self.output_path {
            Some(path) => format!(
                "{} Exported {} vertices, {} edges to {}",
                "SUCCESS:".green().bold(),
                self.vertex_count,
                self.edge_count,
                path.cyan()
            ),
            None => self.content.trim_end().to_string(),
        }
    }

    fn to_csv(&self, config: &OutputConfig) -> String {
        self.to_table(config)
    }
}

/// Render the graph as a Mermaid flowchart.
///
/// Vertex labels are free text, so every vertex gets a generated id.
fn export_mermaid(graph: &Graph) -> String {
    let mut output = String::from("flowchart LR\n");

    let vertices = graph.vertices();
    let mut id_map: HashMap<&str, String> = HashMap::new();
    for (i, vertex) in vertices.iter().enumerate() {
        let id = format!("v{}", i);
        output.push_str(&format!(
            "    {}[\"{}\"]\n",
            id,
            vertex.label().replace('"', "#quot;")
        ));
        id_map.insert(vertex.label(), id);
    }

    for edge in graph.edges() {
        if let (Some(source), Some(target)) = (
            id_map.get(edge.source().label()),
            id_map.get(edge.destination().label()),
        ) {
            output.push_str(&format!(
                "    {} -->|{}| {}\n",
                source,
                edge.weight(),
                target
            ));
        }
    }

    output
}

/// Render the graph in the requested format.
pub fn render(graph: &Graph, format: ExportFormat) -> String {
    match format {
        ExportFormat::Dot => graph.to_dot(),
        ExportFormat::Mermaid => export_mermaid(graph),
    }
}

/// Run the export command, writing to `output_path` or printing the content.
pub fn run(
    graph: &Graph,
    export_format: ExportFormat,
    output_path: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let content = render(graph, export_format);

    if let Some(path) = output_path {
        fs::write(path, &content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), format = export_format.as_str(), "Graph exported");
    }

    let result = ExportResult {
        format: export_format.as_str().to_string(),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        output_path: output_path.map(|p| p.display().to_string()),
        content: if output_path.is_some() {
            String::new()
        } else {
            content
        },
    };

    Output::new(result, format).render()
}
