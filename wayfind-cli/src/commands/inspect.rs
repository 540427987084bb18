//! Inspection commands - vertices, edges, neighbours and direct edge costs

use crate::output::{
    Alignment, Column, CsvOutput, Output, OutputConfig, OutputFormat, TableDisplay, TableOutput,
};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use wayfind_core::{Graph, NO_EDGE};

use super::resolve;

// ============================================================================
// Vertices
// ============================================================================

#[derive(Debug, Serialize)]
pub struct VertexRow {
    pub vertex: String,
    pub out_degree: usize,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct VerticesResult {
    pub vertices: Vec<VertexRow>,
}

impl VerticesResult {
    pub fn from_graph(graph: &Graph) -> Result<Self> {
        let vertices = graph
            .vertices()
            .into_iter()
            .map(|v| -> Result<VertexRow> {
                let out_degree = graph.adjacent_vertices(&v)?.len();
                Ok(VertexRow {
                    vertex: v.label().to_string(),
                    out_degree,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { vertices })
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("Vertex", "vertex"),
            Column::new("Out", "out_degree").with_alignment(Alignment::Right),
        ]
    }
}

impl TableDisplay for VerticesResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        format!(
            "{} ({})\n{}",
            "Vertices".bold(),
            self.vertices.len(),
            TableOutput::format_with_columns(&self.vertices, &Self::columns(), config)
        )
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::format_with_columns(&self.vertices, &Self::columns())
    }
}

// ============================================================================
// Edges
// ============================================================================

#[derive(Debug, Serialize)]
pub struct EdgeRow {
    pub source: String,
    pub destination: String,
    pub weight: i64,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct EdgesResult {
    pub edges: Vec<EdgeRow>,
}

impl EdgesResult {
    pub fn from_graph(graph: &Graph) -> Self {
        let edges = graph
            .edges()
            .into_iter()
            .map(|e| EdgeRow {
                source: e.source().label().to_string(),
                destination: e.destination().label().to_string(),
                weight: e.weight(),
            })
            .collect();
        Self { edges }
    }

    fn columns() -> Vec<Column> {
        vec![
            Column::new("Source", "source"),
            Column::new("Destination", "destination"),
            Column::new("Weight", "weight").with_alignment(Alignment::Right),
        ]
    }
}

impl TableDisplay for EdgesResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        format!(
            "{} ({})\n{}",
            "Edges".bold(),
            self.edges.len(),
            TableOutput::format_with_columns(&self.edges, &Self::columns(), config)
        )
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::format_with_columns(&self.edges, &Self::columns())
    }
}

// ============================================================================
// Adjacent
// ============================================================================

#[derive(Debug, Serialize)]
pub struct Neighbour {
    pub vertex: String,
    pub weight: i64,
}

#[derive(Debug, Serialize)]
pub struct AdjacentResult {
    pub vertex: String,
    pub adjacent: Vec<Neighbour>,
}

impl AdjacentResult {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Vertex", "vertex"),
            Column::new("Weight", "weight").with_alignment(Alignment::Right),
        ]
    }
}

impl TableDisplay for AdjacentResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        format!(
            "{} {} ({})\n{}",
            "Adjacent to".bold(),
            self.vertex.cyan(),
            self.adjacent.len(),
            TableOutput::format_with_columns(&self.adjacent, &Self::columns(), config)
        )
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::format_with_columns(&self.adjacent, &Self::columns())
    }
}

// ============================================================================
// Cost
// ============================================================================

/// Weight of the direct edge between two vertices, `-1` if there is none
#[derive(Debug, Serialize)]
pub struct CostResult {
    pub from: String,
    pub to: String,
    pub cost: i64,
}

impl TableDisplay for CostResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        let cost = if self.cost == NO_EDGE {
            format!("{} (no direct edge)", self.cost)
        } else {
            self.cost.to_string()
        };
        let pairs = [
            ("From", self.from.clone()),
            ("To", self.to.clone()),
            ("Cost", cost),
        ];
        TableOutput::format_key_value(&pairs, config)
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        let columns = [
            Column::new("from", "from"),
            Column::new("to", "to"),
            Column::new("cost", "cost"),
        ];
        CsvOutput::format_with_columns(std::slice::from_ref(self), &columns)
    }
}

// ============================================================================
// Commands
// ============================================================================

pub fn run_vertices(graph: &Graph, format: OutputFormat) -> Result<()> {
    Output::new(VerticesResult::from_graph(graph)?, format).render()
}

pub fn run_edges(graph: &Graph, format: OutputFormat) -> Result<()> {
    Output::new(EdgesResult::from_graph(graph), format).render()
}

pub fn run_adjacent(graph: &Graph, label: &str, format: OutputFormat) -> Result<()> {
    let vertex = resolve(graph, label)?;
    let adjacent = graph
        .adjacent_vertices(vertex)?
        .into_iter()
        .map(|next| -> Result<Neighbour> {
            let weight = graph.edge_cost(vertex, &next)?;
            Ok(Neighbour {
                vertex: next.label().to_string(),
                weight,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let result = AdjacentResult {
        vertex: label.to_string(),
        adjacent,
    };
    Output::new(result, format).render()
}

pub fn run_cost(graph: &Graph, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let a = resolve(graph, from)?;
    let b = resolve(graph, to)?;
    let result = CostResult {
        from: from.to_string(),
        to: to.to_string(),
        cost: graph.edge_cost(a, b)?,
    };
    Output::new(result, format).render()
}
