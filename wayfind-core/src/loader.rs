//! Plain-text graph input.
//!
//! A graph is described by two files:
//!
//! ```text
//! # vertex.txt: one label per line
//! A
//! B
//! C
//!
//! # edge.txt: "source destination weight" per line
//! A B 2
//! B C 3
//! ```
//!
//! Blank lines and lines starting with `#` are skipped in both files.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::GraphError;
use crate::graph::Graph;
use crate::types::{Edge, Vertex, Weight};

/// Errors that can occur while loading a graph from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    /// An input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of an input file is malformed.
    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        message: String,
    },

    /// The parsed vertices and edges do not form a valid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Syntax error in a single line, before a file name is attached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct LineError {
    pub line: usize,
    pub message: String,
}

impl LineError {
    fn at(self, path: &Path) -> LoadError {
        LoadError::Parse {
            path: path.to_path_buf(),
            line: self.line,
            message: self.message,
        }
    }
}

/// Meaningful lines with their 1-based line numbers.
fn content_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Parse a vertex list: one label per line.
///
/// Labels may not contain whitespace, since edge lines are split on it.
pub fn parse_vertices(input: &str) -> Result<Vec<Vertex>, LineError> {
    content_lines(input)
        .map(|(line_no, label)| {
            if label.contains(char::is_whitespace) {
                return Err(LineError {
                    line: line_no,
                    message: format!("vertex label '{}' contains whitespace", label),
                });
            }
            Ok(Vertex::new(label))
        })
        .collect()
}

/// Parse an edge list: `source destination weight` per line.
///
/// Weights may be negative here; rejecting them is the graph's job.
pub fn parse_edges(input: &str) -> Result<Vec<Edge>, LineError> {
    content_lines(input)
        .map(|(line_no, line)| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [source, destination, weight] = fields[..] else {
                return Err(LineError {
                    line: line_no,
                    message: format!(
                        "expected 'source destination weight', found {} field(s)",
                        fields.len()
                    ),
                });
            };

            let weight: Weight = weight.parse().map_err(|_| LineError {
                line: line_no,
                message: format!("'{}' is not a valid integer weight", weight),
            })?;

            Ok(Edge::new(source, destination, weight))
        })
        .collect()
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read both input files and build a [`Graph`] from them.
pub fn load_graph(vertex_path: &Path, edge_path: &Path) -> Result<Graph, LoadError> {
    let vertices = parse_vertices(&read(vertex_path)?).map_err(|e| e.at(vertex_path))?;
    let edges = parse_edges(&read(edge_path)?).map_err(|e| e.at(edge_path))?;

    tracing::debug!(
        vertex_file = %vertex_path.display(),
        edge_file = %edge_path.display(),
        vertices = vertices.len(),
        edges = edges.len(),
        "loaded graph input"
    );

    Ok(Graph::new(vertices, edges)?)
}
