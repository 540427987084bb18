//! Data models for graph vertices, edges and query results.
//!
//! These are plain values: a [`Vertex`] is nothing more than its label, and
//! an [`Edge`] names its endpoints by value. Search bookkeeping lives in the
//! per-query state of [`crate::dijkstra`], never on the vertices themselves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Edge weight and path cost type.
pub type Weight = i64;

/// A graph vertex, identified solely by its label.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex {
    label: String,
}

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Vertex {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

/// A directed, weighted connection between two vertices.
///
/// Two edges compare equal when they connect the same (source, destination)
/// pair, whatever their weights. Weight conflicts are a construction error in
/// [`Graph::new`](crate::Graph::new), so inside a graph the pair is a key.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Edge {
    source: Vertex,
    destination: Vertex,
    weight: Weight,
}

impl Edge {
    pub fn new(source: impl Into<Vertex>, destination: impl Into<Vertex>, weight: Weight) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            weight,
        }
    }

    pub fn source(&self) -> &Vertex {
        &self.source
    }

    pub fn destination(&self) -> &Vertex {
        &self.destination
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// True when both edges run from the same source to the same destination.
    pub fn points_same_way(&self, other: &Edge) -> bool {
        self.source == other.source && self.destination == other.destination
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.points_same_way(other)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.destination.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.destination, self.weight)
    }
}

/// Result of a shortest-path query: the vertices from start to target
/// (both inclusive) and the total cost of walking them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    vertices: Vec<Vertex>,
    cost: Weight,
}

impl Path {
    pub fn new(vertices: Vec<Vertex>, cost: Weight) -> Self {
        Self { vertices, cost }
    }

    /// Path consisting of a single vertex (start == target).
    pub fn single(vertex: Vertex) -> Self {
        Self {
            vertices: vec![vertex],
            cost: 0,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    pub fn cost(&self) -> Weight {
        self.cost
    }

    /// First vertex of the path, `None` only for a hand-built empty path.
    pub fn source(&self) -> Option<&Vertex> {
        self.vertices.first()
    }

    /// Last vertex of the path, `None` only for a hand-built empty path.
    pub fn target(&self) -> Option<&Vertex> {
        self.vertices.last()
    }

    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.vertices.iter().map(Vertex::label).collect();
        write!(f, "{} (cost {})", labels.join(" -> "), self.cost)
    }
}
