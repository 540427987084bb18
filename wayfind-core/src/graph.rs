//! Weighted directed graph backed by petgraph.
//!
//! A [`Graph`] is built once from a vertex list and an edge list and never
//! changes afterwards. Vertices live in a petgraph `DiGraph` whose
//! `NodeIndex` doubles as the stable integer ID used by the shortest-path
//! search; a label map resolves query arguments to those IDs.
//!
//! # Construction rules
//!
//! - Vertices are deduplicated by label, keeping first-occurrence order.
//! - Every edge endpoint must be one of the supplied vertices.
//! - Weights must be non-negative.
//! - A repeated (source, destination) pair with the same weight is absorbed;
//!   with a different weight it is rejected.

use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::types::{Edge, Vertex, Weight};

/// Returned by [`Graph::edge_cost`] when there is no edge between the vertices.
pub const NO_EDGE: Weight = -1;

/// Immutable directed graph with non-negative integer edge weights.
#[derive(Debug, Clone)]
pub struct Graph {
    graph: DiGraph<Vertex, Weight>,
    node_map: HashMap<String, NodeIndex>,
    /// Outgoing edges per vertex, in the order they were accepted.
    adjacency: Vec<Vec<EdgeIndex>>,
}

impl Graph {
    /// Build a graph from a vertex collection and an edge collection.
    ///
    /// Edges are validated one at a time in input order and the first
    /// offending edge is reported.
    ///
    /// `Weight::MAX` is accepted as an edge weight but is also the search's
    /// "unreached" cost, so an edge of that weight is reported by
    /// [`edge_cost`](Self::edge_cost) and never traversed by
    /// [`shortest_path`](Self::shortest_path).
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownEndpoint`] if an edge names a vertex that is not
    ///   in `vertices`
    /// - [`GraphError::NegativeWeight`] if an edge weight is below zero
    /// - [`GraphError::ConflictingWeights`] if the same directed pair appears
    ///   with two different weights
    ///
    /// # Example
    ///
    /// ```
    /// use wayfind_core::{Edge, Graph, Vertex};
    ///
    /// let graph = Graph::new(
    ///     ["A", "B", "C"].map(Vertex::new),
    ///     [Edge::new("A", "B", 2), Edge::new("B", "C", 3)],
    /// )
    /// .unwrap();
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn new<V, E>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = Vertex>,
        E: IntoIterator<Item = Edge>,
    {
        let mut graph = DiGraph::new();
        let mut node_map = HashMap::new();

        // Load vertices, first label wins
        for vertex in vertices {
            if node_map.contains_key(vertex.label()) {
                continue;
            }
            let label = vertex.label().to_string();
            let idx = graph.add_node(vertex);
            node_map.insert(label, idx);
        }

        let mut adjacency = vec![Vec::new(); graph.node_count()];
        let mut absorbed = 0usize;

        for edge in edges {
            let source = endpoint_index(&node_map, &edge, edge.source())?;
            let destination = endpoint_index(&node_map, &edge, edge.destination())?;

            if edge.weight() < 0 {
                return Err(GraphError::NegativeWeight {
                    source_label: edge.source().label().to_string(),
                    destination: edge.destination().label().to_string(),
                    weight: edge.weight(),
                });
            }

            match graph.find_edge(source, destination) {
                Some(existing) if graph[existing] != edge.weight() => {
                    return Err(GraphError::ConflictingWeights {
                        source_label: edge.source().label().to_string(),
                        destination: edge.destination().label().to_string(),
                        existing: graph[existing],
                        conflicting: edge.weight(),
                    });
                }
                Some(_) => absorbed += 1,
                None => {
                    let idx = graph.add_edge(source, destination, edge.weight());
                    adjacency[source.index()].push(idx);
                }
            }
        }

        tracing::debug!(
            vertices = graph.node_count(),
            edges = graph.edge_count(),
            duplicate_edges = absorbed,
            "graph constructed"
        );

        Ok(Self {
            graph,
            node_map,
            adjacency,
        })
    }

    /// Snapshot of the vertices, in first-occurrence order.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.graph.node_weights().cloned().collect()
    }

    /// Snapshot of the deduplicated edges, in construction order.
    pub fn edges(&self) -> Vec<Edge> {
        self.graph
            .edge_references()
            .map(|e| {
                Edge::new(
                    self.graph[e.source()].clone(),
                    self.graph[e.target()].clone(),
                    *e.weight(),
                )
            })
            .collect()
    }

    /// Look up the graph's vertex with the given label.
    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.node_map.get(label).map(|&idx| &self.graph[idx])
    }

    /// Check if a vertex is a member of the graph.
    pub fn contains(&self, vertex: &Vertex) -> bool {
        self.node_map.contains_key(vertex.label())
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Destinations of every outgoing edge of `vertex`, in edge order.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if `vertex` is not in the graph.
    pub fn adjacent_vertices(&self, vertex: &Vertex) -> Result<Vec<Vertex>> {
        let idx = self.index_of(vertex)?;
        Ok(self
            .outgoing(idx)
            .map(|(target, _)| self.graph[target].clone())
            .collect())
    }

    /// Weight of the edge `a -> b`, or [`NO_EDGE`] if there is none.
    ///
    /// "No edge" is a value rather than an error; only non-member arguments
    /// fail.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] if either vertex is not in the graph.
    pub fn edge_cost(&self, a: &Vertex, b: &Vertex) -> Result<Weight> {
        let from = self.index_of(a)?;
        let to = self.index_of(b)?;

        Ok(self
            .outgoing(from)
            .find(|&(target, _)| target == to)
            .map(|(_, weight)| weight)
            .unwrap_or(NO_EDGE))
    }

    /// Render the graph in Graphviz DOT format, labelling edges with weights.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[]))
    }

    /// Resolve a vertex to its stable index.
    pub(crate) fn index_of(&self, vertex: &Vertex) -> Result<NodeIndex> {
        self.node_map
            .get(vertex.label())
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex {
                label: vertex.label().to_string(),
            })
    }

    pub(crate) fn vertex_at(&self, idx: NodeIndex) -> &Vertex {
        &self.graph[idx]
    }

    /// Outgoing (target, weight) pairs of a vertex, in edge order.
    pub(crate) fn outgoing(
        &self,
        idx: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.adjacency[idx.index()].iter().filter_map(move |&e| {
            self.graph
                .edge_endpoints(e)
                .map(|(_, target)| (target, self.graph[e]))
        })
    }
}

/// Resolve one endpoint of an edge under construction.
fn endpoint_index(
    node_map: &HashMap<String, NodeIndex>,
    edge: &Edge,
    endpoint: &Vertex,
) -> Result<NodeIndex> {
    node_map
        .get(endpoint.label())
        .copied()
        .ok_or_else(|| GraphError::UnknownEndpoint {
            source_label: edge.source().label().to_string(),
            destination: edge.destination().label().to_string(),
            missing: endpoint.label().to_string(),
        })
}
