//! wayfind core - weighted directed graphs and Dijkstra shortest paths.
//!
//! A [`Graph`] is built once from a vertex list and an edge list, validated,
//! and then answers adjacency, edge-cost and shortest-path queries. Queries
//! only borrow the graph, so a single graph can serve many threads.
//!
//! # Features
//!
//! - **Validated construction**: unknown endpoints, negative weights and
//!   conflicting duplicate edges are rejected up front
//! - **Dijkstra search**: binary-heap frontier, per-query state, overflow-safe
//!   relaxation
//! - **Text loader**: build a graph from a vertex file and an edge file
//!
//! # Usage
//!
//! ```
//! use wayfind_core::{Edge, Graph, Vertex, NO_EDGE};
//!
//! let graph = Graph::new(
//!     ["A", "B", "C", "D", "E", "F"].map(Vertex::new),
//!     [Edge::new("A", "B", 2), Edge::new("B", "C", 3), Edge::new("E", "F", 9)],
//! )?;
//!
//! let a = Vertex::new("A");
//! let path = graph.shortest_path(&a, &Vertex::new("C"))?.unwrap();
//! assert_eq!(path.to_string(), "A -> B -> C (cost 5)");
//!
//! assert!(graph.shortest_path(&a, &Vertex::new("F"))?.is_none());
//! assert_eq!(graph.edge_cost(&Vertex::new("B"), &a)?, NO_EDGE);
//! # Ok::<(), wayfind_core::GraphError>(())
//! ```

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod loader;
pub mod types;

pub use dijkstra::ShortestPaths;
pub use error::{GraphError, Result};
pub use graph::{Graph, NO_EDGE};
pub use loader::{load_graph, LoadError};
pub use types::{Edge, Path, Vertex, Weight};
