//! Dijkstra's algorithm for single-source shortest paths.
//!
//! Each search owns its bookkeeping: a state table indexed by the graph's
//! stable vertex IDs holding the best known cost, the finalized flag and the
//! predecessor link. The [`Graph`] itself is only borrowed, so any number of
//! searches may run against the same graph at once.
//!
//! The frontier is a binary heap of `(cost, vertex)` entries. A cheaper route
//! to a vertex pushes a fresh entry instead of updating the old one; stale
//! entries are dropped when popped because their vertex is already finalized.
//!
//! # Example
//!
//! ```
//! use wayfind_core::{Edge, Graph, Vertex};
//!
//! let graph = Graph::new(
//!     ["A", "B", "C"].map(Vertex::new),
//!     [Edge::new("A", "B", 2), Edge::new("B", "C", 3), Edge::new("A", "C", 9)],
//! )
//! .unwrap();
//!
//! let path = graph
//!     .shortest_path(&Vertex::new("A"), &Vertex::new("C"))
//!     .unwrap()
//!     .expect("C is reachable");
//! assert_eq!(path.cost(), 5);
//! assert_eq!(path.hops(), 2);
//! ```

use petgraph::graph::NodeIndex;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::Result;
use crate::graph::Graph;
use crate::types::{Path, Vertex, Weight};

/// Cost of a vertex the search has not reached.
const INFINITY: Weight = Weight::MAX;

/// Per-vertex bookkeeping for one search.
#[derive(Debug, Clone, Copy)]
struct VertexState {
    cost: Weight,
    finalized: bool,
    predecessor: Option<NodeIndex>,
}

impl Default for VertexState {
    fn default() -> Self {
        Self {
            cost: INFINITY,
            finalized: false,
            predecessor: None,
        }
    }
}

/// Entry in the priority queue.
///
/// Ordered by cost (lower cost = higher priority), then by vertex ID so that
/// ties pop in a deterministic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    cost: Weight,
    vertex: NodeIndex,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Outcome of a full search from one start vertex.
///
/// Holds the final cost and predecessor of every vertex, so paths to any
/// number of targets can be read off without searching again.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g> {
    graph: &'g Graph,
    start: NodeIndex,
    states: Vec<VertexState>,
}

impl<'g> ShortestPaths<'g> {
    fn run(graph: &'g Graph, start: NodeIndex) -> Self {
        let mut states = vec![VertexState::default(); graph.vertex_count()];
        states[start.index()].cost = 0;

        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry {
            cost: 0,
            vertex: start,
        });

        let mut relaxations = 0usize;

        while let Some(QueueEntry { vertex: current, .. }) = queue.pop() {
            if states[current.index()].finalized {
                continue;
            }
            states[current.index()].finalized = true;
            let current_cost = states[current.index()].cost;

            for (neighbor, weight) in graph.outgoing(current) {
                let state = &mut states[neighbor.index()];
                if state.finalized {
                    continue;
                }

                let candidate = current_cost.saturating_add(weight);
                if candidate < state.cost {
                    state.cost = candidate;
                    state.predecessor = Some(current);
                    queue.push(QueueEntry {
                        cost: candidate,
                        vertex: neighbor,
                    });
                    relaxations += 1;

                    tracing::trace!(
                        from = %graph.vertex_at(current),
                        to = %graph.vertex_at(neighbor),
                        cost = candidate,
                        "relaxed"
                    );
                }
            }
        }

        tracing::debug!(
            start = %graph.vertex_at(start),
            relaxations,
            "shortest-path search finished"
        );

        Self {
            graph,
            start,
            states,
        }
    }

    /// The vertex the search started from.
    pub fn start(&self) -> &Vertex {
        self.graph.vertex_at(self.start)
    }

    /// Cost of the cheapest path to `target`, `None` if it is unreachable.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if
    /// `target` is not in the graph.
    pub fn cost_to(&self, target: &Vertex) -> Result<Option<Weight>> {
        let idx = self.graph.index_of(target)?;
        Ok(self.cost_at(idx))
    }

    /// Cheapest path to `target`, `None` if it is unreachable.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if
    /// `target` is not in the graph.
    pub fn path_to(&self, target: &Vertex) -> Result<Option<Path>> {
        let idx = self.graph.index_of(target)?;
        Ok(self.path_at(idx))
    }

    /// Every reachable vertex, start first, then by ascending cost.
    pub fn reachable(&self) -> Vec<&'g Vertex> {
        self.reachable_indices()
            .into_iter()
            .map(|idx| self.graph.vertex_at(idx))
            .collect()
    }

    /// Cheapest path to every reachable vertex, in [`reachable`](Self::reachable) order.
    pub fn paths(&self) -> Vec<Path> {
        self.reachable_indices()
            .into_iter()
            .filter_map(|idx| self.path_at(idx))
            .collect()
    }

    fn reachable_indices(&self) -> Vec<NodeIndex> {
        let mut reached: Vec<NodeIndex> = self
            .states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.finalized)
            .map(|(i, _)| NodeIndex::new(i))
            .collect();

        // Start has cost 0, but so may zero-weight neighbours; keep it first.
        reached.sort_by_key(|&idx| (idx != self.start, self.states[idx.index()].cost, idx));
        reached
    }

    fn cost_at(&self, idx: NodeIndex) -> Option<Weight> {
        let state = &self.states[idx.index()];
        state.finalized.then_some(state.cost)
    }

    fn path_at(&self, target: NodeIndex) -> Option<Path> {
        if target == self.start {
            return Some(Path::single(self.graph.vertex_at(target).clone()));
        }

        // Only the start is reached without a predecessor
        let state = &self.states[target.index()];
        state.predecessor?;

        let mut indices = vec![target];
        let mut current = target;
        while let Some(previous) = self.states[current.index()].predecessor {
            indices.push(previous);
            current = previous;
        }
        indices.reverse();

        let vertices = indices
            .into_iter()
            .map(|idx| self.graph.vertex_at(idx).clone())
            .collect();
        Some(Path::new(vertices, state.cost))
    }
}

impl Graph {
    /// Cheapest path from `start` to `target`, or `None` if `target` cannot
    /// be reached.
    ///
    /// A query from a vertex to itself returns that single vertex at cost 0
    /// without searching.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if
    /// either vertex is not in the graph.
    pub fn shortest_path(&self, start: &Vertex, target: &Vertex) -> Result<Option<Path>> {
        let from = self.index_of(start)?;
        let to = self.index_of(target)?;

        if from == to {
            return Ok(Some(Path::single(self.vertex_at(from).clone())));
        }

        let path = ShortestPaths::run(self, from).path_at(to);
        match &path {
            Some(p) => {
                tracing::debug!(%start, %target, cost = p.cost(), hops = p.hops(), "path found")
            }
            None => tracing::debug!(%start, %target, "no path found"),
        }
        Ok(path)
    }

    /// Run one search from `start` covering every vertex it can reach.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`](crate::GraphError::UnknownVertex) if
    /// `start` is not in the graph.
    pub fn shortest_paths_from(&self, start: &Vertex) -> Result<ShortestPaths<'_>> {
        let from = self.index_of(start)?;
        Ok(ShortestPaths::run(self, from))
    }
}
