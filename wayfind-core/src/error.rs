//! Error types for wayfind-core.
//!
//! Every [`GraphError`] is an invalid-argument failure: either the inputs
//! handed to [`Graph::new`](crate::Graph::new) violate a structural rule, or a
//! query named a vertex that is not part of the graph.

use thiserror::Error;

use crate::types::Weight;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by graph construction and graph queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint is not in the supplied vertex set.
    #[error("Edge {source_label} -> {destination} references unknown vertex '{missing}'")]
    UnknownEndpoint {
        /// Label of the edge's source vertex.
        source_label: String,
        /// Label of the edge's destination vertex.
        destination: String,
        /// The endpoint label that is not a graph member.
        missing: String,
    },

    /// An edge carries a negative weight.
    #[error("Edge {source_label} -> {destination} has negative weight {weight}")]
    NegativeWeight {
        /// Label of the edge's source vertex.
        source_label: String,
        /// Label of the edge's destination vertex.
        destination: String,
        /// The rejected weight.
        weight: Weight,
    },

    /// Two edges share a (source, destination) pair but disagree on weight.
    #[error(
        "Edge {source_label} -> {destination} declared with weight {conflicting}, \
         but already has weight {existing}"
    )]
    ConflictingWeights {
        /// Label of the edge's source vertex.
        source_label: String,
        /// Label of the edge's destination vertex.
        destination: String,
        /// Weight of the edge accepted first.
        existing: Weight,
        /// Weight of the later, conflicting edge.
        conflicting: Weight,
    },

    /// A query argument is not a member of the graph.
    #[error("Vertex not found: {label}")]
    UnknownVertex {
        /// Label that was looked up.
        label: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::UnknownEndpoint {
            source_label: "A".to_string(),
            destination: "ZZ".to_string(),
            missing: "ZZ".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Edge A -> ZZ references unknown vertex 'ZZ'"
        );

        let err = GraphError::ConflictingWeights {
            source_label: "B".to_string(),
            destination: "A".to_string(),
            existing: 2,
            conflicting: 3,
        };
        assert!(err.to_string().contains("weight 3"));
        assert!(err.to_string().contains("weight 2"));

        let err = GraphError::UnknownVertex {
            label: "Q".to_string(),
        };
        assert_eq!(err.to_string(), "Vertex not found: Q");
    }
}
