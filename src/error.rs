//! Error types for graph construction and algorithm entry points.

use thiserror::Error;

/// Errors reported by the graph store and the algorithms built on it.
///
/// Every variant is recoverable: the graph that produced the error is left
/// unchanged and stays usable. "No path exists" is not an error; shortest
/// path results report it as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex index (edge endpoint or algorithm start) outside `0..vertex_count`.
    #[error("Invalid vertex index {index}: graph has {vertex_count} vertices")]
    InvalidVertexIndex { index: i64, vertex_count: usize },

    /// The operation is not defined for this kind of graph.
    #[error("Unsupported operation {operation}: {reason}")]
    UnsupportedOperation {
        operation: &'static str,
        reason: &'static str,
    },

    /// A weight of zero means "no edge" in the matrix and cannot be stored.
    #[error("Zero weight for edge {from} -> {to}: zero marks an absent edge")]
    ZeroWeight { from: usize, to: usize },
}

impl GraphError {
    pub(crate) fn invalid_vertex(index: usize, vertex_count: usize) -> Self {
        GraphError::InvalidVertexIndex {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            vertex_count,
        }
    }
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_vertex_message() {
        let err = GraphError::InvalidVertexIndex {
            index: -1,
            vertex_count: 8,
        };
        assert_eq!(
            err.to_string(),
            "Invalid vertex index -1: graph has 8 vertices"
        );
    }

    #[test]
    fn test_invalid_vertex_from_usize() {
        let err = GraphError::invalid_vertex(9, 3);
        assert_eq!(
            err,
            GraphError::InvalidVertexIndex {
                index: 9,
                vertex_count: 3
            }
        );
    }
}
