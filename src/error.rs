/*!
# Errors

All failures of this crate are caller-side contract violations and are reported
immediately via [`GraphError`]. Algorithms that find "nothing" (no path, no cycle, not
bipartite) do **not** fail; they return `None` instead.
*/

use crate::{Node, NumNodes};

/// Error type of all fallible graph operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The provided grid is not square.
    #[error("Invalid graph: the matrix is not square (row {row} has {len} entries, expected {expected})")]
    InvalidShape {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Two graphs of different sizes were combined.
    #[error("Graphs must have the same dimensions (got {left} and {right})")]
    DimensionMismatch { left: NumNodes, right: NumNodes },

    /// Scalar division by zero.
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    /// A vertex passed to an algorithm does not exist.
    #[error("Vertex {node} is out of range for a graph with {size} vertices")]
    VertexOutOfRange { node: Node, size: NumNodes },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

impl From<GraphError> for std::io::Error {
    fn from(value: GraphError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, value)
    }
}
