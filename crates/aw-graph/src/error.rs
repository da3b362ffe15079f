//! Graph-specific error types.

use aw_core::AwError;
use thiserror::Error;

/// Connectivity graph construction and mutation errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The graph was constructed from an empty vertex or edge sequence.
    #[error("Cannot build a graph from empty {what}")]
    InvalidInput { what: &'static str },

    /// An edge operation referenced a vertex that was never registered.
    #[error("Edge {end} vertex is not part of the graph")]
    UnknownVertex { end: &'static str },
}

pub type GraphResult<T> = Result<T, GraphError>;

impl From<GraphError> for AwError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::InvalidInput { .. } => AwError::InvalidInput {
                what: err.to_string(),
            },
            GraphError::UnknownVertex { .. } => AwError::UnknownVertex {
                what: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_shared_error() {
        let err: AwError = GraphError::InvalidInput { what: "vertices" }.into();
        assert!(matches!(err, AwError::InvalidInput { .. }));

        let err: AwError = GraphError::UnknownVertex { end: "source" }.into();
        match err {
            AwError::UnknownVertex { what } => assert!(what.contains("source")),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
