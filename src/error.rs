use std::fmt::Debug;

use thiserror::Error;

/// Errors returned by fallible [`Graph`](crate::Graph) operations.
///
/// All errors are synchronous and surfaced before any state is mutated, so a
/// failed operation never leaves the graph partially updated.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError<T: Debug> {
    /// The operation referenced a vertex identifier that is not in the graph.
    #[error("vertex not found: {0:?}")]
    NotFound(T),

    /// A vertex with this identifier is already present.
    #[error("duplicate vertex: {0:?}")]
    DuplicateVertex(T),

    /// An undirected vertex insertion listed a neighbor that could not be
    /// resolved.
    #[error("adjacent vertex not found: {0:?}")]
    AdjacentVertexNotFound(T),
}

/// Result alias for graph operations over identifier type `T`.
pub type Result<V, T> = std::result::Result<V, GraphError<T>>;
