use thiserror::Error;

/// The error returned by [`Graph`](crate::Graph) operations that reference
/// vertices or edges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<V> {
    /// The vertex was never registered with
    /// [`add_vertex`](crate::Graph::add_vertex).
    #[error("vertex {0:?} does not exist")]
    UnknownVertex(V),

    /// There is no edge between the two vertices in this direction.
    #[error("edge from {0:?} to {1:?} does not exist")]
    MissingEdge(V, V),
}

impl<V> GraphError<V> {
    /// Converts the vertex tokens carried by the error.
    pub fn map_vertex<U, F>(self, mut f: F) -> GraphError<U>
    where
        F: FnMut(V) -> U,
    {
        match self {
            GraphError::UnknownVertex(v) => GraphError::UnknownVertex(f(v)),
            GraphError::MissingEdge(u, v) => GraphError::MissingEdge(f(u), f(v)),
        }
    }
}
