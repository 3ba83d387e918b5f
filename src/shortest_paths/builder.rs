use std::hash::Hash;

use crate::{graph::Graph, weight::Weight};

use super::{solver::dijkstra, Error, QueueKind, ShortestPaths};

/// Configuration of a [`ShortestPaths`] run.
///
/// Created by [`ShortestPaths::on`].
pub struct ShortestPathsBuilder<'a, V, W> {
    graph: &'a Graph<V, W>,
    queue: QueueKind,
}

impl<V, W> ShortestPaths<V, W> {
    pub fn on(graph: &Graph<V, W>) -> ShortestPathsBuilder<'_, V, W> {
        ShortestPathsBuilder {
            graph,
            queue: QueueKind::default(),
        }
    }
}

impl<'a, V, W> ShortestPathsBuilder<'a, V, W> {
    pub fn using(self, queue: QueueKind) -> Self {
        Self { queue, ..self }
    }

    /// Uses [`QueueKind::Lazy`]. This is the default.
    pub fn lazy(self) -> Self {
        self.using(QueueKind::Lazy)
    }

    /// Uses [`QueueKind::DecreaseKey`].
    pub fn decrease_key(self) -> Self {
        self.using(QueueKind::DecreaseKey)
    }

    /// Computes the shortest paths from `source` to all vertices of the graph.
    ///
    /// Fails with [`Error::UnknownSource`] before doing any work if the source
    /// is not registered in the graph, and with [`Error::NegativeWeight`] as
    /// soon as an edge with negative weight leaves a settled vertex.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if a path sum overflows the weight type.
    pub fn run(self, source: &V) -> Result<ShortestPaths<V, W>, Error<V>>
    where
        V: Eq + Hash + Clone,
        W: Weight,
    {
        dijkstra(self.graph, source, self.queue)
    }
}
