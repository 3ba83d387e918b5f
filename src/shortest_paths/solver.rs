use std::hash::Hash;

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashMap;
use tracing::{debug, debug_span, trace};

use crate::{
    graph::{Graph, VertexId},
    queue::{IndexedPriorityQueue, PriorityQueue},
    weight::{Distance, Weight},
};

use super::{Error, QueueKind, ShortestPaths};

pub fn dijkstra<V, W>(
    graph: &Graph<V, W>,
    source: &V,
    queue: QueueKind,
) -> Result<ShortestPaths<V, W>, Error<V>>
where
    V: Eq + Hash + Clone,
    W: Weight,
{
    let source_id = graph
        .vertex_id(source)
        .ok_or_else(|| Error::UnknownSource(source.clone()))?;

    let span = debug_span!(
        "dijkstra",
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        ?queue
    );
    let _enter = span.enter();

    let mut state = State::new(graph.vertex_count(), source_id);

    match queue {
        QueueKind::Lazy => state.run_lazy(graph, source_id)?,
        QueueKind::DecreaseKey => state.run_decrease_key(graph, source_id)?,
    }

    debug!(settled = state.visited.count_ones(..), "search finished");

    Ok(state.into_shortest_paths(graph, source.clone()))
}

struct State<W> {
    dist: Vec<Distance<W>>,
    pred: Vec<Option<VertexId>>,
    // All vertices of the graph are known upfront and ids are dense, so a bit
    // set is the cheapest visited set.
    visited: FixedBitSet,
}

impl<W: Weight> State<W> {
    fn new(vertex_count: usize, source: VertexId) -> Self {
        let mut dist = vec![Distance::Infinite; vertex_count];
        dist[source.as_usize()] = Distance::zero();

        Self {
            dist,
            pred: vec![None; vertex_count],
            visited: FixedBitSet::with_capacity(vertex_count),
        }
    }

    fn run_lazy<V>(&mut self, graph: &Graph<V, W>, source: VertexId) -> Result<(), Error<V>> {
        let mut queue = PriorityQueue::with_capacity(graph.vertex_count());
        queue.enqueue(source, W::zero());

        while let Some((vertex, vertex_dist)) = queue.dequeue_entry() {
            // A vertex is enqueued again every time its distance improves, so
            // the outdated entries come out after the vertex was settled.
            if self.visited.put(vertex.as_usize()) {
                trace!(?vertex, "stale entry skipped");
                continue;
            }

            self.relax(graph, vertex, vertex_dist, |next, next_dist| {
                queue.enqueue(next, next_dist)
            })?;
        }

        Ok(())
    }

    fn run_decrease_key<V>(
        &mut self,
        graph: &Graph<V, W>,
        source: VertexId,
    ) -> Result<(), Error<V>> {
        let mut queue = IndexedPriorityQueue::with_capacity(graph.vertex_count());
        queue.push(source, W::zero());

        while let Some((vertex, vertex_dist)) = queue.pop() {
            self.visited.insert(vertex.as_usize());

            self.relax(graph, vertex, vertex_dist, |next, next_dist| {
                queue.push(next, next_dist);
            })?;
        }

        Ok(())
    }

    /// Settles `vertex` with `vertex_dist` and relaxes its outgoing edges,
    /// calling `update` for every neighbor whose distance improved.
    fn relax<V, F>(
        &mut self,
        graph: &Graph<V, W>,
        vertex: VertexId,
        vertex_dist: W,
        mut update: F,
    ) -> Result<(), Error<V>>
    where
        F: FnMut(VertexId, W),
    {
        trace!(?vertex, "vertex settled");

        for (next, edge_dist) in graph.out_edges(vertex) {
            // The check for unsignedness should eliminate the negativity weight
            // check, because the implementation of `is_unsigned` method is
            // always a constant boolean in practice. Edges into settled
            // vertices are checked too.
            if !W::is_unsigned() && *edge_dist < W::zero() {
                return Err(Error::NegativeWeight);
            }

            if self.visited.contains(next.as_usize()) {
                continue;
            }

            let next_dist = vertex_dist.clone() + edge_dist.clone();

            if self.dist[next.as_usize()].is_improved_by(&next_dist) {
                trace!(from = ?vertex, to = ?next, "distance improved");
                self.dist[next.as_usize()] = Distance::Finite(next_dist.clone());
                self.pred[next.as_usize()] = Some(vertex);
                update(next, next_dist);
            }
        }

        Ok(())
    }

    fn into_shortest_paths<V>(self, graph: &Graph<V, W>, source: V) -> ShortestPaths<V, W>
    where
        V: Eq + Hash + Clone,
    {
        let n = graph.vertex_count();
        let mut dist = FxHashMap::with_capacity_and_hasher(n, Default::default());
        let mut pred = FxHashMap::with_capacity_and_hasher(n, Default::default());

        // Vertex ids are assigned in registration order, the same order in
        // which the graph yields its vertices.
        for ((vertex, d), p) in graph.vertices().zip(self.dist).zip(self.pred) {
            if let Some(p) = p {
                pred.insert(vertex.clone(), graph.attr(p).clone());
            }
            dist.insert(vertex.clone(), d);
        }

        ShortestPaths { source, dist, pred }
    }
}
