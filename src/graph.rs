//! Directed graph with weighted edges and vertices identified by arbitrary
//! tokens.
//!
//! Vertices are registered by value (a string, a number, anything hashable)
//! and every other operation refers to them by the same value. Internally,
//! each vertex gets a dense [`VertexId`] in registration order, which is what
//! algorithms work with.
//!
//! # Examples
//!
//! ```
//! use minpath::{error::GraphError, Graph};
//!
//! let mut graph = Graph::new();
//!
//! graph.add_vertex("A");
//! graph.add_vertex("B");
//! graph.add_edge(&"A", &"B", 4).unwrap();
//!
//! assert_eq!(graph.edge_weight(&"A", &"B"), Ok(&4));
//! assert_eq!(
//!     graph.edge_weight(&"B", &"A"),
//!     Err(GraphError::MissingEdge("B", "A"))
//! );
//! assert_eq!(
//!     graph.add_edge(&"A", &"C", 1),
//!     Err(GraphError::UnknownVertex("C"))
//! );
//! ```

use std::{collections::hash_map::Entry, hash::Hash, iter::FusedIterator, mem};

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::error::GraphError;

/// Dense identifier of a vertex, assigned in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct EdgeId(usize);

#[derive(Debug, Clone)]
struct Vertex<V> {
    attr: V,
    // Outgoing edges in insertion order.
    edges: Vec<EdgeId>,
}

/// Directed graph storing, for every registered vertex, the list of its
/// outgoing weighted edges.
///
/// At most one edge exists for an ordered pair of vertices; adding it again
/// overwrites the weight. Self-loops are allowed.
#[derive(Debug, Clone)]
pub struct Graph<V, W> {
    vertices: Vec<Vertex<V>>,
    edges: Vec<W>,
    endpoints: Vec<[VertexId; 2]>,
    vertex_index: FxHashMap<V, VertexId>,
    edge_index: FxHashMap<[VertexId; 2], EdgeId>,
}

impl<V, W> Graph<V, W> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            endpoints: Vec::new(),
            vertex_index: FxHashMap::default(),
            edge_index: FxHashMap::default(),
        }
    }

    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            edges: Vec::with_capacity(edge_capacity),
            endpoints: Vec::with_capacity(edge_capacity),
            vertex_index: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            edge_index: FxHashMap::with_capacity_and_hasher(edge_capacity, Default::default()),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over the vertices in registration order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + ExactSizeIterator + '_ {
        self.vertices.iter().map(|vertex| &vertex.attr)
    }

    /// Iterates over all edges as `(start, end, weight)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, &W)> + '_ {
        self.endpoints
            .iter()
            .zip(self.edges.iter())
            .map(|([src, dst], weight)| (self.attr(*src), self.attr(*dst), weight))
    }

    /// Returns the vertex token for an id obtained from this graph.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this graph.
    pub fn attr(&self, id: VertexId) -> &V {
        &self.vertices[id.0].attr
    }

    pub(crate) fn out_edges(&self, id: VertexId) -> impl Iterator<Item = (VertexId, &W)> + '_ {
        self.vertices[id.0]
            .edges
            .iter()
            .map(|edge| (self.endpoints[edge.0][1], &self.edges[edge.0]))
    }

    fn remove_edge_inner(&mut self, id: EdgeId) -> W {
        let [src, dst] = self.endpoints[id.0];

        Self::disconnect(&mut self.vertices[src.0].edges, id);
        self.edge_index.remove(&[src, dst]);

        let weight = self.edges.swap_remove(id.0);
        self.endpoints.swap_remove(id.0);

        // If `swap_remove` actually moved an existing edge somewhere, we need
        // to fix its id in the entire graph.
        if id.0 < self.edges.len() {
            self.relocate_edge(EdgeId(self.edges.len()), id);
        }

        weight
    }

    fn relocate_edge(&mut self, old_id: EdgeId, new_id: EdgeId) {
        let [src, dst] = self.endpoints[new_id.0];

        for edge_id in &mut self.vertices[src.0].edges {
            if *edge_id == old_id {
                *edge_id = new_id;
            }
        }

        self.edge_index.insert([src, dst], new_id);
    }

    fn disconnect(edges: &mut Vec<EdgeId>, id: EdgeId) {
        // Preserve the order of the remaining neighbors.
        if let Some(pos) = edges.iter().position(|edge| *edge == id) {
            edges.remove(pos);
        }
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone,
{
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertex_index.contains_key(vertex)
    }

    pub fn vertex_id(&self, vertex: &V) -> Option<VertexId> {
        self.vertex_index.get(vertex).copied()
    }

    fn try_vertex_id(&self, vertex: &V) -> Result<VertexId, GraphError<V>> {
        self.vertex_id(vertex)
            .ok_or_else(|| GraphError::UnknownVertex(vertex.clone()))
    }

    /// Registers a vertex with no outgoing edges and returns its id.
    ///
    /// If the vertex is already registered, its outgoing edges are removed and
    /// the existing id is returned. Edges pointing to it from other vertices
    /// are kept.
    pub fn add_vertex(&mut self, vertex: V) -> VertexId {
        if let Some(id) = self.vertex_id(&vertex) {
            let removed = self.vertices[id.0].edges.len();

            while let Some(&edge) = self.vertices[id.0].edges.last() {
                self.remove_edge_inner(edge);
            }

            trace!(vertex = ?id, removed, "vertex re-added, outgoing edges reset");
            return id;
        }

        let id = VertexId(self.vertices.len());
        self.vertex_index.insert(vertex.clone(), id);
        self.vertices.push(Vertex {
            attr: vertex,
            edges: Vec::new(),
        });

        id
    }

    /// Adds the directed edge from `start` to `end`, or overwrites its weight
    /// if the edge already exists. Returns the previous weight in the latter
    /// case.
    ///
    /// Both endpoints must be registered, otherwise
    /// [`GraphError::UnknownVertex`] is returned and the graph is unchanged.
    pub fn add_edge(&mut self, start: &V, end: &V, weight: W) -> Result<Option<W>, GraphError<V>> {
        let src = self.try_vertex_id(start)?;
        let dst = self.try_vertex_id(end)?;

        match self.edge_index.entry([src, dst]) {
            Entry::Occupied(edge) => {
                trace!(src = ?src, dst = ?dst, "edge weight overwritten");
                Ok(Some(mem::replace(&mut self.edges[edge.get().0], weight)))
            }
            Entry::Vacant(slot) => {
                let id = EdgeId(self.edges.len());
                slot.insert(id);
                self.edges.push(weight);
                self.endpoints.push([src, dst]);
                self.vertices[src.0].edges.push(id);
                Ok(None)
            }
        }
    }

    /// Removes the directed edge from `start` to `end` and returns its weight.
    pub fn remove_edge(&mut self, start: &V, end: &V) -> Result<W, GraphError<V>> {
        let id = self.edge_id(start, end)?;
        Ok(self.remove_edge_inner(id))
    }

    /// Adds all edges from the iterator, stopping at the first one with an
    /// unregistered endpoint.
    pub fn extend_with_edges<I>(&mut self, iter: I) -> Result<(), GraphError<V>>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        for (start, end, weight) in iter {
            self.add_edge(&start, &end, weight)?;
        }

        Ok(())
    }

    /// Returns an iterator over the vertices reachable by a single outgoing
    /// edge from `vertex`, in the order the edges were added.
    pub fn neighbors(&self, vertex: &V) -> Result<Neighbors<'_, V, W>, GraphError<V>> {
        let id = self.try_vertex_id(vertex)?;

        Ok(Neighbors {
            graph: self,
            edges: self.vertices[id.0].edges.iter(),
        })
    }

    /// Returns the weight of the directed edge from `start` to `end`.
    pub fn edge_weight(&self, start: &V, end: &V) -> Result<&W, GraphError<V>> {
        let id = self.edge_id(start, end)?;
        Ok(&self.edges[id.0])
    }

    fn edge_id(&self, start: &V, end: &V) -> Result<EdgeId, GraphError<V>> {
        let src = self.try_vertex_id(start)?;
        let dst = self.try_vertex_id(end)?;

        self.edge_index
            .get(&[src, dst])
            .copied()
            .ok_or_else(|| GraphError::MissingEdge(start.clone(), end.clone()))
    }
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the outgoing neighbors of a vertex.
///
/// Returned by [`Graph::neighbors`].
#[derive(Debug)]
pub struct Neighbors<'a, V, W> {
    graph: &'a Graph<V, W>,
    edges: std::slice::Iter<'a, EdgeId>,
}

impl<'a, V, W> Iterator for Neighbors<'a, V, W> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.edges
            .next()
            .map(|edge| graph.attr(graph.endpoints[edge.0][1]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl<V, W> ExactSizeIterator for Neighbors<'_, V, W> {}

impl<V, W> FusedIterator for Neighbors<'_, V, W> {}
