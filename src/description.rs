//! Serializable description of a graph and of a shortest paths result.
//!
//! A graph description lists the vertices and the weighted edges:
//!
//! ```json
//! {
//!   "vertices": ["A", "B", "C"],
//!   "edges": [
//!     { "from": "A", "to": "B", "weight": 4 },
//!     { "from": "A", "to": "C", "weight": 2 }
//!   ]
//! }
//! ```
//!
//! Edge endpoints must be listed among the vertices; they are not registered
//! implicitly.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::{error::GraphError, graph::Graph, shortest_paths::ShortestPaths, weight::Distance};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription<V, W> {
    #[serde(default)]
    pub vertices: Vec<V>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription<V, W>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDescription<V, W> {
    pub from: V,
    pub to: V,
    pub weight: W,
}

impl<V, W> GraphDescription<V, W>
where
    V: Eq + Hash + Clone,
{
    /// Builds the graph, registering the vertices in the listed order and
    /// then adding the edges.
    pub fn into_graph(self) -> Result<Graph<V, W>, GraphError<V>> {
        let mut graph = Graph::with_capacity(self.vertices.len(), self.edges.len());

        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }

        for EdgeDescription { from, to, weight } in self.edges {
            graph.add_edge(&from, &to, weight)?;
        }

        Ok(graph)
    }
}

impl<V, W> GraphDescription<V, W>
where
    V: Clone,
    W: Clone,
{
    pub fn from_graph(graph: &Graph<V, W>) -> Self {
        Self {
            vertices: graph.vertices().cloned().collect(),
            edges: graph
                .edges()
                .map(|(from, to, weight)| EdgeDescription {
                    from: from.clone(),
                    to: to.clone(),
                    weight: weight.clone(),
                })
                .collect(),
        }
    }
}

/// Distance and predecessor of a single vertex. Infinite distance and missing
/// predecessor are serialized as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexReport<V, W> {
    pub vertex: V,
    pub distance: Distance<W>,
    pub predecessor: Option<V>,
}

/// Shortest paths result listing all vertices in their registration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<V, W> {
    pub source: V,
    pub vertices: Vec<VertexReport<V, W>>,
}

impl<V, W> Report<V, W>
where
    V: Eq + Hash + Clone,
    W: Clone,
{
    pub fn new(graph: &Graph<V, W>, paths: &ShortestPaths<V, W>) -> Self {
        let vertices = graph
            .vertices()
            .map(|vertex| VertexReport {
                vertex: vertex.clone(),
                distance: paths.dist(vertex).cloned().unwrap_or_default(),
                predecessor: paths.pred(vertex).cloned(),
            })
            .collect();

        Self {
            source: paths.source().clone(),
            vertices,
        }
    }
}
