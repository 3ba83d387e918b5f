//! Find [single source shortest paths] and their distances in a graph.
//!
//! The solver is [Dijkstra's algorithm]. It requires all edge weights to be
//! non-negative. For unsigned weight types this holds by construction; for
//! signed ones the solver reports [`Error::NegativeWeight`] when it
//! encounters such an edge, but supporting them is not a goal.
//!
//! Two [queue strategies](QueueKind) are available, see
//! [`ShortestPathsBuilder`]. They only differ in performance characteristics,
//! not in the results.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//! [Dijkstra's algorithm]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use minpath::{shortest_paths::ShortestPaths, Distance, Graph};
//!
//! let mut graph = Graph::new();
//!
//! for city in ["Prague", "Bratislava", "Vienna", "Munich", "Nuremberg", "Florence", "Rome"] {
//!     graph.add_vertex(city);
//! }
//!
//! for (u, v, km) in [
//!     ("Prague", "Bratislava", 328u32),
//!     ("Prague", "Nuremberg", 297),
//!     ("Prague", "Vienna", 293),
//!     ("Bratislava", "Vienna", 79),
//!     ("Nuremberg", "Munich", 170),
//!     ("Vienna", "Munich", 402),
//!     ("Vienna", "Florence", 863),
//!     ("Munich", "Florence", 646),
//!     ("Florence", "Rome", 278),
//! ] {
//!     graph.add_edge(&u, &v, km).unwrap();
//! }
//!
//! let shortest_paths = ShortestPaths::on(&graph).run(&"Prague").unwrap();
//!
//! assert_eq!(shortest_paths[&"Rome"], Distance::Finite(1391));
//! assert_eq!(
//!     shortest_paths.path_to(&"Rome").unwrap(),
//!     ["Prague", "Nuremberg", "Munich", "Florence", "Rome"]
//! );
//! ```

use std::{hash::Hash, ops::Index};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{graph::Graph, weight::Distance};

mod builder;
mod solver;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from a single source vertex.
///
/// Holds an entry for every vertex of the graph the search was run on.
/// Vertices that are not reachable from the source have
/// [infinite](Distance::Infinite) distance and no predecessor.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V, W> {
    source: V,
    dist: FxHashMap<V, Distance<W>>,
    pred: FxHashMap<V, V>,
}

impl<V, W> ShortestPaths<V, W>
where
    V: Eq + Hash + Clone,
{
    /// Source vertex where the search was started.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Returns the distance between the source vertex and the given vertex,
    /// or `None` if the vertex is not part of the graph.
    pub fn dist(&self, to: &V) -> Option<&Distance<W>> {
        self.dist.get(to)
    }

    /// Returns the vertex preceding the given one on its shortest path from
    /// the source, or `None` for the source itself and unreachable vertices.
    pub fn pred(&self, of: &V) -> Option<&V> {
        self.pred.get(of)
    }

    pub fn is_reachable(&self, to: &V) -> bool {
        self.dist(to).map_or(false, Distance::is_finite)
    }

    /// Iterates over the distances of all vertices, in arbitrary order.
    pub fn distances(&self) -> impl Iterator<Item = (&V, &Distance<W>)> + '_ {
        self.dist.iter()
    }

    /// Iterates over all vertices with their predecessors, in arbitrary order.
    pub fn predecessors(&self) -> impl Iterator<Item = (&V, Option<&V>)> + '_ {
        self.dist.keys().map(|v| (v, self.pred.get(v)))
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order. The given vertex itself is not
    /// included.
    ///
    /// The iterator is empty if the vertex is the source or is not reachable.
    pub fn reconstruct(&self, to: V) -> PathReconstruction<'_, V> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// Returns the vertices on the shortest path from the source to the given
    /// vertex, both ends included, or `None` if the vertex is not reachable.
    pub fn path_to(&self, to: &V) -> Option<Vec<V>> {
        if !self.is_reachable(to) {
            return None;
        }

        let mut path = vec![to.clone()];
        path.extend(self.reconstruct(to.clone()));
        path.reverse();

        Some(path)
    }
}

impl<V, W> Index<&V> for ShortestPaths<V, W>
where
    V: Eq + Hash + Clone,
{
    type Output = Distance<W>;

    fn index(&self, index: &V) -> &Self::Output {
        self.dist(index).expect("vertex does not exist")
    }
}

/// Strategy for updating the priority of a vertex already in the queue when a
/// shorter path to it is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum QueueKind {
    /// Enqueue a new entry into a [`PriorityQueue`](crate::PriorityQueue) and
    /// skip the outdated one once it is dequeued.
    ///
    /// The queue may grow up to the number of edges, but the operations are
    /// cheap. Good default for sparse graphs.
    #[default]
    Lazy,

    /// Lower the priority in place in an
    /// [`IndexedPriorityQueue`](crate::IndexedPriorityQueue).
    ///
    /// The queue never holds more entries than there are vertices, at the
    /// cost of maintaining the item lookup table.
    DecreaseKey,
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<V> {
    /// The source vertex was never registered in the graph.
    #[error("source vertex {0:?} does not exist")]
    UnknownSource(V),

    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a, V> {
    curr: V,
    pred: &'a FxHashMap<V, V>,
}

impl<'a, V> Iterator for PathReconstruction<'a, V>
where
    V: Eq + Hash + Clone,
{
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(&self.curr).cloned()?;
        Some(self.curr.clone())
    }
}

/// Shorthand for `ShortestPaths::on(graph).run(source)`.
///
/// # Panics
///
/// Path sums use the `+` operator of the weight type, so a sum overflowing
/// an integer weight panics in debug builds. Pick a type wide enough for the
/// longest path.
pub fn dijkstra<V, W>(graph: &Graph<V, W>, source: &V) -> Result<ShortestPaths<V, W>, Error<V>>
where
    V: Eq + Hash + Clone,
    W: crate::weight::Weight,
{
    ShortestPaths::on(graph).run(source)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::infra::{
        proptest::{graph, graph_reachable},
        testing::check_shortest_paths,
    };

    use super::*;

    fn create_basic_graph() -> Graph<&'static str, u32> {
        let mut graph = Graph::new();

        for v in ["A", "B", "C", "D", "E"] {
            graph.add_vertex(v);
        }

        graph
            .extend_with_edges([
                ("A", "B", 4),
                ("A", "C", 2),
                ("C", "D", 2),
                ("C", "E", 3),
                ("D", "B", 1),
                ("B", "E", 3),
            ])
            .unwrap();

        graph
    }

    fn create_graph_with_isolated_vertex() -> Graph<&'static str, u32> {
        let mut graph = create_basic_graph();
        graph.add_vertex("F");
        graph
    }

    fn check_basic(shortest_paths: &ShortestPaths<&'static str, u32>) {
        for (v, d) in [("A", 0), ("B", 4), ("C", 2), ("D", 4), ("E", 5)] {
            assert_eq!(shortest_paths.dist(&v), Some(&Distance::Finite(d)), "distance of {v}");
        }

        for (v, p) in [("A", None), ("B", Some("A")), ("C", Some("A")), ("D", Some("C")), ("E", Some("C"))] {
            assert_eq!(shortest_paths.pred(&v).copied(), p, "predecessor of {v}");
        }
    }

    #[test]
    fn dijkstra_basic() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph).run(&"A").unwrap();

        check_basic(&shortest_paths);
        assert_eq!(shortest_paths.source(), &"A");
        assert_eq!(shortest_paths.reconstruct("B").collect::<Vec<_>>(), vec!["A"]);
        assert_eq!(shortest_paths.path_to(&"B"), Some(vec!["A", "B"]));
        assert_eq!(shortest_paths.reconstruct("D").collect::<Vec<_>>(), vec!["C", "A"]);
        assert_eq!(shortest_paths.path_to(&"D"), Some(vec!["A", "C", "D"]));
        check_shortest_paths(&graph, &shortest_paths).unwrap();
    }

    #[test]
    fn dijkstra_decrease_key_basic() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph).decrease_key().run(&"A").unwrap();

        check_basic(&shortest_paths);
        check_shortest_paths(&graph, &shortest_paths).unwrap();
    }

    #[test]
    fn dijkstra_isolated_vertex() {
        let graph = create_graph_with_isolated_vertex();

        for queue in [QueueKind::Lazy, QueueKind::DecreaseKey] {
            let shortest_paths = ShortestPaths::on(&graph).using(queue).run(&"A").unwrap();

            assert_eq!(shortest_paths.dist(&"F"), Some(&Distance::Infinite));
            assert_eq!(shortest_paths.pred(&"F"), None);
            assert!(!shortest_paths.is_reachable(&"F"));
            assert_eq!(shortest_paths.path_to(&"F"), None);
            assert_eq!(shortest_paths.reconstruct("F").count(), 0);
        }
    }

    #[test]
    fn dijkstra_unreachable_upstream() {
        let graph = create_basic_graph();
        let shortest_paths = dijkstra(&graph, &"C").unwrap();

        assert_eq!(shortest_paths[&"C"], Distance::Finite(0));
        assert_eq!(shortest_paths[&"B"], Distance::Finite(3));
        assert_eq!(shortest_paths[&"A"], Distance::Infinite);
        assert_eq!(shortest_paths.pred(&"A"), None);
        check_shortest_paths(&graph, &shortest_paths).unwrap();
    }

    #[test]
    fn dijkstra_all_vertices_reported() {
        let graph = create_graph_with_isolated_vertex();
        let shortest_paths = dijkstra(&graph, &"E").unwrap();

        assert_eq!(shortest_paths.distances().count(), 6);
        assert_eq!(shortest_paths.predecessors().count(), 6);
        assert_eq!(
            shortest_paths.distances().filter(|(_, d)| d.is_finite()).count(),
            1
        );
    }

    #[test]
    fn dijkstra_unknown_source() {
        let graph = create_basic_graph();

        assert_matches!(dijkstra(&graph, &"X"), Err(Error::UnknownSource("X")));
        assert_matches!(
            ShortestPaths::on(&graph).decrease_key().run(&"X"),
            Err(Error::UnknownSource("X"))
        );
    }

    #[test]
    fn dijkstra_negative_edge() {
        let mut graph = Graph::new();

        graph.add_vertex(0);
        graph.add_vertex(1);
        graph.add_edge(&0, &1, -1i32).unwrap();

        assert_matches!(dijkstra(&graph, &0), Err(Error::NegativeWeight));
        assert_matches!(
            ShortestPaths::on(&graph).decrease_key().run(&0),
            Err(Error::NegativeWeight)
        );
    }

    #[test]
    fn dijkstra_negative_edge_into_settled_vertex() {
        let mut graph = Graph::new();

        graph.add_vertex(0);
        graph.add_vertex(1);
        graph.extend_with_edges([(0, 1, 1i32), (1, 0, -5)]).unwrap();

        for queue in [QueueKind::Lazy, QueueKind::DecreaseKey] {
            assert_matches!(
                ShortestPaths::on(&graph).using(queue).run(&0),
                Err(Error::NegativeWeight)
            );
        }
    }

    #[test]
    fn dijkstra_float_weights() {
        let mut graph = Graph::new();

        for v in ["s", "a", "b", "t"] {
            graph.add_vertex(v.to_string());
        }

        let s = String::from("s");
        let a = String::from("a");
        let b = String::from("b");
        let t = String::from("t");

        graph.add_edge(&s, &a, 0.5).unwrap();
        graph.add_edge(&s, &b, 2.0).unwrap();
        graph.add_edge(&a, &b, 0.25).unwrap();
        graph.add_edge(&b, &t, 1.0).unwrap();

        let shortest_paths = dijkstra(&graph, &s).unwrap();

        assert_eq!(shortest_paths[&t], Distance::Finite(1.75));
        assert_eq!(shortest_paths.path_to(&t), Some(vec![s, a, b, t.clone()]));
        check_shortest_paths(&graph, &shortest_paths).unwrap();
    }

    #[test]
    fn dijkstra_zero_weight_cycle() {
        let mut graph = Graph::new();

        for v in 0..3 {
            graph.add_vertex(v);
        }

        graph
            .extend_with_edges([(0, 1, 0u8), (1, 2, 0), (2, 0, 0), (1, 1, 0)])
            .unwrap();

        let shortest_paths = dijkstra(&graph, &0).unwrap();

        assert_eq!(shortest_paths[&2], Distance::Finite(0));
        assert_eq!(shortest_paths.pred(&0), None);
        check_shortest_paths(&graph, &shortest_paths).unwrap();
    }

    #[test]
    fn dijkstra_single_vertex() {
        let mut graph = Graph::<_, u32>::new();
        graph.add_vertex('A');

        let shortest_paths = dijkstra(&graph, &'A').unwrap();

        assert_eq!(shortest_paths[&'A'], Distance::Finite(0));
        assert_eq!(shortest_paths.path_to(&'A'), Some(vec!['A']));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dijkstra_optimal(graph in graph(any::<u16>().prop_map(u32::from), 64), source: u32) {
            let n = graph.vertex_count() as u32;
            let source = source % n;

            let paths = ShortestPaths::on(&graph).run(&source).unwrap();
            prop_assert_eq!(paths.dist(&source), Some(&Distance::Finite(0)));
            check_shortest_paths(&graph, &paths).map_err(|error| TestCaseError::fail(error.to_string()))?;
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_dijkstra_reachable_all_finite(graph in graph_reachable(any::<u16>().prop_map(u32::from), 64)) {
            let paths = ShortestPaths::on(&graph).run(&0).unwrap();

            for v in graph.vertices() {
                prop_assert!(paths.is_reachable(v));

                let u = paths.reconstruct(*v).last();
                if *v != 0 {
                    prop_assert_eq!(u, Some(0));
                } else {
                    prop_assert_eq!(u, None);
                }
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_lazy_decrease_key_agree(graph in graph(any::<u16>().prop_map(u32::from), 64), source: u32) {
            let n = graph.vertex_count() as u32;
            let source = source % n;

            let paths_lazy = ShortestPaths::on(&graph).lazy().run(&source).unwrap();
            let paths_dk = ShortestPaths::on(&graph).decrease_key().run(&source).unwrap();

            for v in graph.vertices() {
                prop_assert_eq!(paths_lazy.dist(v), paths_dk.dist(v));
                // Check only the distances. Paths as found by the two
                // strategies can be different in general.
            }

            check_shortest_paths(&graph, &paths_dk).map_err(|error| TestCaseError::fail(error.to_string()))?;
        }
    }
}
