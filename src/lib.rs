//! Binary-heap priority queues and single source shortest paths.
//!
//! The crate provides a directed, weighted [`Graph`] whose vertices are
//! identified by arbitrary tokens, the [`PriorityQueue`] and
//! [`IndexedPriorityQueue`] min-heaps, and Dijkstra's algorithm built on top
//! of them in [`shortest_paths`].
//!
//! # Examples
//!
//! ```
//! use minpath::{dijkstra, Distance, Graph};
//!
//! let mut graph = Graph::new();
//!
//! for v in ["A", "B", "C", "D", "E"] {
//!     graph.add_vertex(v);
//! }
//!
//! graph
//!     .extend_with_edges([
//!         ("A", "B", 4),
//!         ("A", "C", 2),
//!         ("C", "D", 2),
//!         ("C", "E", 3),
//!         ("D", "B", 1),
//!         ("B", "E", 3),
//!     ])
//!     .unwrap();
//!
//! let shortest_paths = dijkstra(&graph, &"A").unwrap();
//!
//! assert_eq!(shortest_paths[&"B"], Distance::Finite(4));
//! assert_eq!(shortest_paths.pred(&"B"), Some(&"A"));
//! assert_eq!(shortest_paths[&"D"], Distance::Finite(4));
//! assert_eq!(shortest_paths.pred(&"D"), Some(&"C"));
//! assert_eq!(shortest_paths.pred(&"A"), None);
//! ```

pub mod error;
pub mod graph;
pub mod infra;
pub mod queue;
pub mod shortest_paths;
pub mod weight;

#[cfg(feature = "serde")]
pub mod description;

pub use graph::Graph;
pub use queue::{IndexedPriorityQueue, PriorityQueue};
pub use shortest_paths::{dijkstra, ShortestPaths};
pub use weight::{Distance, Weight};
