use std::fmt;

use proptest::{collection::vec, prelude::*};

use crate::graph::Graph;

type RawEdges<W> = Vec<(u32, u32, W)>;

/// Strategy generating graphs with vertices `0..n` for `n` in
/// `1..=max_size` and up to `4n` edges with weights from `weight`.
///
/// Self-loops are allowed. Edges generated twice for the same pair keep the
/// weight of the later one, as [`Graph::add_edge`] does.
pub fn graph<W>(weight: W, max_size: usize) -> impl Strategy<Value = Graph<u32, W::Value>>
where
    W: Strategy + Clone,
    W::Value: fmt::Debug,
{
    let max_size = max_size.max(1) as u32;

    (1..=max_size)
        .prop_flat_map(move |n| (Just(n), edges(n, weight.clone())))
        .prop_map(|(n, edges)| build(n, Vec::new(), edges))
}

/// Like [`graph`], but every vertex is reachable from vertex `0`.
///
/// Reachability is guaranteed by an edge `i - 1 -> i` for every `i` in `1..n`
/// added before the random edges (which may overwrite its weight).
pub fn graph_reachable<W>(
    weight: W,
    max_size: usize,
) -> impl Strategy<Value = Graph<u32, W::Value>>
where
    W: Strategy + Clone,
    W::Value: fmt::Debug,
{
    let max_size = max_size.max(1) as u32;

    (1..=max_size)
        .prop_flat_map(move |n| {
            let path = vec(weight.clone(), (n - 1) as usize);
            (Just(n), path, edges(n, weight.clone()))
        })
        .prop_map(|(n, path, edges)| build(n, path, edges))
}

fn edges<W>(n: u32, weight: W) -> impl Strategy<Value = RawEdges<W::Value>>
where
    W: Strategy,
{
    vec((0..n, 0..n, weight), 0..=(4 * n as usize))
}

fn build<W>(n: u32, path: Vec<W>, edges: RawEdges<W>) -> Graph<u32, W> {
    let mut graph = Graph::with_capacity(n as usize, path.len() + edges.len());

    for v in 0..n {
        graph.add_vertex(v);
    }

    // All endpoints are in `0..n`, so adding the edges cannot fail.
    for (v, w) in (1..n).zip(path) {
        let _ = graph.add_edge(&(v - 1), &v, w);
    }

    for (u, v, w) in edges {
        let _ = graph.add_edge(&u, &v, w);
    }

    graph
}
