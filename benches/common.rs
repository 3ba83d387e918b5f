#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    /// Yields pairs `(v, w)` with `w < v`, each with probability `p`, using
    /// geometric skips instead of a coin flip per pair.
    pub fn next_pair(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, n, p } = self;

        if *v >= *n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - *p).log10()).floor() as usize;

        while *w >= *v && *v < *n {
            *w -= *v;
            *v += 1;
        }

        if *v < *n {
            Some((*v, *w))
        } else {
            None
        }
    }

    /// Like [`next_pair`](Self::next_pair), but orients each pair randomly
    /// so that the directed graph is not acyclic.
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        self.next_pair(rng)
            .map(|(v, w)| if rng.bool() { (v, w) } else { (w, v) })
    }
}

pub fn minpath_random(vertex_count: usize, density: f32, rng: &mut Rng) -> minpath::Graph<u32, f32> {
    let mut graph = minpath::Graph::with_capacity(vertex_count, 0);

    for v in 0..vertex_count as u32 {
        graph.add_vertex(v);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph
            .add_edge(&(u as u32), &(v as u32), rng.f32())
            .unwrap();
    }

    graph
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<u32, f32, petgraph::Directed> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for v in 0..vertex_count as u32 {
        graph.add_node(v);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), rng.f32());
    }

    graph
}
