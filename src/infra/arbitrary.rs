use std::fmt;

use arbitrary::Arbitrary;

use crate::{error::GraphError, graph::Graph};

/// Operation mutating a graph with `u8` vertex tokens.
#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<W> {
    AddVertex(u8),
    AddEdge(u8, u8, W),
    RemoveEdge(u8, u8),
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult<W> {
    AddVertex,
    AddEdge(Result<Option<W>, GraphError<u8>>),
    RemoveEdge(Result<W, GraphError<u8>>),
}

impl<W> MutOp<W> {
    pub fn map_weight<U, F>(self, f: F) -> MutOp<U>
    where
        F: FnOnce(W) -> U,
    {
        match self {
            MutOp::AddVertex(vertex) => MutOp::AddVertex(vertex),
            MutOp::AddEdge(src, dst, weight) => MutOp::AddEdge(src, dst, f(weight)),
            MutOp::RemoveEdge(src, dst) => MutOp::RemoveEdge(src, dst),
        }
    }

    pub fn apply(self, graph: &mut Graph<u8, W>) -> MutOpResult<W> {
        match self {
            MutOp::AddVertex(vertex) => {
                graph.add_vertex(vertex);
                MutOpResult::AddVertex
            }
            MutOp::AddEdge(src, dst, weight) => {
                MutOpResult::AddEdge(graph.add_edge(&src, &dst, weight))
            }
            MutOp::RemoveEdge(src, dst) => {
                MutOpResult::RemoveEdge(graph.remove_edge(&src, &dst))
            }
        }
    }
}

#[derive(Debug, Arbitrary)]
pub struct MutOpsSeq<W>(pub Vec<MutOp<W>>);

impl<W> IntoIterator for MutOpsSeq<W> {
    type Item = MutOp<W>;
    type IntoIter = std::vec::IntoIter<MutOp<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<W: fmt::Debug> MutOpsSeq<W> {
    /// Prints the sequence as Rust statements reproducing it, for turning a
    /// fuzzer crash into a regression test.
    pub fn replay(&self) {
        println!("let mut graph = Graph::new();");
        println!();

        for op in &self.0 {
            match op {
                MutOp::AddVertex(vertex) => println!("graph.add_vertex({vertex});"),
                MutOp::AddEdge(src, dst, weight) => {
                    println!("let _ = graph.add_edge(&{src}, &{dst}, {weight:?});")
                }
                MutOp::RemoveEdge(src, dst) => {
                    println!("let _ = graph.remove_edge(&{src}, &{dst});")
                }
            }
        }
    }
}
