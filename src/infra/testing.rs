use std::{fmt, hash::Hash};

use thiserror::Error;

use crate::{
    graph::Graph,
    shortest_paths::ShortestPaths,
    weight::{Distance, Weight},
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex ids iterator count ({0}) is not equal to vertex count ({1})")]
    VertexIdsVertexCountMismatch(usize, usize),
    #[error("vertex {0} does not map back to its own id")]
    VertexIdInvalid(String),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("edge from {0} to {1} is not reachable through its endpoints")]
    EdgeLookupInvalid(String, String),
    #[error("sum of out degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemmaDirected(usize, usize),
    #[error("vertex {0} has {1} outgoing edges but {2} distinct neighbors")]
    DuplicateNeighbors(String, usize, usize),
}

pub fn check_consistency<V, W>(graph: &Graph<V, W>) -> Result<(), ConsistencyCheckError>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    fn cmp<F, E>(actual: usize, expected: usize, error: F) -> Result<(), E>
    where
        F: FnOnce(usize, usize) -> E,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();

    cmp(
        graph.vertices().filter_map(|v| graph.vertex_id(v)).count(),
        vertex_count,
        ConsistencyCheckError::VertexIdsVertexCountMismatch,
    )?;

    if let Some(v) = graph
        .vertices()
        .find(|v| graph.vertex_id(v).map(|id| graph.attr(id)) != Some(*v))
    {
        return Err(ConsistencyCheckError::VertexIdInvalid(format!("{v:?}")));
    }

    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    for (u, v, _) in graph.edges() {
        let found = graph.edge_weight(u, v).is_ok()
            && graph
                .neighbors(u)
                .map_or(false, |mut neighbors| neighbors.any(|n| n == v));

        if !found {
            return Err(ConsistencyCheckError::EdgeLookupInvalid(
                format!("{u:?}"),
                format!("{v:?}"),
            ));
        }
    }

    let mut out_deg_sum = 0;

    for v in graph.vertices() {
        let neighbors = graph
            .neighbors(v)
            .map_err(|_| ConsistencyCheckError::VertexIdInvalid(format!("{v:?}")))?
            .collect::<Vec<_>>();

        let degree = neighbors.len();
        let mut distinct: Vec<&V> = Vec::with_capacity(degree);
        for n in neighbors {
            if !distinct.contains(&n) {
                distinct.push(n);
            }
        }

        if distinct.len() != degree {
            return Err(ConsistencyCheckError::DuplicateNeighbors(
                format!("{v:?}"),
                degree,
                distinct.len(),
            ));
        }

        out_deg_sum += degree;
    }

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    cmp(
        out_deg_sum,
        edge_count,
        ConsistencyCheckError::HandshakingLemmaDirected,
    )?;

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShortestPathsCheckError {
    #[error("vertex {0} has no distance")]
    MissingDistance(String),
    #[error("source {0} has nonzero distance")]
    SourceNotZero(String),
    #[error("source {0} has a predecessor")]
    SourceHasPredecessor(String),
    #[error("unreachable vertex {0} has a predecessor")]
    UnreachableHasPredecessor(String),
    #[error("reachable vertex {0} has no predecessor")]
    ReachableWithoutPredecessor(String),
    #[error("distance of {0} does not equal the distance of its predecessor {1} plus the edge weight")]
    PredecessorChainBroken(String, String),
    #[error("edge from {0} to {1} gives a shorter path than the reported one")]
    NotOptimal(String, String),
}

/// Verifies that the result is a valid shortest paths tree of the graph.
///
/// A reported distance must equal the distance of the predecessor plus the
/// weight of the connecting edge, and no edge may offer a shortcut. Together
/// these imply that every reported distance is the minimum over all paths.
pub fn check_shortest_paths<V, W>(
    graph: &Graph<V, W>,
    paths: &ShortestPaths<V, W>,
) -> Result<(), ShortestPathsCheckError>
where
    V: Eq + Hash + Clone + fmt::Debug,
    W: Weight,
{
    let source = paths.source();

    for v in graph.vertices() {
        let dist = paths
            .dist(v)
            .ok_or_else(|| ShortestPathsCheckError::MissingDistance(format!("{v:?}")))?;

        if v == source {
            if dist != &Distance::zero() {
                return Err(ShortestPathsCheckError::SourceNotZero(format!("{v:?}")));
            }
            if paths.pred(v).is_some() {
                return Err(ShortestPathsCheckError::SourceHasPredecessor(format!("{v:?}")));
            }
            continue;
        }

        match (dist, paths.pred(v)) {
            (Distance::Infinite, None) => {}
            (Distance::Infinite, Some(_)) => {
                return Err(ShortestPathsCheckError::UnreachableHasPredecessor(format!(
                    "{v:?}"
                )))
            }
            (Distance::Finite(_), None) => {
                return Err(ShortestPathsCheckError::ReachableWithoutPredecessor(
                    format!("{v:?}"),
                ))
            }
            (Distance::Finite(d), Some(u)) => {
                let expected = match (paths.dist(u), graph.edge_weight(u, v)) {
                    (Some(Distance::Finite(du)), Ok(w)) => Some(du.clone() + w.clone()),
                    _ => None,
                };

                if expected.as_ref() != Some(d) {
                    return Err(ShortestPathsCheckError::PredecessorChainBroken(
                        format!("{v:?}"),
                        format!("{u:?}"),
                    ));
                }
            }
        }
    }

    for (u, v, w) in graph.edges() {
        if let (Some(Distance::Finite(du)), Some(dv)) = (paths.dist(u), paths.dist(v)) {
            if dv.is_improved_by(&(du.clone() + w.clone())) {
                return Err(ShortestPathsCheckError::NotOptimal(
                    format!("{u:?}"),
                    format!("{v:?}"),
                ));
            }
        }
    }

    Ok(())
}
