// Error types: graph input and per-instance diagnostics

use std::io;

use lp4rust::SolverError;
use thiserror::Error;

use crate::graph::GraphView;

/// Failures while reading a graph or building its planar dual
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("bad planar_code header: {0:?}")]
    BadHeader(String),
    #[error("graph {graph}: input ends inside the graph")]
    Truncated { graph: usize },
    #[error("graph {graph}: vertex {vertex} has degree {degree}, expected 3")]
    NotCubic { graph: usize, vertex: usize, degree: usize },
    #[error("graph {graph}: vertex {vertex} lists neighbor {neighbor}, but n = {n}")]
    NeighborOutOfRange { graph: usize, vertex: usize, neighbor: usize, n: usize },
    #[error("graph {graph}: self loop at vertex {vertex}")]
    SelfLoop { graph: usize, vertex: usize },
    #[error("graph {graph}: vertex {vertex} lists neighbor {neighbor} twice")]
    MultiEdge { graph: usize, vertex: usize, neighbor: usize },
    #[error("graph {graph}: edge {u}-{v} has no reverse entry")]
    Asymmetric { graph: usize, u: usize, v: usize },
    #[error("graph {graph}: n - e + f = {n} - {e} + {f}, expected 2")]
    NotPlanar { graph: usize, n: usize, e: usize, f: usize },
    #[error("graph {graph}: face {face} has size {size}, expected 5 or 6")]
    NotFullerene { graph: usize, face: usize, size: usize },
    #[error("graph {graph}: {pentagons} pentagonal faces, expected 12")]
    PentagonCount { graph: usize, pentagons: usize },
}

/// Fatal conditions of one (graph, p) instance
#[derive(Debug, Error)]
pub enum ClarError {
    /// Solver status or solution inconsistency, with the instance context
    #[error("n = {n}, p = {p}, graph {graph_id}: {message}")]
    Diagnostic {
        n: usize,
        p: usize,
        graph_id: usize,
        message: String,
    },
    #[error("n = {n}, p = {p}, graph {graph_id}: solver failure: {source}")]
    Solver {
        n: usize,
        p: usize,
        graph_id: usize,
        #[source]
        source: SolverError,
    },
    #[error("failed to record result: {0}")]
    Sink(#[from] io::Error),
}

impl ClarError {
    pub fn diagnostic<G: GraphView>(graph: &G, p: usize, message: impl Into<String>) -> Self {
        ClarError::Diagnostic {
            n: graph.vertex_count(),
            p,
            graph_id: graph.graph_id(),
            message: message.into(),
        }
    }

    pub fn solver<G: GraphView>(graph: &G, p: usize, source: SolverError) -> Self {
        ClarError::Solver {
            n: graph.vertex_count(),
            p,
            graph_id: graph.graph_id(),
            source,
        }
    }
}
