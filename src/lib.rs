//! minpath - Minimum-Cost Paths in Small Undirected Weighted Graphs
//!
//! This library computes the cheapest path between two vertices of an
//! undirected graph with non-negative integer edge weights, using Dijkstra's
//! algorithm over an adjacency-matrix representation.
//!
//! Vertex selection is a linear scan (first-found minimum, so the lowest
//! vertex index wins ties), which keeps path output reproducible on graphs
//! with equal-cost alternatives. The graphs this targets are small, so the
//! O(n^2) scan is the intended trade-off.

pub mod algorithm;
pub mod graph;
pub mod labels;
pub mod loader;
pub mod web;

pub use algorithm::{dijkstra::Dijkstra, PathResult, Route, ShortestPathEngine};
/// Re-export main types for convenient use
pub use graph::matrix::MatrixGraph;
pub use labels::Notation;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex count: {0} (supported range is 1..={1})")]
    InvalidVertexCount(usize, usize),

    #[error("Invalid edge: {0} {1} (weight {2})")]
    InvalidEdge(usize, usize, i64),

    #[error("Self-loop on vertex {0} is not allowed")]
    SelfLoop(usize),

    /// Carries the vertex name as the caller wrote it (external notation
    /// at the text boundaries, 0-based ids in the programmatic API)
    #[error("Invalid endpoint: vertex {0} is not in the graph")]
    InvalidEndpoint(String),

    #[error("Malformed input: {0}")]
    ParseInput(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
