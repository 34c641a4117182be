use std::fmt::Debug;

use num_traits::{CheckedAdd, PrimInt, Unsigned};

use crate::Result;

/// Weight of an edge: any unsigned primitive integer.
///
/// Unsigned rules out negative weights at the type level, which is what
/// makes Dijkstra's finalization argument valid. `W::zero()` is reserved
/// for "no edge" in the matrix representation, so real edge weights are
/// always positive. `CheckedAdd` lets the engine treat a distance sum
/// that exceeds the weight type as infinity instead of wrapping.
pub trait Weight: PrimInt + Unsigned + CheckedAdd + Debug + Send + Sync {}

impl<W> Weight for W where W: PrimInt + Unsigned + CheckedAdd + Debug + Send + Sync {}

/// Trait representing a weighted undirected graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the neighbors of a vertex with edge weights
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, a: usize, b: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, a: usize, b: usize) -> Option<W>;
}

/// Trait for graph construction
pub trait GraphBuilder<W>: Graph<W>
where
    W: Weight,
{
    /// Adds an undirected edge between two distinct vertices.
    ///
    /// A weight of zero denotes "no edge" in the matrix and is rejected
    /// here; adding an edge twice overwrites the previous weight.
    fn add_edge(&mut self, a: usize, b: usize, weight: W) -> Result<()>;

    /// Removes an edge from the graph, returning true if it existed
    fn remove_edge(&mut self, a: usize, b: usize) -> bool;
}
