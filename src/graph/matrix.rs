use std::fmt::Debug;

use num_traits::Zero;

use crate::graph::traits::{Graph, GraphBuilder, Weight};
use crate::{Error, Result};

/// An undirected graph stored as a symmetric adjacency matrix.
///
/// The matrix is a flattened `n * n` vector indexed by `row * n + col`,
/// with `W::zero()` meaning "no edge". Symmetry (`weight[a][b] ==
/// weight[b][a]`) is maintained by construction: every mutation writes
/// both cells. Self-loops are rejected, the diagonal stays zero.
///
/// The vertex count is fixed at construction. Any bound on it (the CLI
/// accepts at most [`crate::loader::DEFAULT_VERTEX_LIMIT`] vertices) is a
/// boundary concern, not a property of this type.
#[derive(Debug, Clone)]
pub struct MatrixGraph<W>
where
    W: Weight,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Flattened symmetric weight matrix, `W::zero()` = no edge
    weights: Vec<W>,
}

impl<W> MatrixGraph<W>
where
    W: Weight,
{
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        MatrixGraph {
            vertex_count,
            weights: vec![W::zero(); vertex_count * vertex_count],
        }
    }

    /// Builds a graph from an edge list, validating every endpoint.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut graph = MatrixGraph::new(vertex_count);
        for &(a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    #[inline]
    fn cell(&self, row: usize, col: usize) -> W {
        self.weights[row * self.vertex_count + col]
    }

    #[inline]
    fn set_cell(&mut self, row: usize, col: usize, value: W) {
        self.weights[row * self.vertex_count + col] = value;
    }

    /// Direct matrix access for the relaxation loop: weight of `(a, b)`,
    /// zero when no edge exists. Both indices must be in range.
    #[inline]
    pub fn weight_or_zero(&self, a: usize, b: usize) -> W {
        self.cell(a, b)
    }
}

impl<W> Graph<W> for MatrixGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        // Each undirected edge occupies two symmetric cells
        self.weights.iter().filter(|w| !w.is_zero()).count() / 2
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        let row = vertex * self.vertex_count;
        Box::new(
            self.weights[row..row + self.vertex_count]
                .iter()
                .enumerate()
                .filter(|(_, w)| !w.is_zero())
                .map(|(v, w)| (v, *w)),
        )
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn has_edge(&self, a: usize, b: usize) -> bool {
        self.has_vertex(a) && self.has_vertex(b) && !self.cell(a, b).is_zero()
    }

    fn edge_weight(&self, a: usize, b: usize) -> Option<W> {
        if !self.has_vertex(a) || !self.has_vertex(b) {
            return None;
        }
        let weight = self.cell(a, b);
        if weight.is_zero() {
            None
        } else {
            Some(weight)
        }
    }
}

impl<W> GraphBuilder<W> for MatrixGraph<W>
where
    W: Weight,
{
    fn add_edge(&mut self, a: usize, b: usize, weight: W) -> Result<()> {
        if !self.has_vertex(a) {
            return Err(Error::InvalidEndpoint(a.to_string()));
        }
        if !self.has_vertex(b) {
            return Err(Error::InvalidEndpoint(b.to_string()));
        }
        if a == b {
            return Err(Error::SelfLoop(a));
        }
        if weight.is_zero() {
            // Zero is the "no edge" sentinel; a zero-weight edge would vanish
            return Err(Error::InvalidEdge(a, b, 0));
        }

        self.set_cell(a, b, weight);
        self.set_cell(b, a, weight);
        Ok(())
    }

    fn remove_edge(&mut self, a: usize, b: usize) -> bool {
        if !self.has_edge(a, b) {
            return false;
        }
        self.set_cell(a, b, W::zero());
        self.set_cell(b, a, W::zero());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_symmetric() {
        let mut graph: MatrixGraph<u64> = MatrixGraph::new(4);
        graph.add_edge(0, 2, 7).unwrap();

        assert_eq!(graph.edge_weight(0, 2), Some(7));
        assert_eq!(graph.edge_weight(2, 0), Some(7));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn self_loops_are_rejected() {
        let mut graph: MatrixGraph<u64> = MatrixGraph::new(3);
        assert!(matches!(graph.add_edge(1, 1, 5), Err(Error::SelfLoop(1))));
    }

    #[test]
    fn zero_weight_is_rejected() {
        let mut graph: MatrixGraph<u64> = MatrixGraph::new(3);
        assert!(matches!(
            graph.add_edge(0, 1, 0),
            Err(Error::InvalidEdge(0, 1, 0))
        ));
    }

    #[test]
    fn out_of_range_endpoint_is_rejected() {
        let mut graph: MatrixGraph<u64> = MatrixGraph::new(3);
        assert!(matches!(
            graph.add_edge(0, 3, 1),
            Err(Error::InvalidEndpoint(v)) if v == "3"
        ));
    }

    #[test]
    fn re_adding_overwrites_weight() {
        let mut graph: MatrixGraph<u64> = MatrixGraph::new(3);
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(1, 0, 9).unwrap();

        assert_eq!(graph.edge_weight(0, 1), Some(9));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn neighbors_lists_only_connected_vertices() {
        let mut graph: MatrixGraph<u64> = MatrixGraph::new(4);
        graph.add_edge(1, 0, 3).unwrap();
        graph.add_edge(1, 3, 4).unwrap();

        let neighbors: Vec<_> = graph.neighbors(1).collect();
        assert_eq!(neighbors, vec![(0, 3), (3, 4)]);
    }

    #[test]
    fn remove_edge_clears_both_cells() {
        let mut graph: MatrixGraph<u64> = MatrixGraph::new(3);
        graph.add_edge(0, 1, 2).unwrap();

        assert!(graph.remove_edge(1, 0));
        assert!(!graph.has_edge(0, 1));
        assert!(!graph.remove_edge(1, 0));
    }
}
