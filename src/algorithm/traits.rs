use crate::graph::traits::{Graph, Weight};

/// Per-source output of one engine run: best-known distances and the
/// predecessor links that realize them.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<W>
where
    W: Weight,
{
    /// Source vertex ID
    pub source: usize,

    /// Distance from source to each vertex, `None` = unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor of each vertex on its shortest path from source.
    /// `None` for the source itself and for unreached vertices.
    pub predecessors: Vec<Option<usize>>,
}

impl<W> ShortestPathTree<W>
where
    W: Weight,
{
    /// Extracts the result for one destination: cost plus the full vertex
    /// sequence, or `Unreachable`.
    ///
    /// The predecessor walk runs backward from the destination and stops at
    /// the source, whose predecessor is always `None`; the collected
    /// sequence is then reversed into source -> destination order.
    pub fn path_to(&self, destination: usize) -> PathResult<W> {
        let cost = match self.distances[destination] {
            Some(cost) => cost,
            None => return PathResult::Unreachable,
        };

        let mut vertices = Vec::new();
        let mut current = destination;
        vertices.push(current);
        while let Some(pred) = self.predecessors[current] {
            current = pred;
            vertices.push(current);
        }
        vertices.reverse();

        PathResult::Route(Route { cost, vertices })
    }
}

/// A realized minimum-cost path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<W> {
    /// Sum of the edge weights along `vertices`
    pub cost: W,

    /// Vertex sequence from source to destination inclusive; a single
    /// vertex when source == destination
    pub vertices: Vec<usize>,
}

/// Outcome of a source -> destination query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult<W> {
    /// No path exists between the endpoints
    Unreachable,

    /// A minimum-cost path was found
    Route(Route<W>),
}

impl<W: Copy> PathResult<W> {
    /// Cost of the route, `None` when unreachable
    pub fn cost(&self) -> Option<W> {
        match self {
            PathResult::Unreachable => None,
            PathResult::Route(route) => Some(route.cost),
        }
    }

    /// Vertex sequence of the route, `None` when unreachable
    pub fn vertices(&self) -> Option<&[usize]> {
        match self {
            PathResult::Unreachable => None,
            PathResult::Route(route) => Some(&route.vertices),
        }
    }
}

/// Trait for pairwise shortest-path engines.
///
/// Engines trust their preconditions: the graph is symmetric with
/// non-negative weights and both endpoints are in `[0, n)`. Validation
/// belongs to the boundary that built the graph (loader, CLI, web API),
/// which keeps the core total over its input domain.
pub trait ShortestPathEngine<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Get the name of the engine
    fn name(&self) -> &'static str;

    /// Compute distances and predecessors from `source` to every vertex
    fn shortest_path_tree(&self, graph: &G, source: usize) -> ShortestPathTree<W>;

    /// Compute the minimum-cost path from `source` to `destination`
    fn shortest_path(&self, graph: &G, source: usize, destination: usize) -> PathResult<W> {
        self.shortest_path_tree(graph, source).path_to(destination)
    }
}
