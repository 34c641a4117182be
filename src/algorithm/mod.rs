pub mod dijkstra;
pub mod traits;

pub use traits::{PathResult, Route, ShortestPathEngine, ShortestPathTree};

use rayon::prelude::*;

use crate::graph::traits::{Graph, Weight};

/// Computes the shortest-path cost between every ordered pair of vertices.
///
/// Entry `[s][d]` is `Some(cost)` when `d` is reachable from `s`, `None`
/// otherwise. Sources are processed in parallel: each run owns its working
/// tables and only reads the shared graph, so independent runs cannot
/// interfere.
pub fn distance_matrix<W, G, E>(engine: &E, graph: &G) -> Vec<Vec<Option<W>>>
where
    W: Weight,
    G: Graph<W> + Sync,
    E: ShortestPathEngine<W, G> + Sync,
{
    (0..graph.vertex_count())
        .into_par_iter()
        .map(|source| engine.shortest_path_tree(graph, source).distances)
        .collect()
}
