use log::debug;
use num_traits::Zero;

use crate::algorithm::traits::{ShortestPathEngine, ShortestPathTree};
use crate::graph::traits::{Graph, Weight};

/// Dijkstra's algorithm with linear-scan vertex selection.
///
/// Selection picks the first unvisited vertex carrying the minimum
/// distance, so on ties the lowest index wins. That policy is part of the
/// observable contract (it fixes which of several equal-cost paths gets
/// reported) and is why no priority queue is used here: a heap would
/// reorder ties. The scan is O(n) per round, O(n^2) total, which is the
/// right shape for the small dense matrices this crate targets.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra engine
    pub fn new() -> Self {
        Dijkstra
    }
}

/// Linear scan over unvisited vertices for the smallest finite distance.
/// Strict `<` keeps the first-found minimum, so ties go to the lowest
/// index. Returns `None` when every unvisited vertex is still infinite.
fn min_distance<W: Weight>(distances: &[Option<W>], visited: &[bool]) -> Option<(usize, W)> {
    let mut best: Option<(usize, W)> = None;
    for (v, dist) in distances.iter().enumerate() {
        if visited[v] {
            continue;
        }
        if let Some(dist) = *dist {
            match best {
                Some((_, min)) if dist >= min => {}
                _ => best = Some((v, dist)),
            }
        }
    }
    best
}

impl<W, G> ShortestPathEngine<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_path_tree(&self, graph: &G, source: usize) -> ShortestPathTree<W> {
        let n = graph.vertex_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];

        distances[source] = Some(W::zero());

        // n - 1 rounds finalize every reachable vertex; the early break
        // fires as soon as the reachable component is exhausted
        for _ in 1..n {
            let (u, dist_u) = match min_distance(&distances, &visited) {
                Some(found) => found,
                None => break,
            };
            visited[u] = true;
            debug!("finalized vertex {} at distance {:?}", u, dist_u);

            for (v, weight) in graph.neighbors(u) {
                if visited[v] {
                    continue;
                }
                // A sum past the weight type's range is indistinguishable
                // from infinity, so it can never improve a finite distance
                let candidate = match dist_u.checked_add(&weight) {
                    Some(candidate) => candidate,
                    None => continue,
                };
                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };
                if improves {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                }
            }
        }

        ShortestPathTree {
            source,
            distances,
            predecessors,
        }
    }
}
