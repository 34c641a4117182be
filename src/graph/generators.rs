use rand::prelude::*;

use crate::graph::matrix::MatrixGraph;
use crate::graph::traits::{Graph, GraphBuilder};

/// Generates a random undirected graph with roughly `edge_factor * n` edges
/// and weights in `1..=max_weight`.
///
/// Self-loops are skipped; duplicate picks overwrite the previous weight,
/// so the resulting edge count may be slightly below the target.
pub fn generate_random_graph(
    vertex_count: usize,
    edge_factor: f64,
    max_weight: u64,
) -> MatrixGraph<u64> {
    assert!(vertex_count > 0, "vertex_count must be positive");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = MatrixGraph::new(vertex_count);
    let mut rng = rand::thread_rng();

    let target_edges = (edge_factor * vertex_count as f64) as usize;

    for _ in 0..target_edges {
        let a = rng.gen_range(0..vertex_count);
        let b = rng.gen_range(0..vertex_count);
        if a != b {
            let weight = rng.gen_range(1..=max_weight);
            // Endpoints are in range and distinct, so this cannot fail
            let _ = graph.add_edge(a, b, weight);
        }
    }

    graph
}

/// Generates a random connected undirected graph: a random spanning tree
/// first, then extra edges up to roughly `edge_factor * n` total.
pub fn generate_connected_graph(
    vertex_count: usize,
    edge_factor: f64,
    max_weight: u64,
) -> MatrixGraph<u64> {
    assert!(vertex_count > 0, "vertex_count must be positive");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = MatrixGraph::new(vertex_count);
    let mut rng = rand::thread_rng();

    // Spanning tree: attach each vertex to a random earlier one
    for v in 1..vertex_count {
        let parent = rng.gen_range(0..v);
        let weight = rng.gen_range(1..=max_weight);
        let _ = graph.add_edge(v, parent, weight);
    }

    // A simple graph on n vertices holds at most n(n-1)/2 edges; clamping
    // the target keeps the top-up loop terminating on tiny vertex counts
    let max_edges = vertex_count * (vertex_count - 1) / 2;
    let target_edges = ((edge_factor * vertex_count as f64) as usize).min(max_edges);
    while graph.edge_count() < target_edges {
        let a = rng.gen_range(0..vertex_count);
        let b = rng.gen_range(0..vertex_count);
        if a == b || graph.has_edge(a, b) {
            continue;
        }
        let weight = rng.gen_range(1..=max_weight);
        let _ = graph.add_edge(a, b, weight);
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_graph_has_no_self_loops() {
        let graph = generate_random_graph(20, 3.0, 50);
        for v in 0..20 {
            assert!(!graph.has_edge(v, v));
        }
    }

    #[test]
    fn connected_graph_handles_tiny_vertex_counts() {
        // A single vertex admits no edges; the edge target must clamp to
        // zero instead of spinning forever looking for a fresh pair
        let graph = generate_connected_graph(1, 2.0, 100);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);

        // Two vertices saturate at one edge no matter the factor
        let graph = generate_connected_graph(2, 10.0, 5);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn connected_graph_reaches_every_vertex() {
        let graph = generate_connected_graph(30, 2.0, 10);

        // BFS from vertex 0 must visit everything
        let mut seen = vec![false; 30];
        let mut queue = std::collections::VecDeque::from([0usize]);
        seen[0] = true;
        while let Some(u) = queue.pop_front() {
            for (v, _) in graph.neighbors(u) {
                if !seen[v] {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }
        assert!(seen.iter().all(|&s| s), "spanning tree must connect all vertices");
    }
}
