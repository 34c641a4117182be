use std::io::Cursor;

use minpath::graph::Graph;
use minpath::loader::{load_query, load_query_with_limit};
use minpath::{Dijkstra, Error, Notation, PathResult, ShortestPathEngine};

#[test]
fn loads_the_reference_scenario() {
    let input = "4\n4\n1 2 1\n2 3 2\n1 3 4\n3 4 1\n1\n4\n";
    let query = load_query(Cursor::new(input), Notation::OneBased).unwrap();

    assert_eq!(query.graph.vertex_count(), 4);
    assert_eq!(query.graph.edge_count(), 4);
    assert_eq!(query.source, 0);
    assert_eq!(query.destination, 3);

    let result = Dijkstra::new().shortest_path(&query.graph, query.source, query.destination);
    match result {
        PathResult::Route(route) => {
            assert_eq!(route.cost, 4);
            assert_eq!(Notation::OneBased.format_path(&route.vertices), "1 -> 2 -> 3 -> 4");
        }
        PathResult::Unreachable => panic!("scenario graph is connected"),
    }
}

#[test]
fn tokens_may_share_or_split_lines() {
    let one_per_line = "3 2 1 2 5 2 3 5 1 3";
    let query = load_query(Cursor::new(one_per_line), Notation::OneBased).unwrap();
    assert_eq!(query.graph.edge_count(), 2);
    assert_eq!((query.source, query.destination), (0, 2));
}

#[test]
fn rejects_vertex_count_out_of_bounds() {
    assert!(matches!(
        load_query(Cursor::new("0\n0\n1\n1\n"), Notation::OneBased),
        Err(Error::InvalidVertexCount(0, 10))
    ));
    assert!(matches!(
        load_query(Cursor::new("11\n0\n1\n1\n"), Notation::OneBased),
        Err(Error::InvalidVertexCount(11, 10))
    ));
}

#[test]
fn vertex_limit_is_configurable() {
    let mut input = String::from("12\n11\n");
    for v in 1..12 {
        input.push_str(&format!("{} {} 1\n", v, v + 1));
    }
    input.push_str("1\n12\n");

    let query = load_query_with_limit(Cursor::new(&input), Notation::OneBased, 50).unwrap();
    let result = Dijkstra::new().shortest_path(&query.graph, query.source, query.destination);
    assert_eq!(result.cost(), Some(11));
}

#[test]
fn rejects_negative_weight() {
    let input = "3\n1\n1 2 -5\n1\n3\n";
    assert!(matches!(
        load_query(Cursor::new(input), Notation::OneBased),
        Err(Error::InvalidEdge(0, 1, -5))
    ));
}

#[test]
fn rejects_edge_with_unknown_vertex() {
    let input = "3\n1\n1 4 2\n1\n3\n";
    assert!(matches!(
        load_query(Cursor::new(input), Notation::OneBased),
        Err(Error::InvalidEndpoint(v)) if v == "4"
    ));
}

// The error must name the vertex in the notation it was typed in
#[test]
fn rejects_out_of_range_endpoint_by_external_name() {
    let input = "3\n1\n1 2 2\n1\n9\n";
    assert!(matches!(
        load_query(Cursor::new(input), Notation::OneBased),
        Err(Error::InvalidEndpoint(v)) if v == "9"
    ));

    let input = "3\n0\nA\nD\n";
    assert!(matches!(
        load_query(Cursor::new(input), Notation::Letters),
        Err(Error::InvalidEndpoint(v)) if v == "D"
    ));
}

#[test]
fn skips_zero_weight_and_self_loop_edges() {
    let input = "3\n3\n1 2 0\n2 2 7\n2 3 4\n1\n3\n";
    let query = load_query(Cursor::new(input), Notation::OneBased).unwrap();

    assert_eq!(query.graph.edge_count(), 1);
    assert!(!query.graph.has_edge(0, 1));
    assert!(!query.graph.has_edge(1, 1));
    assert!(query.graph.has_edge(1, 2));
}

#[test]
fn rejects_truncated_input() {
    let input = "3\n2\n1 2 5\n";
    assert!(matches!(
        load_query(Cursor::new(input), Notation::OneBased),
        Err(Error::ParseInput(_))
    ));
}

#[test]
fn rejects_non_numeric_tokens() {
    let input = "3\nlots\n";
    assert!(matches!(
        load_query(Cursor::new(input), Notation::OneBased),
        Err(Error::ParseInput(_))
    ));
}

#[test]
fn letter_notation_end_to_end() {
    let input = "3\n2\nA B 5\nB C 5\nA\nC\n";
    let query = load_query(Cursor::new(input), Notation::Letters).unwrap();

    let result = Dijkstra::new().shortest_path(&query.graph, query.source, query.destination);
    match result {
        PathResult::Route(route) => {
            assert_eq!(route.cost, 10);
            assert_eq!(Notation::Letters.format_path(&route.vertices), "A -> B -> C");
        }
        PathResult::Unreachable => panic!("letter graph is connected"),
    }
}
