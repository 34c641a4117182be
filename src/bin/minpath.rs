//! Interactive shortest-path query over stdin.
//!
//! Prompts for a small undirected weighted graph as an edge list, then for
//! two endpoints, and reports the minimum cost and the path between them.
//! Vertices are 1-based on the outside (pass `--letters` for `A..J`
//! naming); internally everything is 0-based.

use std::io::{self, BufReader, Write};
use std::process::ExitCode;

use minpath::loader::{
    read_edge_count, read_edges, read_endpoint, read_vertex_count, TokenReader,
    DEFAULT_VERTEX_LIMIT,
};
use minpath::{Dijkstra, Notation, PathResult, ShortestPathEngine};

fn prompt(text: &str) {
    print!("{}", text);
    let _ = io::stdout().flush();
}

fn run(notation: Notation) -> minpath::Result<()> {
    let stdin = io::stdin();
    let mut tokens = TokenReader::new(BufReader::new(stdin.lock()));

    prompt(&format!("Number of vertices (1 to {}): ", DEFAULT_VERTEX_LIMIT));
    let vertex_count = read_vertex_count(&mut tokens, DEFAULT_VERTEX_LIMIT)?;

    prompt("Number of edges: ");
    let edge_count = read_edge_count(&mut tokens)?;

    println!();
    println!("Enter each edge as: u v weight");
    match notation {
        Notation::OneBased => println!("(vertices 1 to {})", vertex_count),
        Notation::Letters => println!("(vertices A to {})", notation.label(vertex_count - 1)),
    }
    println!();
    let graph = read_edges(&mut tokens, notation, vertex_count, edge_count)?;

    prompt(&format!(
        "Source vertex ({}..{}): ",
        notation.label(0),
        notation.label(vertex_count - 1)
    ));
    let source = read_endpoint(&mut tokens, notation, vertex_count)?;

    prompt(&format!(
        "Destination vertex ({}..{}): ",
        notation.label(0),
        notation.label(vertex_count - 1)
    ));
    let destination = read_endpoint(&mut tokens, notation, vertex_count)?;

    let result = Dijkstra::new().shortest_path(&graph, source, destination);

    println!();
    println!("===== RESULT =====");
    match result {
        PathResult::Unreachable => {
            println!(
                "No path exists between {} and {}.",
                notation.label(source),
                notation.label(destination)
            );
        }
        PathResult::Route(route) => {
            println!("Minimum cost: {}", route.cost);
            println!("Path: {}", notation.format_path(&route.vertices));
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let notation = if std::env::args().any(|a| a == "--letters") {
        Notation::Letters
    } else {
        Notation::OneBased
    };

    match run(notation) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
