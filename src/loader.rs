//! Edge-list input loading.
//!
//! The expected token stream (whitespace-separated, newlines included) is:
//! vertex count, edge count, then one `u v w` triple per edge, then the
//! source and destination vertices. Vertex names use a [`Notation`]
//! (1-based numbers by default), weights are plain non-negative integers.
//!
//! All input validation lives here: the engine downstream never sees an
//! out-of-range vertex, a negative weight, or an asymmetric matrix.
//! Zero-weight triples and self-loops carry no information in the matrix
//! representation and are skipped with a warning rather than rejected.

use std::io::BufRead;

use log::warn;

use crate::graph::matrix::MatrixGraph;
use crate::graph::traits::GraphBuilder;
use crate::labels::Notation;
use crate::{Error, Result};

/// Largest vertex count the stock loader accepts. A configuration limit
/// inherited from the original fixed-size layout, not an engine
/// requirement; use [`load_query_with_limit`] to change it.
pub const DEFAULT_VERTEX_LIMIT: usize = 10;

/// A fully validated problem instance, ready for the engine
#[derive(Debug, Clone)]
pub struct PathQuery {
    pub graph: MatrixGraph<u64>,
    pub source: usize,
    pub destination: usize,
}

/// Whitespace-token scanner over any buffered reader.
///
/// Reads line by line and hands out one token at a time, so interactive
/// input (several values on one line, or one per line) both work.
pub struct TokenReader<R: BufRead> {
    reader: R,
    pending: Vec<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            pending: Vec::new(),
        }
    }

    /// Returns the next whitespace-separated token
    pub fn next_token(&mut self) -> Result<String> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| Error::ParseInput(format!("read failed: {}", e)))?;
            if read == 0 {
                return Err(Error::ParseInput("unexpected end of input".to_string()));
            }
            // Queue in reverse so pop() yields left-to-right order
            self.pending = line.split_whitespace().rev().map(str::to_string).collect();
        }
        Ok(self.pending.pop().unwrap_or_default())
    }

    /// Returns the next token parsed as a signed integer
    pub fn next_int(&mut self) -> Result<i64> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| Error::ParseInput(format!("expected an integer, got {:?}", token)))
    }
}

/// Reads and validates the vertex count against `limit`
pub fn read_vertex_count<R: BufRead>(tokens: &mut TokenReader<R>, limit: usize) -> Result<usize> {
    let n = tokens.next_int()?;
    if n < 1 || n as usize > limit {
        return Err(Error::InvalidVertexCount(n.max(0) as usize, limit));
    }
    Ok(n as usize)
}

/// Reads and validates the edge count
pub fn read_edge_count<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<usize> {
    let m = tokens.next_int()?;
    if m < 0 {
        return Err(Error::ParseInput(format!("negative edge count: {}", m)));
    }
    Ok(m as usize)
}

/// Reads `edge_count` triples `u v w` and builds the symmetric matrix.
///
/// Endpoints are parsed in `notation` and must name existing vertices;
/// weights must be non-negative. A zero weight means "no edge" in the
/// matrix, so such triples (and self-loops) are skipped, not stored.
pub fn read_edges<R: BufRead>(
    tokens: &mut TokenReader<R>,
    notation: Notation,
    vertex_count: usize,
    edge_count: usize,
) -> Result<MatrixGraph<u64>> {
    let mut graph = MatrixGraph::new(vertex_count);

    for _ in 0..edge_count {
        let a = notation.parse(&tokens.next_token()?, vertex_count)?;
        let b = notation.parse(&tokens.next_token()?, vertex_count)?;
        let weight = tokens.next_int()?;

        if weight < 0 {
            return Err(Error::InvalidEdge(a, b, weight));
        }
        if weight == 0 {
            warn!("ignoring zero-weight edge {} {}", a, b);
            continue;
        }
        if a == b {
            warn!("ignoring self-loop on vertex {}", a);
            continue;
        }
        graph.add_edge(a, b, weight as u64)?;
    }

    Ok(graph)
}

/// Reads one endpoint in `notation`, validated against the vertex count
pub fn read_endpoint<R: BufRead>(
    tokens: &mut TokenReader<R>,
    notation: Notation,
    vertex_count: usize,
) -> Result<usize> {
    notation.parse(&tokens.next_token()?, vertex_count)
}

/// Loads a complete problem instance with the default vertex limit
pub fn load_query<R: BufRead>(reader: R, notation: Notation) -> Result<PathQuery> {
    load_query_with_limit(reader, notation, DEFAULT_VERTEX_LIMIT)
}

/// Loads a complete problem instance: vertex count, edge count, edges,
/// source, destination.
pub fn load_query_with_limit<R: BufRead>(
    reader: R,
    notation: Notation,
    limit: usize,
) -> Result<PathQuery> {
    let mut tokens = TokenReader::new(reader);

    let vertex_count = read_vertex_count(&mut tokens, limit)?;
    let edge_count = read_edge_count(&mut tokens)?;
    let graph = read_edges(&mut tokens, notation, vertex_count, edge_count)?;
    let source = read_endpoint(&mut tokens, notation, vertex_count)?;
    let destination = read_endpoint(&mut tokens, notation, vertex_count)?;

    Ok(PathQuery {
        graph,
        source,
        destination,
    })
}
