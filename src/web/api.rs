use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{PathResult, ShortestPathEngine};
use crate::graph::generators::{generate_connected_graph, generate_random_graph};
use crate::graph::matrix::MatrixGraph;
use crate::graph::traits::Graph;
use crate::labels::Notation;
use crate::web::models::*;

/// Largest graph a web request may create. The matrix representation
/// allocates vertex_count^2 weights, so the boundary has to bound it the
/// same way the stdin loader bounds its input.
pub const MAX_WEB_VERTICES: usize = 1_000;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: &str, message: String) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
        }),
    )
}

fn session_not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "session_not_found".to_string(),
            message: "Session not found".to_string(),
        }),
    )
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/random", post(random_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/paths/:session_id", post(query_path))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Create a graph from an explicit edge list
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<CreateGraphRequest>,
) -> Result<Json<Session>, ApiError> {
    check_vertex_count(request.vertex_count)?;

    // Validate through the builder so endpoint and weight checks apply
    let edges: Vec<(usize, usize, u64)> = request
        .edges
        .iter()
        .map(|e| (e.source, e.target, e.weight))
        .collect();
    let graph = MatrixGraph::from_edges(request.vertex_count, &edges)
        .map_err(|e| bad_request("invalid_graph", e.to_string()))?;

    let session = Session::new(graph_to_web(&graph));
    let session_id = session.id;

    {
        let mut sessions = state.sessions.lock().unwrap();
        sessions.insert(session_id, session.clone());
    }

    Ok(Json(session))
}

/// Create a random graph
pub async fn random_graph(
    State(state): State<AppState>,
    Json(request): Json<RandomGraphRequest>,
) -> Result<Json<Session>, ApiError> {
    check_vertex_count(request.vertex_count)?;
    if request.max_weight == 0 {
        return Err(bad_request(
            "invalid_parameters",
            "max_weight must be positive".to_string(),
        ));
    }

    let graph = if request.connected {
        generate_connected_graph(request.vertex_count, request.edge_factor, request.max_weight)
    } else {
        generate_random_graph(request.vertex_count, request.edge_factor, request.max_weight)
    };

    let session = Session::new(graph_to_web(&graph));
    let session_id = session.id;

    {
        let mut sessions = state.sessions.lock().unwrap();
        sessions.insert(session_id, session.clone());
    }

    Ok(Json(session))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let sessions = state.sessions.lock().unwrap();

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.graph.clone())),
        None => Err(session_not_found()),
    }
}

/// Run a shortest-path query on a stored graph
pub async fn query_path(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PathRequest>,
) -> Result<Json<PathResponse>, ApiError> {
    let web_graph = {
        let sessions = state.sessions.lock().unwrap();
        match sessions.get(&session_id) {
            Some(session) => session.graph.clone(),
            None => return Err(session_not_found()),
        }
    };

    let graph = web_to_graph(&web_graph)
        .map_err(|e| bad_request("invalid_graph", e.to_string()))?;

    for endpoint in [request.source, request.destination] {
        if !graph.has_vertex(endpoint) {
            return Err(bad_request(
                "invalid_endpoint",
                format!("Vertex {} is not in the graph", endpoint),
            ));
        }
    }

    let notation = match request.notation.as_deref() {
        None | Some("one-based") => Notation::OneBased,
        Some("letters") => Notation::Letters,
        Some(other) => {
            return Err(bad_request(
                "invalid_notation",
                format!("Unknown notation: {}", other),
            ));
        }
    };

    let engine = Dijkstra::new();
    let start_time = Instant::now();
    let result = engine.shortest_path(&graph, request.source, request.destination);
    let execution_time = start_time.elapsed();

    let response = match result {
        PathResult::Route(route) => PathResponse {
            execution_id: Uuid::new_v4(),
            source: request.source,
            destination: request.destination,
            reachable: true,
            cost: Some(route.cost),
            rendered: Some(notation.format_path(&route.vertices)),
            path: Some(route.vertices),
            execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        },
        PathResult::Unreachable => PathResponse {
            execution_id: Uuid::new_v4(),
            source: request.source,
            destination: request.destination,
            reachable: false,
            cost: None,
            path: None,
            rendered: None,
            execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        },
    };

    // Update session with result
    {
        let mut sessions = state.sessions.lock().unwrap();
        if let Some(session) = sessions.get_mut(&session_id) {
            session.last_result = Some(response.clone());
        }
    }

    Ok(Json(response))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<Uuid>>, ApiError> {
    let sessions = state.sessions.lock().unwrap();
    let session_ids: Vec<Uuid> = sessions.keys().cloned().collect();
    Ok(Json(session_ids))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let sessions = state.sessions.lock().unwrap();

    match sessions.get(&session_id) {
        Some(session) => Ok(Json(session.clone())),
        None => Err(session_not_found()),
    }
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn check_vertex_count(vertex_count: usize) -> Result<(), ApiError> {
    if vertex_count == 0 || vertex_count > MAX_WEB_VERTICES {
        return Err(bad_request(
            "invalid_vertex_count",
            format!(
                "vertex_count must be between 1 and {}, got {}",
                MAX_WEB_VERTICES, vertex_count
            ),
        ));
    }
    Ok(())
}

fn graph_to_web(graph: &MatrixGraph<u64>) -> WebGraph {
    let nodes = (0..graph.vertex_count())
        .map(|i| WebNode {
            id: i,
            label: Notation::OneBased.label(i),
        })
        .collect();

    // Emit each undirected edge once, from its lower endpoint
    let mut links = Vec::new();
    for u in 0..graph.vertex_count() {
        for (v, weight) in graph.neighbors(u) {
            if u < v {
                links.push(WebEdge {
                    source: u,
                    target: v,
                    weight,
                });
            }
        }
    }

    WebGraph { nodes, links }
}

fn web_to_graph(web_graph: &WebGraph) -> crate::Result<MatrixGraph<u64>> {
    let edges: Vec<(usize, usize, u64)> = web_graph
        .links
        .iter()
        .map(|e| (e.source, e.target, e.weight))
        .collect();
    MatrixGraph::from_edges(web_graph.nodes.len(), &edges)
}
