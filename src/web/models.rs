use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a vertex in a stored graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: usize,
    pub label: String,
}

/// Represents an undirected edge in a stored graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub weight: u64,
}

/// Represents a complete graph as stored in a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

/// Request to create a graph from an explicit edge list
#[derive(Debug, Deserialize)]
pub struct CreateGraphRequest {
    pub vertex_count: usize,
    #[serde(default)]
    pub edges: Vec<WebEdge>,
}

/// Request to create a random graph
#[derive(Debug, Deserialize)]
pub struct RandomGraphRequest {
    pub vertex_count: usize,
    #[serde(default = "default_edge_factor")]
    pub edge_factor: f64,
    #[serde(default = "default_max_weight")]
    pub max_weight: u64,
    #[serde(default)]
    pub connected: bool,
}

fn default_edge_factor() -> f64 {
    2.0
}

fn default_max_weight() -> u64 {
    100
}

/// Request for a shortest-path query between two endpoints.
///
/// Endpoints are 0-based vertex ids; `notation` only controls how the
/// `rendered` field of the response is formatted (`"one-based"` or
/// `"letters"`).
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub source: usize,
    pub destination: usize,
    #[serde(default)]
    pub notation: Option<String>,
}

/// Response to a shortest-path query
#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub execution_id: Uuid,
    pub source: usize,
    pub destination: usize,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<usize>>,
    /// Arrow-joined path in the requested notation, e.g. `"1 -> 2 -> 4"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered: Option<String>,
    pub execution_time_ms: f64,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Session containing a stored graph and the latest query result
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub graph: WebGraph,
    pub last_result: Option<PathResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: WebGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            last_result: None,
            created_at: Utc::now(),
        }
    }
}
