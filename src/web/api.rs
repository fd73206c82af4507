use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use ordered_float::OrderedFloat;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{EventRecorder, ShortestPathAlgorithm};
use crate::graph::io::{from_document, Network};
use crate::web::models::*;
use crate::Error;

/// Shared application state
///
/// The served network is immutable; every request computes into its own
/// tables, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub network: Arc<Network>,
}

impl AppState {
    pub fn new(network: Network) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/network", get(get_network))
        .route("/api/network/route", post(route_on_network))
        .route("/api/routes", post(plan_route))
}

/// Render handoff of the served network
pub async fn get_network(State(state): State<AppState>) -> Json<WebGraph> {
    Json(WebGraph::from_graph(state.network.as_ref(), None, None))
}

/// Route between two locations of the served network
pub async fn route_on_network(
    State(state): State<AppState>,
    Json(request): Json<NetworkRouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    run_route(&state.network, &request.source, request.target.as_deref()).map(Json)
}

/// Route over a network supplied with the request
pub async fn plan_route(
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let graph = from_document(request.graph);
    run_route(&graph, &request.source, request.target.as_deref()).map(Json)
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Runs one query and packages it for the client
///
/// An unreachable target is not an error here: the response carries the
/// full distance table, no path, and a message saying why.
pub fn run_route(
    graph: &Network,
    source: &str,
    target: Option<&str>,
) -> Result<RouteResponse, ApiError> {
    let dijkstra = Dijkstra::new();
    let mut recorder: EventRecorder<String, OrderedFloat<f64>> = EventRecorder::new();

    let start_time = Instant::now();
    let result = dijkstra
        .compute_shortest_paths_observed(graph, &source.to_string(), &mut recorder)
        .map_err(|e| error_response(&e))?;
    let execution_time = start_time.elapsed();

    let (path, message) = match target {
        None => (None, None),
        Some(target) => match result.path_to(&target.to_string()) {
            Ok(path) => (Some(path), None),
            Err(e @ Error::NoPathFound { .. }) => {
                log::info!("{}", e);
                (None, Some(e.to_string()))
            }
            Err(e) => return Err(error_response(&e)),
        },
    };

    let distances = result
        .distances
        .iter()
        .map(|(vertex, d)| (vertex.clone(), Some(d.into_inner()).filter(|d| d.is_finite())))
        .collect();
    let animation_steps = recorder
        .events()
        .iter()
        .enumerate()
        .map(|(i, event)| AnimationStep::from_event(i, event))
        .collect();

    Ok(RouteResponse {
        execution_id: Uuid::new_v4(),
        algorithm: <Dijkstra as ShortestPathAlgorithm<String, OrderedFloat<f64>, Network>>::name(
            &dijkstra,
        )
        .to_string(),
        source: source.to_string(),
        target: target.map(str::to_string),
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        created_at: chrono::Utc::now(),
        distances,
        predecessors: result.predecessors.clone(),
        total_distance: path.as_ref().map(|p| p.distance.into_inner()),
        graph: WebGraph::from_graph(graph, Some(&result), path.as_ref()),
        path: path.map(|p| p.vertices),
        message,
        animation_steps,
    })
}

fn error_response(err: &Error) -> ApiError {
    let (status, code) = match err {
        Error::InvalidSource(_) => (StatusCode::BAD_REQUEST, "invalid_source"),
        Error::UnknownVertex(_) => (StatusCode::BAD_REQUEST, "unknown_vertex"),
        Error::NegativeWeight { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "negative_weight"),
        Error::NoPathFound { .. } => (StatusCode::NOT_FOUND, "no_path"),
        Error::Parse(_) => (StatusCode::BAD_REQUEST, "invalid_graph"),
        Error::Io(_) | Error::AlgorithmError(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "algorithm_execution_failed")
        }
    };
    log::warn!("Route query failed: {}", err);

    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
            details: None,
        }),
    )
}
