//! HTTP route handlers.

use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::{StopId, random_seat_map};
use crate::matcher::{SearchEngine, SearchRequest, rank_matches};

use super::dto::*;
use super::state::AppState;

/// Seats shown on the placeholder seat map.
const SEATS_PER_BUS: usize = 40;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/search", post(search_form))
        .route("/api/search", get(search_query))
        .route("/api/stops/search", get(search_stops))
        .route("/api/stops/:stop_id", get(get_stop))
        .route("/bus/:bus_id/seats", get(bus_seats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search submitted as a form.
async fn search_form(
    State(state): State<AppState>,
    Form(params): Form<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    run_search(&state, params).await.map(Json)
}

/// Search submitted as a query string.
async fn search_query(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    run_search(&state, params).await.map(Json)
}

async fn run_search(state: &AppState, params: SearchParams) -> Result<SearchResponse, AppError> {
    let source = params.source.trim();
    let destination = params.destination.trim();

    if source.is_empty() || destination.is_empty() {
        return Err(AppError::BadRequest {
            message: "source and destination are required".to_string(),
        });
    }

    let snapshot = state.feed.snapshot().await;
    let engine = SearchEngine::new(&state.schedule, state.seats.as_ref(), &state.config);
    let result = engine.search(&SearchRequest::new(source, destination), &snapshot);

    info!(
        source,
        destination,
        vehicles = snapshot.len(),
        matches = result.matches.len(),
        sorted = params.sort,
        "bus search"
    );

    let response = if params.sort {
        let ranked = rank_matches(result.matches.clone());
        SearchResponse::new(&params, &result, &ranked)
    } else {
        SearchResponse::new(&params, &result, &result.matches)
    };

    Ok(response)
}

/// Search stops by name.
async fn search_stops(
    State(state): State<AppState>,
    Query(req): Query<StopSearchRequest>,
) -> Json<StopSearchResponse> {
    let query = req.q.trim();
    if query.is_empty() {
        return Json(StopSearchResponse { stops: Vec::new() });
    }

    let limit = req.limit.unwrap_or(10).min(50);
    let stops = state
        .schedule
        .find_stops_by_name(query)
        .into_iter()
        .take(limit)
        .map(StopResult::from_stop)
        .collect();

    Json(StopSearchResponse { stops })
}

/// Look up a stop by id.
async fn get_stop(
    State(state): State<AppState>,
    Path(stop_id): Path<String>,
) -> Result<Json<StopResult>, AppError> {
    state
        .schedule
        .stop(&StopId::new(stop_id.as_str()))
        .map(|stop| Json(StopResult::from_stop(stop)))
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown stop: {stop_id}"),
        })
}

/// Placeholder seat map for a bus.
async fn bus_seats(Path(bus_id): Path<String>) -> Json<SeatMapResponse> {
    Json(SeatMapResponse::new(bus_id, random_seat_map(SEATS_PER_BUS)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(status = status.as_u16(), %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
