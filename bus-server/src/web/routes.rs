//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::StopId;
use crate::planner::{Planner, SearchRequest, TransferFilter, apply_view};
use crate::store::load_network;

use super::dto::*;
use super::state::AppState;

/// Default number of stop suggestions.
const DEFAULT_SUGGESTIONS: usize = 10;

/// Upper bound on stop suggestions per request.
const MAX_SUGGESTIONS: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stops", get(search_stops))
        .route("/api/stops/:id/routes", get(stop_routes))
        .route("/api/search", get(search_itineraries))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Suggest stops by name or nearby landmark.
async fn search_stops(
    State(state): State<AppState>,
    Query(req): Query<StopSearchRequest>,
) -> Json<StopSearchResponse> {
    let limit = req.limit.unwrap_or(DEFAULT_SUGGESTIONS).min(MAX_SUGGESTIONS);
    let network = load_network(state.store.as_ref()).await;

    let stops = network
        .suggest_stops(&req.q, limit)
        .into_iter()
        .map(StopResult::from_stop)
        .collect();

    Json(StopSearchResponse { stops })
}

/// List the routes that call at a stop.
async fn stop_routes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StopRoutesResponse>, AppError> {
    let stop_id = StopId::new(id);
    let network = load_network(state.store.as_ref()).await;

    let stop = network.stop(&stop_id).ok_or_else(|| AppError::NotFound {
        message: format!("Unknown stop: {stop_id}"),
    })?;

    let routes = network
        .routes_serving(&stop_id)
        .iter()
        .map(|r| RouteResult::from_route(r))
        .collect();

    Ok(Json(StopRoutesResponse {
        stop: StopResult::from_stop(stop),
        routes,
    }))
}

/// Find itineraries between two stops.
async fn search_itineraries(
    State(state): State<AppState>,
    Query(req): Query<SearchItinerariesRequest>,
) -> Result<Json<SearchItinerariesResponse>, AppError> {
    let from = required_stop(req.from.as_deref(), "from")?;
    let to = required_stop(req.to.as_deref(), "to")?;

    let network = load_network(state.store.as_ref()).await;
    let request = SearchRequest::new(from, to);
    let ranked = Planner::new(&network, &state.config).search(&request);

    let filter = req.filter.map(TransferFilter::from).unwrap_or_default();
    let itineraries = apply_view(ranked, filter, req.sort.map(Into::into))
        .iter()
        .map(ItineraryResult::from_itinerary)
        .collect();

    Ok(Json(SearchItinerariesResponse { itineraries }))
}

/// Parse a required, non-blank stop id query parameter.
fn required_stop(value: Option<&str>, name: &str) -> Result<StopId, AppError> {
    match value.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(StopId::new(id)),
        _ => Err(AppError::BadRequest {
            message: format!("Missing '{name}' stop id"),
        }),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
