//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{Port, Route, RouteId};
use crate::planner::{JourneyFilter, Planner, rank_journeys};
use crate::routes::{RouteError, RouteRepository};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes", get(list_routes).post(add_route))
        .route("/routes/:id", put(update_route).delete(delete_route))
        .route("/journeys", get(list_journeys))
        .route("/journeys/exact", post(exact_journey))
        .route("/journeys/shortest", get(shortest_journey))
        .route("/journeys/filter", post(filter_journeys))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every route.
async fn list_routes(State(state): State<AppState>) -> Json<RouteListResponse> {
    let repo = state.routes.read().await;
    let routes = repo.routes().iter().map(RouteResult::from_route).collect();
    Json(RouteListResponse { routes })
}

/// Add a route.
async fn add_route(
    State(state): State<AppState>,
    Json(req): Json<RouteRequest>,
) -> Result<(StatusCode, Json<RouteResult>), AppError> {
    let mut repo = state.routes.write().await;
    let route = repo.add_route(req.origin, req.destination, req.duration)?;
    Ok((StatusCode::CREATED, Json(RouteResult::from_route(&route))))
}

/// Replace the route with the given id.
async fn update_route(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(req): Json<RouteRequest>,
) -> Result<Json<RouteResult>, AppError> {
    let route = Route::new(
        RouteId(id),
        Port::from(req.origin),
        Port::from(req.destination),
        req.duration,
    )
    .map_err(RouteError::from)?;

    let mut repo = state.routes.write().await;
    let route = repo.update_route(route)?;
    Ok(Json(RouteResult::from_route(&route)))
}

/// Delete the route with the given id.
async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<StatusCode, AppError> {
    let mut repo = state.routes.write().await;
    repo.delete_route(RouteId(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Compose a journey along an exact list of ports.
async fn exact_journey(
    State(state): State<AppState>,
    Json(req): Json<ExactJourneyRequest>,
) -> Result<Json<JourneyResult>, AppError> {
    if req.ports.is_empty() {
        return Err(AppError::BadRequest {
            message: "at least one port is required".to_string(),
        });
    }

    let ports = req.ports();
    let journey = plan(&state, move |planner| planner.compose_exact_journey(&ports)).await??;

    Ok(Json(JourneyResult::from_journey(&journey)))
}

/// List every journey between two ports, best first.
async fn list_journeys(
    State(state): State<AppState>,
    Query(query): Query<JourneyQuery>,
) -> Result<Json<JourneyListResponse>, AppError> {
    let (origin, destination) = (Port::from(query.origin), Port::from(query.destination));

    let journeys = plan(&state, move |planner| {
        rank_journeys(planner.enumerate_journeys(&origin, &destination))
    })
    .await?;

    Ok(Json(JourneyListResponse::from_journeys(&journeys)))
}

/// Find the shortest journey between two ports.
async fn shortest_journey(
    State(state): State<AppState>,
    Query(query): Query<JourneyQuery>,
) -> Result<Json<JourneyResult>, AppError> {
    let (origin, destination) = (Port::from(query.origin), Port::from(query.destination));
    let message = format!("no journey from {origin} to {destination}");

    let journey = plan(&state, move |planner| {
        planner.find_shortest_journey(&origin, &destination)
    })
    .await?
    .ok_or(AppError::NotFound { message })?;

    Ok(Json(JourneyResult::from_journey(&journey)))
}

/// List the journeys between two ports that pass a filter, best first.
async fn filter_journeys(
    State(state): State<AppState>,
    Json(req): Json<FilterJourneyRequest>,
) -> Result<Json<JourneyListResponse>, AppError> {
    let (origin, destination) = (Port::from(req.origin), Port::from(req.destination));
    let filter = JourneyFilter::from(req.filter);

    let journeys = plan(&state, move |planner| {
        rank_journeys(planner.filter_journeys(&origin, &destination, filter))
    })
    .await?;

    Ok(Json(JourneyListResponse::from_journeys(&journeys)))
}

/// Run a planner query on the blocking pool.
///
/// The query works on a copy of the routes taken under the read lock, so it
/// sees one consistent graph and writers are not held up while it runs.
async fn plan<T, F>(state: &AppState, query: F) -> Result<T, AppError>
where
    F: FnOnce(&Planner<'_, RouteRepository>) -> T + Send + 'static,
    T: Send + 'static,
{
    let routes = state.routes.read().await.clone();
    let config = state.config.clone();

    tokio::task::spawn_blocking(move || query(&Planner::new(&routes, &config)))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("journey search failed: {e}"),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        let message = e.to_string();
        match e {
            RouteError::NotFound { .. } | RouteError::DoesNotExist(_) => {
                AppError::NotFound { message }
            }
            RouteError::AlreadyExists { .. } => AppError::Conflict { message },
            RouteError::Invalid(_) => AppError::BadRequest { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
