//! HTTP route handlers.

use std::path::Path;

use axum::{
    Json, Router,
    extract::{Path as UrlPath, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::arrivals::ArrivalsError;
use crate::cost::{CostBreakdown, CostError, estimate_cost};
use crate::domain::{Coordinate, Route, RouteOption, RouteType};
use crate::places::{DEFAULT_SUGGESTIONS, search_place, suggestions};
use crate::store::{StoreError, TravelPlan};

use super::dto::*;
use super::extract::{ApiJson, ApiQuery};
use super::state::AppState;

const MAX_SUGGESTIONS: usize = 20;

/// Create the application router.
///
/// When `static_dir` is given, unmatched paths are served from it.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/api/health", get(health))
        .route("/api/routes", get(routes))
        .route("/api/routes/options", get(route_options))
        .route("/api/arrivals/bus/:station", get(bus_arrivals))
        .route("/api/arrivals/subway/:station", get(subway_arrivals))
        .route("/api/cost", post(cost))
        .route("/api/places/search", get(place_search))
        .route("/api/places/suggest", get(place_suggest))
        .route(
            "/api/plan",
            get(load_plan).put(save_plan).delete(clear_plan),
        )
        .route(
            "/api/recent-searches",
            get(recent_searches).post(record_search),
        );

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Travel App API Server is running",
    })
}

/// The three synthesized routes between two points.
async fn routes(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RouteQuery>,
) -> Result<Json<Vec<Route>>, AppError> {
    let (origin, destination) = endpoints(&query)?;
    let routes = state.planner.generate_routes(&origin, &destination);
    Ok(Json(routes.into()))
}

/// The same routes anchored at the current time.
async fn route_options(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RouteQuery>,
) -> Result<Json<Vec<RouteOption>>, AppError> {
    let (origin, destination) = endpoints(&query)?;
    let options = state.planner.generate_route_options(&origin, &destination);
    Ok(Json(options.into()))
}

fn endpoints(query: &RouteQuery) -> Result<(Coordinate, Coordinate), AppError> {
    if !query.is_finite() {
        return Err(AppError::BadRequest {
            message: "coordinates must be finite numbers".to_string(),
        });
    }
    Ok((query.origin(), query.destination()))
}

async fn bus_arrivals(
    State(state): State<AppState>,
    UrlPath(station): UrlPath<String>,
) -> Result<Json<ArrivalsResponse<BusArrivalView>>, AppError> {
    let arrivals = state.arrivals.bus_arrivals(&station).await?;
    Ok(Json(ArrivalsResponse {
        arrivals: arrivals.iter().cloned().map(Into::into).collect(),
        station,
    }))
}

async fn subway_arrivals(
    State(state): State<AppState>,
    UrlPath(station): UrlPath<String>,
) -> Result<Json<ArrivalsResponse<SubwayArrivalView>>, AppError> {
    let arrivals = state.arrivals.subway_arrivals(&station).await?;
    Ok(Json(ArrivalsResponse {
        arrivals: arrivals.iter().cloned().map(Into::into).collect(),
        station,
    }))
}

/// Cost of one of the three options for a party.
async fn cost(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CostRequest>,
) -> Result<Json<CostBreakdown>, AppError> {
    let Some(route_type) = RouteType::from_route_id(&req.route_id) else {
        return Err(AppError::NotFound {
            message: format!("unknown route id: {}", req.route_id),
        });
    };

    let options = state.planner.generate_route_options(&req.from, &req.to);
    let [recommended, fastest, cheapest] = options;
    let option = match route_type {
        RouteType::Recommended => recommended,
        RouteType::Fastest => fastest,
        RouteType::Cheapest => cheapest,
    };

    let breakdown = estimate_cost(&option, req.participants, req.days, &state.rates)?;
    Ok(Json(breakdown))
}

async fn place_search(ApiQuery(query): ApiQuery<PlaceQuery>) -> Result<Json<Coordinate>, AppError> {
    search_place(&query.q)
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("no place matches {:?}", query.q),
        })
}

async fn place_suggest(ApiQuery(query): ApiQuery<PlaceQuery>) -> Json<SuggestionsResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_SUGGESTIONS);
    Json(SuggestionsResponse {
        suggestions: suggestions(&query.q, limit.min(MAX_SUGGESTIONS)),
    })
}

async fn load_plan(State(state): State<AppState>) -> Result<Json<TravelPlan>, AppError> {
    state
        .plans
        .load_plan()?
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: "no travel plan saved".to_string(),
        })
}

async fn save_plan(
    State(state): State<AppState>,
    ApiJson(plan): ApiJson<TravelPlan>,
) -> Result<Json<TravelPlan>, AppError> {
    if plan.participants == 0 {
        return Err(CostError::InvalidParty.into());
    }
    if plan.duration_days == 0 {
        return Err(CostError::InvalidDuration.into());
    }

    state.plans.save_plan(&plan)?;
    Ok(Json(plan))
}

async fn clear_plan(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.plans.clear_plan()?;
    Ok(StatusCode::NO_CONTENT)
}

async fn recent_searches(
    State(state): State<AppState>,
) -> Result<Json<RecentSearchesResponse>, AppError> {
    let searches = state.plans.recent_searches()?;
    Ok(Json(RecentSearchesResponse { searches }))
}

async fn record_search(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RecentSearchRequest>,
) -> Result<Json<RecentSearchesResponse>, AppError> {
    let searches = state.plans.record_search(&req.address)?;
    Ok(Json(RecentSearchesResponse { searches }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<ArrivalsError> for AppError {
    fn from(e: ArrivalsError) -> Self {
        match e {
            ArrivalsError::StationNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            ArrivalsError::Load { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<CostError> for AppError {
    fn from(e: CostError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
