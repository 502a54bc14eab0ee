//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde_json::Value;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use crate::opendata::{Dataset, OpenDataError};

use super::dto::*;
use super::route_table::{ROUTES, RouteEntry, RouteTarget, View, route_name};
use super::state::AppState;
use super::templates::*;

/// Rows shown in the home page's station table.
const BUSIEST_STATIONS: usize = 20;

/// Create the application router.
///
/// Pages come from [`ROUTES`]; `static_dir` is the path to the static
/// assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/api/datasets/:name", get(dataset))
        .route("/api/places/:place/coordinates", get(place_coordinates))
        .route("/api/places/:place/language", get(place_language))
        .nest_service("/static", ServeDir::new(static_dir));

    ROUTES
        .iter()
        .fold(api, register_page)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Hand one route entry to axum. The catch-all becomes the fallback.
fn register_page(router: Router<AppState>, entry: &'static RouteEntry) -> Router<AppState> {
    match entry.target {
        RouteTarget::Redirect(to) => {
            router.route(entry.path, get(move || async move { Redirect::permanent(to) }))
        }
        RouteTarget::View(view) if entry.is_catch_all() => router
            .fallback(move |State(state): State<AppState>, uri: Uri| serve_view(view, state, uri)),
        RouteTarget::View(view) => router.route(
            entry.path,
            get(move |State(state): State<AppState>, uri: Uri| serve_view(view, state, uri)),
        ),
    }
}

async fn serve_view(view: View, state: AppState, uri: Uri) -> Response {
    match view {
        View::Home => {
            let query = Query::<HomeQuery>::try_from_uri(&uri)
                .map(|Query(q)| q)
                .unwrap_or_default();
            home_page(&state, &query).await
        }
        View::NotFound => not_found_page(&uri),
    }
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Home page: busiest stations, plus the place lookup when requested.
async fn home_page(state: &AppState, query: &HomeQuery) -> Response {
    let opendata = &state.opendata;

    let (stations, place) = match query.place() {
        Some(place) => {
            let (stations, coordinates, language) = tokio::join!(
                opendata.load_main_stations(),
                opendata.load_coordinates(place),
                opendata.load_language(place),
            );
            if let Err(e) = &coordinates {
                warn!(place, error = %e, "geocoding failed");
            }
            if let Err(e) = &language {
                warn!(place, error = %e, "language lookup failed");
            }
            (stations, Some(PlaceView::new(place, coordinates, language)))
        }
        None => (opendata.load_main_stations().await, None),
    };

    let (stations, stations_error) = match stations {
        Ok(payload) => (StationUsageView::busiest(&payload, BUSIEST_STATIONS), None),
        Err(e) => {
            warn!(error = %e, "failed to load station statistics");
            (Vec::new(), Some(e.to_string()))
        }
    };

    let template = HomeTemplate {
        title: route_name(View::Home).unwrap_or("Home"),
        stations,
        stations_error,
        place_query: query.place().unwrap_or_default().to_string(),
        place,
    };
    render(StatusCode::OK, &template)
}

/// 404 page for every path without a route.
fn not_found_page(uri: &Uri) -> Response {
    debug!(path = uri.path(), "no route");
    let template = NotFoundTemplate {
        title: route_name(View::NotFound).unwrap_or("NotFound"),
        path: uri.path().to_string(),
    };
    render(StatusCode::NOT_FOUND, &template)
}

fn render(status: StatusCode, template: &impl Template) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => AppError::Internal {
            message: format!("Template error: {e}"),
        }
        .into_response(),
    }
}

/// Raw payload of a fixed-endpoint dataset.
async fn dataset(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, AppError> {
    let dataset = name.parse::<Dataset>().map_err(|e| AppError::NotFound {
        message: e.to_string(),
    })?;
    let payload = state.opendata.load_dataset(dataset).await?;
    Ok(Json(payload))
}

/// Raw geocoding payload for a place.
async fn place_coordinates(
    State(state): State<AppState>,
    Path(place): Path<String>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(state.opendata.load_coordinates(&place).await?))
}

/// Raw language-map payload for a place.
async fn place_language(
    State(state): State<AppState>,
    Path(place): Path<String>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(state.opendata.load_language(&place).await?))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<OpenDataError> for AppError {
    fn from(e: OpenDataError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound { message } => {
                debug!(%message, "not found");
                (StatusCode::NOT_FOUND, message)
            }
            AppError::Upstream { message } => {
                warn!(%message, "upstream failure");
                (StatusCode::BAD_GATEWAY, message)
            }
            AppError::Internal { message } => {
                error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
