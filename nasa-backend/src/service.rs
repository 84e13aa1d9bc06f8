//! HTTP service: routes, shared state and handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use nasa_common::SearchResult;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::BackendConfig;
use crate::module::mars::MarsPhotoClient;
use crate::module::search::ImageQueryClient;
use crate::module::upstream::build_http_client;
use crate::module::weather::WeatherProxy;

pub const PHOTOS_ERROR_MESSAGE: &str = "Failed to fetch Mars photos";

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Services>,
}

struct Services {
    search: ImageQueryClient,
    photos: MarsPhotoClient,
    weather: WeatherProxy,
    started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(search: ImageQueryClient, photos: MarsPhotoClient, weather: WeatherProxy) -> Self {
        Self {
            inner: Arc::new(Services {
                search,
                photos,
                weather,
                started_at: Utc::now(),
            }),
        }
    }

    /// Wire all upstream clients from the config, sharing one HTTP client.
    pub fn from_config(config: &BackendConfig) -> anyhow::Result<Self> {
        let client = build_http_client(config.request_timeout())?;
        Ok(Self::new(
            ImageQueryClient::new(client.clone(), &config.search_url),
            MarsPhotoClient::from_config(client.clone(), config),
            WeatherProxy::new(client, &config.weather_url),
        ))
    }
}

/// Build the application router.
pub fn create_router(state: AppState, enable_cors: bool) -> Router {
    let api = Router::new()
        .route("/mars-weather", get(mars_weather))
        .route("/search", get(search_images))
        .route("/mars-photos", get(mars_photos));

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/stats", get(stats))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    }
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "running",
        "service": "nasa-backend",
        "version": env!("CARGO_PKG_VERSION"),
        "started_at": state.inner.started_at.to_rfc3339(),
        "sol": state.inner.photos.sol(),
    }))
}

async fn mars_weather(State(state): State<AppState>) -> Response {
    state.inner.weather.relay().await
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

async fn search_images(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let Some(query) = params.q.filter(|q| !q.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Missing query parameter 'q'" })),
        )
            .into_response();
    };

    let results: Vec<SearchResult> = match state.inner.search.search(&query).await {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("Error fetching NASA images for '{}': {}", query, e);
            Vec::new()
        }
    };
    Json(results).into_response()
}

/// Failures answer 502 so clients can tell them from an empty gallery.
async fn mars_photos(State(state): State<AppState>) -> Response {
    match state.inner.photos.fetch_gallery().await {
        Ok(gallery) => Json(gallery).into_response(),
        Err(e) => {
            tracing::error!("Error fetching Mars photos: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": PHOTOS_ERROR_MESSAGE })),
            )
                .into_response()
        }
    }
}
