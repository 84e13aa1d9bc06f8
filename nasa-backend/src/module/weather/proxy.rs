///! Relays the upstream weather document unchanged
use axum::{
    body::Bytes,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::error::FetchError;
use crate::module::upstream::fetch_bytes;

pub const WEATHER_ERROR_MESSAGE: &str = "Failed to fetch Mars weather";

#[derive(Debug, Clone)]
pub struct WeatherProxy {
    client: reqwest::Client,
    url: String,
}

impl WeatherProxy {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub async fn fetch(&self) -> Result<Bytes, FetchError> {
        fetch_bytes(&self.client, &self.url).await
    }

    /// 200 with the upstream body, or 500 with a generic error body.
    pub async fn relay(&self) -> Response {
        match self.fetch().await {
            Ok(body) => {
                tracing::debug!("Relaying {} bytes of Mars weather", body.len());
                (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response()
            }
            Err(e) => {
                tracing::error!("Error fetching Mars weather: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": WEATHER_ERROR_MESSAGE })),
                )
                    .into_response()
            }
        }
    }
}
