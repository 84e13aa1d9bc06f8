use anyhow::{Context, Result};
use async_trait::async_trait;
use nasa_common::{Photo, SearchResult};
use std::time::Duration;

/// What a view session needs from the gallery backend.
#[async_trait]
pub trait GalleryBackend: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
    async fn mars_photos(&self) -> Result<Vec<Photo>>;
    async fn mars_weather(&self) -> Result<serde_json::Value>;
}

/// HTTP client for a running nasa-backend.
///
/// `reqwest::Client` pools connections internally, so clones share them.
#[derive(Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        let status = response.status();
        if !status.is_success() {
            // The backend answers failures with {"error": "..."}
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or_else(|| status.to_string());
            anyhow::bail!("Backend returned HTTP {} for {}: {}", status.as_u16(), path, message);
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }
}

#[async_trait]
impl GalleryBackend for BackendClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let path = format!("/api/search?q={}", urlencoding::encode(query));
        self.get_json(&path).await
    }

    async fn mars_photos(&self) -> Result<Vec<Photo>> {
        self.get_json("/api/mars-photos").await
    }

    async fn mars_weather(&self) -> Result<serde_json::Value> {
        self.get_json("/api/mars-weather").await
    }
}
