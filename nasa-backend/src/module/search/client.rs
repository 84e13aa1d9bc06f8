///! Image search client
use nasa_common::SearchResult;

use super::types::SearchResponse;
use crate::error::FetchError;
use crate::module::upstream::fetch_json;

/// Results kept from one search.
pub const MAX_RESULTS: usize = 3;

#[derive(Debug, Clone)]
pub struct ImageQueryClient {
    client: reqwest::Client,
    base_url: String,
}

impl ImageQueryClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn request_url(&self, query: &str) -> String {
        format!("{}?q={}", self.base_url, urlencoding::encode(query))
    }

    /// Run one search and reduce the first [`MAX_RESULTS`] hits.
    ///
    /// Any failure yields an error and no partial results.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, FetchError> {
        let url = self.request_url(query);
        tracing::debug!("Searching images: {}", url);

        let response: SearchResponse = fetch_json(&self.client, &url).await?;
        let results = response.into_results(MAX_RESULTS);

        tracing::info!("Search '{}' returned {} results", query, results.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use std::collections::HashMap;

    async fn spawn_upstream(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/search", addr)
    }

    fn items_for(query: &str, count: usize) -> serde_json::Value {
        let items: Vec<serde_json::Value> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "data": [{"title": format!("{} #{}", query, i)}],
                    "links": [{"href": format!("https://images-assets.nasa.gov/{}.jpg", i)}],
                })
            })
            .collect();
        serde_json::json!({ "collection": { "items": items } })
    }

    #[test]
    fn test_request_url_encodes_query() {
        let client = ImageQueryClient::new(reqwest::Client::new(), "https://images-api.nasa.gov/search");
        assert_eq!(
            client.request_url("hubble nebula & more"),
            "https://images-api.nasa.gov/search?q=hubble%20nebula%20%26%20more"
        );
    }

    #[tokio::test]
    async fn test_search_returns_first_three_in_order() {
        let app = Router::new().route(
            "/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let q = params.get("q").cloned().unwrap_or_default();
                Json(items_for(&q, 5))
            }),
        );
        let base = spawn_upstream(app).await;

        let client = ImageQueryClient::new(reqwest::Client::new(), base);
        let results = client.search("hubble nebula").await.unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "hubble nebula #0");
        assert_eq!(results[1].title, "hubble nebula #1");
        assert_eq!(results[2].title, "hubble nebula #2");
        assert_eq!(results[2].image_url, "https://images-assets.nasa.gov/2.jpg");
    }

    #[tokio::test]
    async fn test_search_failure_has_no_partial_results() {
        let app = Router::new().route(
            "/search",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_upstream(app).await;

        let client = ImageQueryClient::new(reqwest::Client::new(), base);
        assert!(matches!(
            client.search("falcon 9 launch").await,
            Err(FetchError::Upstream { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_a_network_error() {
        // Bind then drop to get a port nobody listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ImageQueryClient::new(reqwest::Client::new(), format!("http://{}/search", addr));
        assert!(matches!(
            client.search("hubble galaxy").await,
            Err(FetchError::Network { .. })
        ));
    }
}
