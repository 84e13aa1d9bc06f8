//! Shared plumbing for the NASA upstream clients.

use anyhow::Context;
use axum::body::Bytes;
use std::time::Duration;

use crate::error::FetchError;

/// Build the reqwest client shared by every upstream call.
pub fn build_http_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("nasa-gallery/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}

/// Single GET; returns the body of a 2xx response.
///
/// Errors carry the URL with any `api_key` value masked.
pub async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Bytes, FetchError> {
    let shown = redact_api_key(url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::network(&shown, e.without_url()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Upstream {
            status: status.as_u16(),
            url: shown,
        });
    }

    response.bytes().await.map_err(|e| {
        // A timeout while streaming the body is still a transport failure
        if e.is_timeout() {
            FetchError::network(&shown, e.without_url())
        } else {
            FetchError::decode(&shown, e.without_url())
        }
    })
}

/// GET and decode a JSON body.
pub async fn fetch_json<T: serde::de::DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, FetchError> {
    let body = fetch_bytes(client, url).await?;
    serde_json::from_slice(&body).map_err(|e| FetchError::decode(&redact_api_key(url), e))
}

/// Mask the value of an `api_key` query parameter.
pub fn redact_api_key(url: &str) -> String {
    let Some(start) = url.find("api_key=").map(|i| i + "api_key=".len()) else {
        return url.to_string();
    };
    let end = url[start..].find('&').map_or(url.len(), |i| start + i);
    format!("{}***{}", &url[..start], &url[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_api_key() {
        assert_eq!(
            redact_api_key("https://api.nasa.gov/p?sol=3495&api_key=SECRET"),
            "https://api.nasa.gov/p?sol=3495&api_key=***"
        );
        assert_eq!(
            redact_api_key("https://api.nasa.gov/p?api_key=SECRET&sol=1"),
            "https://api.nasa.gov/p?api_key=***&sol=1"
        );
        assert_eq!(redact_api_key("https://images-api.nasa.gov/search?q=x"), "https://images-api.nasa.gov/search?q=x");
    }
}
