///! Mars Rover Photos API client
use nasa_common::Photo;

use super::selector::select_photos;
use super::types::PhotosResponse;
use crate::config::BackendConfig;
use crate::error::FetchError;
use crate::module::upstream::fetch_json;

/// Client for the photo list of one rover on one sol.
#[derive(Debug, Clone)]
pub struct MarsPhotoClient {
    client: reqwest::Client,
    base_url: String,
    sol: u32,
    api_key_env: String,
}

impl MarsPhotoClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, sol: u32, api_key_env: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            sol,
            api_key_env: api_key_env.into(),
        }
    }

    pub fn from_config(client: reqwest::Client, config: &BackendConfig) -> Self {
        Self::new(client, &config.photos_url, config.sol, &config.api_key_env)
    }

    pub fn sol(&self) -> u32 {
        self.sol
    }

    /// Read the key at call time. A missing key is sent empty and left for
    /// the upstream to reject.
    fn api_key(&self) -> String {
        std::env::var(&self.api_key_env).unwrap_or_default()
    }

    fn request_url(&self) -> String {
        format!(
            "{}?sol={}&api_key={}",
            self.base_url,
            self.sol,
            urlencoding::encode(&self.api_key())
        )
    }

    /// Every well-formed photo for the sol, in upstream order.
    pub async fn fetch_photos(&self) -> Result<Vec<Photo>, FetchError> {
        let url = self.request_url();
        let response: PhotosResponse = fetch_json(&self.client, &url).await?;
        let photos = response.into_photos();

        tracing::debug!("Fetched {} photos for sol {}", photos.len(), self.sol);
        Ok(photos)
    }

    /// The hand-picked gallery for the sol.
    pub async fn fetch_gallery(&self) -> Result<Vec<Photo>, FetchError> {
        let photos = self.fetch_photos().await?;
        let fetched = photos.len();
        let gallery = select_photos(photos);

        tracing::info!(
            "Selected {} of {} photos for sol {}",
            gallery.len(),
            fetched,
            self.sol
        );
        Ok(gallery)
    }
}
