use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Answer cross-origin requests from any origin
    #[serde(default = "default_enable_cors")]
    pub enable_cors: bool,

    /// Timeout applied to every upstream request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// NASA Image and Video Library search endpoint (`?q=` is appended)
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Mars Rover Photos endpoint for a single rover
    #[serde(default = "default_photos_url")]
    pub photos_url: String,

    /// Weather endpoint relayed by `/api/mars-weather`
    #[serde(default = "default_weather_url")]
    pub weather_url: String,

    /// Martian solar day the gallery is pinned to
    #[serde(default = "default_sol")]
    pub sol: u32,

    /// Name of the environment variable holding the NASA API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_enable_cors() -> bool {
    true
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_search_url() -> String {
    "https://images-api.nasa.gov/search".to_string()
}

fn default_photos_url() -> String {
    "https://api.nasa.gov/mars-photos/api/v1/rovers/curiosity/photos".to_string()
}

fn default_weather_url() -> String {
    "https://api.maas2.apis.prod.nasa.gov/weather".to_string()
}

fn default_sol() -> u32 {
    3495
}

fn default_api_key_env() -> String {
    "NASA_API_KEY".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            enable_cors: default_enable_cors(),
            request_timeout_secs: default_request_timeout_secs(),
            search_url: default_search_url(),
            photos_url: default_photos_url(),
            weather_url: default_weather_url(),
            sol: default_sol(),
            api_key_env: default_api_key_env(),
        }
    }
}

pub static CONFIG: OnceLock<BackendConfig> = OnceLock::new();

/// Load the config file into [`CONFIG`] and return it.
pub fn read_config(path: &str) -> anyhow::Result<&'static BackendConfig> {
    let config = BackendConfig::from_file(path)?;
    Ok(CONFIG.get_or_init(|| config))
}

impl BackendConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;
        Self::parse(&content).with_context(|| format!("Failed to parse config file '{}'", path))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: BackendConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = BackendConfig::parse("").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.sol, 3495);
        assert_eq!(config.api_key_env, "NASA_API_KEY");
        assert_eq!(config.server_address(), "0.0.0.0:3000");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_override() {
        let config = BackendConfig::parse(
            r#"
            port = 8080
            log_level = "debug"
            weather_url = "http://127.0.0.1:9999/weather"
            "#,
        )
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.weather_url, "http://127.0.0.1:9999/weather");
        assert_eq!(config.search_url, "https://images-api.nasa.gov/search");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(BackendConfig::parse("port = \"not a number\"").is_err());
        assert!(BackendConfig::from_file("does/not/exist.toml").is_err());
    }
}
