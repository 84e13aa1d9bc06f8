use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Base URL of a running nasa-backend
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64, // in seconds

    /// Directory for the rolling log files
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout_secs(),
            log_dir: default_log_dir(),
        }
    }
}

impl FrontendConfig {
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: FrontendConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub static CONFIG: OnceLock<FrontendConfig> = OnceLock::new();

pub fn read_config(path: &str) -> anyhow::Result<&'static FrontendConfig> {
    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path))?;
    let config = FrontendConfig::parse(&config_str)
        .with_context(|| format!("Failed to parse config file {}", path))?;

    Ok(CONFIG.get_or_init(|| config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FrontendConfig::parse("").unwrap();
        assert_eq!(config.backend_url, "http://127.0.0.1:3000");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.log_dir, "logs");
    }

    #[test]
    fn test_override_backend_url() {
        let config = FrontendConfig::parse("backend_url = \"http://gallery.local:8080\"\nlog_level = \"debug\"").unwrap();
        assert_eq!(config.backend_url, "http://gallery.local:8080");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read_config("no-such-frontend-config.toml").is_err());
    }
}
