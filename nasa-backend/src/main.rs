use nasa_backend::config;
use nasa_backend::logging;
use nasa_backend::service::{create_router, AppState};

use anyhow::{Context, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let config = config::read_config(&config_path)?;

    // Initialize logging
    let _logging_guard = logging::init_logging("logs", "nasa-backend", &config.log_level)?;

    tracing::info!("NASA backend starting...");
    tracing::info!(
        "Upstreams: search={}, photos={} (sol {}), weather={}",
        config.search_url,
        config.photos_url,
        config.sol,
        config.weather_url
    );
    if std::env::var(&config.api_key_env).is_err() {
        tracing::warn!("{} is not set; rover photo requests will be rejected upstream", config.api_key_env);
    }

    let state = AppState::from_config(config)?;
    let app = create_router(state, config.enable_cors);

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received.");
        })
        .await?;

    Ok(())
}
