use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod modules;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use config::settings::AppConfig;
use infrastructure::storage::s3::StorageService;
use infrastructure::transcoder::ffmpeg::FfmpegTranscoder;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting server...");

    let config = AppConfig::new().context("Failed to load configuration")?;
    let storage = StorageService::new(&config);
    let transcoder = FfmpegTranscoder::new(config.ffmpeg_path.clone())?;
    let port = config.server_port;

    info!(staging_dir = %config.staging_dir.display(), "Staging uploads locally");
    let state = AppState::new(config, Arc::new(storage), Arc::new(transcoder));

    let app = app::create_app(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
