use crate::app_config::AppConfig;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod app_config;
mod domain;
mod extensions;
mod parser;
mod tplc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load()?);
    info!("✅  Loaded configuration");

    let listener = TcpListener::bind(config.server().listen_addr()).await?;
    info!("🔥 {} is up and running on http://{}", env!("CARGO_PKG_NAME"), listener.local_addr()?);

    axum::serve(listener, api::create_router(config)).await?;

    Ok(())
}
