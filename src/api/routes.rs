use crate::api::{health, scrape};
use crate::app_config::AppConfig;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/scrape", get(scrape::scrape))
        .route("/health", get(health::health))
        .with_state(config)
        .layer(TraceLayer::new_for_http())
}
