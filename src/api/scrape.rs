use crate::api::types::{ErrorResponse, ScrapeParams, ScrapeResponse};
use crate::app_config::AppConfig;
use crate::domain::ScrapeQuery;
use crate::tplc;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// `GET /scrape`
///
/// Invalid parameters are answered with 422. Anything that goes wrong while scraping still answers 200, with the
/// error message in `query.error` and no results.
#[instrument(skip_all)]
pub async fn scrape(State(config): State<Arc<AppConfig>>, params: Result<Query<ScrapeParams>, QueryRejection>) -> Response {
    let validated = match params {
        Ok(Query(params)) => ScrapeQuery::try_from(params).map_err(|e| e.to_string()),
        Err(rejection) => Err(rejection.body_text()),
    };
    let query = match validated {
        Ok(query) => query,
        Err(error) => {
            warn!("⚠️ Rejected scrape request: {}", error);
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorResponse { error })).into_response();
        }
    };

    info!(device_name = query.device_name(), min_year = query.min_year(), "▶️ Scrape requested");
    let response = match tplc::scrape(&config, &query).await {
        Ok(results) => ScrapeResponse::succeeded(&query, results),
        Err(e) => {
            warn!("⚠️ Scrape failed: {}", e);
            ScrapeResponse::failed(&query, e.to_string())
        }
    };

    Json(response).into_response()
}
