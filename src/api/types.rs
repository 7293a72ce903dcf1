use crate::domain::scrape_query::{DEFAULT_LIMIT, DEFAULT_MIN_YEAR};
use crate::domain::{DeviceResult, QueryError, ScrapeQuery};
use serde::{Deserialize, Serialize};

/// Raw `GET /scrape` parameters, validated into a [`ScrapeQuery`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeParams {
    device_name: Option<String>,
    product_code: Option<String>,
    min_year: Option<i64>,
    limit: Option<i64>,
}

impl TryFrom<ScrapeParams> for ScrapeQuery {
    type Error = QueryError;

    fn try_from(params: ScrapeParams) -> Result<Self, Self::Error> {
        ScrapeQuery::new(
            params.device_name.unwrap_or_default(),
            params.product_code,
            params.min_year.unwrap_or(DEFAULT_MIN_YEAR as i64),
            Some(params.limit.unwrap_or(DEFAULT_LIMIT as i64)),
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResponse {
    pub query: EchoedQuery,
    pub min_year: u16,
    pub results: Vec<DeviceResult>,
}

impl ScrapeResponse {
    pub fn succeeded(query: &ScrapeQuery, results: Vec<DeviceResult>) -> Self {
        ScrapeResponse {
            query: EchoedQuery::from(query),
            min_year: query.min_year(),
            results,
        }
    }

    pub fn failed(query: &ScrapeQuery, error: String) -> Self {
        ScrapeResponse {
            query: EchoedQuery {
                error: Some(error),
                ..EchoedQuery::from(query)
            },
            min_year: query.min_year(),
            results: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoedQuery {
    pub device_name: String,
    pub product_code: Option<String>,
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ScrapeQuery> for EchoedQuery {
    fn from(query: &ScrapeQuery) -> Self {
        EchoedQuery {
            device_name: query.device_name().to_string(),
            product_code: query.product_code().map(str::to_string),
            limit: query.limit(),
            error: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
