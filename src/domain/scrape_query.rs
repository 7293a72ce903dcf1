use std::ops::RangeInclusive;
use thiserror::Error;

pub const MIN_YEAR_RANGE: RangeInclusive<i64> = 2010..=2025;
pub const LIMIT_RANGE: RangeInclusive<i64> = 1..=500;
pub const DEFAULT_MIN_YEAR: u16 = 2020;
pub const DEFAULT_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeQuery {
    device_name: String,
    product_code: Option<String>,
    min_year: u16,
    limit: Option<usize>,
}

impl ScrapeQuery {
    pub fn new(device_name: impl Into<String>, product_code: Option<String>, min_year: i64, limit: Option<i64>) -> Result<Self, QueryError> {
        let device_name = device_name.into();
        if device_name.trim().is_empty() {
            return Err(QueryError::MissingDeviceName);
        }

        if !MIN_YEAR_RANGE.contains(&min_year) {
            return Err(QueryError::MinYearOutOfRange(min_year));
        }

        let limit = match limit {
            Some(limit) if !LIMIT_RANGE.contains(&limit) => return Err(QueryError::LimitOutOfRange(limit)),
            Some(limit) => Some(limit as usize),
            None => None,
        };

        Ok(ScrapeQuery {
            device_name,
            product_code: product_code.filter(|code| !code.trim().is_empty()),
            min_year: min_year as u16,
            limit,
        })
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    pub fn product_code(&self) -> Option<&str> {
        self.product_code.as_deref()
    }

    pub fn min_year(&self) -> u16 {
        self.min_year
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum QueryError {
    #[error("deviceName is required")]
    MissingDeviceName,
    #[error("minYear must be between {lo} and {hi}, got {0}", lo = MIN_YEAR_RANGE.start(), hi = MIN_YEAR_RANGE.end())]
    MinYearOutOfRange(i64),
    #[error("limit must be between {lo} and {hi}, got {0}", lo = LIMIT_RANGE.start(), hi = LIMIT_RANGE.end())]
    LimitOutOfRange(i64),
}
