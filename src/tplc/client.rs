use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

/// Builds the HTTP session for one scrape. The cookie store carries the TPLC form state between the search requests.
pub fn new_client(config: &AppConfig) -> Result<Client, TplcClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_str(config.tplc().user_agent())?);

    let client = Client::builder()
        .default_headers(headers)
        .timeout(config.tplc().timeout())
        .cookie_store(true)
        .build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum TplcClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("TPLC client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}
