use crate::domain::{ScrapeQuery, SearchResultLink};
use crate::parser::extract_device_links;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

/// One way of asking the TPLC script for a device result list.
#[async_trait]
pub trait SearchStrategy: Debug + Send + Sync {
    fn kind(&self) -> &'static str;

    async fn attempt(&self, client: &Client, endpoint: &Url) -> Result<Vec<SearchResultLink>, SearchError>;
}

/// Submits the search form with one guess of its field names.
#[derive(Debug, PartialEq)]
pub struct FormPost {
    fields: Vec<(&'static str, String)>,
}

impl FormPost {
    pub fn new(fields: Vec<(&'static str, String)>) -> Self {
        FormPost { fields }
    }

    /// The field name shapes the TPLC form has been seen to accept, most likely first.
    pub fn candidates(query: &ScrapeQuery) -> Vec<FormPost> {
        let product_code = query.product_code().unwrap_or_default().to_string();
        let device_name = query.device_name().to_string();
        let year = query.min_year().to_string();

        vec![
            FormPost::new(vec![
                ("devicename", device_name.clone()),
                ("productcode", product_code.clone()),
                ("regulationnumber", String::new()),
                ("min_report_year", year.clone()),
                ("search", "search".to_string()),
            ]),
            FormPost::new(vec![
                ("device", device_name.clone()),
                ("productcode", product_code.clone()),
                ("regulationnumber", String::new()),
                ("since", year.clone()),
                ("search", "search".to_string()),
            ]),
            FormPost::new(vec![
                ("Device", device_name),
                ("ProductCode", product_code),
                ("RegulationNumber", String::new()),
                ("Since", year),
                ("search", "search".to_string()),
            ]),
        ]
    }
}

#[async_trait]
impl SearchStrategy for FormPost {
    fn kind(&self) -> &'static str {
        "form post"
    }

    #[instrument(skip_all, fields(strategy = self.kind()))]
    async fn attempt(&self, client: &Client, endpoint: &Url) -> Result<Vec<SearchResultLink>, SearchError> {
        debug!(fields = ?self.fields, "POST search");
        let html = client.post(endpoint.clone()).form(&self.fields).send().await?.error_for_status()?.text().await?;
        Ok(extract_device_links(&html, endpoint))
    }
}

/// Requests the result list through its documented URL parameters.
#[derive(Debug, PartialEq)]
pub struct QueryGet {
    url: Url,
}

impl QueryGet {
    pub fn new(endpoint: &Url, query: &ScrapeQuery, page_size: u32) -> Self {
        let mut url = endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("devicename", query.device_name())
            .append_pair("productcode", query.product_code().unwrap_or_default())
            .append_pair("deviceclass", "")
            .append_pair("regulationnumber", "")
            .append_pair("min_report_year", &query.min_year().to_string())
            .append_pair("sortcolumn", "dn")
            .append_pair("start_search", "1")
            .append_pair("pagenum", &page_size.to_string());
        QueryGet { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl SearchStrategy for QueryGet {
    fn kind(&self) -> &'static str {
        "query get"
    }

    #[instrument(skip_all, fields(strategy = self.kind()))]
    async fn attempt(&self, client: &Client, endpoint: &Url) -> Result<Vec<SearchResultLink>, SearchError> {
        debug!(url = %self.url, "GET search");
        let html = client.get(self.url.clone()).send().await?.error_for_status()?.text().await?;
        Ok(extract_device_links(&html, endpoint))
    }
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    RequestError(#[from] reqwest::Error),
}
