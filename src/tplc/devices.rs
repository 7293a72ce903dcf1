use crate::domain::{DeviceResult, SearchResultLink};
use crate::extensions::url_ext::QueryParams;
use crate::parser::parse_device_page;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument, warn};
use url::Url;

/// Device pages only report on events from `min_report_year` onwards.
pub fn ensure_min_year(url: &Url, min_year: u16) -> Url {
    url.with_query_param("min_report_year", &min_year.to_string())
}

#[instrument(skip_all, fields(url = %link.url))]
pub async fn scrape_device(client: &Client, link: &SearchResultLink, min_year: u16) -> Result<DeviceResult, ScrapeDeviceError> {
    let url = ensure_min_year(&link.url, min_year);
    info!(fallback_name = %link.name, "Scraping device {}", url);

    let html = client.get(url.clone()).send().await?.error_for_status()?.text().await?;
    Ok(parse_device_page(&html, &url, Some(&link.name)))
}

/// Scrapes the device pages one by one, pausing `delay` after each page. Devices that fail to load are left out.
#[instrument(skip_all, fields(devices = links.len()))]
pub async fn scrape_devices(client: &Client, links: &[SearchResultLink], min_year: u16, delay: Duration) -> Vec<DeviceResult> {
    info!("📄 Scraping devices...");
    let mut results = Vec::with_capacity(links.len());

    for link in links {
        match scrape_device(client, link, min_year).await {
            Ok(result) => results.push(result),
            Err(e) => {
                warn!("⚠️ Skipping device '{}': {}", link.name, e);
                continue;
            }
        }
        tokio::time::sleep(delay).await;
    }

    info!("📄 Scraping devices... OK, {} scraped, {} skipped", results.len(), links.len() - results.len());
    results
}

#[derive(Error, Debug)]
pub enum ScrapeDeviceError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
