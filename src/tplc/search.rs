use crate::app_config::AppConfig;
use crate::domain::{ScrapeQuery, SearchResultLink};
use crate::tplc::strategy::{FormPost, QueryGet, SearchError, SearchStrategy};
use reqwest::Client;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Finds the device detail links matching `query`.
///
/// The search form is posted with each [`FormPost::candidates`] shape until one returns links. Failing candidates are
/// skipped. When none of them returns anything the documented [`QueryGet`] URL is requested instead, and a failure
/// there is returned to the caller.
#[instrument(skip_all, fields(device_name = query.device_name(), min_year = query.min_year()))]
pub async fn search_and_collect(client: &Client, config: &AppConfig, query: &ScrapeQuery) -> Result<Vec<SearchResultLink>, SearchError> {
    info!("🔎 Searching devices...");
    let endpoint = config.tplc().url();
    warm_up(client, endpoint).await;

    let candidates = FormPost::candidates(query)
        .into_iter()
        .map(|candidate| Box::new(candidate) as Box<dyn SearchStrategy>)
        .collect::<Vec<_>>();

    let mut links = first_non_empty(client, endpoint, &candidates).await;
    if links.is_empty() {
        let fallback = QueryGet::new(endpoint, query, config.tplc().page_size());
        info!(url = %fallback.url(), "🔎 No links from the search form, falling back to the search URL");
        links = fallback.attempt(client, endpoint).await?;
    }

    if let Some(limit) = query.limit() {
        links.truncate(limit);
    }

    info!("🔎 Searching devices... OK, {} found", links.len());
    Ok(links)
}

/// Lets the session pick up the cookies of the search page. Failures only cost us those cookies.
async fn warm_up(client: &Client, endpoint: &Url) {
    if let Err(e) = client.get(endpoint.clone()).send().await.and_then(|response| response.error_for_status()) {
        debug!("Could not load the search page: {}", e);
    }
}

async fn first_non_empty(client: &Client, endpoint: &Url, strategies: &[Box<dyn SearchStrategy>]) -> Vec<SearchResultLink> {
    for strategy in strategies {
        match strategy.attempt(client, endpoint).await {
            Ok(links) if !links.is_empty() => return links,
            Ok(_) => debug!(strategy = strategy.kind(), "Search returned no device links"),
            Err(e) => warn!(strategy = strategy.kind(), "⚠️ Search attempt failed: {}", e),
        }
    }
    Vec::new()
}
