use crate::app_config::AppConfig;
use crate::domain::{DeviceResult, ScrapeQuery};
use crate::tplc::client::{TplcClientError, new_client};
use crate::tplc::devices::scrape_devices;
use crate::tplc::search::search_and_collect;
use crate::tplc::strategy::SearchError;
use thiserror::Error;
use tracing::instrument;

/// Searches the devices matching `query` and scrapes each device page, all within one HTTP session.
#[instrument(skip_all)]
pub async fn scrape(config: &AppConfig, query: &ScrapeQuery) -> Result<Vec<DeviceResult>, ScrapeError> {
    let client = new_client(config)?;
    let links = search_and_collect(&client, config, query).await?;
    Ok(scrape_devices(&client, &links, query.min_year(), config.tplc().request_delay()).await)
}

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error(transparent)]
    Client(#[from] TplcClientError),
    #[error(transparent)]
    Search(#[from] SearchError),
}
