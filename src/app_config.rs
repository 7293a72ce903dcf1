use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    server: Server,
    tplc: Tplc,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("TPLC").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn tplc(&self) -> &Tplc {
        &self.tplc
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    listen_addr: String,
}

impl Server {
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }
}

#[derive(Debug, Deserialize)]
pub struct Tplc {
    url: Url,
    user_agent: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    /// Pause after each device page, to stay polite towards the FDA servers.
    #[serde(with = "humantime_serde")]
    request_delay: Duration,
    page_size: u32,
}

impl Tplc {
    /// The `tplc.cfm` script that serves the search form, the result list and the device pages.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                server: Server {
                    listen_addr: "127.0.0.1:0".to_string(),
                },
                tplc: Tplc {
                    url: Url::parse("https://www.accessdata.fda.gov/scripts/cdrh/cfdocs/cfTPLC/tplc.cfm").unwrap(),
                    user_agent: "Mozilla/5.0 (compatible; TPLC-Scraper/1.0)".to_string(),
                    timeout: Duration::from_secs(5),
                    request_delay: Duration::ZERO,
                    page_size: 500,
                },
            },
        }
    }

    /// Points the TPLC script at `{base_url}/scripts/cdrh/cfdocs/cfTPLC/tplc.cfm`, typically a mock server.
    pub fn tplc_base_url(mut self, base_url: String) -> Self {
        self.config.tplc.url = Url::parse(&format!("{}/scripts/cdrh/cfdocs/cfTPLC/tplc.cfm", base_url)).unwrap();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
