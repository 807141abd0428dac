use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use tracing::{debug, info};

use crate::error::{Error, Result};

const USPTO_BASE_URL: &str = "https://www.uspto.gov";
const LISTING_PATH: &str =
    "/patent/laws-and-regulations/patent-term-extension/patent-terms-extended-under-35-usc-156";

/// Where the listing lives and how to identify ourselves.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub base_url: String,
    pub path: String,
    /// www.uspto.gov answers 403 to requests without a User-Agent.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: USPTO_BASE_URL.to_string(),
            path: LISTING_PATH.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path)
    }
}

/// Single-shot GET of the listing page. No retries, no timeout.
pub struct Fetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        Self::with_config(FetchConfig::default())
    }

    pub fn with_config(config: FetchConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch the page and return its body as text.
    pub async fn fetch(&self) -> Result<String> {
        let url = self.config.url();
        info!("Fetching extension listing: {}", url);

        let mut response = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            debug!(bytes = chunk.len(), "received chunk");
            body.extend_from_slice(&chunk);
        }
        info!("Received {} bytes", body.len());

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
