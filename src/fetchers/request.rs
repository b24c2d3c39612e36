use crate::error::ExtractError;
use log::debug;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; RecipeLdBot/1.0)";

/// Fetches page bodies over HTTP.
#[derive(Debug, Clone)]
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>, user_agent: Option<&str>) -> Result<Self, ExtractError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch the body of `url`; non-success statuses and empty bodies are errors.
    pub async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!("Fetched {} with status {}", url, status);
        if !status.is_success() {
            return Err(ExtractError::UpstreamStatus(status.as_u16()));
        }

        let html = response.text().await?;
        if html.is_empty() {
            return Err(ExtractError::EmptyBody);
        }
        Ok(html)
    }
}
