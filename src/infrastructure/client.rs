use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use url::Url;

use crate::application::errors::ErrorResponse;
use crate::domain::guides::Guide;

/// Typed client for a running cityguide server, used by the CLI.
pub struct GuideClient {
    base_url: Url,
    http: Client,
}

impl GuideClient {
    pub fn new(base_url: Url) -> Result<Self> {
        let http = Client::builder()
            .user_agent("cityguide-cli/0.1")
            .build()
            .context("failed to configure HTTP client")?;

        Ok(Self { base_url, http })
    }

    pub fn from_base_url(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url).with_context(|| format!("invalid API url: {base_url}"))?;
        Self::new(url)
    }

    pub async fn fetch(&self, city: &str, flavor: &str) -> Result<Guide> {
        let response = self
            .http
            .get(self.base_url.clone())
            .query(&[("city", city), ("flavor", flavor)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.response_error(response).await);
        }

        response
            .json::<Guide>()
            .await
            .context("failed to deserialize guide")
    }

    async fn response_error(&self, response: reqwest::Response) -> anyhow::Error {
        let status = response.status();
        let bytes = response.bytes().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_slice::<ErrorResponse>(&bytes) {
            return anyhow!("request failed ({status}): {}", err.message);
        }

        let message = String::from_utf8_lossy(&bytes);
        anyhow!("request failed ({status}): {message}")
    }
}
