use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::errors::ProviderError;
use crate::domain::providers::ImageProvider;

pub const WIKIPEDIA_SEARCH_URL: &str = "https://en.wikipedia.org/w/rest.php/v1/search/page";
const USER_AGENT: &str = "Cityguide/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Size token requested in place of the low-resolution default embedded in
/// Wikipedia thumbnail URLs.
const THUMBNAIL_SIZE: &str = "1024px";
const SOURCE_SIZE_TOKEN: &str = "60px";

/// Image lookup backed by the Wikipedia page-search REST API. The first
/// result's thumbnail, when present, is rewritten to a higher resolution.
pub struct WikipediaImageSearch {
    client: reqwest::Client,
    url: String,
}

impl WikipediaImageSearch {
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl ImageProvider for WikipediaImageSearch {
    async fn find_image(&self, query: &str) -> Result<Option<String>, ProviderError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("format", "json"), ("q", query)])
            .header("User-Agent", USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("image search request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ProviderError::Transport(format!(
                "image search returned status {}",
                response.status()
            )));
        }

        let results: SearchResponse = response.json().await.map_err(|e| {
            ProviderError::Malformed(format!("failed to parse image search response: {e}"))
        })?;

        Ok(first_thumbnail(results).map(|url| upscale_thumbnail(&url, THUMBNAIL_SIZE)))
    }
}

fn first_thumbnail(results: SearchResponse) -> Option<String> {
    results
        .pages
        .into_iter()
        .next()
        .and_then(|page| page.thumbnail)
        .and_then(|thumbnail| thumbnail.url)
}

/// Rewrite the embedded low-resolution size token (first occurrence only) to
/// request `size` instead. URLs without the token pass through unchanged.
fn upscale_thumbnail(url: &str, size: &str) -> String {
    url.replacen(SOURCE_SIZE_TOKEN, size, 1)
}

// --- Wikipedia API types ---

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    pages: Vec<PageResult>,
}

#[derive(Debug, Deserialize)]
struct PageResult {
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: Option<String>,
}
