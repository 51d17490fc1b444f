use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::ProviderError;
use crate::domain::guides::NewAttraction;
use crate::domain::providers::AttractionGenerator;

pub const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const USER_AGENT: &str = "Cityguide/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const ATTRACTIONS_PROMPT: &str = r#"Always respond with JSON following this schema:
[
  {
    "name": string,
    "description": string,
    "tags": string[]
  },
  ...
]

Return ONLY the JSON array, no other text."#;

/// Attraction generation through the OpenRouter chat-completions API.
///
/// One call per cache miss; the reply is expected to be a JSON array of
/// attraction records, possibly wrapped in markdown fences or prose.
pub struct OpenRouterGenerator {
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl OpenRouterGenerator {
    pub fn new(client: reqwest::Client, url: String, api_key: String, model: String) -> Self {
        Self {
            client,
            url,
            api_key,
            model,
        }
    }

    async fn chat(&self, prompt: &str) -> Result<String, ProviderError> {
        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: ATTRACTIONS_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post(&self.url)
            .header("User-Agent", USER_AGENT)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(REQUEST_TIMEOUT)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("OpenRouter request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "(unreadable body)".to_string());
            return Err(ProviderError::Transport(format!(
                "OpenRouter returned status {status}: {body}"
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            ProviderError::Malformed(format!("failed to parse OpenRouter response: {e}"))
        })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(ProviderError::Malformed(
                "OpenRouter returned an empty response".to_string(),
            ));
        }

        Ok(content)
    }
}

#[async_trait]
impl AttractionGenerator for OpenRouterGenerator {
    async fn generate(
        &self,
        city: &str,
        flavor: &str,
    ) -> Result<Vec<NewAttraction>, ProviderError> {
        let prompt = format!("What are the top 10 attractions in {city}, be very {flavor}");
        let content = self.chat(&prompt).await?;
        let json = extract_json(&content);

        serde_json::from_str(json).map_err(|e| {
            ProviderError::Malformed(format!("generation output is not an attraction array: {e}"))
        })
    }
}

/// Extract a JSON array from a model response that may contain markdown
/// fences (```json ... ```) or surrounding prose.
fn extract_json(raw: &str) -> &str {
    let trimmed = raw.trim();

    // Strip ```json ... ``` or ``` ... ``` fences
    if let Some(after) = trimmed.strip_prefix("```json")
        && let Some(inner) = after.strip_suffix("```")
    {
        return inner.trim();
    }
    if let Some(after) = trimmed.strip_prefix("```")
        && let Some(inner) = after.strip_suffix("```")
    {
        return inner.trim();
    }

    // Find the first '[' and last ']' to extract the JSON array
    if let (Some(start), Some(end)) = (trimmed.find('['), trimmed.rfind(']'))
        && start < end
    {
        return &trimmed[start..=end];
    }

    trimmed
}

// --- OpenRouter API types ---

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}
