//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the chat-completion call behind `CompletionService` so the
//! pipelines can be driven by any implementation.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Value, json};
use tracing::info;

use crate::errors::BotError;

/// A language-model completion service.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send an ordered, role-tagged message list and return the first
    /// generated message.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached, rejects the call,
    /// or answers without content.
    async fn complete(&self, messages: Vec<ChatCompletionMessage>) -> Result<String, BotError>;
}

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Chat-completions client for `OpenAI`-compatible endpoints
pub struct LlmClient {
    http: Client,
    api_key: String,
    org_id: Option<String>,
    model_name: String,
    base_url: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(
        http: Client,
        api_key: String,
        org_id: Option<String>,
        model_name: String,
        base_url: String,
    ) -> Self {
        Self {
            http,
            api_key,
            org_id,
            model_name,
            base_url,
        }
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn headers(&self) -> Result<HeaderMap, BotError> {
        let mut headers = HeaderMap::new();
        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| BotError::ConfigError(format!("Invalid Authorization header: {e}")))?;
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(org) = &self.org_id {
            let org_value = HeaderValue::from_str(org).map_err(|e| {
                BotError::ConfigError(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl CompletionService for LlmClient {
    async fn complete(&self, prompt: Vec<ChatCompletionMessage>) -> Result<String, BotError> {
        #[cfg(feature = "debug-logs")]
        info!("Using chat prompt:\n{:?}", prompt);

        let estimated_input_tokens = prompt
            .iter()
            .map(|msg| estimate_tokens(&format!("{:?}", msg.content)))
            .sum::<usize>();

        info!(
            model = %self.model_name,
            messages = prompt.len(),
            estimated_input_tokens,
            "Requesting chat completion"
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": build_chat_messages(&prompt),
        });

        let response = self
            .http
            .post(self.endpoint())
            .headers(self.headers()?)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| BotError::TransportError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(BotError::CompletionError(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            BotError::CompletionError(format!("Failed to parse OpenAI response: {e}"))
        })?;

        first_choice_content(&response_json)
    }
}

/// Serialize the prompt into the chat-completions `messages` array.
#[must_use]
pub fn build_chat_messages(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .map(|msg| {
            let role_str = match msg.role {
                MessageRole::system => "system",
                MessageRole::user => "user",
                MessageRole::assistant => "assistant",
                MessageRole::function => "function",
                MessageRole::tool => "tool",
            };

            let content_val = match &msg.content {
                Content::Text(text) => json!(text),
                Content::ImageUrl(urls) => {
                    let url_objects: Vec<Value> = urls
                        .iter()
                        .filter_map(|u| {
                            u.image_url.as_ref().map(|img_url| {
                                json!({
                                    "type": "image_url",
                                    "image_url": { "url": img_url.url }
                                })
                            })
                        })
                        .collect();
                    json!(url_objects)
                }
            };

            json!({
                "role": role_str,
                "content": content_val
            })
        })
        .collect()
}

/// Take `choices[0].message.content` from a chat-completions response.
///
/// # Errors
///
/// Returns `BotError::CompletionError` when the content is absent or empty.
pub fn first_choice_content(response_json: &Value) -> Result<String, BotError> {
    response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .filter(|content| !content.is_empty())
        .map(str::to_string)
        .ok_or_else(|| BotError::CompletionError("empty model response".to_string()))
}
