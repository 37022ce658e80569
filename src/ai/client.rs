//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the chat-completions round trip shared by both analysis
//! stages. The client is stateless per call; the sampling temperature is the
//! only thing that varies between stages.

use std::time::Duration;

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::analysis::CompletionModel;
use crate::core::config::AppConfig;
use crate::errors::AnalysisError;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// `OpenAI` chat-completions client.
pub struct LlmClient {
    api_key: String,
    org_id: Option<String>,
    model_name: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            org_id: config.openai_org_id.clone(),
            model_name: config
                .openai_model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl CompletionModel for LlmClient {
    /// Send one chat-completion request and return the completion text.
    ///
    /// A response without message content comes back as an empty string; the
    /// calling stage decides what an empty completion means for the request.
    ///
    /// # Errors
    ///
    /// Returns `Unknown` if the HTTP round trip fails or the response envelope
    /// cannot be decoded.
    async fn complete(
        &self,
        prompt: Vec<ChatCompletionMessage>,
        temperature: f64,
    ) -> Result<String, AnalysisError> {
        #[cfg(feature = "debug-logs")]
        info!("Using chat prompt:\n{:?}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting completion with {} messages in prompt",
            prompt.len()
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": build_chat_payload(&prompt),
            "temperature": temperature,
        });

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                AnalysisError::Unknown(format!("Failed to build OpenAI HTTP client: {e}"))
            })?;

        let mut request = client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body);

        if let Some(org) = &self.org_id {
            request = request.header("OpenAI-Organization", org);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AnalysisError::Unknown(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(AnalysisError::Unknown(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            AnalysisError::Unknown(format!("Failed to parse OpenAI response envelope: {e}"))
        })?;

        Ok(completion_text(&response_json).unwrap_or_default())
    }
}

/// Build the `messages` payload for the chat-completions API.
///
/// Only text content survives; the analysis prompts never carry anything else.
pub(crate) fn build_chat_payload(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter_map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::assistant => "assistant",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
            };

            match &m.content {
                Content::Text(t) => Some(json!({
                    "role": role_str,
                    "content": t,
                })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}

fn completion_text(response_json: &Value) -> Option<String> {
    response_json
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(ToString::to_string)
}
