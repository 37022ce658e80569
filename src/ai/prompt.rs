//! Prompt construction for the two analysis stages.
//!
//! Each stage sends a system instruction that pins the output contract
//! (strict JSON, no markdown wrapping) plus one user message carrying the
//! serialized payload. The requested list cardinalities in the insight prompt
//! are a request to the model, not something the parser enforces.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

use crate::core::models::ClassifiedMessage;

/// Sampling temperature for the sentiment classification stage.
pub const SENTIMENT_TEMPERATURE: f64 = 0.3;

/// Sampling temperature for the insight generation stage.
pub const INSIGHT_TEMPERATURE: f64 = 0.4;

const SENTIMENT_SYSTEM_PROMPT: &str = "You are a sentiment analysis expert. Analyze the \
    sentiment of each message and return ONLY a valid JSON array (no markdown formatting, no \
    code blocks). Each object should have \"text\" (the original message) and \"sentiment\" \
    (Positive, Negative, or Neutral). Do not wrap the response in markdown code blocks.";

const INSIGHT_SYSTEM_PROMPT: &str = "You are an expert HR analyst. Based on the list of Slack \
    message sentiments, generate a high-level report. Return ONLY a valid JSON object (no \
    markdown formatting, no code blocks) with three keys: \"keyTakeaways\" (an array of 2-3 \
    strings), \"burnoutRisks\" (an array of 1-2 strings), and \"actionableInsights\" (an array \
    of 1-2 strings). Do not wrap the response in markdown code blocks.";

fn chat_message(role: MessageRole, content: String) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role,
        content: Content::Text(content),
        name: None,
        tool_calls: None,
        tool_call_id: None,
    }
}

/// Prompt asking the model to label every filtered message.
#[must_use]
pub fn sentiment_prompt(messages: &[String]) -> Vec<ChatCompletionMessage> {
    let payload = serde_json::to_string(messages).unwrap_or_default();

    vec![
        chat_message(MessageRole::system, SENTIMENT_SYSTEM_PROMPT.to_string()),
        chat_message(
            MessageRole::user,
            format!(
                "Analyze the sentiment of these Slack messages and return ONLY a valid JSON \
                 array: {payload}"
            ),
        ),
    ]
}

/// Prompt asking the model for the managerial report.
#[must_use]
pub fn insight_prompt(classified: &[ClassifiedMessage]) -> Vec<ChatCompletionMessage> {
    let payload = serde_json::to_string(classified).unwrap_or_default();

    vec![
        chat_message(MessageRole::system, INSIGHT_SYSTEM_PROMPT.to_string()),
        chat_message(
            MessageRole::user,
            format!(
                "Based on this list of Slack message sentiments, generate a high-level report. \
                 The list is: {payload}"
            ),
        ),
    ]
}
