//! The sentiment analysis pipeline and its collaborator seams.
//!
//! The pipeline never talks to Slack or `OpenAI` directly; the handler hands it
//! explicit service handles behind the traits below so tests can swap in
//! fakes.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::ChatCompletionMessage;

use crate::core::models::RawMessage;
use crate::errors::AnalysisError;

pub mod filter;
pub mod insights;
pub mod pipeline;
pub mod sentiment;

// Re-export the pipeline entry point for convenience
pub use pipeline::{HISTORY_FETCH_LIMIT, analyze_channel};

/// Source of recent channel history.
#[async_trait]
pub trait ChannelHistory: Send + Sync {
    /// Fetch up to `limit` recent messages in retrieval order.
    async fn recent_messages(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> Result<Vec<RawMessage>, AnalysisError>;
}

/// A chat model that turns a role-tagged prompt into completion text.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Run one completion round trip at the given sampling temperature.
    ///
    /// Implementations return the completion text as-is; an empty string means
    /// the model produced no textual content.
    async fn complete(
        &self,
        prompt: Vec<ChatCompletionMessage>,
        temperature: f64,
    ) -> Result<String, AnalysisError>;
}
