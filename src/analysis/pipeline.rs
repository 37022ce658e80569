//! End-to-end orchestration of one analysis request.

use tracing::info;

use super::{ChannelHistory, CompletionModel, filter, insights, sentiment};
use crate::core::models::AnalysisResult;
use crate::errors::AnalysisError;

/// How many history entries to request from the channel.
pub const HISTORY_FETCH_LIMIT: u32 = 100;

/// Run the full pipeline for one channel: fetch, filter, classify, generate
/// insights, assemble.
///
/// The stages are strictly sequential; insight generation consumes the
/// classifier's output, so the two model calls never overlap. Any stage
/// failure aborts the request and no partial results are returned.
///
/// # Errors
///
/// - `UpstreamFetch` if the history fetch fails
/// - `NoMessages` if nothing survives filtering (no model call is made)
/// - `EmptyCompletion` / `Parse` from either model stage
pub async fn analyze_channel(
    history: &dyn ChannelHistory,
    model: &dyn CompletionModel,
    channel_id: &str,
) -> Result<AnalysisResult, AnalysisError> {
    info!("Fetching messages from Slack channel");
    let raw_messages = history
        .recent_messages(channel_id, HISTORY_FETCH_LIMIT)
        .await?;

    let user_messages = filter::human_texts(&raw_messages);
    if user_messages.is_empty() {
        return Err(AnalysisError::NoMessages);
    }

    info!("Found {} user messages for analysis", user_messages.len());
    let message_count = user_messages.len();

    info!("Performing sentiment analysis");
    let classified = sentiment::classify(model, &user_messages).await?;

    info!("Generating managerial insights");
    let report = insights::generate(model, &classified).await?;

    Ok(AnalysisResult::assemble(message_count, classified, report))
}
