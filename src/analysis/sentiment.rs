//! Sentiment classification stage.

use tracing::error;

use super::CompletionModel;
use crate::ai::extract::extract_json;
use crate::ai::prompt::{SENTIMENT_TEMPERATURE, sentiment_prompt};
use crate::core::models::ClassifiedMessage;
use crate::errors::AnalysisError;

/// Classify every filtered message in a single model invocation.
///
/// The returned list is used as-is: no attempt is made to line its entries up
/// with the input messages, so its length is not guaranteed to match.
///
/// # Errors
///
/// Returns `EmptyCompletion` if the model produced no text at all, and `Parse`
/// if the completion is not a JSON array of `{text, sentiment}` objects after
/// fence stripping.
pub async fn classify(
    model: &dyn CompletionModel,
    messages: &[String],
) -> Result<Vec<ClassifiedMessage>, AnalysisError> {
    let completion = model
        .complete(sentiment_prompt(messages), SENTIMENT_TEMPERATURE)
        .await?;

    if completion.trim().is_empty() {
        return Err(AnalysisError::EmptyCompletion("sentiment analysis"));
    }

    let value = extract_json(&completion)?;

    serde_json::from_value(value).map_err(|e| {
        error!("Sentiment payload did not match the expected shape: {}", e);
        AnalysisError::Parse("sentiment analysis results".to_string())
    })
}
