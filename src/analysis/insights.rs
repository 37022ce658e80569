//! Insight generation stage.

use tracing::error;

use super::CompletionModel;
use crate::ai::extract::extract_json;
use crate::ai::prompt::{INSIGHT_TEMPERATURE, insight_prompt};
use crate::core::models::{ClassifiedMessage, InsightReport};
use crate::errors::AnalysisError;

/// Derive the managerial report from the classified message list.
///
/// Keys absent from the model's object deserialize as empty lists; only a
/// completion that is not a JSON object at all fails.
///
/// # Errors
///
/// Same semantics as the classification stage: `EmptyCompletion` for a blank
/// completion, `Parse` for anything that is not an object after fence
/// stripping.
pub async fn generate(
    model: &dyn CompletionModel,
    classified: &[ClassifiedMessage],
) -> Result<InsightReport, AnalysisError> {
    let completion = model
        .complete(insight_prompt(classified), INSIGHT_TEMPERATURE)
        .await?;

    if completion.trim().is_empty() {
        return Err(AnalysisError::EmptyCompletion("insight"));
    }

    let value = extract_json(&completion)?;

    serde_json::from_value(value).map_err(|e| {
        error!("Insight payload did not match the expected shape: {}", e);
        AnalysisError::Parse("insight results".to_string())
    })
}
