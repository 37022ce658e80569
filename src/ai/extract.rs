//! Tolerant extraction of JSON from model completion text.
//!
//! Both model stages share this one code path. The contract is deliberately
//! narrow: the completion is trimmed, at most one wrapping code fence
//! (optionally carrying a language tag such as `json`) is stripped, and the
//! remainder must parse as strict JSON. There is no partial recovery and no
//! scanning for embedded brackets; anything else fails the request.

use serde_json::Value;
use tracing::error;

use crate::errors::AnalysisError;

/// Parse a model completion as JSON after optional fence stripping.
///
/// # Errors
///
/// Returns `Parse` if the text is not valid JSON once any wrapping fence has
/// been removed. The raw completion is logged for diagnosis but never carried
/// in the error.
pub fn extract_json(raw: &str) -> Result<Value, AnalysisError> {
    let cleaned = strip_code_fence(raw.trim());

    serde_json::from_str(cleaned).map_err(|e| {
        error!(raw_completion = %raw, "Model completion is not valid JSON: {}", e);
        AnalysisError::Parse("model response as JSON".to_string())
    })
}

/// Remove one wrapping code fence, if present.
///
/// The opening marker may carry a language tag (````json`); the tag and both
/// markers are dropped and the interior kept. Text that does not start with a
/// fence is returned unchanged.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
