use slack_morphism::errors::SlackClientError;
use thiserror::Error;

/// Error taxonomy for a single analysis request.
///
/// Every stage failure aborts the request; the handler maps each variant to an
/// HTTP status via [`AnalysisError::status_code`]. Display strings are stable
/// and safe to return to callers; raw upstream payloads are only ever logged.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Failed to fetch messages from Slack: {0}")]
    UpstreamFetch(String),

    #[error("No user messages found in the channel")]
    NoMessages,

    #[error("Model returned an empty {0} response")]
    EmptyCompletion(&'static str),

    #[error("Failed to parse {0}")]
    Parse(String),

    #[error("Internal server error: {0}")]
    Unknown(String),
}

impl AnalysisError {
    /// HTTP status code this error surfaces as.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            AnalysisError::Validation(_) => 400,
            AnalysisError::NoMessages => 404,
            AnalysisError::UpstreamFetch(_)
            | AnalysisError::EmptyCompletion(_)
            | AnalysisError::Parse(_)
            | AnalysisError::Unknown(_) => 500,
        }
    }
}

impl From<SlackClientError> for AnalysisError {
    fn from(error: SlackClientError) -> Self {
        AnalysisError::UpstreamFetch(error.to_string())
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(error: reqwest::Error) -> Self {
        AnalysisError::Unknown(format!("HTTP request failed: {error}"))
    }
}
