use serde::{Deserialize, Serialize};

/// Body of a `POST /analyze` request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeRequest {
    pub channel_token: String,
    pub channel_id: String,
}

/// A single channel history entry as the pipeline sees it.
///
/// Built at the Slack adapter boundary and discarded when the request ends.
#[derive(Debug, Clone)]
pub struct RawMessage {
    pub kind: String,
    pub author_is_bot: bool,
    pub subtype: Option<String>,
    pub text: Option<String>,
}

/// Who (or what) authored a channel message.
///
/// Computed once per message at ingestion so that filtering works on the tag
/// rather than re-deriving boolean conditions downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// A plain message written by a human.
    HumanText,
    /// Authored by a bot or app integration.
    Bot,
    /// A system event such as a channel join, or anything that is not a
    /// plain message.
    SystemEvent,
}

impl RawMessage {
    #[must_use]
    pub fn provenance(&self) -> Provenance {
        if self.kind != "message" || self.subtype.is_some() {
            Provenance::SystemEvent
        } else if self.author_is_bot {
            Provenance::Bot
        } else {
            Provenance::HumanText
        }
    }
}

/// Sentiment label assigned to a single message.
///
/// The serde representation is the bare variant name, so the classifier stage
/// rejects anything other than the three case-sensitive labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// One classified message, exactly as returned by the sentiment stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedMessage {
    pub text: String,
    pub sentiment: Sentiment,
}

/// The three-list managerial report produced by the insight stage.
///
/// All fields default to empty: the model is asked for 2-3 / 1-2 / 1-2 items
/// per list, but a report with missing keys is still valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsightReport {
    pub key_takeaways: Vec<String>,
    pub burnout_risks: Vec<String>,
    pub actionable_insights: Vec<String>,
}

/// Success payload of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub success: bool,
    pub sentiment_analysis: Vec<ClassifiedMessage>,
    pub insights: InsightReport,
    pub message_count: usize,
}

impl AnalysisResult {
    /// Combine the pipeline outputs into the response payload.
    ///
    /// `message_count` is the number of messages that survived filtering, not
    /// the number of entries the classifier returned; the two are not
    /// guaranteed to match.
    #[must_use]
    pub fn assemble(
        message_count: usize,
        sentiment_analysis: Vec<ClassifiedMessage>,
        insights: InsightReport,
    ) -> Self {
        Self {
            success: true,
            sentiment_analysis,
            insights,
            message_count,
        }
    }
}
