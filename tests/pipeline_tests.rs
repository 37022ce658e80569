//! End-to-end pipeline tests against fake collaborators.
//!
//! These run the real filter/classify/insight/assemble path with scripted
//! model completions and canned channel history, exercising both the happy
//! path and every terminal failure mode.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::ChatCompletionMessage;
use pulsecheck::analysis::{ChannelHistory, CompletionModel, analyze_channel};
use pulsecheck::core::models::{RawMessage, Sentiment};
use pulsecheck::errors::AnalysisError;

struct FakeHistory {
    messages: Vec<RawMessage>,
    fail: bool,
}

impl FakeHistory {
    fn with_messages(messages: Vec<RawMessage>) -> Self {
        Self {
            messages,
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            messages: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl ChannelHistory for FakeHistory {
    async fn recent_messages(
        &self,
        _channel_id: &str,
        _limit: u32,
    ) -> Result<Vec<RawMessage>, AnalysisError> {
        if self.fail {
            return Err(AnalysisError::UpstreamFetch(
                "history service unreachable".to_string(),
            ));
        }
        Ok(self.messages.clone())
    }
}

/// Returns one scripted completion per call, in order, and counts calls.
struct ScriptedModel {
    completions: Mutex<VecDeque<String>>,
    temperatures: Mutex<Vec<f64>>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    fn new(completions: &[&str]) -> Self {
        Self {
            completions: Mutex::new(completions.iter().map(ToString::to_string).collect()),
            temperatures: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionModel for ScriptedModel {
    async fn complete(
        &self,
        _prompt: Vec<ChatCompletionMessage>,
        temperature: f64,
    ) -> Result<String, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.temperatures.lock().unwrap().push(temperature);
        Ok(self
            .completions
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted model ran out of completions"))
    }
}

fn human(text: &str) -> RawMessage {
    RawMessage {
        kind: "message".to_string(),
        author_is_bot: false,
        subtype: None,
        text: Some(text.to_string()),
    }
}

fn bot(text: &str) -> RawMessage {
    RawMessage {
        kind: "message".to_string(),
        author_is_bot: true,
        subtype: None,
        text: Some(text.to_string()),
    }
}

fn system_event(subtype: &str) -> RawMessage {
    RawMessage {
        kind: "message".to_string(),
        author_is_bot: false,
        subtype: Some(subtype.to_string()),
        text: Some("<@U123> has joined the channel".to_string()),
    }
}

const SENTIMENT_COMPLETION: &str = r#"[
    {"text": "Great job team!", "sentiment": "Positive"},
    {"text": "I'm exhausted and stressed", "sentiment": "Negative"}
]"#;

const INSIGHT_COMPLETION: &str = r#"{
    "keyTakeaways": ["Mixed mood with clear highs and lows"],
    "burnoutRisks": ["One member reports exhaustion and stress"],
    "actionableInsights": ["Check workload distribution this sprint"]
}"#;

#[tokio::test]
async fn full_pipeline_produces_report() {
    let history = FakeHistory::with_messages(vec![
        human("Great job team!"),
        human("I'm exhausted and stressed"),
    ]);
    let model = ScriptedModel::new(&[SENTIMENT_COMPLETION, INSIGHT_COMPLETION]);

    let result = analyze_channel(&history, &model, "C123").await.unwrap();

    assert!(result.success);
    assert_eq!(result.message_count, 2);
    assert_eq!(result.sentiment_analysis.len(), 2);
    assert_eq!(result.sentiment_analysis[0].sentiment, Sentiment::Positive);
    assert_eq!(result.sentiment_analysis[1].sentiment, Sentiment::Negative);
    assert!(!result.insights.burnout_risks.is_empty());
    assert_eq!(model.call_count(), 2);

    // classification runs cooler than insight generation
    let temps = model.temperatures.lock().unwrap().clone();
    assert_eq!(temps, vec![0.3, 0.4]);
}

#[tokio::test]
async fn empty_channel_fails_before_any_model_call() {
    let history = FakeHistory::with_messages(vec![
        bot("nightly build finished"),
        system_event("channel_join"),
        human("   "),
    ]);
    let model = ScriptedModel::new(&[]);

    let err = analyze_channel(&history, &model, "C123").await.unwrap_err();

    assert!(matches!(err, AnalysisError::NoMessages));
    assert_eq!(err.status_code(), 404);
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn fenced_classifier_completion_matches_unfenced() {
    let fenced = format!("```json\n{SENTIMENT_COMPLETION}\n```");

    let history = FakeHistory::with_messages(vec![
        human("Great job team!"),
        human("I'm exhausted and stressed"),
    ]);
    let model = ScriptedModel::new(&[fenced.as_str(), INSIGHT_COMPLETION]);
    let from_fenced = analyze_channel(&history, &model, "C123").await.unwrap();

    let history = FakeHistory::with_messages(vec![
        human("Great job team!"),
        human("I'm exhausted and stressed"),
    ]);
    let model = ScriptedModel::new(&[SENTIMENT_COMPLETION, INSIGHT_COMPLETION]);
    let from_bare = analyze_channel(&history, &model, "C123").await.unwrap();

    assert_eq!(from_fenced.sentiment_analysis, from_bare.sentiment_analysis);
}

#[tokio::test]
async fn empty_classifier_completion_stops_before_insights() {
    let history = FakeHistory::with_messages(vec![human("hello")]);
    let model = ScriptedModel::new(&[""]);

    let err = analyze_channel(&history, &model, "C123").await.unwrap_err();

    assert!(matches!(err, AnalysisError::EmptyCompletion(_)));
    assert_eq!(err.status_code(), 500);
    // insight generation was never attempted
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn malformed_insight_json_withholds_sentiments() {
    // Unescaped quote makes the insight object unparseable
    let malformed = r#"{"keyTakeaways": ["team said "ship it""]}"#;

    let history = FakeHistory::with_messages(vec![human("ship it")]);
    let model = ScriptedModel::new(&[
        r#"[{"text": "ship it", "sentiment": "Positive"}]"#,
        malformed,
    ]);

    let err = analyze_channel(&history, &model, "C123").await.unwrap_err();

    // The whole request fails; the already-computed sentiments are not returned
    assert!(matches!(err, AnalysisError::Parse(_)));
    assert_eq!(model.call_count(), 2);
}

#[tokio::test]
async fn message_count_tracks_filtered_input_not_classifier_output() {
    let history = FakeHistory::with_messages(vec![
        human("one"),
        human("two"),
        human("three"),
    ]);
    // Classifier only returns a single entry; the result is used as-is
    let model = ScriptedModel::new(&[
        r#"[{"text": "one", "sentiment": "Neutral"}]"#,
        INSIGHT_COMPLETION,
    ]);

    let result = analyze_channel(&history, &model, "C123").await.unwrap();

    assert_eq!(result.message_count, 3);
    assert_eq!(result.sentiment_analysis.len(), 1);
}

#[tokio::test]
async fn insight_report_with_missing_keys_is_valid() {
    let history = FakeHistory::with_messages(vec![human("all quiet")]);
    let model = ScriptedModel::new(&[
        r#"[{"text": "all quiet", "sentiment": "Neutral"}]"#,
        r#"{"keyTakeaways": ["calm week"]}"#,
    ]);

    let result = analyze_channel(&history, &model, "C123").await.unwrap();

    assert_eq!(result.insights.key_takeaways, vec!["calm week".to_string()]);
    assert!(result.insights.burnout_risks.is_empty());
    assert!(result.insights.actionable_insights.is_empty());
}

#[tokio::test]
async fn unknown_sentiment_label_is_a_parse_failure() {
    let history = FakeHistory::with_messages(vec![human("meh")]);
    let model = ScriptedModel::new(&[r#"[{"text": "meh", "sentiment": "Ambivalent"}]"#]);

    let err = analyze_channel(&history, &model, "C123").await.unwrap_err();
    assert!(matches!(err, AnalysisError::Parse(_)));
}

#[tokio::test]
async fn history_failure_aborts_the_request() {
    let history = FakeHistory::failing();
    let model = ScriptedModel::new(&[]);

    let err = analyze_channel(&history, &model, "C123").await.unwrap_err();

    assert!(matches!(err, AnalysisError::UpstreamFetch(_)));
    assert_eq!(err.status_code(), 500);
    assert_eq!(model.call_count(), 0);
}
