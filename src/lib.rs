/// `PulseCheck` - a service that reads a Slack channel and reports on team sentiment.
///
/// Given a channel token and channel id, the service fetches the most recent
/// channel history, keeps only genuine human-authored messages, classifies each
/// one as Positive/Negative/Neutral with an `OpenAI` chat model, and then asks
/// the model for a short managerial report (key takeaways, burnout risks,
/// actionable insights) derived from those classifications.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution of the `POST /analyze` endpoint
/// - slack-morphism for fetching channel history
/// - reqwest + openai-api-rs message types for chat completions
/// - Tokio for the async runtime
///
/// The analysis pipeline itself (`analysis::analyze_channel`) only sees its
/// collaborators through the `analysis::ChannelHistory` and
/// `analysis::CompletionModel` traits, so it can be exercised end to end with
/// fakes and no network access.
///
/// # Example
///
/// ```no_run
/// use pulsecheck::ai::LlmClient;
/// use pulsecheck::core::config::AppConfig;
/// use pulsecheck::slack::SlackClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     pulsecheck::setup_logging();
///
///     let config = AppConfig {
///         openai_api_key: "dummy_openai_key".to_string(),
///         openai_org_id: None,
///         openai_model: None,
///     };
///
///     let slack = SlackClient::new("dummy_channel_token".to_string());
///     let llm = LlmClient::new(&config);
///
///     let report = pulsecheck::analysis::analyze_channel(&slack, &llm, "C12345678").await?;
///     println!(
///         "Analyzed {} messages, {} takeaways",
///         report.message_count,
///         report.insights.key_takeaways.len()
///     );
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod analysis;
pub mod api;
pub mod core;
pub mod errors;
pub mod slack;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of the
/// Lambda handler binary.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// pulsecheck::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
