//! API Lambda handler for `POST /analyze`.
//!
//! The handler stays thin: extract and validate the request body, construct
//! the per-request Slack client and the process-configured LLM client, then
//! hand both to the analysis pipeline and translate its outcome onto the wire.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::helpers;
use crate::ai::LlmClient;
use crate::analysis;
use crate::core::config::AppConfig;
use crate::core::models::AnalyzeRequest;
use crate::errors::AnalysisError;
use crate::slack::SlackClient;

pub use self::function_handler as handler;

/// Lambda handler for the analyze endpoint.
///
/// # Errors
///
/// Never fails the Lambda invocation itself; every outcome, including
/// validation and upstream failures, is returned as a `{statusCode, body}`
/// payload.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let correlation_id = Uuid::new_v4().to_string();

    let body = match extract_body(&event.payload) {
        Ok(b) => b,
        Err(response) => return Ok(response),
    };

    let request = match parse_request(body) {
        Ok(r) => r,
        Err(e) => {
            error!(correlation_id = %correlation_id, "Rejecting request: {}", e);
            return Ok(helpers::error_response(&e));
        }
    };

    info!(
        correlation_id = %correlation_id,
        channel_id = %request.channel_id,
        "Received analyze request"
    );

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!(correlation_id = %correlation_id, "Config error: {}", e);
            return Ok(helpers::error_response(&AnalysisError::Unknown(e)));
        }
    };

    let slack = SlackClient::new(request.channel_token.clone());
    let llm = LlmClient::new(&config);

    match analysis::analyze_channel(&slack, &llm, &request.channel_id).await {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                message_count = result.message_count,
                "Analysis complete"
            );
            Ok(helpers::ok_json(&result))
        }
        Err(e) => {
            error!(correlation_id = %correlation_id, "Analysis failed: {}", e);
            Ok(helpers::error_response(&e))
        }
    }
}

fn extract_body(payload: &Value) -> Result<&str, Value> {
    let Some(body) = payload.get("body") else {
        error!("Request missing body");
        return Err(helpers::err_response(400, "Missing body"));
    };

    let Some(body_str) = body.as_str() else {
        error!("Request body is not a string");
        return Err(helpers::err_response(400, "Invalid body format"));
    };

    Ok(body_str)
}

fn parse_request(body: &str) -> Result<AnalyzeRequest, AnalysisError> {
    let request: AnalyzeRequest = serde_json::from_str(body)
        .map_err(|e| AnalysisError::Unknown(format!("Request body is not valid JSON: {e}")))?;

    if request.channel_token.trim().is_empty() || request.channel_id.trim().is_empty() {
        return Err(AnalysisError::Validation(
            "channelToken and channelId are required".to_string(),
        ));
    }

    Ok(request)
}
