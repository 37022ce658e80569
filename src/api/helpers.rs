//! Response builders for the API handler.

use serde::Serialize;
use serde_json::{Value, json};

use crate::errors::AnalysisError;

/// Returns a 200 OK response with the given payload as the JSON body.
#[must_use]
pub fn ok_json<T: Serialize>(payload: &T) -> Value {
    json!({
        "statusCode": 200,
        "body": serde_json::to_string(payload).unwrap_or_else(|_| "{}".to_string())
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}

/// Maps a pipeline error onto the wire error contract.
///
/// Only `Unknown` carries a `details` field; every other variant surfaces just
/// its stable display string.
#[must_use]
pub fn error_response(error: &AnalysisError) -> Value {
    match error {
        AnalysisError::Unknown(details) => json!({
            "statusCode": 500,
            "body": json!({ "error": "Internal server error", "details": details }).to_string()
        }),
        other => err_response(other.status_code(), &other.to_string()),
    }
}
