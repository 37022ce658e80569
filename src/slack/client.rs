//! Slack API client module
//!
//! Encapsulates the `conversations.history` interaction with retry logic and
//! error handling, and maps the typed Slack response into the pipeline's
//! [`RawMessage`] model at the boundary.

use async_trait::async_trait;
use slack_morphism::events::SlackMessageEventType;
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::prelude::SlackApiConversationsHistoryRequest;
use slack_morphism::{
    SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackHistoryMessage,
};
use tokio_retry::strategy::jitter;
use tokio_retry::{Retry, strategy::ExponentialBackoff};
use tracing::warn;

use crate::analysis::ChannelHistory;
use crate::core::models::RawMessage;
use crate::errors::AnalysisError;

// Build the Slack client connector safely without panicking.
// If connector construction fails, store None and surface an error at call sites.
static SLACK_CLIENT: std::sync::LazyLock<Option<SlackHyperClient>> =
    std::sync::LazyLock::new(|| match SlackClientHyperConnector::new() {
        Ok(connector) => Some(SlackHyperClient::new(connector)),
        Err(e) => {
            warn!("Failed to create Slack HTTP connector: {}", e);
            None
        }
    });

/// Slack API client with retry logic and error handling.
///
/// Constructed per request from the caller-supplied channel token; the
/// underlying HTTP connector is shared across requests.
pub struct SlackClient {
    token: SlackApiToken,
}

impl SlackClient {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
        }
    }

    async fn with_retry<F, Fut, T>(&self, operation: F) -> Result<T, AnalysisError>
    where
        F: FnMut() -> Fut + Send,
        Fut: std::future::Future<Output = Result<T, AnalysisError>> + Send,
        T: Send,
    {
        let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(3);

        Retry::spawn(strategy, operation).await
    }
}

#[async_trait]
impl ChannelHistory for SlackClient {
    /// Fetch up to `limit` of the most recent messages in the channel, newest
    /// first, exactly as Slack returns them.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamFetch` if the Slack API call fails.
    async fn recent_messages(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> Result<Vec<RawMessage>, AnalysisError> {
        self.with_retry(|| async {
            let session = SLACK_CLIENT
                .as_ref()
                .ok_or_else(|| {
                    AnalysisError::UpstreamFetch(
                        "Slack HTTP connector not initialized".to_string(),
                    )
                })?
                .open_session(&self.token);

            let request = SlackApiConversationsHistoryRequest::new()
                .with_channel(SlackChannelId(channel_id.to_string()))
                .with_limit(u16::try_from(std::cmp::min(limit, 1000)).unwrap_or(1000));

            let result = session.conversations_history(&request).await?;

            Ok(result.messages.iter().map(to_raw_message).collect())
        })
        .await
    }
}

fn to_raw_message(msg: &SlackHistoryMessage) -> RawMessage {
    RawMessage {
        // conversations.history only returns message-type events
        kind: "message".to_string(),
        // History entries without a user author are bot/app messages
        author_is_bot: msg.sender.user.is_none(),
        subtype: msg.subtype.as_ref().and_then(subtype_name),
        text: msg.content.text.clone(),
    }
}

/// Wire name of a message subtype, e.g. `channel_join`.
fn subtype_name(subtype: &SlackMessageEventType) -> Option<String> {
    serde_json::to_value(subtype)
        .ok()
        .and_then(|v| v.as_str().map(ToString::to_string))
}
