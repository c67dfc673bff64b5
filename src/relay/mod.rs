//! GitHub issue webhook to Slack relay.
//!
//! [`relay_event`] is the structured core; [`handle`] adapts it to the
//! plain-string result the Lambda returns, where failures start with
//! [`ERROR_PREFIX`].

pub mod handler;

use serde_json::Value;
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::core::models::{OutboundMessage, issue_url};
use crate::errors::RelayError;
use crate::slack::SlackWebhookClient;

pub use handler::{handle_payload, handler};

pub const ERROR_PREFIX: &str = "Error: ";

/// Parses a raw webhook body and relays it.
pub async fn relay_event(config: &AppConfig, input: &str) -> Result<String, RelayError> {
    let event: Value = serde_json::from_str(input)?;
    relay_document(config, &event).await
}

/// Relays an already-parsed webhook document to Slack.
pub async fn relay_document(config: &AppConfig, event: &Value) -> Result<String, RelayError> {
    if !event.is_object() {
        return Err(RelayError::Parse(
            "expected a JSON object at the payload root".to_string(),
        ));
    }

    let url = issue_url(event).ok_or(RelayError::MissingIssueUrl)?;
    info!("Issue URL: {}", url);

    let message = OutboundMessage::issue_created(url);
    let destination = config.destination()?;
    let client = SlackWebhookClient::new(config.request_timeout()?)?;
    client.post_message(&destination, &message).await
}

/// Converts a relay outcome into the string returned to the invoker.
#[must_use]
pub fn render_outcome(outcome: Result<String, RelayError>) -> String {
    match outcome {
        Ok(body) => body,
        Err(RelayError::MissingIssueUrl) => {
            error!("{}", RelayError::MissingIssueUrl);
            format!("{ERROR_PREFIX}{}", RelayError::MissingIssueUrl)
        }
        Err(e) => {
            error!("Error processing GitHub webhook: {}", e);
            format!("{ERROR_PREFIX}{e}")
        }
    }
}

/// Relays one raw webhook body. Always yields a string, never an error.
pub async fn handle(config: &AppConfig, input: &str) -> String {
    info!("FunctionHandler received: {}", input);
    render_outcome(relay_event(config, input).await)
}

/// True when `result` came from the failure path.
#[must_use]
pub fn is_error_result(result: &str) -> bool {
    result.starts_with(ERROR_PREFIX)
}
