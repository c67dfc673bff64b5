use serde::Serialize;
use serde_json::Value;

/// Message body posted to the Slack incoming webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    pub text: String,
}

impl OutboundMessage {
    #[must_use]
    pub fn issue_created(issue_url: &str) -> Self {
        Self {
            text: format!("Issue Created: {issue_url}"),
        }
    }
}

/// Looks up `issue.html_url` in a GitHub issues event.
///
/// Any missing or mistyped step yields `None`, as does an empty string.
///
/// ```
/// use esep_webhook::core::models::issue_url;
///
/// let event = serde_json::json!({"issue": {"html_url": "https://github.com/o/r/issues/1"}});
/// assert_eq!(issue_url(&event), Some("https://github.com/o/r/issues/1"));
/// assert_eq!(issue_url(&serde_json::json!({"action": "opened"})), None);
/// ```
#[must_use]
pub fn issue_url(event: &Value) -> Option<&str> {
    event
        .get("issue")
        .and_then(|issue| issue.get("html_url"))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
}
