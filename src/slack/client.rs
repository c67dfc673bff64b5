//! Minimal client for Slack incoming webhooks.

use std::time::Duration;

use reqwest::Client as HttpClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{error, info};
use url::Url;

use crate::core::models::OutboundMessage;
use crate::errors::RelayError;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Posts messages to a Slack incoming-webhook URL.
///
/// One instance is built per invocation and dropped with it.
#[derive(Debug, Clone)]
pub struct SlackWebhookClient {
    http_client: HttpClient,
}

impl SlackWebhookClient {
    pub fn new(timeout: Duration) -> Result<Self, RelayError> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self { http_client })
    }

    /// Sends `message` and returns the response body on a 2xx status.
    pub async fn post_message(
        &self,
        webhook_url: &Url,
        message: &OutboundMessage,
    ) -> Result<String, RelayError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        let body = serde_json::to_string(message)?;

        let resp = self
            .http_client
            .post(webhook_url.clone())
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!("Slack webhook POST failed: status={} body={}", status, body_text);
            return Err(RelayError::Status {
                status,
                body: body_text,
            });
        }

        let body_text = resp.text().await?;
        info!(status = %status, "Slack webhook accepted message");
        Ok(body_text)
    }
}
