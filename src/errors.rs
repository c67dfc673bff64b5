use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("No issue URL found in the payload.")]
    MissingIssueUrl,

    #[error("Failed to parse webhook payload: {0}")]
    Parse(String),

    #[error("Invalid relay configuration: {0}")]
    Config(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    // The body is logged where the response is read, never surfaced here.
    #[error("Response status code does not indicate success: {status}")]
    Status { status: StatusCode, body: String },
}

impl RelayError {
    /// True for the one failure with a fixed, caller-visible message.
    #[must_use]
    pub fn is_missing_issue_url(&self) -> bool {
        matches!(self, RelayError::MissingIssueUrl)
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::Parse(error.to_string())
    }
}
