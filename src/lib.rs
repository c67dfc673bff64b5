//! ESEP webhook - relays GitHub issue-creation events to a Slack channel.
//!
//! The crate is deployed as a single AWS Lambda function. Each invocation
//! receives one GitHub `issues` webhook payload, pulls `issue.html_url` out of
//! it, and posts `{"text": "Issue Created: <url>"}` to the Slack incoming
//! webhook named by the `SLACK_URL` environment variable.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - reqwest for the outbound Slack webhook call
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use esep_webhook::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     esep_webhook::setup_logging();
//!
//!     let config = AppConfig::with_slack_url("https://hooks.slack.com/services/T000/B000/XXXX");
//!     let payload = r#"{"issue":{"html_url":"https://github.com/org/repo/issues/42"}}"#;
//!
//!     let result = esep_webhook::relay::handle(&config, payload).await;
//!     if esep_webhook::relay::is_error_result(&result) {
//!         eprintln!("{result}");
//!     }
//! }
//! ```

pub mod core;
pub mod errors;
pub mod relay;
pub mod slack;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. The level comes from `RUST_LOG` and defaults to `info`.
///
/// # Example
///
/// ```
/// esep_webhook::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
