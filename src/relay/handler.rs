#![allow(clippy::missing_errors_doc)]
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use super::{relay_document, relay_event, render_outcome};
use crate::core::config::AppConfig;

pub use self::function_handler as handler;

/// Lambda handler for the relay entrypoint.
///
/// Configuration is read on every invocation. Always returns `Ok`: failures
/// are reported in the returned string with an `Error: ` prefix.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<String, Error> {
    info!("FunctionHandler received: {}", event.payload);

    let config = AppConfig::from_env();
    Ok(handle_payload(&config, &event.payload).await)
}

/// Relays one Lambda payload.
///
/// A string payload is treated as the raw webhook body; any other JSON value
/// is taken as the already-decoded event.
pub async fn handle_payload(config: &AppConfig, payload: &Value) -> String {
    let outcome = match payload {
        Value::String(raw) => relay_event(config, raw).await,
        document => relay_document(config, document).await,
    };

    render_outcome(outcome)
}
