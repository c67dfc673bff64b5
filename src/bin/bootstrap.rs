// Lambda bootstrap entry point for the webhook relay

pub use esep_webhook::relay::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    esep_webhook::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
