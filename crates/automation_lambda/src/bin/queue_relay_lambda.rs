use automation_core::config::QueueRelayConfig;
use automation_lambda::adapters::aws::{load_sdk_config, SqsQueuePublisher};
use automation_lambda::handlers::queue_relay::handle_queue_relay;
use automation_lambda::telemetry::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    config: &QueueRelayConfig,
    publisher: &SqsQueuePublisher,
) -> Result<String, Error> {
    Ok(handle_queue_relay(&event.payload, config, publisher)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();
    let config = QueueRelayConfig::from_env()?;
    let sdk_config = load_sdk_config(None).await;
    let publisher = SqsQueuePublisher::new(&sdk_config);

    lambda_runtime::run(service_fn(|event| {
        handle_request(event, &config, &publisher)
    }))
    .await
}
