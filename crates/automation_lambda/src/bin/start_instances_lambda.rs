use automation_core::config::InstanceConfig;
use automation_lambda::adapters::aws::{load_sdk_config, Ec2InstanceController};
use automation_lambda::handlers::instances::handle_start_instances;
use automation_lambda::telemetry::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    config: &InstanceConfig,
    controller: &Ec2InstanceController,
) -> Result<String, Error> {
    Ok(handle_start_instances(&event.payload, config, controller)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();
    let config = InstanceConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let controller = Ec2InstanceController::new(&sdk_config);

    lambda_runtime::run(service_fn(|event| {
        handle_request(event, &config, &controller)
    }))
    .await
}
