use automation_core::config::EmrStepConfig;
use automation_lambda::adapters::aws::{load_sdk_config, EmrStepSubmitter};
use automation_lambda::handlers::emr_step::handle_emr_step;
use automation_lambda::telemetry::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    config: &EmrStepConfig,
    submitter: &EmrStepSubmitter,
) -> Result<String, Error> {
    Ok(handle_emr_step(&event.payload, config, submitter)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();
    let config = EmrStepConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let submitter = EmrStepSubmitter::new(&sdk_config);

    lambda_runtime::run(service_fn(|event| {
        handle_request(event, &config, &submitter)
    }))
    .await
}
