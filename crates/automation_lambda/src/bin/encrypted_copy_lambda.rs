use automation_core::config::EncryptedCopyConfig;
use automation_lambda::adapters::aws::{load_sdk_config, S3ObjectCopier};
use automation_lambda::handlers::encrypted_copy::handle_encrypted_copy;
use automation_lambda::telemetry::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    config: &EncryptedCopyConfig,
    copier: &S3ObjectCopier,
) -> Result<String, Error> {
    Ok(handle_encrypted_copy(&event.payload, config, copier)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();
    let config = EncryptedCopyConfig::from_env()?;
    let sdk_config = load_sdk_config(config.region.as_deref()).await;
    let copier = S3ObjectCopier::new(&sdk_config);

    lambda_runtime::run(service_fn(|event| handle_request(event, &config, &copier))).await
}
