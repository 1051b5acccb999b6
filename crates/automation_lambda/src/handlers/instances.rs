use automation_core::config::InstanceConfig;
use automation_core::error::HandlerError;
use serde_json::Value;

use crate::adapters::compute::InstanceController;

pub const START_INSTANCES_RESULT: &str = "Exiting Lambda Start EC2 Function";
pub const STOP_INSTANCES_RESULT: &str = "Exiting Lambda Stop EC2 Function";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceAction {
    Start,
    Stop,
}

impl InstanceAction {
    fn verb(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }

    fn result_message(self) -> &'static str {
        match self {
            Self::Start => START_INSTANCES_RESULT,
            Self::Stop => STOP_INSTANCES_RESULT,
        }
    }
}

/// Starts every configured instance. The trigger event is ignored.
pub fn handle_start_instances(
    _event: &Value,
    config: &InstanceConfig,
    controller: &impl InstanceController,
) -> Result<String, HandlerError> {
    apply_instance_action(InstanceAction::Start, config, controller)
}

/// Stops every configured instance. The trigger event is ignored.
pub fn handle_stop_instances(
    _event: &Value,
    config: &InstanceConfig,
    controller: &impl InstanceController,
) -> Result<String, HandlerError> {
    apply_instance_action(InstanceAction::Stop, config, controller)
}

fn apply_instance_action(
    action: InstanceAction,
    config: &InstanceConfig,
    controller: &impl InstanceController,
) -> Result<String, HandlerError> {
    let verb = action.verb();
    tracing::info!(
        action = verb,
        region = config.region.as_deref().unwrap_or("ambient"),
        instance_ids = ?config.instance_ids,
        "attempting to {verb} all instances"
    );

    let outcome = match action {
        InstanceAction::Start => controller.start_instances(&config.instance_ids),
        InstanceAction::Stop => controller.stop_instances(&config.instance_ids),
    };
    if let Err(error) = outcome {
        let error = HandlerError::downstream(format!("failed to {verb} instances: {error}"));
        tracing::error!(action = verb, kind = error.kind().as_str(), "{error}");
        return Err(error);
    }

    tracing::info!(
        action = verb,
        instance_ids = ?config.instance_ids,
        "successfully requested {verb} for all instances"
    );
    Ok(action.result_message().to_string())
}
