use automation_core::config::EmrStepConfig;
use automation_core::contract::StorageEvent;
use automation_core::error::HandlerError;
use serde_json::Value;

use crate::adapters::cluster::{StepRequest, StepSubmitter};

pub const EMR_STEP_RESULT: &str = "Exiting Lambda Step to EMR Function.";

/// Submits the configured jar step to the cluster when an object lands.
/// The object itself is only logged; the step is the same for every upload.
pub fn handle_emr_step(
    event: &Value,
    config: &EmrStepConfig,
    submitter: &impl StepSubmitter,
) -> Result<String, HandlerError> {
    submit_for_first_record(event, config, submitter).inspect_err(|error| {
        tracing::error!(kind = error.kind().as_str(), "{error}");
    })
}

fn submit_for_first_record(
    event: &Value,
    config: &EmrStepConfig,
    submitter: &impl StepSubmitter,
) -> Result<String, HandlerError> {
    let storage_event = StorageEvent::from_value(event)?;
    let record = storage_event.first_record()?;
    tracing::info!(
        source_uri = %record.location().s3_uri(),
        event_name = record.event_name_or_unknown(),
        "received event trigger"
    );

    let request = StepRequest {
        cluster_id: config.cluster_id.clone(),
        step_name: config.step_name.clone(),
        jar: config.step_jar.clone(),
    };
    tracing::info!(
        cluster_id = %request.cluster_id,
        step_name = %request.step_name,
        "submitting step"
    );

    let step_ids = submitter.submit_step(&request).map_err(|error| {
        HandlerError::downstream(format!(
            "failed to submit step '{}' to cluster {}: {error}",
            request.step_name, request.cluster_id
        ))
    })?;

    tracing::info!(step_ids = ?step_ids, "step submitted");
    Ok(EMR_STEP_RESULT.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use automation_core::error::HandlerErrorKind;
    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct CapturingSubmitter {
        requests: Mutex<Vec<StepRequest>>,
    }

    impl CapturingSubmitter {
        fn requests(&self) -> Vec<StepRequest> {
            self.requests.lock().expect("poisoned mutex").clone()
        }
    }

    impl StepSubmitter for CapturingSubmitter {
        fn submit_step(&self, request: &StepRequest) -> Result<Vec<String>, String> {
            self.requests
                .lock()
                .expect("poisoned mutex")
                .push(request.clone());
            Ok(vec!["s-1XXXXXXXXXXXX".to_string()])
        }
    }

    struct TerminatedClusterSubmitter;

    impl StepSubmitter for TerminatedClusterSubmitter {
        fn submit_step(&self, _request: &StepRequest) -> Result<Vec<String>, String> {
            Err("ValidationException: cluster is terminated".to_string())
        }
    }

    fn sample_config() -> EmrStepConfig {
        EmrStepConfig {
            cluster_id: "j-2AXXXXXXGAPLF".to_string(),
            step_name: "ingest-landing".to_string(),
            step_jar: "s3://jobs/ingest.jar".to_string(),
            region: None,
        }
    }

    fn object_created(key: &str) -> Value {
        json!({
            "Records": [{
                "eventName": "ObjectCreated:Put",
                "s3": {"bucket": {"name": "landing-bucket"}, "object": {"key": key}}
            }]
        })
    }

    #[test]
    fn submits_configured_step_for_storage_event() {
        let submitter = CapturingSubmitter::default();

        let result = handle_emr_step(
            &object_created("inbound/data.csv"),
            &sample_config(),
            &submitter,
        )
        .expect("submit should pass");

        assert_eq!(result, EMR_STEP_RESULT);
        assert_eq!(
            submitter.requests(),
            vec![StepRequest {
                cluster_id: "j-2AXXXXXXGAPLF".to_string(),
                step_name: "ingest-landing".to_string(),
                jar: "s3://jobs/ingest.jar".to_string(),
            }]
        );
    }

    #[test]
    fn empty_event_fails_without_submitting() {
        let submitter = CapturingSubmitter::default();

        let error = handle_emr_step(&json!({ "Records": [] }), &sample_config(), &submitter)
            .expect_err("empty event should fail");

        assert_eq!(error.kind(), HandlerErrorKind::InvalidEvent);
        assert!(submitter.requests().is_empty());
    }

    #[test]
    fn submit_failure_is_a_downstream_error() {
        let error = handle_emr_step(
            &object_created("inbound/data.csv"),
            &sample_config(),
            &TerminatedClusterSubmitter,
        )
        .expect_err("terminated cluster should fail");

        assert_eq!(error.kind(), HandlerErrorKind::Downstream);
        assert!(error.message().contains("j-2AXXXXXXGAPLF"));
        assert!(error.message().contains("cluster is terminated"));
    }
}
