//! AWS SDK bindings for the adapter traits.
//!
//! The traits are synchronous, so each call bridges into the current Tokio
//! runtime. This requires the multi-threaded runtime the binaries start.

use automation_core::object_keys::copy_source;
use aws_sdk_emr::types::{HadoopJarStepConfig, StepConfig};
use aws_sdk_s3::types::ServerSideEncryption;

use crate::adapters::cluster::{StepRequest, StepSubmitter};
use crate::adapters::compute::InstanceController;
use crate::adapters::object_store::{CopyRequest, ObjectCopier};
use crate::adapters::queue::QueuePublisher;

/// Loads the shared SDK configuration, overriding the ambient region when one
/// is configured for the handler.
pub async fn load_sdk_config(region: Option<&str>) -> aws_config::SdkConfig {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(aws_config::Region::new(region.to_string()));
    }
    loader.load().await
}

pub struct Ec2InstanceController {
    ec2_client: aws_sdk_ec2::Client,
}

impl Ec2InstanceController {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            ec2_client: aws_sdk_ec2::Client::new(config),
        }
    }
}

impl InstanceController for Ec2InstanceController {
    fn start_instances(&self, instance_ids: &[String]) -> Result<(), String> {
        let ids = instance_ids.to_vec();
        let client = self.ec2_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .start_instances()
                    .set_instance_ids(Some(ids))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("start-instances request failed: {error}"))
            })
        })
    }

    fn stop_instances(&self, instance_ids: &[String]) -> Result<(), String> {
        let ids = instance_ids.to_vec();
        let client = self.ec2_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .stop_instances()
                    .set_instance_ids(Some(ids))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("stop-instances request failed: {error}"))
            })
        })
    }
}

pub struct SqsQueuePublisher {
    sqs_client: aws_sdk_sqs::Client,
}

impl SqsQueuePublisher {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            sqs_client: aws_sdk_sqs::Client::new(config),
        }
    }
}

impl QueuePublisher for SqsQueuePublisher {
    fn resolve_queue_url(&self, queue_name: &str) -> Result<String, String> {
        let name = queue_name.to_string();
        let client = self.sqs_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .get_queue_url()
                    .queue_name(name.clone())
                    .send()
                    .await
                    .map_err(|error| format!("get-queue-url request failed: {error}"))?;
                output
                    .queue_url()
                    .map(str::to_string)
                    .ok_or_else(|| format!("no queue url returned for '{name}'"))
            })
        })
    }

    fn send_message(
        &self,
        queue_url: &str,
        body: &str,
        message_group_id: &str,
    ) -> Result<Option<String>, String> {
        let target_queue_url = queue_url.to_string();
        let message_body = body.to_string();
        let group_id = message_group_id.to_string();
        let client = self.sqs_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .send_message()
                    .queue_url(target_queue_url)
                    .message_body(message_body)
                    .message_group_id(group_id)
                    .send()
                    .await
                    .map(|output| output.message_id().map(str::to_string))
                    .map_err(|error| format!("send-message request failed: {error}"))
            })
        })
    }
}

pub struct S3ObjectCopier {
    s3_client: aws_sdk_s3::Client,
}

impl S3ObjectCopier {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            s3_client: aws_sdk_s3::Client::new(config),
        }
    }
}

impl ObjectCopier for S3ObjectCopier {
    fn copy_object(&self, request: &CopyRequest) -> Result<(), String> {
        let source = copy_source(&request.source.bucket, &request.source.key);
        let bucket = request.target.bucket.clone();
        let object_key = request.target.key.clone();
        let kms_key_id = request.kms_key_id.clone();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .copy_object()
                    .copy_source(source)
                    .bucket(bucket)
                    .key(object_key)
                    .server_side_encryption(ServerSideEncryption::AwsKms)
                    .ssekms_key_id(kms_key_id)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("copy-object request failed: {error}"))
            })
        })
    }
}

pub struct EmrStepSubmitter {
    emr_client: aws_sdk_emr::Client,
}

impl EmrStepSubmitter {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            emr_client: aws_sdk_emr::Client::new(config),
        }
    }
}

impl StepSubmitter for EmrStepSubmitter {
    fn submit_step(&self, request: &StepRequest) -> Result<Vec<String>, String> {
        let jar_step = HadoopJarStepConfig::builder()
            .jar(request.jar.clone())
            .build()
            .map_err(|error| format!("invalid jar step: {error}"))?;
        let step = StepConfig::builder()
            .name(request.step_name.clone())
            .hadoop_jar_step(jar_step)
            .build()
            .map_err(|error| format!("invalid step config: {error}"))?;
        let cluster_id = request.cluster_id.clone();
        let client = self.emr_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .add_job_flow_steps()
                    .job_flow_id(cluster_id)
                    .steps(step)
                    .send()
                    .await
                    .map(|output| output.step_ids().to_vec())
                    .map_err(|error| format!("add-job-flow-steps request failed: {error}"))
            })
        })
    }
}
