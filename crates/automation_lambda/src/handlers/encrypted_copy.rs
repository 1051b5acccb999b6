use automation_core::config::EncryptedCopyConfig;
use automation_core::contract::{StorageEvent, StorageLocation};
use automation_core::error::HandlerError;
use automation_core::object_keys::target_object_key;
use serde_json::Value;

use crate::adapters::object_store::{CopyRequest, ObjectCopier};

pub const ENCRYPTED_COPY_RESULT: &str = "Successfully copied from to new S3 Bucket with KMS Key";

pub fn build_copy_request(source: StorageLocation, config: &EncryptedCopyConfig) -> CopyRequest {
    let target = StorageLocation::new(
        config.target_bucket.clone(),
        target_object_key(&config.target_prefix, &source.key),
    );
    CopyRequest {
        source,
        target,
        kms_key_id: config.kms_key_id.clone(),
    }
}

/// Copies the object named by the first notification record into the
/// configured bucket under SSE-KMS. Records after the first are dropped.
pub fn handle_encrypted_copy(
    event: &Value,
    config: &EncryptedCopyConfig,
    copier: &impl ObjectCopier,
) -> Result<String, HandlerError> {
    copy_first_record(event, config, copier).inspect_err(|error| {
        tracing::error!(kind = error.kind().as_str(), "{error}");
    })
}

fn copy_first_record(
    event: &Value,
    config: &EncryptedCopyConfig,
    copier: &impl ObjectCopier,
) -> Result<String, HandlerError> {
    let storage_event = StorageEvent::from_value(event)?;
    let record = storage_event.first_record()?;
    let ignored = storage_event.records.len() - 1;
    if ignored > 0 {
        tracing::debug!(ignored_records = ignored, "processing first record only");
    }

    let request = build_copy_request(record.location(), config);
    tracing::info!(
        event_name = record.event_name_or_unknown(),
        source_uri = %request.source.s3_uri(),
        target_uri = %request.target.s3_uri(),
        "copying object with kms encryption"
    );

    copier.copy_object(&request).map_err(|error| {
        HandlerError::downstream(format!(
            "failed to copy {} to {}: {error}",
            request.source.s3_uri(),
            request.target.s3_uri()
        ))
    })?;

    tracing::info!(target_uri = %request.target.s3_uri(), "copied object with kms key");
    Ok(ENCRYPTED_COPY_RESULT.to_string())
}
