//! Deployment constants for each handler, resolved once at process start.
//!
//! Every loader takes a key lookup so tests can feed a map instead of the
//! process environment.

use crate::error::HandlerError;

pub const INSTANCE_REGION_VAR: &str = "INSTANCE_REGION";
pub const INSTANCE_IDS_VAR: &str = "INSTANCE_IDS";
pub const QUEUE_NAME_VAR: &str = "QUEUE_NAME";
pub const MESSAGE_GROUP_ID_VAR: &str = "MESSAGE_GROUP_ID";
pub const DESTINATION_BUCKET_VAR: &str = "DESTINATION_BUCKET";
pub const DESTINATION_PREFIX_VAR: &str = "DESTINATION_PREFIX";
pub const KMS_KEY_ID_VAR: &str = "KMS_KEY_ID";
pub const COPY_REGION_VAR: &str = "COPY_REGION";
pub const EMR_CLUSTER_ID_VAR: &str = "EMR_CLUSTER_ID";
pub const EMR_STEP_NAME_VAR: &str = "EMR_STEP_NAME";
pub const EMR_STEP_JAR_VAR: &str = "EMR_STEP_JAR";
pub const EMR_REGION_VAR: &str = "EMR_REGION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceConfig {
    pub region: Option<String>,
    pub instance_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueRelayConfig {
    pub queue_name: String,
    pub message_group_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedCopyConfig {
    pub target_bucket: String,
    pub target_prefix: String,
    pub kms_key_id: String,
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmrStepConfig {
    pub cluster_id: String,
    pub step_name: String,
    pub step_jar: String,
    pub region: Option<String>,
}

impl InstanceConfig {
    pub fn from_env() -> Result<Self, HandlerError> {
        Self::from_lookup(env_lookup)
    }

    /// An id list that parses to nothing is accepted and forwarded as-is;
    /// rejecting it is left to the compute API.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HandlerError> {
        let raw_ids = required(&lookup, INSTANCE_IDS_VAR)?;
        Ok(Self {
            region: optional(&lookup, INSTANCE_REGION_VAR),
            instance_ids: parse_id_list(&raw_ids),
        })
    }
}

impl QueueRelayConfig {
    pub fn from_env() -> Result<Self, HandlerError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HandlerError> {
        Ok(Self {
            queue_name: required(&lookup, QUEUE_NAME_VAR)?,
            message_group_id: required(&lookup, MESSAGE_GROUP_ID_VAR)?,
        })
    }
}

impl EncryptedCopyConfig {
    pub fn from_env() -> Result<Self, HandlerError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HandlerError> {
        Ok(Self {
            target_bucket: required(&lookup, DESTINATION_BUCKET_VAR)?,
            // Not trimmed: the prefix is concatenated verbatim.
            target_prefix: lookup(DESTINATION_PREFIX_VAR).unwrap_or_default(),
            kms_key_id: required(&lookup, KMS_KEY_ID_VAR)?,
            region: optional(&lookup, COPY_REGION_VAR),
        })
    }
}

impl EmrStepConfig {
    pub fn from_env() -> Result<Self, HandlerError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HandlerError> {
        Ok(Self {
            cluster_id: required(&lookup, EMR_CLUSTER_ID_VAR)?,
            step_name: required(&lookup, EMR_STEP_NAME_VAR)?,
            step_jar: required(&lookup, EMR_STEP_JAR_VAR)?,
            region: optional(&lookup, EMR_REGION_VAR),
        })
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<String, HandlerError> {
    optional(lookup, key)
        .ok_or_else(|| HandlerError::configuration(format!("{key} must be configured")))
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_id_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::HandlerErrorKind;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| values.get(key).cloned()
    }

    #[test]
    fn instance_ids_keep_order_and_drop_blanks() {
        let config = InstanceConfig::from_lookup(lookup_from(&[
            (INSTANCE_REGION_VAR, "us-west-1"),
            (INSTANCE_IDS_VAR, " i-0b2 , i-0a1,, i-0c3 "),
        ]))
        .expect("config should load");

        assert_eq!(config.region.as_deref(), Some("us-west-1"));
        assert_eq!(config.instance_ids, vec!["i-0b2", "i-0a1", "i-0c3"]);
    }

    #[test]
    fn blank_instance_region_falls_back_to_ambient() {
        let config = InstanceConfig::from_lookup(lookup_from(&[
            (INSTANCE_REGION_VAR, "  "),
            (INSTANCE_IDS_VAR, "i-1"),
        ]))
        .expect("config should load");

        assert_eq!(config.region, None);
    }

    #[test]
    fn missing_instance_ids_is_a_configuration_error() {
        let error = InstanceConfig::from_lookup(lookup_from(&[]))
            .expect_err("instance ids are required");

        assert_eq!(error.kind(), HandlerErrorKind::Configuration);
        assert_eq!(error.message(), "INSTANCE_IDS must be configured");
    }

    #[test]
    fn queue_relay_requires_group_id() {
        let error = QueueRelayConfig::from_lookup(lookup_from(&[(QUEUE_NAME_VAR, "events.fifo")]))
            .expect_err("group id is required");

        assert_eq!(error.message(), "MESSAGE_GROUP_ID must be configured");
    }

    #[test]
    fn encrypted_copy_prefix_defaults_to_empty_and_is_not_trimmed() {
        let config = EncryptedCopyConfig::from_lookup(lookup_from(&[
            (DESTINATION_BUCKET_VAR, "target-bucket"),
            (KMS_KEY_ID_VAR, "alias/archive"),
        ]))
        .expect("config should load");
        assert_eq!(config.target_prefix, "");
        assert_eq!(config.region, None);

        let config = EncryptedCopyConfig::from_lookup(lookup_from(&[
            (DESTINATION_BUCKET_VAR, "target-bucket"),
            (DESTINATION_PREFIX_VAR, "encrypted/ "),
            (KMS_KEY_ID_VAR, "alias/archive"),
            (COPY_REGION_VAR, "us-east-1"),
        ]))
        .expect("config should load");
        assert_eq!(config.target_prefix, "encrypted/ ");
        assert_eq!(config.region.as_deref(), Some("us-east-1"));
    }

    #[test]
    fn encrypted_copy_requires_kms_key() {
        let error = EncryptedCopyConfig::from_lookup(lookup_from(&[(
            DESTINATION_BUCKET_VAR,
            "target-bucket",
        )]))
        .expect_err("kms key is required");

        assert_eq!(error.kind(), HandlerErrorKind::Configuration);
        assert_eq!(error.message(), "KMS_KEY_ID must be configured");
    }

    #[test]
    fn blank_required_variable_is_a_configuration_error() {
        let error = EncryptedCopyConfig::from_lookup(lookup_from(&[
            (DESTINATION_BUCKET_VAR, "target-bucket"),
            (KMS_KEY_ID_VAR, "  "),
        ]))
        .expect_err("blank kms key is rejected");

        assert_eq!(error.kind(), HandlerErrorKind::Configuration);
        assert_eq!(error.message(), "KMS_KEY_ID must be configured");
    }

    #[test]
    fn instance_ids_of_only_separators_load_as_empty_list() {
        let config = InstanceConfig::from_lookup(lookup_from(&[(INSTANCE_IDS_VAR, " , ,")]))
            .expect("separator-only list is accepted");

        assert!(config.instance_ids.is_empty());
    }

    #[test]
    fn queue_relay_requires_queue_name() {
        let error = QueueRelayConfig::from_lookup(lookup_from(&[(MESSAGE_GROUP_ID_VAR, "ingest")]))
            .expect_err("queue name is required");

        assert_eq!(error.kind(), HandlerErrorKind::Configuration);
        assert_eq!(error.message(), "QUEUE_NAME must be configured");
    }

    #[test]
    fn emr_step_loads_all_fields() {
        let config = EmrStepConfig::from_lookup(lookup_from(&[
            (EMR_CLUSTER_ID_VAR, "j-2AXXXXXXGAPLF"),
            (EMR_STEP_NAME_VAR, "ingest-landing"),
            (EMR_STEP_JAR_VAR, "s3://jobs/ingest.jar"),
            (EMR_REGION_VAR, "us-east-1"),
        ]))
        .expect("config should load");

        assert_eq!(
            config,
            EmrStepConfig {
                cluster_id: "j-2AXXXXXXGAPLF".to_string(),
                step_name: "ingest-landing".to_string(),
                step_jar: "s3://jobs/ingest.jar".to_string(),
                region: Some("us-east-1".to_string()),
            }
        );
    }

    #[test]
    fn emr_step_requires_jar() {
        let error = EmrStepConfig::from_lookup(lookup_from(&[
            (EMR_CLUSTER_ID_VAR, "j-2AXXXXXXGAPLF"),
            (EMR_STEP_NAME_VAR, "ingest-landing"),
        ]))
        .expect_err("jar is required");

        assert_eq!(error.message(), "EMR_STEP_JAR must be configured");
    }
}
