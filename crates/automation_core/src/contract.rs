use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HandlerError;

/// Object-created notification as delivered by the storage service.
///
/// Only the fields the handlers consume are modelled; everything else in the
/// payload is ignored on parse and preserved by relaying the raw value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageEvent {
    #[serde(rename = "Records")]
    pub records: Vec<StorageRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageRecord {
    #[serde(rename = "eventName", default)]
    pub event_name: Option<String>,
    pub s3: StorageEntity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageEntity {
    pub bucket: BucketRef,
    pub object: ObjectRef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectRef {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    pub bucket: String,
    pub key: String,
}

impl StorageLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    pub fn s3_uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

impl StorageEvent {
    pub fn from_value(event: &Value) -> Result<Self, HandlerError> {
        Self::deserialize(event).map_err(|error| {
            HandlerError::invalid_event(format!("malformed storage event: {error}"))
        })
    }

    /// Returns the first notification record. Later records are not inspected.
    pub fn first_record(&self) -> Result<&StorageRecord, HandlerError> {
        self.records
            .first()
            .ok_or_else(|| HandlerError::invalid_event("storage event contains no records"))
    }
}

impl StorageRecord {
    pub fn location(&self) -> StorageLocation {
        StorageLocation::new(self.s3.bucket.name.clone(), self.s3.object.key.clone())
    }

    pub fn event_name_or_unknown(&self) -> &str {
        self.event_name.as_deref().unwrap_or("unknown")
    }
}
