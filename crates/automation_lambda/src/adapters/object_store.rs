use automation_core::contract::StorageLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub source: StorageLocation,
    pub target: StorageLocation,
    pub kms_key_id: String,
}

/// Implementations must request SSE-KMS with `kms_key_id` on every copy.
pub trait ObjectCopier {
    fn copy_object(&self, request: &CopyRequest) -> Result<(), String>;
}
