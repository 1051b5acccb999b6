//! Shared cloud-automation domain primitives.
//!
//! This crate owns handler configuration, the storage notification contract,
//! object key derivation, and the handler error taxonomy. It intentionally
//! excludes AWS SDK and Lambda runtime concerns.

pub mod config;
pub mod contract;
pub mod error;
pub mod object_keys;
