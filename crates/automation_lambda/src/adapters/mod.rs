pub mod aws;
pub mod cluster;
pub mod compute;
pub mod object_store;
pub mod queue;
