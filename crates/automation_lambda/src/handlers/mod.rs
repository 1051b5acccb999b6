pub mod emr_step;
pub mod encrypted_copy;
pub mod instances;
pub mod queue_relay;
