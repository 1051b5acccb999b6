//! AWS-oriented adapters and handlers for the automation functions.
//!
//! Handlers are written against the adapter traits so they can be exercised
//! without a network; the binaries under `src/bin` bind those traits to the
//! AWS SDK clients and hand the handlers to the Lambda runtime.

pub mod adapters;
pub mod handlers;
pub mod telemetry;
