use automation_core::config::QueueRelayConfig;
use automation_core::contract::StorageEvent;
use automation_core::error::HandlerError;
use serde_json::Value;

use crate::adapters::queue::QueuePublisher;

pub const QUEUE_RELAY_RESULT: &str = "Exiting S3 Lambda To FIFO SQS Function";

/// Publishes the whole storage notification onto the configured FIFO queue.
///
/// Only the first record is read (for logging and to reject empty events);
/// the message body is the complete original event, so batched records still
/// reach the queue inside that single message. Object keys keep their
/// delivered order in the body.
pub fn handle_queue_relay(
    event: &Value,
    config: &QueueRelayConfig,
    publisher: &impl QueuePublisher,
) -> Result<String, HandlerError> {
    relay_event(event, config, publisher).inspect_err(|error| {
        tracing::error!(kind = error.kind().as_str(), "{error}");
    })
}

fn relay_event(
    event: &Value,
    config: &QueueRelayConfig,
    publisher: &impl QueuePublisher,
) -> Result<String, HandlerError> {
    let storage_event = StorageEvent::from_value(event)?;
    let record = storage_event.first_record()?;
    let source = record.location();
    tracing::info!(
        source_uri = %source.s3_uri(),
        event_name = record.event_name_or_unknown(),
        "received event trigger"
    );

    tracing::info!(queue_name = %config.queue_name, "retrieving queue url");
    let queue_url = publisher
        .resolve_queue_url(&config.queue_name)
        .map_err(|error| {
            HandlerError::downstream(format!(
                "failed to resolve queue '{}': {error}",
                config.queue_name
            ))
        })?;

    let body = serde_json::to_string(event).map_err(|error| {
        HandlerError::serialization(format!("failed to serialize storage event: {error}"))
    })?;

    tracing::info!(queue_url = %queue_url, "sending message to queue");
    let message_id = publisher
        .send_message(&queue_url, &body, &config.message_group_id)
        .map_err(|error| HandlerError::downstream(format!("failed to send message: {error}")))?;

    tracing::info!(
        message_id = message_id.as_deref().unwrap_or("unreported"),
        "message published"
    );
    Ok(QUEUE_RELAY_RESULT.to_string())
}
