pub trait QueuePublisher {
    fn resolve_queue_url(&self, queue_name: &str) -> Result<String, String>;

    /// Returns the message id assigned by the queue, when it reports one.
    fn send_message(
        &self,
        queue_url: &str,
        body: &str,
        message_group_id: &str,
    ) -> Result<Option<String>, String>;
}
