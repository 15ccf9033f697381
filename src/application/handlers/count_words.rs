//! CountWords - Handler for object-created events.
//!
//! Fetches the object named by the event, counts its words and publishes the
//! result to the notification topic.

use std::sync::Arc;

use crate::domain::{HandlerError, NotificationMessage, StorageEvent, WordCount, WordCountResult};
use crate::ports::{NotificationTopic, ObjectStore};

/// Outcome of a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountWordsResult {
    pub key: String,
    pub word_count: WordCount,
    /// Human-readable confirmation naming the processed key.
    pub confirmation: String,
}

/// Handler for counting the words of a newly created object.
pub struct CountWordsHandler {
    object_store: Arc<dyn ObjectStore>,
    topic: Arc<dyn NotificationTopic>,
}

impl CountWordsHandler {
    pub fn new(object_store: Arc<dyn ObjectStore>, topic: Arc<dyn NotificationTopic>) -> Self {
        Self {
            object_store,
            topic,
        }
    }

    /// Processes one storage event.
    ///
    /// Failures are logged and returned unchanged; nothing is retried and no
    /// notification is sent for a failed invocation.
    pub async fn handle(&self, event: StorageEvent) -> Result<CountWordsResult, HandlerError> {
        let result = self.process(event).await;
        if let Err(e) = &result {
            tracing::error!(code = %e.code(), error = %e, "Error processing file");
        }
        result
    }

    async fn process(&self, event: StorageEvent) -> Result<CountWordsResult, HandlerError> {
        // 1. Resolve bucket and key from the first record
        let location = event.first_location()?;
        tracing::debug!(bucket = %location.bucket, key = %location.key, "Fetching object");

        // 2. Fetch and decode
        let bytes = self.object_store.get(&location.bucket, &location.key).await?;
        let text = String::from_utf8(bytes).map_err(|source| HandlerError::Decoding {
            key: location.key.clone(),
            source,
        })?;

        // 3. Count and format
        let result = WordCountResult::compute(location.key, &text);
        let message = NotificationMessage::word_count(&result);

        // 4. Publish
        self.topic.publish(&message.subject, &message.body).await?;

        tracing::info!(
            bucket = %location.bucket,
            key = %result.key,
            word_count = result.count.value(),
            "Published word count"
        );

        Ok(CountWordsResult {
            confirmation: format!("Successfully processed {}.", result.key),
            key: result.key,
            word_count: result.count,
        })
    }
}
