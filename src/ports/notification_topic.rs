//! NotificationTopic port - Interface for publishing result messages.

use async_trait::async_trait;

use crate::domain::HandlerError;

/// Failure to deliver a message to the notification service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PublishError {
    pub message: String,
}

impl PublishError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<PublishError> for HandlerError {
    fn from(err: PublishError) -> Self {
        HandlerError::Publish(err.message)
    }
}

/// Port for publishing to a pre-configured pub/sub topic.
///
/// The destination is fixed when the adapter is built; callers only supply
/// the subject and message.
#[async_trait]
pub trait NotificationTopic: Send + Sync {
    /// Publish a single message.
    async fn publish(&self, subject: &str, message: &str) -> Result<(), PublishError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn NotificationTopic) {}

    #[test]
    fn publish_error_maps_to_handler_error() {
        let err: HandlerError = PublishError::new("NotFound: Topic does not exist").into();
        assert_eq!(err.code(), ErrorCode::Publish);
        assert_eq!(
            err.to_string(),
            "Failed to publish notification: NotFound: Topic does not exist"
        );
    }
}
