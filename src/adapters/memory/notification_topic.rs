//! In-Memory Notification Topic Adapter

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::NotificationMessage;
use crate::ports::{NotificationTopic, PublishError};

/// Captures published messages for assertions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationTopic {
    published: Arc<RwLock<Vec<NotificationMessage>>>,
    failure: Arc<RwLock<Option<String>>>,
}

impl InMemoryNotificationTopic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent publish fail with `reason`
    pub async fn fail_with(&self, reason: &str) {
        *self.failure.write().await = Some(reason.to_string());
    }

    /// Returns all published messages
    pub async fn published_messages(&self) -> Vec<NotificationMessage> {
        self.published.read().await.clone()
    }

    /// Returns count of published messages
    pub async fn message_count(&self) -> usize {
        self.published.read().await.len()
    }
}

#[async_trait]
impl NotificationTopic for InMemoryNotificationTopic {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), PublishError> {
        if let Some(reason) = self.failure.read().await.as_ref() {
            return Err(PublishError::new(reason.clone()));
        }

        self.published.write().await.push(NotificationMessage {
            subject: subject.to_string(),
            body: message.to_string(),
        });
        Ok(())
    }
}
