//! SNS-backed notification topic.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::{error::DisplayErrorContext, Client};

use crate::config::NotificationConfig;
use crate::ports::{NotificationTopic, PublishError};

/// Publishes to a single SNS topic fixed at construction.
#[derive(Debug, Clone)]
pub struct SnsNotificationTopic {
    client: Client,
    topic_arn: String,
}

impl SnsNotificationTopic {
    pub fn new(client: Client, topic_arn: impl Into<String>) -> Self {
        Self {
            client,
            topic_arn: topic_arn.into(),
        }
    }

    pub fn from_sdk_config(sdk_config: &SdkConfig, notification: &NotificationConfig) -> Self {
        Self::new(Client::new(sdk_config), notification.topic_arn.clone())
    }
}

#[async_trait]
impl NotificationTopic for SnsNotificationTopic {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), PublishError> {
        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map_err(|err| PublishError::new(DisplayErrorContext(&err).to_string()))?;

        tracing::debug!(
            topic_arn = %self.topic_arn,
            message_id = output.message_id().unwrap_or_default(),
            "Published notification"
        );
        Ok(())
    }
}
