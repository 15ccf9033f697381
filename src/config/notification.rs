//! Notification topic configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Destination topic for word count results
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    /// SNS topic ARN
    pub topic_arn: String,
}

impl NotificationConfig {
    /// Validate notification configuration
    ///
    /// The ARN must look like `arn:<partition>:sns:<region>:<account>:<topic>`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.topic_arn.trim().is_empty() {
            return Err(ValidationError::MissingRequired("SNS_TOPIC_ARN"));
        }

        let parts: Vec<&str> = self.topic_arn.split(':').collect();
        let well_formed = parts.len() == 6
            && parts[0] == "arn"
            && parts[2] == "sns"
            && parts.iter().all(|p| !p.is_empty());
        if !well_formed {
            return Err(ValidationError::InvalidTopicArn(self.topic_arn.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(arn: &str) -> NotificationConfig {
        NotificationConfig {
            topic_arn: arn.to_string(),
        }
    }

    #[test]
    fn test_valid_topic_arn() {
        assert!(config("arn:aws:sns:us-east-1:123456789012:word-count").validate().is_ok());
        assert!(config("arn:aws-cn:sns:cn-north-1:123456789012:results")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_empty_topic_arn() {
        assert_eq!(
            config("  ").validate(),
            Err(ValidationError::MissingRequired("SNS_TOPIC_ARN"))
        );
    }

    #[test]
    fn test_wrong_service() {
        assert!(config("arn:aws:sqs:us-east-1:123456789012:queue").validate().is_err());
    }

    #[test]
    fn test_missing_segments() {
        assert!(config("arn:aws:sns:us-east-1:word-count").validate().is_err());
        assert!(config("arn:aws:sns::123456789012:word-count").validate().is_err());
        assert!(config("word-count").validate().is_err());
    }
}
