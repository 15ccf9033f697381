//! Outbound notification message.

use super::word_count::WordCountResult;

/// Subject line of every result notification.
pub const NOTIFICATION_SUBJECT: &str = "Word Count Result";

/// Subject and body published to the notification topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub subject: String,
    pub body: String,
}

impl NotificationMessage {
    /// Formats the result notification for a counted object.
    ///
    /// Key and count are interpolated verbatim.
    pub fn word_count(result: &WordCountResult) -> Self {
        Self {
            subject: NOTIFICATION_SUBJECT.to_string(),
            body: format!(
                "The word count in the {} file is {}.",
                result.key, result.count
            ),
        }
    }
}
