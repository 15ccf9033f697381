//! Domain layer containing the word-count logic and its value types.
//!
//! # Module Organization
//!
//! - `storage_event` - Typed object-created event and its validation
//! - `word_count` - Whitespace word counting
//! - `notification` - Result message formatting
//! - `errors` - Invocation error taxonomy

pub mod errors;
pub mod notification;
pub mod storage_event;
pub mod word_count;

pub use errors::{ErrorCode, HandlerError};
pub use notification::{NotificationMessage, NOTIFICATION_SUBJECT};
pub use storage_event::{ObjectLocation, StorageEvent};
pub use word_count::{count_words, is_word_separator, WordCount, WordCountResult};
