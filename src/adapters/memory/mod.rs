//! In-Memory Adapters
//!
//! Port implementations that keep everything in process memory. Used by the
//! integration tests and for running the handler locally without AWS.

mod notification_topic;
mod object_store;

pub use notification_topic::InMemoryNotificationTopic;
pub use object_store::InMemoryObjectStore;
