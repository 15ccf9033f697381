//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the handler and the outside world. Adapters implement these ports.
//!
//! - `ObjectStore` - Reads object content by bucket and key
//! - `NotificationTopic` - Publishes a subject/message pair to a topic

mod notification_topic;
mod object_store;

pub use notification_topic::{NotificationTopic, PublishError};
pub use object_store::{ObjectStore, ObjectStoreError};
