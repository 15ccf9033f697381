//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the handler to external systems:
//! - `aws` - S3 object store and SNS topic
//! - `memory` - In-memory doubles for both ports
//! - `lambda` - Lambda runtime glue

pub mod aws;
pub mod lambda;
pub mod memory;

pub use aws::{load_sdk_config, S3ObjectStore, SnsNotificationTopic};
pub use lambda::{handle_invocation, InvocationResponse};
pub use memory::{InMemoryNotificationTopic, InMemoryObjectStore};
