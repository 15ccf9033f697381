//! AWS Adapters
//!
//! Implementations of the ports on top of the AWS SDK.
//!
//! ## Available Adapters
//!
//! - **S3ObjectStore** - `ObjectStore` over S3 `GetObject`
//! - **SnsNotificationTopic** - `NotificationTopic` over SNS `Publish`
//!
//! ## Usage
//!
//! ```ignore
//! let sdk_config = load_sdk_config(&config.aws).await;
//! let store = S3ObjectStore::from_sdk_config(&sdk_config, &config.aws);
//! let topic = SnsNotificationTopic::from_sdk_config(&sdk_config, &config.notification);
//! ```

mod s3_object_store;
mod sns_topic;

pub use s3_object_store::S3ObjectStore;
pub use sns_topic::SnsNotificationTopic;

use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_s3::config::Region;

use crate::config::AwsConfig;

/// Loads the shared SDK configuration.
///
/// Credentials and region come from the standard provider chain (the Lambda
/// execution role in production); `AwsConfig` only overrides region and
/// endpoint.
pub async fn load_sdk_config(config: &AwsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }
    loader.load().await
}
