//! S3-backed object store.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::{config::Builder, error::DisplayErrorContext, Client};

use crate::config::AwsConfig;
use crate::ports::{ObjectStore, ObjectStoreError};

/// Reads objects with `GetObject`.
///
/// The whole body is buffered in memory before it is returned.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the shared SDK config.
    ///
    /// Path-style addressing is forced when a custom endpoint is set, since
    /// emulators rarely serve virtual-hosted buckets.
    pub fn from_sdk_config(sdk_config: &SdkConfig, aws: &AwsConfig) -> Self {
        let config = Builder::from(sdk_config)
            .force_path_style(aws.has_custom_endpoint())
            .build();
        Self::new(Client::from_conf(config))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ObjectStoreError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                if err
                    .as_service_error()
                    .is_some_and(|service_err| service_err.is_no_such_key())
                {
                    ObjectStoreError::not_found(bucket, key)
                } else {
                    ObjectStoreError::access(DisplayErrorContext(&err).to_string())
                }
            })?;

        let body = output.body.collect().await.map_err(|err| {
            ObjectStoreError::access(format!(
                "failed to read body of s3://{}/{}: {}",
                bucket, key, err
            ))
        })?;

        let bytes = body.into_bytes().to_vec();
        tracing::debug!(bucket, key, size = bytes.len(), "Fetched object");
        Ok(bytes)
    }
}
