//! ObjectStore port - Interface for reading object content.
//!
//! This port lets the handler fetch bytes by bucket and key without knowing
//! whether they come from S3, a local fake, or something else.

use async_trait::async_trait;

use crate::domain::HandlerError;

/// Errors that can occur while reading an object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectStoreError {
    #[error("Object not found: s3://{bucket}/{key}")]
    NotFound { bucket: String, key: String },

    #[error("Object store access failed: {0}")]
    Access(String),
}

impl ObjectStoreError {
    /// Creates a not-found error for the given location.
    pub fn not_found(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        ObjectStoreError::NotFound {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Creates an access error.
    pub fn access(message: impl Into<String>) -> Self {
        ObjectStoreError::Access(message.into())
    }
}

impl From<ObjectStoreError> for HandlerError {
    fn from(err: ObjectStoreError) -> Self {
        match err {
            ObjectStoreError::NotFound { bucket, key } => {
                HandlerError::ObjectNotFound { bucket, key }
            }
            ObjectStoreError::Access(message) => HandlerError::StorageAccess(message),
        }
    }
}

/// Port for reading objects from a bucket.
///
/// Implementations must:
/// - Return `NotFound` only when the object does not exist
/// - Return `Access` for every other failure (permissions, throttling, I/O)
/// - Return the full object body; partial reads are failures
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the full content of `key` in `bucket`.
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ObjectStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ObjectStore) {}

    #[test]
    fn not_found_maps_to_object_not_found() {
        let err: HandlerError = ObjectStoreError::not_found("uploads", "gone.txt").into();
        assert_eq!(err.code(), ErrorCode::ObjectNotFound);
        assert_eq!(err.to_string(), "Object not found: s3://uploads/gone.txt");
    }

    #[test]
    fn access_maps_to_storage_access() {
        let err: HandlerError = ObjectStoreError::access("AccessDenied").into();
        assert_eq!(err.code(), ErrorCode::StorageAccess);
        assert!(err.to_string().contains("AccessDenied"));
    }
}
