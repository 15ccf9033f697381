//! In-Memory Object Store Adapter

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{ObjectStore, ObjectStoreError};

/// In-memory bucket/key -> bytes map
///
/// Buckets marked with [`deny_bucket`](Self::deny_bucket) fail every read
/// with an access error, standing in for a missing IAM permission.
#[derive(Debug, Clone, Default)]
pub struct InMemoryObjectStore {
    objects: Arc<RwLock<HashMap<(String, String), Vec<u8>>>>,
    denied_buckets: Arc<RwLock<HashSet<String>>>,
    reads: Arc<RwLock<Vec<(String, String)>>>,
}

impl InMemoryObjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an object, replacing any previous content
    pub async fn put(&self, bucket: &str, key: &str, content: impl Into<Vec<u8>>) {
        self.objects
            .write()
            .await
            .insert((bucket.to_string(), key.to_string()), content.into());
    }

    /// Make every read from `bucket` fail with an access error
    pub async fn deny_bucket(&self, bucket: &str) {
        self.denied_buckets.write().await.insert(bucket.to_string());
    }

    /// Every (bucket, key) requested so far, in order
    pub async fn reads(&self) -> Vec<(String, String)> {
        self.reads.read().await.clone()
    }

    /// Number of reads attempted
    pub async fn read_count(&self) -> usize {
        self.reads.read().await.len()
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, ObjectStoreError> {
        self.reads
            .write()
            .await
            .push((bucket.to_string(), key.to_string()));

        if self.denied_buckets.read().await.contains(bucket) {
            return Err(ObjectStoreError::access(format!(
                "AccessDenied: read not permitted on bucket {}",
                bucket
            )));
        }

        self.objects
            .read()
            .await
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| ObjectStoreError::not_found(bucket, key))
    }
}
