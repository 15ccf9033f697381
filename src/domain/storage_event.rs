//! Inbound storage event - the payload S3 delivers on object creation.
//!
//! The wire schema is `aws_lambda_events`' `S3Event`; this module adds the
//! validation the handler relies on. Everything S3 sends beyond bucket and
//! key (request parameters, owner identity, sequencer, ...) is ignored.

use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use std::fmt;

use super::errors::HandlerError;

/// Object-created notification as delivered by the storage service.
#[derive(Debug, Clone)]
pub struct StorageEvent {
    event: S3Event,
}

/// Bucket and key of the object an event points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

impl From<S3Event> for StorageEvent {
    fn from(event: S3Event) -> Self {
        Self { event }
    }
}

impl StorageEvent {
    /// Parses a raw JSON payload.
    ///
    /// Any shape mismatch is reported as [`HandlerError::MalformedEvent`].
    pub fn from_value(payload: serde_json::Value) -> Result<Self, HandlerError> {
        serde_json::from_value::<S3Event>(payload)
            .map(Self::from)
            .map_err(|e| HandlerError::malformed(e.to_string()))
    }

    /// All records, in delivery order.
    pub fn records(&self) -> &[S3EventRecord] {
        &self.event.records
    }

    /// Returns the location referenced by the first record.
    ///
    /// Later records are ignored. A missing or empty bucket name or key is
    /// malformed; any other value is passed through untouched.
    pub fn first_location(&self) -> Result<ObjectLocation, HandlerError> {
        let record = self
            .event
            .records
            .first()
            .ok_or_else(|| HandlerError::malformed("event contains no records"))?;

        let bucket = match record.s3.bucket.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(HandlerError::malformed("record has no bucket name")),
        };
        let key = match record.s3.object.key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(HandlerError::malformed("record has no object key")),
        };

        Ok(ObjectLocation {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }
}
