//! Word Count Notifier - S3-triggered word counting
//!
//! On object creation in a bucket, this crate fetches the object, counts its
//! whitespace-delimited words and publishes the result to an SNS topic.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
