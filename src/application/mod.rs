//! Application layer - the invocation handler.
//!
//! This layer orchestrates domain logic and coordinates between ports.

pub mod handlers;

pub use handlers::{CountWordsHandler, CountWordsResult};
