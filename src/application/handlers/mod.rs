//! Invocation handlers.

mod count_words;

pub use count_words::{CountWordsHandler, CountWordsResult};
