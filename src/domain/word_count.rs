//! Word counting over decoded object text.

use std::fmt;

/// Returns true for characters that separate words.
///
/// Unicode `White_Space` plus the ASCII information separators
/// U+001C..=U+001F (file, group, record and unit separator).
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Counts the maximal runs of non-separator characters in `text`.
///
/// Leading, trailing and repeated separators never produce empty words.
pub fn count_words(text: &str) -> usize {
    text.split(is_word_separator)
        .filter(|word| !word.is_empty())
        .count()
}

/// Number of words found in one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WordCount(usize);

impl WordCount {
    /// Counts the words of `text`.
    pub fn of(text: &str) -> Self {
        Self(count_words(text))
    }

    /// Returns the raw count.
    pub fn value(&self) -> usize {
        self.0
    }
}

impl From<usize> for WordCount {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Word count of a specific object, keyed the way the event named it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountResult {
    pub key: String,
    pub count: WordCount,
}

impl WordCountResult {
    /// Counts `text` on behalf of the object stored under `key`.
    pub fn compute(key: impl Into<String>, text: &str) -> Self {
        Self {
            key: key.into(),
            count: WordCount::of(text),
        }
    }
}
