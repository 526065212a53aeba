//! Stopword set
//!
//! English stopwords from the `stop-words` crate, extended with a fixed list of
//! generic high-frequency words that carry no topical content. The set is
//! built once and shared read-only between normalizers.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Generic words that are frequent in prose but say nothing about its topic
pub const SUPPLEMENTARY_STOPWORDS: &[&str] = &[
    "said", "say", "also", "would", "could", "one", "two", "first", "may", "way", "get", "go",
];

/// A set of lowercase stopwords
#[derive(Debug, Clone)]
pub struct StopwordSet {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        let mut set = Self::english();
        set.add_stopwords(SUPPLEMENTARY_STOPWORDS);
        set
    }
}

impl StopwordSet {
    /// The plain English list, without the supplementary words
    pub fn english() -> Self {
        Self {
            stopwords: get(LANGUAGE::English)
                .iter()
                .map(|s| s.to_string().to_lowercase())
                .collect(),
        }
    }

    /// English plus the given supplementary words
    pub fn english_with<S: AsRef<str>>(extra: &[S]) -> Self {
        let mut set = Self::english();
        for word in extra {
            set.stopwords.insert(word.as_ref().to_lowercase());
        }
        set
    }

    /// An empty set (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// A set built from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add stopwords to the set
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.stopwords.contains(&word.to_lowercase())
        } else {
            self.stopwords.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
